//! End-to-end flows: keyboard input, generation task and state transitions.

mod common;

use common::*;
use crossterm::event::KeyCode;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use wayfarer::generator::SAMPLE_ITINERARY;
use wayfarer::preferences::{Field, ValidationError};
use wayfarer::ui::form::FormFocus;
use wayfarer::ui::generation::GenerationState;

#[test]
fn kyoto_scenario_completes_with_sample() {
    let mut h = Harness::placeholder();
    h.fill("Kyoto", 2, "5", "food, temples");
    assert_eq!(h.app.form().focus, FormFocus::Submit);

    h.press(KeyCode::Enter);
    assert!(h.app.generation().is_in_progress());

    let outcome = h.await_outcome();
    h.app.on_generation(outcome);
    assert_eq!(h.app.generation().itinerary(), Some(SAMPLE_ITINERARY));
}

#[test]
fn result_is_independent_of_input() {
    let mut first = Harness::placeholder();
    first.fill("Kyoto", 2, "5", "food, temples");
    first.ctrl('s');
    let outcome = first.await_outcome();
    first.app.on_generation(outcome);

    let mut second = Harness::placeholder();
    second.fill("Reykjavik", 3, "12", "hot springs");
    second.ctrl('s');
    let outcome = second.await_outcome();
    second.app.on_generation(outcome);

    assert_eq!(
        first.app.generation().itinerary(),
        second.app.generation().itinerary()
    );
}

#[test]
fn empty_destination_is_rejected() {
    let mut h = Harness::placeholder();
    h.fill("", 2, "5", "food, temples");
    h.press(KeyCode::Enter);

    assert_eq!(*h.app.generation(), GenerationState::Idle);
    assert_eq!(h.app.form().error, Some(ValidationError::MissingDestination));
    assert_eq!(h.app.form().focus, FormFocus::Field(Field::Destination));
}

#[test]
fn unset_budget_is_rejected() {
    let mut h = Harness::placeholder();
    h.fill("Kyoto", 0, "5", "food, temples");
    h.ctrl('s');

    assert_eq!(*h.app.generation(), GenerationState::Idle);
    assert_eq!(h.app.form().error, Some(ValidationError::MissingBudget));
}

#[test]
fn zero_duration_is_rejected() {
    let mut h = Harness::placeholder();
    h.fill("Kyoto", 2, "0", "food, temples");
    h.ctrl('s');

    assert_eq!(*h.app.generation(), GenerationState::Idle);
    assert_eq!(h.app.form().error, Some(ValidationError::NonPositiveDuration));
}

#[test]
fn non_numeric_duration_cannot_be_typed() {
    let mut h = Harness::placeholder();
    h.fill("Kyoto", 2, "abc", "food, temples");
    assert!(h.app.form().draft.duration.is_empty());

    h.ctrl('s');
    assert_eq!(*h.app.generation(), GenerationState::Idle);
    assert_eq!(h.app.form().error, Some(ValidationError::MissingDuration));
}

#[test]
fn at_most_one_generation_in_flight() {
    let generator = Arc::new(CountingGenerator::default());
    let mut h = Harness::new(generator.clone());
    h.fill("Kyoto", 2, "5", "food, temples");

    h.press(KeyCode::Enter);
    h.press(KeyCode::Enter);
    h.ctrl('s');
    assert!(h.app.generation().is_in_progress());

    let outcome = h.await_outcome();
    h.app.on_generation(outcome);
    assert_eq!(h.app.generation().itinerary(), Some("counted"));
    assert_eq!(generator.calls.load(Ordering::SeqCst), 1);
}

#[test]
fn resubmit_after_completion_starts_new_request() {
    let generator = Arc::new(CountingGenerator::default());
    let mut h = Harness::new(generator.clone());
    h.fill("Kyoto", 2, "5", "food, temples");

    h.ctrl('s');
    let first = h.await_outcome();
    h.app.on_generation(first);

    h.ctrl('s');
    assert_eq!(h.app.generation().in_flight(), Some(2));
    let second = h.await_outcome();
    h.app.on_generation(second);
    assert_eq!(generator.calls.load(Ordering::SeqCst), 2);
}

#[test]
fn failure_then_retry_succeeds() {
    let mut h = Harness::new(Arc::new(FlakyGenerator::new(1)));
    h.fill("Lisbon", 1, "4", "tiles");
    h.ctrl('s');

    let outcome = h.await_outcome();
    h.app.on_generation(outcome);
    match h.app.generation() {
        GenerationState::Failed { reason } => assert!(reason.contains("connection refused")),
        other => panic!("expected Failed, got {other:?}"),
    }

    h.ctrl('r');
    assert!(h.app.generation().is_in_progress());
    let outcome = h.await_outcome();
    h.app.on_generation(outcome);
    assert_eq!(h.app.generation().itinerary(), Some("Trip to Lisbon"));
}

#[test]
fn retry_is_noop_when_not_failed() {
    let mut h = Harness::placeholder();
    h.ctrl('r');
    assert_eq!(*h.app.generation(), GenerationState::Idle);
}

#[test]
fn snapshot_is_taken_at_submit() {
    let mut h = Harness::new(Arc::new(FlakyGenerator::new(0)));
    h.fill("Lisbon", 1, "4", "tiles");
    h.ctrl('s');

    // Edit the destination while the request is in flight.
    h.press(KeyCode::Tab);
    h.type_text("XYZ");

    let outcome = h.await_outcome();
    h.app.on_generation(outcome);
    assert_eq!(h.app.generation().itinerary(), Some("Trip to Lisbon"));
}

#[test]
fn quit_keys_request_exit() {
    let mut h = Harness::placeholder();
    h.ctrl('q');
    assert!(h.app.should_quit());

    let mut h = Harness::placeholder();
    h.press(KeyCode::Esc);
    assert!(h.app.should_quit());
}
