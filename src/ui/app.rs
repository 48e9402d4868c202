use crate::generator::ItineraryGenerator;
use crate::preferences::{Field, Preferences};
use crate::ui::events::{AppEvent, GenerationOutcome};
use crate::ui::form::{FormFocus, FormIntent, FormReducer, FormState};
use crate::ui::generation::{GenerationIntent, GenerationReducer, GenerationState, RequestId};
use crate::ui::mvi::Reducer;
use std::sync::mpsc;
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

pub struct App {
    should_quit: bool,
    /// Preference form state (MVI pattern).
    form: FormState,
    /// Itinerary request lifecycle (MVI pattern).
    generation: GenerationState,
    generator: Arc<dyn ItineraryGenerator>,
    /// Runtime the generation tasks are spawned on.
    runtime: Handle,
    /// Channel back into the UI event loop.
    events: mpsc::Sender<AppEvent>,
    next_request: RequestId,
    /// Snapshot replayed by retry.
    last_submitted: Option<Preferences>,
    in_flight: Option<JoinHandle<()>>,
}

impl App {
    pub fn new(
        generator: Arc<dyn ItineraryGenerator>,
        runtime: Handle,
        events: mpsc::Sender<AppEvent>,
    ) -> Self {
        Self {
            should_quit: false,
            form: FormState::default(),
            generation: GenerationState::default(),
            generator,
            runtime,
            events,
            next_request: 0,
            last_submitted: None,
            in_flight: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
        self.cancel_in_flight();
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn generation(&self) -> &GenerationState {
        &self.generation
    }

    /// Dispatch an intent to the form reducer.
    pub fn dispatch_form(&mut self, intent: FormIntent) {
        dispatch_mvi!(self, form, FormReducer, intent);
    }

    fn dispatch_generation(&mut self, intent: GenerationIntent) {
        dispatch_mvi!(self, generation, GenerationReducer, intent);
    }

    /// Validate the draft and start generating.
    ///
    /// Returns `false` when a request is already in flight or the draft is
    /// invalid; in the latter case the error is reported on the form.
    pub fn submit(&mut self) -> bool {
        if !self.generation.accepts_submit() {
            tracing::debug!("submit ignored: generation in progress");
            return false;
        }

        match self.form.draft.validate() {
            Ok(preferences) => {
                self.start_generation(preferences);
                true
            }
            Err(err) => {
                tracing::debug!(field = err.field().label(), error = %err, "submission rejected");
                self.dispatch_form(FormIntent::Rejected(err));
                false
            }
        }
    }

    /// Re-run the last submission after a failure.
    pub fn retry(&mut self) -> bool {
        if !self.generation.can_retry() {
            return false;
        }
        let Some(preferences) = self.last_submitted.clone() else {
            return false;
        };
        self.start_generation(preferences);
        true
    }

    fn start_generation(&mut self, preferences: Preferences) {
        self.next_request += 1;
        let request = self.next_request;

        tracing::info!(
            request,
            generator = self.generator.name(),
            destination = preferences.destination(),
            days = preferences.duration_days(),
            "generating itinerary"
        );

        self.last_submitted = Some(preferences.clone());
        self.dispatch_generation(GenerationIntent::Start { request });

        let generator = Arc::clone(&self.generator);
        let events = self.events.clone();
        let task = self.runtime.spawn(async move {
            let result = generator.generate(preferences).await;
            let outcome = GenerationOutcome { request, result };
            if events.send(AppEvent::Generation(outcome)).is_err() {
                tracing::debug!(request, "generation outcome dropped: UI closed");
            }
        });
        self.in_flight = Some(task);
    }

    /// Apply a finished request. Outcomes for anything but the in-flight
    /// request are discarded.
    pub fn on_generation(&mut self, outcome: GenerationOutcome) {
        let GenerationOutcome { request, result } = outcome;
        if self.generation.in_flight() != Some(request) {
            tracing::debug!(request, "discarding stale generation outcome");
            return;
        }
        self.in_flight = None;

        match result {
            Ok(text) => {
                tracing::info!(request, "itinerary ready");
                self.dispatch_generation(GenerationIntent::Completed { request, text });
            }
            Err(err) => {
                tracing::warn!(request, error = %err, "itinerary generation failed");
                self.dispatch_generation(GenerationIntent::Failed {
                    request,
                    reason: err.to_string(),
                });
            }
        }
    }

    /// Scroll the completed itinerary by `lines` (negative scrolls up).
    pub fn scroll_itinerary(&mut self, lines: i16) {
        self.dispatch_generation(GenerationIntent::Scroll(lines));
    }

    pub fn on_tick(&mut self) {
        if self.generation.is_in_progress() {
            self.dispatch_generation(GenerationIntent::AnimationTick);
        }
    }

    /// Type pasted text into the focused field.
    pub fn on_paste(&mut self, text: &str) {
        let multiline = self.form.focus == FormFocus::Field(Field::Interests);
        for ch in text.chars() {
            let intent = match ch {
                '\n' if multiline => FormIntent::Newline,
                '\r' | '\n' => continue,
                ch => FormIntent::Insert(ch),
            };
            self.dispatch_form(intent);
        }
    }

    fn cancel_in_flight(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

impl Drop for App {
    fn drop(&mut self) {
        self.cancel_in_flight();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::{GenerateError, PlaceholderGenerator};
    use crate::preferences::Budget;
    use std::time::Duration;

    fn make_app() -> (App, mpsc::Receiver<AppEvent>, tokio::runtime::Runtime) {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .unwrap();
        let (tx, rx) = mpsc::channel();
        let generator = Arc::new(PlaceholderGenerator::new(Duration::from_millis(10)));
        let app = App::new(generator, runtime.handle().clone(), tx);
        (app, rx, runtime)
    }

    fn fill_valid(app: &mut App) {
        app.form.draft.destination = "Kyoto".into();
        app.form.draft.budget = Some(Budget::Moderate);
        app.form.draft.duration = "5".into();
        app.form.draft.interests = "food, temples".into();
    }

    #[test]
    fn invalid_submit_stays_idle() {
        let (mut app, _rx, _rt) = make_app();
        assert!(!app.submit());
        assert_eq!(app.generation, GenerationState::Idle);
        assert!(app.form.error.is_some());
        assert!(app.in_flight.is_none());
    }

    #[test]
    fn valid_submit_enters_in_progress() {
        let (mut app, _rx, _rt) = make_app();
        fill_valid(&mut app);
        assert!(app.submit());
        assert_eq!(app.generation.in_flight(), Some(1));
        assert!(app.in_flight.is_some());
    }

    #[test]
    fn second_submit_while_in_progress_is_ignored() {
        let (mut app, _rx, _rt) = make_app();
        fill_valid(&mut app);
        assert!(app.submit());
        assert!(!app.submit());
        assert_eq!(app.generation.in_flight(), Some(1));
        assert_eq!(app.next_request, 1);
    }

    #[test]
    fn failed_outcome_then_retry() {
        let (mut app, _rx, _rt) = make_app();
        fill_valid(&mut app);
        app.submit();
        app.on_generation(GenerationOutcome {
            request: 1,
            result: Err(GenerateError::Unavailable("offline".into())),
        });
        assert!(app.generation.can_retry());

        assert!(app.retry());
        assert_eq!(app.generation.in_flight(), Some(2));
    }

    #[test]
    fn retry_needs_failure() {
        let (mut app, _rx, _rt) = make_app();
        assert!(!app.retry());
        assert_eq!(app.generation, GenerationState::Idle);
    }

    #[test]
    fn stale_outcome_is_ignored() {
        let (mut app, _rx, _rt) = make_app();
        fill_valid(&mut app);
        app.submit();
        app.on_generation(GenerationOutcome {
            request: 42,
            result: Ok("stale".into()),
        });
        assert_eq!(app.generation.in_flight(), Some(1));
    }

    #[test]
    fn tick_animates_only_in_progress() {
        let (mut app, _rx, _rt) = make_app();
        app.on_tick();
        assert_eq!(app.generation, GenerationState::Idle);

        fill_valid(&mut app);
        app.submit();
        app.on_tick();
        assert!(matches!(
            app.generation,
            GenerationState::InProgress {
                animation_tick: 1,
                ..
            }
        ));
    }

    #[test]
    fn paste_drops_newlines_outside_interests() {
        let (mut app, _rx, _rt) = make_app();
        app.on_paste("Kyo\nto");
        assert_eq!(app.form.draft.destination, "Kyoto");

        app.dispatch_form(FormIntent::Focus(FormFocus::Field(Field::Interests)));
        app.on_paste("food\ntemples");
        assert_eq!(app.form.draft.interests, "food\ntemples");
    }

    #[test]
    fn quit_aborts_in_flight_request() {
        let (mut app, _rx, _rt) = make_app();
        fill_valid(&mut app);
        app.submit();
        app.request_quit();
        assert!(app.should_quit());
        assert!(app.in_flight.is_none());
    }
}
