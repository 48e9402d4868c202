//! Shared test utilities and generator doubles.

#![allow(dead_code, unused_imports)]

use async_trait::async_trait;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::Duration;
use tokio::runtime::Runtime;
use wayfarer::generator::{GenerateError, ItineraryGenerator, PlaceholderGenerator};
use wayfarer::preferences::Preferences;
use wayfarer::ui::app::App;
use wayfarer::ui::events::{AppEvent, GenerationOutcome};
use wayfarer::ui::input::handle_key;

/// App wired to its own runtime and event channel.
pub struct Harness {
    pub app: App,
    pub events: mpsc::Receiver<AppEvent>,
    pub runtime: Runtime,
}

impl Harness {
    pub fn new(generator: Arc<dyn ItineraryGenerator>) -> Self {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_time()
            .build()
            .expect("Failed to build runtime");
        let (tx, rx) = mpsc::channel();
        let app = App::new(generator, runtime.handle().clone(), tx);
        Self {
            app,
            events: rx,
            runtime,
        }
    }

    /// Harness around a placeholder with a short delay.
    pub fn placeholder() -> Self {
        Self::new(Arc::new(PlaceholderGenerator::new(Duration::from_millis(20))))
    }

    pub fn press(&mut self, code: KeyCode) {
        handle_key(&mut self.app, press_key(code));
    }

    pub fn ctrl(&mut self, ch: char) {
        handle_key(&mut self.app, ctrl_key(ch));
    }

    pub fn type_text(&mut self, text: &str) {
        for ch in text.chars() {
            self.press(KeyCode::Char(ch));
        }
    }

    /// Fill the form by keyboard, leaving focus on the submit button.
    pub fn fill(&mut self, destination: &str, budget_steps: usize, duration: &str, interests: &str) {
        self.type_text(destination);
        self.press(KeyCode::Tab);
        for _ in 0..budget_steps {
            self.press(KeyCode::Right);
        }
        self.press(KeyCode::Tab);
        self.type_text(duration);
        self.press(KeyCode::Tab);
        self.type_text(interests);
        self.press(KeyCode::Tab);
    }

    /// Block until the next generation outcome arrives and apply it.
    pub fn await_outcome(&mut self) -> GenerationOutcome {
        loop {
            match self.events.recv_timeout(Duration::from_secs(5)) {
                Ok(AppEvent::Generation(outcome)) => return outcome,
                Ok(_) => continue,
                Err(err) => panic!("no generation outcome: {err}"),
            }
        }
    }
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

/// Counts calls and answers immediately with a fixed text.
#[derive(Default)]
pub struct CountingGenerator {
    pub calls: AtomicUsize,
}

#[async_trait]
impl ItineraryGenerator for CountingGenerator {
    fn name(&self) -> &'static str {
        "counting"
    }

    async fn generate(&self, _preferences: Preferences) -> Result<String, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok("counted".to_string())
    }
}

/// Fails the first `failures` calls, then succeeds.
pub struct FlakyGenerator {
    failures: usize,
    calls: AtomicUsize,
}

impl FlakyGenerator {
    pub fn new(failures: usize) -> Self {
        Self {
            failures,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl ItineraryGenerator for FlakyGenerator {
    fn name(&self) -> &'static str {
        "flaky"
    }

    async fn generate(&self, preferences: Preferences) -> Result<String, GenerateError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        if call < self.failures {
            return Err(GenerateError::Unavailable("connection refused".to_string()));
        }
        Ok(format!("Trip to {}", preferences.destination()))
    }
}
