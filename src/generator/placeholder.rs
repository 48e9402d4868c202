//! Fixed-delay stand-in for a real itinerary service.

use std::time::Duration;

use async_trait::async_trait;

use crate::config::GeneratorConfig;
use crate::preferences::Preferences;

use super::error::GenerateError;
use super::traits::ItineraryGenerator;

/// Simulated generation latency.
pub const DEFAULT_DELAY: Duration = Duration::from_secs(2);

/// The itinerary every request receives.
pub const SAMPLE_ITINERARY: &str = "Day 1:
- Morning: Explore local markets and cafes
- Afternoon: Visit historical landmarks
- Evening: Sunset dinner at beachfront restaurant

Day 2:
- Morning: Guided cultural tour
- Afternoon: Adventure activities
- Evening: Local entertainment show

Day 3:
- Morning: Relaxation at the beach
- Afternoon: Shopping at artisan markets
- Evening: Farewell dinner at top-rated restaurant";

/// Waits `delay`, then returns [`SAMPLE_ITINERARY`]. Never fails.
#[derive(Debug, Clone)]
pub struct PlaceholderGenerator {
    delay: Duration,
    personalize: bool,
}

impl Default for PlaceholderGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_DELAY)
    }
}

impl PlaceholderGenerator {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            personalize: false,
        }
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::new(Duration::from_millis(config.delay_ms)).with_personalize(config.personalize)
    }

    /// Prepend a heading naming the destination, length and budget.
    pub fn with_personalize(mut self, personalize: bool) -> Self {
        self.personalize = personalize;
        self
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    fn render(&self, preferences: &Preferences) -> String {
        if !self.personalize {
            return SAMPLE_ITINERARY.to_string();
        }
        format!(
            "{}-day trip to {} ({} budget)\n\n{}",
            preferences.duration_days(),
            preferences.destination(),
            preferences.budget(),
            SAMPLE_ITINERARY
        )
    }
}

#[async_trait]
impl ItineraryGenerator for PlaceholderGenerator {
    fn name(&self) -> &'static str {
        "placeholder"
    }

    async fn generate(&self, preferences: Preferences) -> Result<String, GenerateError> {
        tokio::time::sleep(self.delay).await;
        Ok(self.render(&preferences))
    }
}
