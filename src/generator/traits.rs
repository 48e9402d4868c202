//! Core trait for itinerary producers.

use async_trait::async_trait;

use crate::preferences::Preferences;

use super::error::GenerateError;

/// Turns a preferences snapshot into itinerary text.
///
/// Implementations are shared with the UI as `Arc<dyn ItineraryGenerator>`
/// and called from a tokio task, so they must be `Send + Sync`.
#[async_trait]
pub trait ItineraryGenerator: Send + Sync {
    /// Returns the name of this generator for logging.
    fn name(&self) -> &'static str;

    /// Produce itinerary text for `preferences`.
    ///
    /// The returned text is displayed verbatim, line breaks included.
    async fn generate(&self, preferences: Preferences) -> Result<String, GenerateError>;
}
