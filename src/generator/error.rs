//! Error types for itinerary generation.

use thiserror::Error;

/// Errors a generator may report.
///
/// The placeholder never produces one; service-backed generators do.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    /// The service could not be reached or timed out.
    #[error("itinerary service unavailable: {0}")]
    Unavailable(String),

    /// The service refused the request.
    #[error("itinerary request rejected: {0}")]
    Rejected(String),
}
