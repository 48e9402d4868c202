//! Itinerary generation.
//!
//! The form talks to an [`ItineraryGenerator`]; today the only implementation
//! is [`PlaceholderGenerator`], which waits a fixed delay and returns a
//! sample itinerary.

mod error;
mod placeholder;
mod traits;

pub use error::GenerateError;
pub use placeholder::{PlaceholderGenerator, DEFAULT_DELAY, SAMPLE_ITINERARY};
pub use traits::ItineraryGenerator;
