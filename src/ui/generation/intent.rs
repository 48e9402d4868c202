//! Intents for itinerary generation.

use crate::ui::mvi::Intent;

use super::state::RequestId;

#[derive(Debug, Clone)]
pub enum GenerationIntent {
    /// A validated submission (or retry) started `request`.
    Start { request: RequestId },

    /// Animation tick (for spinner updates).
    AnimationTick,

    /// The generator finished `request` with itinerary text.
    Completed { request: RequestId, text: String },

    /// The generator failed `request`.
    Failed { request: RequestId, reason: String },

    /// Move the itinerary view by this many lines.
    Scroll(i16),
}

impl Intent for GenerationIntent {}
