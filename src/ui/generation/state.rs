//! State for itinerary generation.

use crate::ui::mvi::UiState;

/// Tag identifying one generation request.
pub type RequestId = u64;

/// Lifecycle of the itinerary request. Exactly one variant holds.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GenerationState {
    /// Nothing requested yet.
    #[default]
    Idle,

    /// Waiting on the generator.
    InProgress {
        /// Request whose completion will be accepted.
        request: RequestId,
        /// Animation tick for spinner.
        animation_tick: u8,
    },

    /// Generator returned itinerary text.
    Completed {
        text: String,
        /// First itinerary line shown in the panel.
        scroll_offset: usize,
    },

    /// Generator reported an error.
    Failed {
        reason: String,
    },
}

impl UiState for GenerationState {}

impl GenerationState {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, Self::InProgress { .. })
    }

    /// Whether a new submission may start.
    pub fn accepts_submit(&self) -> bool {
        !self.is_in_progress()
    }

    pub fn can_retry(&self) -> bool {
        matches!(self, Self::Failed { .. })
    }

    /// The request currently awaited, if any.
    pub fn in_flight(&self) -> Option<RequestId> {
        match self {
            Self::InProgress { request, .. } => Some(*request),
            _ => None,
        }
    }

    /// Completed state scrolled to the top.
    pub fn completed(text: impl Into<String>) -> Self {
        Self::Completed {
            text: text.into(),
            scroll_offset: 0,
        }
    }

    pub fn itinerary(&self) -> Option<&str> {
        match self {
            Self::Completed { text, .. } => Some(text),
            _ => None,
        }
    }
}
