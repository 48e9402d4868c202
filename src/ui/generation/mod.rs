//! Itinerary generation feature module.
//!
//! Tracks the request lifecycle (idle, in progress, completed, failed) and
//! renders the "Your Itinerary" panel from it.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Generation state enum
//! - `intent.rs` - Submit, tick and completion events
//! - `reducer.rs` - State transitions, including stale-completion filtering
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::GenerationIntent;
pub use reducer::GenerationReducer;
pub use state::{GenerationState, RequestId};
pub use view::{
    render_result, spinner_frame, FAILED_HINT, FAILED_TITLE, IDLE_PROMPT, PROGRESS_TEXT,
    SCROLL_HINT,
};
