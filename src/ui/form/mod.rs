//! Preference form feature module.
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Draft, focus and the last validation error
//! - `intent.rs` - Editing and focus actions
//! - `reducer.rs` - State transitions
//! - `view.rs` - Rendering

mod intent;
mod reducer;
mod state;
mod view;

pub use intent::FormIntent;
pub use reducer::FormReducer;
pub use state::{FormFocus, FormState};
pub use view::{render_form, SUBMIT_BUSY_LABEL, SUBMIT_LABEL};
