//! Model-View-Intent (MVI) architecture primitives.
//!
//! # Architecture
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a UI feature
//! - **Intent**: User actions or system events (key presses, completions)
//! - **Reducer**: Pure function that transforms state based on intents
//!
//! `App` owns every feature state and is the only caller of the reducers;
//! views receive the state by shared reference.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
