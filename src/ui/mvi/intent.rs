//! Base trait for intents (user/system actions) in MVI architecture.

/// Marker trait for intent objects.
///
/// Intents carry either user input (typing, focus moves, submit) or
/// system events (timer ticks, generation completions).
pub trait Intent: Send + 'static {}
