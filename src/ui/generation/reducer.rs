//! Reducer for itinerary generation.

use crate::ui::mvi::Reducer;

use super::intent::GenerationIntent;
use super::state::GenerationState;

/// Reducer for generation state transitions.
///
/// Completions are applied only to the request that is in flight; anything
/// else is a stale callback and leaves the state untouched.
pub struct GenerationReducer;

impl Reducer for GenerationReducer {
    type State = GenerationState;
    type Intent = GenerationIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            GenerationIntent::Start { request } => match state {
                // At most one request in flight.
                in_progress @ GenerationState::InProgress { .. } => in_progress,
                _ => GenerationState::InProgress {
                    request,
                    animation_tick: 0,
                },
            },

            GenerationIntent::AnimationTick => match state {
                GenerationState::InProgress {
                    request,
                    animation_tick,
                } => GenerationState::InProgress {
                    request,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },

            GenerationIntent::Completed { request, text } => {
                if state.in_flight() == Some(request) {
                    GenerationState::completed(text)
                } else {
                    state
                }
            }

            GenerationIntent::Scroll(delta) => match state {
                GenerationState::Completed {
                    text,
                    scroll_offset,
                } => {
                    let last_line = text.lines().count().saturating_sub(1);
                    let moved = if delta < 0 {
                        scroll_offset.saturating_sub(delta.unsigned_abs() as usize)
                    } else {
                        scroll_offset.saturating_add(delta as usize)
                    };
                    GenerationState::Completed {
                        text,
                        scroll_offset: moved.min(last_line),
                    }
                }
                other => other,
            },

            GenerationIntent::Failed { request, reason } => {
                if state.in_flight() == Some(request) {
                    GenerationState::Failed { reason }
                } else {
                    state
                }
            }
        }
    }
}
