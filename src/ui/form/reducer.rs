//! Reducer for the preference form.

use crate::preferences::{Budget, Field};
use crate::ui::mvi::Reducer;

use super::intent::FormIntent;
use super::state::{FormFocus, FormState};

pub struct FormReducer;

impl Reducer for FormReducer {
    type State = FormState;
    type Intent = FormIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            FormIntent::FocusNext => {
                state.focus = state.focus.next();
            }
            FormIntent::FocusPrev => {
                state.focus = state.focus.prev();
            }
            FormIntent::Focus(focus) => {
                state.focus = focus;
            }
            FormIntent::Insert(ch) => {
                if let FormFocus::Field(field) = state.focus {
                    if accepts(field, ch) {
                        if let Some(text) = state.draft.text_mut(field) {
                            text.push(ch);
                            state.error = None;
                        }
                    }
                }
            }
            FormIntent::Backspace => {
                if let FormFocus::Field(field) = state.focus {
                    if let Some(text) = state.draft.text_mut(field) {
                        if text.pop().is_some() {
                            state.error = None;
                        }
                    }
                }
            }
            FormIntent::Newline => {
                if state.focus == FormFocus::Field(Field::Interests) {
                    state.draft.interests.push('\n');
                    state.error = None;
                }
            }
            FormIntent::CycleBudget(step) => {
                if state.focus == FormFocus::Field(Field::Budget) {
                    state.draft.budget = Budget::cycle(state.draft.budget, step);
                    state.error = None;
                }
            }
            FormIntent::Rejected(error) => {
                state.focus = FormFocus::Field(error.field());
                state.error = Some(error);
            }
        }
        state
    }
}

/// Per-field input filter. Duration behaves like a number input.
fn accepts(field: Field, ch: char) -> bool {
    if ch.is_control() {
        return false;
    }
    match field {
        Field::Duration => ch.is_ascii_digit(),
        Field::Budget => false,
        Field::Destination | Field::Interests => true,
    }
}
