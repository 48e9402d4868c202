//! Intents for the preference form.

use crate::preferences::ValidationError;
use crate::ui::mvi::Intent;

use super::state::FormFocus;

#[derive(Debug, Clone)]
pub enum FormIntent {
    /// Move focus to the next control, wrapping after the submit button.
    FocusNext,

    /// Move focus to the previous control, wrapping before the first field.
    FocusPrev,

    /// Focus a specific control.
    Focus(FormFocus),

    /// Type a character into the focused text field.
    Insert(char),

    /// Delete the last character of the focused text field.
    Backspace,

    /// Insert a line break. Only the interests field is multi-line.
    Newline,

    /// Step the budget select forward (`1`) or backward (`-1`).
    CycleBudget(i8),

    /// Submission was refused; report the error against its field.
    Rejected(ValidationError),
}

impl Intent for FormIntent {}
