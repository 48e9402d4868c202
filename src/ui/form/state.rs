//! State for the preference form.

use crate::preferences::{Field, PreferencesDraft, ValidationError};
use crate::ui::mvi::UiState;

/// Focusable controls, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormFocus {
    Field(Field),
    Submit,
}

impl Default for FormFocus {
    fn default() -> Self {
        FormFocus::Field(Field::Destination)
    }
}

impl FormFocus {
    pub const ORDER: [FormFocus; 5] = [
        FormFocus::Field(Field::Destination),
        FormFocus::Field(Field::Budget),
        FormFocus::Field(Field::Duration),
        FormFocus::Field(Field::Interests),
        FormFocus::Submit,
    ];

    pub fn next(self) -> Self {
        let index = self.index();
        Self::ORDER[(index + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let index = self.index();
        Self::ORDER[(index + Self::ORDER.len() - 1) % Self::ORDER.len()]
    }

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormState {
    pub draft: PreferencesDraft,
    pub focus: FormFocus,
    /// Last rejected submission, cleared by any edit.
    pub error: Option<ValidationError>,
}

impl UiState for FormState {}

impl FormState {
    pub fn is_focused(&self, field: Field) -> bool {
        self.focus == FormFocus::Field(field)
    }

    /// Validation message to show under `field`, if any.
    pub fn error_for(&self, field: Field) -> Option<&ValidationError> {
        self.error.as_ref().filter(|err| err.field() == field)
    }
}
