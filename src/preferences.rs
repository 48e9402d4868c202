//! Travel preferences: the editable draft and its validated snapshot.

use std::fmt;
use std::num::NonZeroU32;

use thiserror::Error;

/// Budget range offered by the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Budget {
    Low,
    Moderate,
    High,
}

impl Budget {
    pub const ALL: [Budget; 3] = [Budget::Low, Budget::Moderate, Budget::High];

    /// Label shown in the select control.
    pub fn label(self) -> &'static str {
        match self {
            Budget::Low => "Budget ($0-1000)",
            Budget::Moderate => "Moderate ($1000-3000)",
            Budget::High => "Luxury ($3000+)",
        }
    }

    /// Step through the options, wrapping at both ends.
    ///
    /// `None` is the "Select budget range" placeholder; stepping from it
    /// lands on the first option (forward) or the last (backward).
    pub fn cycle(current: Option<Budget>, step: i8) -> Option<Budget> {
        let len = Self::ALL.len();
        let next = match current {
            None if step < 0 => len - 1,
            None => 0,
            Some(budget) => {
                let index = Self::ALL.iter().position(|b| *b == budget).unwrap_or(0);
                if step < 0 {
                    (index + len - 1) % len
                } else {
                    (index + 1) % len
                }
            }
        };
        Some(Self::ALL[next])
    }
}

impl fmt::Display for Budget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Budget::Low => "Low",
            Budget::Moderate => "Moderate",
            Budget::High => "High",
        };
        f.write_str(name)
    }
}

/// Form field identifiers, in focus order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field {
    #[default]
    Destination,
    Budget,
    Duration,
    Interests,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Destination => "Destination",
            Field::Budget => "Budget",
            Field::Duration => "Duration",
            Field::Interests => "Interests",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Field::Destination => "Where do you want to go?",
            Field::Budget => "Select budget range",
            Field::Duration => "Number of days",
            Field::Interests => "What are your interests? (e.g., culture, food, adventure)",
        }
    }
}

/// Why a draft could not be submitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill out this field.")]
    MissingDestination,

    #[error("Please select an item in the list.")]
    MissingBudget,

    #[error("Please fill out this field.")]
    MissingDuration,

    #[error("Please enter a number.")]
    InvalidDuration(String),

    #[error("Value must be greater than or equal to 1.")]
    NonPositiveDuration,

    #[error("Value must be less than or equal to {}.", u32::MAX)]
    DurationTooLarge,

    #[error("Please fill out this field.")]
    MissingInterests,
}

impl ValidationError {
    /// The field the error should be reported against.
    pub fn field(&self) -> Field {
        match self {
            ValidationError::MissingDestination => Field::Destination,
            ValidationError::MissingBudget => Field::Budget,
            ValidationError::MissingDuration
            | ValidationError::InvalidDuration(_)
            | ValidationError::NonPositiveDuration
            | ValidationError::DurationTooLarge => Field::Duration,
            ValidationError::MissingInterests => Field::Interests,
        }
    }
}

/// Mutable form contents, edited field by field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PreferencesDraft {
    pub destination: String,
    pub budget: Option<Budget>,
    pub duration: String,
    pub interests: String,
}

impl PreferencesDraft {
    /// Check every constraint in field order and snapshot the draft.
    pub fn validate(&self) -> Result<Preferences, ValidationError> {
        let destination = self.destination.trim();
        if destination.is_empty() {
            return Err(ValidationError::MissingDestination);
        }

        let budget = self.budget.ok_or(ValidationError::MissingBudget)?;
        let duration_days = parse_duration(&self.duration)?;

        if self.interests.trim().is_empty() {
            return Err(ValidationError::MissingInterests);
        }

        Ok(Preferences {
            destination: destination.to_string(),
            budget,
            duration_days,
            interests: self.interests.clone(),
        })
    }

    /// Text content of a text-valued field. Budget has none.
    pub fn text(&self, field: Field) -> Option<&str> {
        match field {
            Field::Destination => Some(&self.destination),
            Field::Duration => Some(&self.duration),
            Field::Interests => Some(&self.interests),
            Field::Budget => None,
        }
    }

    pub(crate) fn text_mut(&mut self, field: Field) -> Option<&mut String> {
        match field {
            Field::Destination => Some(&mut self.destination),
            Field::Duration => Some(&mut self.duration),
            Field::Interests => Some(&mut self.interests),
            Field::Budget => None,
        }
    }
}

fn parse_duration(raw: &str) -> Result<NonZeroU32, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::MissingDuration);
    }

    let digits = raw
        .strip_prefix('-')
        .or_else(|| raw.strip_prefix('+'))
        .unwrap_or(raw);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::InvalidDuration(raw.to_string()));
    }
    if raw.starts_with('-') || digits.bytes().all(|b| b == b'0') {
        return Err(ValidationError::NonPositiveDuration);
    }

    digits
        .parse::<u32>()
        .ok()
        .and_then(NonZeroU32::new)
        .ok_or(ValidationError::DurationTooLarge)
}

/// Validated, immutable snapshot of the trip parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preferences {
    destination: String,
    budget: Budget,
    duration_days: NonZeroU32,
    interests: String,
}

impl Preferences {
    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn budget(&self) -> Budget {
        self.budget
    }

    pub fn duration_days(&self) -> u32 {
        self.duration_days.get()
    }

    pub fn interests(&self) -> &str {
        &self.interests
    }
}
