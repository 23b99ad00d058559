//! Field identifiers and the per-field parsers used by the change handler.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::activity::Activity;

/// Errors from resolving a field identifier.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("unknown activity field: {0}")]
    UnknownField(String),
}

/// An editable field of an [`Activity`].
///
/// The id has no variant; it is never edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActivityField {
    Category,
    Name,
    Calories,
}

static ALL_FIELDS: &[ActivityField] = &[
    ActivityField::Category,
    ActivityField::Name,
    ActivityField::Calories,
];

/// How a raw input string is turned into a field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldParser {
    /// Stored verbatim.
    Text,
    /// Coerced to a finite number; blank or unparseable input becomes `0`.
    Number,
}

/// A parsed field value, ready to merge into a draft.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldParser {
    pub fn parse(self, raw: &str) -> FieldValue {
        match self {
            Self::Text => FieldValue::Text(raw.to_string()),
            Self::Number => FieldValue::Number(coerce_number(raw)),
        }
    }
}

impl ActivityField {
    /// Returns all editable fields in form order.
    pub fn all() -> &'static [ActivityField] {
        ALL_FIELDS
    }

    /// The identifier used by input controls (`category`, `name`, `calories`).
    pub fn id(self) -> &'static str {
        match self {
            Self::Category => "category",
            Self::Name => "name",
            Self::Calories => "calories",
        }
    }

    /// The parser for this field's raw input.
    pub fn parser(self) -> FieldParser {
        match self {
            Self::Category | Self::Calories => FieldParser::Number,
            Self::Name => FieldParser::Text,
        }
    }
}

#[mutants::skip]
impl fmt::Display for ActivityField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for ActivityField {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_FIELDS
            .iter()
            .copied()
            .find(|field| field.id() == s)
            .ok_or_else(|| FieldError::UnknownField(s.to_string()))
    }
}

/// Coerces raw numeric input the way a number input reports it.
///
/// Blank input, unparseable input and non-finite values all become `0`.
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Returns a copy of `activity` with exactly one field replaced.
///
/// A value of the wrong shape for `field` leaves the copy unchanged. A
/// category that is negative or fractional is rejected the same way.
pub fn with_field(activity: &Activity, field: ActivityField, value: FieldValue) -> Activity {
    let mut next = activity.clone();
    match (field, value) {
        (ActivityField::Name, FieldValue::Text(name)) => next.name = name,
        (ActivityField::Calories, FieldValue::Number(calories)) => next.calories = calories,
        (ActivityField::Category, FieldValue::Number(n)) => {
            if let Some(id) = category_id(n) {
                next.category = id;
            }
        }
        _ => {}
    }
    next
}

fn category_id(n: f64) -> Option<u32> {
    (n >= 0.0 && n.fract() == 0.0 && n <= f64::from(u32::MAX)).then_some(n as u32)
}
