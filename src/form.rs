//! Form input, coercion and validation
//!
//! Inputs arrive as the raw text the page holds. Numbers are coerced the way
//! a browser's `Number()` does (blank text is zero), then every field is
//! checked so all failing fields can show their message at once.

use thiserror::Error;

use crate::activity::{ActivityRecord, ActivityType};
use crate::consts::*;

/// Form field identifiers, also used as DOM ids for inputs and messages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Activity,
    Price,
    Type,
    BookingRequired,
    Accessibility,
}

impl Field {
    pub const ALL: [Field; 5] = [
        Field::Activity,
        Field::Price,
        Field::Type,
        Field::BookingRequired,
        Field::Accessibility,
    ];

    /// Name as stored in the slot and used for the input's `name`
    pub fn name(&self) -> &'static str {
        match self {
            Field::Activity => "activity",
            Field::Price => "price",
            Field::Type => "type",
            Field::BookingRequired => "bookingRequired",
            Field::Accessibility => "accessibility",
        }
    }
}

/// One failed constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: String,
}

impl FieldError {
    fn new(field: Field, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Every failed constraint from one validation pass, in field order
#[derive(Error, Debug, Clone, PartialEq, Eq, Default)]
#[error("invalid form input: {}", summarize(.0))]
pub struct ValidationErrors(pub Vec<FieldError>);

fn summarize(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field.name(), e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Message to show under a field, if it failed
    pub fn for_field(&self, field: Field) -> Option<&str> {
        self.0
            .iter()
            .find(|e| e.field == field)
            .map(|e| e.message.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldError> {
        self.0.iter()
    }
}

/// Raw values as held by the form controls
#[derive(Debug, Clone, PartialEq)]
pub struct FormInput {
    pub activity: String,
    pub price: String,
    pub kind: String,
    pub booking_required: bool,
    pub accessibility: String,
}

impl Default for FormInput {
    fn default() -> Self {
        Self {
            activity: String::new(),
            price: "0".to_string(),
            kind: ActivityType::default().as_str().to_string(),
            booking_required: false,
            accessibility: DEFAULT_ACCESSIBILITY.to_string(),
        }
    }
}

impl FormInput {
    /// Input that would produce `record` when submitted
    pub fn from_record(record: &ActivityRecord) -> Self {
        Self {
            activity: record.activity.clone(),
            price: record.price.to_string(),
            kind: record.kind.as_str().to_string(),
            booking_required: record.booking_required,
            accessibility: record.accessibility.to_string(),
        }
    }
}

const NOT_A_NUMBER: &str = "Expected number, received nan";

/// Coerce text to a number: surrounding whitespace ignored, blank is zero,
/// anything non-finite is rejected.
pub fn coerce_number(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

fn invalid_type_message(received: &str) -> String {
    let expected = ActivityType::ALL
        .iter()
        .map(|t| format!("'{}'", t.as_str()))
        .collect::<Vec<_>>()
        .join(" | ");
    format!("Invalid enum value. Expected {expected}, received '{received}'")
}

/// Validate raw input into a record
pub fn validate(input: &FormInput) -> Result<ActivityRecord, ValidationErrors> {
    let mut errors = Vec::new();

    // Browsers count UTF-16 code units
    if input.activity.encode_utf16().count() < ACTIVITY_MIN_LEN {
        errors.push(FieldError::new(
            Field::Activity,
            format!("Activity must be at least {ACTIVITY_MIN_LEN} characters."),
        ));
    }

    let price = match coerce_number(&input.price) {
        Some(p) if p < 0.0 => {
            errors.push(FieldError::new(Field::Price, "Price must be a positive number."));
            None
        }
        Some(p) => Some(p),
        None => {
            errors.push(FieldError::new(Field::Price, NOT_A_NUMBER));
            None
        }
    };

    let kind = ActivityType::from_str(&input.kind);
    if kind.is_none() {
        errors.push(FieldError::new(Field::Type, invalid_type_message(&input.kind)));
    }

    let accessibility = match coerce_number(&input.accessibility) {
        Some(a) if a < ACCESSIBILITY_MIN => {
            errors.push(FieldError::new(
                Field::Accessibility,
                format!("Number must be greater than or equal to {ACCESSIBILITY_MIN}"),
            ));
            None
        }
        Some(a) if a > ACCESSIBILITY_MAX => {
            errors.push(FieldError::new(
                Field::Accessibility,
                format!("Number must be less than or equal to {ACCESSIBILITY_MAX}"),
            ));
            None
        }
        Some(a) => Some(a),
        None => {
            errors.push(FieldError::new(Field::Accessibility, NOT_A_NUMBER));
            None
        }
    };

    match (price, kind, accessibility) {
        (Some(price), Some(kind), Some(accessibility)) if errors.is_empty() => Ok(ActivityRecord {
            activity: input.activity.clone(),
            price,
            kind,
            booking_required: input.booking_required,
            accessibility,
        }),
        _ => Err(ValidationErrors(errors)),
    }
}

/// Form controller state: editing -> submit -> editing
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub input: FormInput,
    pub errors: ValidationErrors,
}

impl FormState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate the current input. On success the fields reset to their
    /// defaults; on failure the input is kept and the errors recorded.
    pub fn submit(&mut self) -> Result<ActivityRecord, ValidationErrors> {
        match validate(&self.input) {
            Ok(record) => {
                self.reset();
                Ok(record)
            }
            Err(errors) => {
                log::debug!("Form rejected: {}", errors);
                self.errors = errors.clone();
                Err(errors)
            }
        }
    }

    pub fn reset(&mut self) {
        self.input = FormInput::default();
        self.errors = ValidationErrors::default();
    }
}
