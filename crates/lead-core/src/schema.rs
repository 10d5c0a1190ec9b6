//! Submission schema and validation rules

use crate::field::{Field, FieldKind};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use thiserror::Error;

/// Minimum number of characters in a first or last name
pub const MIN_NAME_LENGTH: usize = 2;

/// Leading and doubled dots need lookahead, which `regex` lacks; `is_valid_email` checks those
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^[A-Z0-9_'+\-.]*[A-Z0-9_+-]@(?:[A-Z0-9][A-Z0-9\-]*\.)+[A-Z]{2,}$")
        .expect("Failed to compile email pattern")
});

/// A single field failing its constraint.
///
/// The `Display` output is the message rendered next to the field.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{} is required", name_noun(.field))]
    TooShort { field: Field, min: usize },

    #[error("Invalid email")]
    InvalidFormat,

    #[error("Spam detected!")]
    SpamDetected,
}

fn name_noun(field: &Field) -> &'static str {
    match field {
        Field::FirstName => "First name",
        Field::LastName => "Last name",
        _ => "Field",
    }
}

/// Per-field validation failures, ordered by field
pub type ValidationErrors = BTreeMap<Field, ValidationError>;

/// Values the user has entered so far
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub goals: Option<String>,
    pub timeline: Option<String>,
    pub location: Option<String>,
    pub honey: Option<String>,
}

impl SubmissionInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current value of a field, `None` if an optional field was never set
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::FirstName => Some(&self.first_name),
            Field::LastName => Some(&self.last_name),
            Field::Email => Some(&self.email),
            Field::Goals => self.goals.as_deref(),
            Field::Timeline => self.timeline.as_deref(),
            Field::Location => self.location.as_deref(),
            Field::Honey => self.honey.as_deref(),
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::FirstName => self.first_name = value,
            Field::LastName => self.last_name = value,
            Field::Email => self.email = value,
            Field::Goals => self.goals = Some(value),
            Field::Timeline => self.timeline = Some(value),
            Field::Location => self.location = Some(value),
            Field::Honey => self.honey = Some(value),
        }
    }
}

/// Check a first or last name.
///
/// Length is counted in characters. Browser validators count UTF-16 code
/// units instead, so a lone astral character such as an emoji passes there
/// and fails here.
pub fn validate_name(field: Field, value: &str) -> Result<(), ValidationError> {
    if value.chars().count() < MIN_NAME_LENGTH {
        return Err(ValidationError::TooShort {
            field,
            min: MIN_NAME_LENGTH,
        });
    }
    Ok(())
}

pub fn is_valid_email(value: &str) -> bool {
    !value.starts_with('.') && !value.contains("..") && EMAIL_PATTERN.is_match(value)
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if is_valid_email(value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidFormat)
    }
}

/// Honeypot refinement: anything typed into the trap marks the input as spam
pub fn validate_honeypot(value: Option<&str>) -> Result<(), ValidationError> {
    match value {
        Some(v) if !v.is_empty() => Err(ValidationError::SpamDetected),
        _ => Ok(()),
    }
}

/// Validation rules for one form variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Schema {
    honeypot: bool,
}

impl Schema {
    /// Schema with the honeypot refinement enabled
    pub fn new() -> Self {
        Self { honeypot: true }
    }

    pub fn without_honeypot() -> Self {
        Self { honeypot: false }
    }

    pub fn with_honeypot(honeypot: bool) -> Self {
        Self { honeypot }
    }

    pub fn honeypot(&self) -> bool {
        self.honeypot
    }

    /// Fields rendered and validated by this variant
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        Field::ALL.into_iter().filter(move |f| self.accepts(*f))
    }

    pub fn accepts(&self, field: Field) -> bool {
        field.kind() != FieldKind::Trap || self.honeypot
    }

    pub fn validate_field(&self, input: &SubmissionInput, field: Field) -> Result<(), ValidationError> {
        match field {
            Field::FirstName | Field::LastName => validate_name(field, input.get(field).unwrap_or_default()),
            Field::Email => validate_email(&input.email),
            Field::Goals | Field::Timeline | Field::Location => Ok(()),
            Field::Honey if self.honeypot => validate_honeypot(input.honey.as_deref()),
            Field::Honey => Ok(()),
        }
    }

    /// Validate every field, collecting all failures
    pub fn validate(&self, input: &SubmissionInput) -> Result<(), ValidationErrors> {
        let errors: ValidationErrors = self
            .fields()
            .filter_map(|field| self.validate_field(input, field).err().map(|e| (field, e)))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    pub fn is_valid(&self, input: &SubmissionInput) -> bool {
        self.validate(input).is_ok()
    }
}

impl Default for Schema {
    fn default() -> Self {
        Self::new()
    }
}
