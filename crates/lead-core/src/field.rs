//! Form field identity and display metadata

use crate::CoreError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// How a field participates in validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldKind {
    /// Must pass its constraint before submission
    Required,
    /// Never constrained; absent or empty is valid
    Optional,
    /// Hidden bot trap; must stay empty
    Trap,
}

/// Every field the lead form knows about
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    FirstName,
    LastName,
    Email,
    Goals,
    Timeline,
    Location,
    Honey,
}

impl Field {
    pub const ALL: [Field; 7] = [
        Field::FirstName,
        Field::LastName,
        Field::Email,
        Field::Goals,
        Field::Timeline,
        Field::Location,
        Field::Honey,
    ];

    pub const OPTIONAL: [Field; 3] = [Field::Goals, Field::Timeline, Field::Location];

    /// JSON key used in the submission payload
    pub fn key(&self) -> &'static str {
        match self {
            Field::FirstName => "firstName",
            Field::LastName => "lastName",
            Field::Email => "email",
            Field::Goals => "goals",
            Field::Timeline => "timeline",
            Field::Location => "location",
            Field::Honey => "honey",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::FirstName => "First Name",
            Field::LastName => "Last Name",
            Field::Email => "Email",
            Field::Goals => "Financial Goals",
            Field::Timeline => "Investment Timeline",
            Field::Location => "Location",
            Field::Honey => "Don't fill this out",
        }
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            Field::FirstName => Some("James"),
            Field::LastName => Some("Smith"),
            Field::Email => Some("jamessmith@example.com"),
            Field::Goals => Some("Tell us what you want to achieve"),
            Field::Timeline => Some("e.g., 5-10 years"),
            Field::Location => Some("City, State"),
            Field::Honey => None,
        }
    }

    /// HTML input type for the field's control
    pub fn input_type(&self) -> &'static str {
        match self {
            Field::Email => "email",
            _ => "text",
        }
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self, Field::Goals)
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Field::FirstName | Field::LastName | Field::Email => FieldKind::Required,
            Field::Goals | Field::Timeline | Field::Location => FieldKind::Optional,
            Field::Honey => FieldKind::Trap,
        }
    }

    pub fn is_required(&self) -> bool {
        self.kind() == FieldKind::Required
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl FromStr for Field {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.key() == s)
            .ok_or_else(|| CoreError::UnknownField(s.to_string()))
    }
}
