//! JSON body posted to the submission endpoint

use crate::schema::{Schema, SubmissionInput};
use serde::{Deserialize, Serialize};

/// Wire form of a lead submission.
///
/// Every field the form renders is sent, untouched ones as `""`. The
/// honeypot is forwarded unchanged unless stripping is requested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub goals: String,
    #[serde(default)]
    pub timeline: String,
    #[serde(default)]
    pub location: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub honey: Option<String>,
}

impl SubmissionPayload {
    pub fn from_input(input: &SubmissionInput, schema: &Schema, strip_honeypot: bool) -> Self {
        let honey = if schema.honeypot() && !strip_honeypot {
            Some(input.honey.clone().unwrap_or_default())
        } else {
            None
        };

        Self {
            first_name: input.first_name.clone(),
            last_name: input.last_name.clone(),
            email: input.email.clone(),
            goals: input.goals.clone().unwrap_or_default(),
            timeline: input.timeline.clone().unwrap_or_default(),
            location: input.location.clone().unwrap_or_default(),
            honey,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl From<&SubmissionInput> for SubmissionPayload {
    fn from(input: &SubmissionInput) -> Self {
        Self::from_input(input, &Schema::new(), false)
    }
}
