//! Lead form controller
//!
//! Owns the pending input, per-field errors, the optional-section toggle and
//! the submission lifecycle. Renderers read state from here and forward user
//! events; they never decide validity themselves.

use crate::config::{FormConfig, SubmitConfig};
use crate::field::Field;
use crate::payload::SubmissionPayload;
use crate::schema::{Schema, SubmissionInput, ValidationError, ValidationErrors};
use crate::submit::{SubmissionResult, Submitter};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where the form is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FormPhase {
    Editing,
    Submitting,
    /// Terminal: the thank-you panel replaces the form for good
    Submitted,
}

impl std::fmt::Display for FormPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormPhase::Editing => write!(f, "Editing"),
            FormPhase::Submitting => write!(f, "Submitting"),
            FormPhase::Submitted => write!(f, "Submitted"),
        }
    }
}

/// Why a submission did not start
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitBlocked {
    #[error("{} field(s) failed validation", error_count(.0))]
    Invalid(ValidationErrors),

    #[error("form is {0}, not accepting submissions")]
    NotEditing(FormPhase),
}

fn error_count(errors: &ValidationErrors) -> usize {
    errors.len()
}

/// Result of a full submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    /// Transport failed; logged and rolled back to editing
    Failed,
    Blocked(SubmitBlocked),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeadForm {
    schema: Schema,
    strip_honeypot: bool,
    input: SubmissionInput,
    errors: ValidationErrors,
    show_optional: bool,
    phase: FormPhase,
}

impl LeadForm {
    pub fn new() -> Self {
        Self::with_config(FormConfig::default(), &SubmitConfig::default())
    }

    pub fn with_config(form: FormConfig, submit: &SubmitConfig) -> Self {
        Self {
            schema: Schema::with_honeypot(form.honeypot),
            strip_honeypot: submit.strip_honeypot,
            input: SubmissionInput::new(),
            errors: ValidationErrors::new(),
            show_optional: false,
            phase: FormPhase::Editing,
        }
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn input(&self) -> &SubmissionInput {
        &self.input
    }

    /// Current text of a field, empty when unset
    pub fn value(&self, field: Field) -> &str {
        self.input.get(field).unwrap_or_default()
    }

    pub fn error(&self, field: Field) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn show_optional(&self) -> bool {
        self.show_optional
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == FormPhase::Submitted
    }

    pub fn is_valid(&self) -> bool {
        self.schema.is_valid(&self.input)
    }

    /// Set a field and re-validate it
    pub fn update_field(&mut self, field: Field, value: impl Into<String>) {
        if self.phase != FormPhase::Editing {
            tracing::debug!("Ignoring edit to {} while {}", field, self.phase);
            return;
        }
        if !self.schema.accepts(field) {
            tracing::debug!("Ignoring edit to {}: not part of this form", field);
            return;
        }

        self.input.set(field, value);
        match self.schema.validate_field(&self.input, field) {
            Ok(()) => {
                self.errors.remove(&field);
            }
            Err(e) => {
                self.errors.insert(field, e);
            }
        }
    }

    /// Flip optional-field visibility, returning the new state
    pub fn toggle_optional_section(&mut self) -> bool {
        self.show_optional = !self.show_optional;
        self.show_optional
    }

    /// Validate everything and, if valid, move to `Submitting`.
    ///
    /// Returns the payload to deliver. Every call that returns `Ok` must be
    /// followed by exactly one [`LeadForm::finish_submit`].
    pub fn begin_submit(&mut self) -> Result<SubmissionPayload, SubmitBlocked> {
        if self.phase != FormPhase::Editing {
            return Err(SubmitBlocked::NotEditing(self.phase));
        }

        match self.schema.validate(&self.input) {
            Ok(()) => {
                self.errors.clear();
                self.phase = FormPhase::Submitting;
                Ok(SubmissionPayload::from_input(&self.input, &self.schema, self.strip_honeypot))
            }
            Err(errors) => {
                tracing::debug!("Submission blocked: {} invalid field(s)", errors.len());
                self.errors = errors.clone();
                Err(SubmitBlocked::Invalid(errors))
            }
        }
    }

    /// Apply the transport result of a submission started by `begin_submit`
    pub fn finish_submit(&mut self, result: SubmissionResult<()>) -> SubmitOutcome {
        if self.phase != FormPhase::Submitting {
            tracing::warn!("Submission finished while {}, ignoring", self.phase);
            return SubmitOutcome::Blocked(SubmitBlocked::NotEditing(self.phase));
        }

        match result {
            Ok(()) => {
                tracing::info!("Lead submitted");
                self.phase = FormPhase::Submitted;
                // the input is consumed; only the terminal phase remains
                self.input = SubmissionInput::new();
                SubmitOutcome::Submitted
            }
            Err(e) => {
                tracing::error!("Submission error: {}", e);
                self.phase = FormPhase::Editing;
                SubmitOutcome::Failed
            }
        }
    }

    /// Validate, deliver through `submitter`, and apply the result
    pub async fn submit<S>(&mut self, submitter: &S) -> SubmitOutcome
    where
        S: Submitter + ?Sized,
    {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(blocked) => return SubmitOutcome::Blocked(blocked),
        };

        let result = submitter.submit(&payload).await;
        self.finish_submit(result)
    }
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new()
    }
}
