//! Lead Capture Core
//!
//! This crate provides everything behind the lead capture form that does not
//! depend on a renderer: the submission schema and its validation rules, the
//! form state machine, the JSON payload and the submission transport.

pub mod config;
pub mod field;
pub mod form;
pub mod payload;
pub mod schema;
pub mod submit;

use thiserror::Error;

pub use config::{FormConfig, SubmitConfig};
pub use field::{Field, FieldKind};
pub use form::{FormPhase, LeadForm, SubmitBlocked, SubmitOutcome};
pub use payload::SubmissionPayload;
pub use schema::{Schema, SubmissionInput, ValidationError, ValidationErrors};
pub use submit::{HttpSubmitter, SubmissionError, SubmissionResult, Submitter};

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}

pub type CoreResult<T> = Result<T, CoreError>;
