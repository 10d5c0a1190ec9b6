//! Lead form components

mod field;
mod lead_form;
mod thank_you;

pub use field::{FormField, HoneypotField};
pub use lead_form::LeadFormView;
pub use thank_you::ThankYouPanel;
