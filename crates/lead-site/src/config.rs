//! Build-time configuration for the browser bundle

use lead_core::config::{ENDPOINT_VAR, REJECT_ERROR_STATUS_VAR, STRIP_HONEYPOT_VAR};
use lead_core::{FormConfig, SubmitConfig};

/// The browser has no process environment, so overrides are baked in at compile time
pub fn submit_config() -> SubmitConfig {
    SubmitConfig::from_lookup(|key| {
        match key {
            ENDPOINT_VAR => option_env!("LEAD_SUBMIT_ENDPOINT"),
            REJECT_ERROR_STATUS_VAR => option_env!("LEAD_REJECT_ERROR_STATUS"),
            STRIP_HONEYPOT_VAR => option_env!("LEAD_STRIP_HONEYPOT"),
            _ => None,
        }
        .map(str::to_string)
    })
}

pub fn form_config() -> FormConfig {
    FormConfig::default()
}
