//! Form and submission configuration

use crate::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};
use url::Url;

/// Default submission endpoint, relative to the page origin
pub const DEFAULT_ENDPOINT: &str = "/api/submit";

pub const ENDPOINT_VAR: &str = "LEAD_SUBMIT_ENDPOINT";
pub const REJECT_ERROR_STATUS_VAR: &str = "LEAD_REJECT_ERROR_STATUS";
pub const STRIP_HONEYPOT_VAR: &str = "LEAD_STRIP_HONEYPOT";

/// Where and how submissions are sent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitConfig {
    /// Endpoint path or absolute URL
    pub endpoint: String,

    /// Treat 4xx/5xx responses as failures instead of success
    pub reject_error_status: bool,

    /// Drop the honeypot field from the outgoing payload
    pub strip_honeypot: bool,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            reject_error_status: false,
            strip_honeypot: false,
        }
    }
}

impl SubmitConfig {
    /// Read overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup, falling back to defaults
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(endpoint) = lookup(ENDPOINT_VAR).filter(|e| !e.trim().is_empty()) {
            config.endpoint = endpoint.trim().to_string();
        }
        if let Some(flag) = lookup(REJECT_ERROR_STATUS_VAR).and_then(|v| parse_flag(REJECT_ERROR_STATUS_VAR, &v)) {
            config.reject_error_status = flag;
        }
        if let Some(flag) = lookup(STRIP_HONEYPOT_VAR).and_then(|v| parse_flag(STRIP_HONEYPOT_VAR, &v)) {
            config.strip_honeypot = flag;
        }

        config
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    /// Resolve the endpoint to an absolute URL.
    ///
    /// Relative endpoints are joined onto `origin`; without one they cannot
    /// be resolved.
    pub fn resolve_endpoint(&self, origin: Option<&str>) -> CoreResult<Url> {
        if let Ok(url) = Url::parse(&self.endpoint) {
            return Ok(url);
        }

        let origin = origin.ok_or_else(|| {
            CoreError::Config(format!("relative endpoint {} needs a page origin", self.endpoint))
        })?;
        let base = Url::parse(origin).map_err(|e| CoreError::Config(format!("invalid origin {}: {}", origin, e)))?;

        base.join(&self.endpoint)
            .map_err(|e| CoreError::Config(format!("invalid endpoint {}: {}", self.endpoint, e)))
    }
}

fn parse_flag(key: &str, value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        other => {
            tracing::warn!("Ignoring {}: unrecognised flag value {:?}", key, other);
            None
        }
    }
}

/// Which form variant to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormConfig {
    /// Include the hidden honeypot trap
    pub honeypot: bool,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self { honeypot: true }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        move |key: &str| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = SubmitConfig::from_lookup(lookup(&[]));
        assert_eq!(config, SubmitConfig::default());
        assert_eq!(config.endpoint, "/api/submit");
        assert!(FormConfig::default().honeypot);
    }

    #[test]
    fn test_overrides() {
        let config = SubmitConfig::from_lookup(lookup(&[
            (ENDPOINT_VAR, " https://leads.example.com/intake "),
            (REJECT_ERROR_STATUS_VAR, "true"),
            (STRIP_HONEYPOT_VAR, "1"),
        ]));
        assert_eq!(config.endpoint, "https://leads.example.com/intake");
        assert!(config.reject_error_status);
        assert!(config.strip_honeypot);
    }

    #[test]
    fn test_bad_flag_ignored() {
        let config = SubmitConfig::from_lookup(lookup(&[(STRIP_HONEYPOT_VAR, "maybe")]));
        assert!(!config.strip_honeypot);
    }

    #[test]
    fn test_resolve_relative_endpoint() {
        let config = SubmitConfig::default();
        let url = config.resolve_endpoint(Some("https://imperio.example")).unwrap();
        assert_eq!(url.as_str(), "https://imperio.example/api/submit");

        assert!(matches!(config.resolve_endpoint(None), Err(CoreError::Config(_))));
    }

    #[test]
    fn test_resolve_absolute_endpoint() {
        let config = SubmitConfig::default().with_endpoint("http://127.0.0.1:8080/api/submit");
        let url = config.resolve_endpoint(None).unwrap();
        assert_eq!(url.port(), Some(8080));
    }
}
