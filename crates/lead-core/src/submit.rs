//! Submission transport

use crate::config::SubmitConfig;
use crate::payload::SubmissionPayload;
use crate::CoreResult;
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use thiserror::Error;
use url::Url;

#[derive(Error, Debug)]
pub enum SubmissionError {
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Endpoint responded with status {0}")]
    Status(u16),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Endpoint unavailable: {0}")]
    Endpoint(String),
}

pub type SubmissionResult<T> = Result<T, SubmissionError>;

/// Delivers a validated payload to wherever leads are collected.
///
/// Not `Send`: the form runs on a single-threaded browser event loop.
#[async_trait(?Send)]
pub trait Submitter {
    async fn submit(&self, payload: &SubmissionPayload) -> SubmissionResult<()>;
}

/// POSTs payloads as JSON over HTTP
#[derive(Debug, Clone)]
pub struct HttpSubmitter {
    client: reqwest::Client,
    endpoint: Url,
    reject_error_status: bool,
}

impl HttpSubmitter {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            reject_error_status: false,
        }
    }

    /// Build from configuration, resolving relative endpoints against `origin`
    pub fn from_config(config: &SubmitConfig, origin: Option<&str>) -> CoreResult<Self> {
        let endpoint = config.resolve_endpoint(origin)?;
        Ok(Self::new(endpoint).reject_error_status(config.reject_error_status))
    }

    pub fn with_client(mut self, client: reqwest::Client) -> Self {
        self.client = client;
        self
    }

    pub fn reject_error_status(mut self, reject: bool) -> Self {
        self.reject_error_status = reject;
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait(?Send)]
impl Submitter for HttpSubmitter {
    async fn submit(&self, payload: &SubmissionPayload) -> SubmissionResult<()> {
        tracing::debug!("Posting lead to {}", self.endpoint);

        let body = payload.to_json()?;
        let response = self
            .client
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            if self.reject_error_status {
                return Err(SubmissionError::Status(status.as_u16()));
            }
            // Any response counts as delivered unless status checking is on
            tracing::warn!("Submission endpoint returned {}, treating as success", status);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::Field;
    use crate::form::{LeadForm, SubmitOutcome};
    use axum::http::{HeaderMap, StatusCode};
    use axum::{routing::post, Router};
    use serde_json::{json, Value};
    use std::sync::{Arc, Mutex};

    type Received = Arc<Mutex<Vec<(String, Value)>>>;

    /// Spawn a receiver on an ephemeral port that records every POST
    async fn spawn_receiver(status: StatusCode) -> (Url, Received) {
        let received: Received = Arc::new(Mutex::new(Vec::new()));
        let sink = received.clone();

        let app = Router::new().route(
            "/api/submit",
            post(move |headers: HeaderMap, body: String| {
                let sink = sink.clone();
                async move {
                    let content_type = headers
                        .get(axum::http::header::CONTENT_TYPE)
                        .and_then(|v| v.to_str().ok())
                        .unwrap_or_default()
                        .to_string();
                    let body: Value = serde_json::from_str(&body).unwrap_or(Value::Null);
                    sink.lock().unwrap().push((content_type, body));
                    status
                }
            }),
        );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let endpoint = Url::parse(&format!("http://{}/api/submit", addr)).unwrap();
        (endpoint, received)
    }

    fn payload() -> SubmissionPayload {
        SubmissionPayload {
            first_name: "James".to_string(),
            last_name: "Smith".to_string(),
            email: "james@example.com".to_string(),
            goals: String::new(),
            timeline: String::new(),
            location: String::new(),
            honey: None,
        }
    }

    #[tokio::test]
    async fn test_posts_json() {
        let (endpoint, received) = spawn_receiver(StatusCode::OK).await;
        let submitter = HttpSubmitter::new(endpoint);

        submitter.submit(&payload()).await.unwrap();

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].0, "application/json");
        assert_eq!(
            received[0].1,
            json!({
                "firstName": "James",
                "lastName": "Smith",
                "email": "james@example.com",
                "goals": "",
                "timeline": "",
                "location": ""
            })
        );
    }

    #[tokio::test]
    async fn test_form_submits_once_over_http() {
        let (endpoint, received) = spawn_receiver(StatusCode::OK).await;
        let submitter = HttpSubmitter::new(endpoint);

        let mut form = LeadForm::new();
        form.update_field(Field::FirstName, "James");
        form.update_field(Field::LastName, "Smith");
        form.update_field(Field::Email, "james@example.com");

        assert_eq!(form.submit(&submitter).await, SubmitOutcome::Submitted);
        assert!(form.is_submitted());

        let received = received.lock().unwrap();
        assert_eq!(received.len(), 1);
        let (content_type, body) = &received[0];
        assert_eq!(content_type, "application/json");
        assert_eq!(body["firstName"], "James");
        assert_eq!(body["lastName"], "Smith");
        assert_eq!(body["email"], "james@example.com");
        assert_eq!(body["honey"], "");
    }

    #[tokio::test]
    async fn test_error_status_accepted_by_default() {
        let (endpoint, received) = spawn_receiver(StatusCode::INTERNAL_SERVER_ERROR).await;
        let submitter = HttpSubmitter::new(endpoint);

        assert!(submitter.submit(&payload()).await.is_ok());
        assert_eq!(received.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_error_status_rejected_when_configured() {
        let (endpoint, _received) = spawn_receiver(StatusCode::BAD_REQUEST).await;
        let submitter = HttpSubmitter::new(endpoint).reject_error_status(true);

        let err = submitter.submit(&payload()).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Status(400)));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let endpoint = Url::parse(&format!("http://{}/api/submit", addr)).unwrap();
        let err = HttpSubmitter::new(endpoint).submit(&payload()).await.unwrap_err();
        assert!(matches!(err, SubmissionError::Transport(_)));
    }

    #[test]
    fn test_from_config() {
        let config = SubmitConfig {
            reject_error_status: true,
            ..Default::default()
        };
        let submitter = HttpSubmitter::from_config(&config, Some("http://localhost:3000")).unwrap();
        assert_eq!(submitter.endpoint().as_str(), "http://localhost:3000/api/submit");
        assert!(submitter.reject_error_status);

        assert!(HttpSubmitter::from_config(&config, None).is_err());
    }
}
