//! Delivery of the test proposal to the external webhook.
//!
//! A dispatch is a single POST with no retries and the transport's default
//! timeout. Failures are folded into the page's [`WebhookTest`] state rather
//! than propagated.

use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use reqwest::header::CONTENT_TYPE;
use serde_json::Value;
use thiserror::Error;

use crate::domain::outcome::WebhookTest;
use crate::domain::proposal::{WebhookPayload, sample_proposal};
use crate::services::ServiceResult;

/// Endpoint receiving the test proposal unless overridden in configuration.
pub const N8N_WEBHOOK_URL: &str =
    "https://algowrite.n8n.pipeworker.me/webhook-test/400d85b8-ea9a-459d-b318-4147b90d4316";

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Error)]
pub enum DispatchError {
    /// The endpoint could not be reached.
    #[error("Failed to send webhook: {0}")]
    Transport(String),

    /// The endpoint answered with a non-2xx status.
    #[error("{message}")]
    Remote { status: u16, message: String },

    /// A 2xx response carried a body that is not JSON.
    #[error("Invalid webhook response: {0}")]
    Decode(String),

    #[error("Failed to build webhook client: {0}")]
    Configuration(String),
}

/// HTTP client bound to one webhook URL.
#[derive(Debug, Clone)]
pub struct WebhookDispatcher {
    client: reqwest::Client,
    url: String,
}

impl WebhookDispatcher {
    pub fn new(url: impl Into<String>) -> Result<Self, DispatchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DispatchError::Configuration(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    /// Dispatcher bound to [`N8N_WEBHOOK_URL`].
    pub fn n8n() -> Result<Self, DispatchError> {
        Self::new(N8N_WEBHOOK_URL)
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// POSTs `payload` as JSON and returns the parsed response body.
    pub async fn send(&self, payload: &WebhookPayload) -> Result<Value, DispatchError> {
        log::info!("Sending test proposal to {}", self.url);

        let response = self
            .client
            .post(&self.url)
            .header(CONTENT_TYPE, "application/json")
            .json(payload)
            .send()
            .await
            .map_err(|e| {
                log::warn!("Webhook request to {} failed: {e}", self.url);
                DispatchError::Transport(e.to_string())
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| DispatchError::Transport(e.to_string()))?;
            let message = compose_remote_error(status, &body);
            log::warn!("Webhook rejected the proposal: {message}");
            return Err(DispatchError::Remote {
                status: status.as_u16(),
                message,
            });
        }

        let body = response
            .json::<Value>()
            .await
            .map_err(|e| DispatchError::Decode(e.to_string()))?;
        log::info!("Webhook accepted the proposal with status {status}");
        Ok(body)
    }

    /// Runs one dispatch against `state`: resets it to `Pending`, sends the
    /// payload and records the outcome. `Pending` is cleared on every path.
    pub async fn trigger(&self, state: &mut WebhookTest, payload: &WebhookPayload) {
        let guard = state.begin();
        match self.send(payload).await {
            Ok(body) => guard.succeed(body),
            Err(err) => guard.fail(err.to_string()),
        }
    }
}

/// Payload and outcome of one visit to the webhook test page.
#[derive(Debug)]
pub struct WebhookTestRun {
    pub payload: WebhookPayload,
    pub state: WebhookTest,
}

/// Prepares the page in its `Idle` state.
pub fn prepare_webhook_test(now: DateTime<Utc>) -> ServiceResult<WebhookTestRun> {
    Ok(WebhookTestRun {
        payload: sample_proposal(now)?,
        state: WebhookTest::new(),
    })
}

/// Builds a fresh proposal dated `now` and dispatches it once.
pub async fn run_webhook_test(
    dispatcher: &WebhookDispatcher,
    now: DateTime<Utc>,
) -> ServiceResult<WebhookTestRun> {
    let mut run = prepare_webhook_test(now)?;
    dispatcher.trigger(&mut run.state, &run.payload).await;
    Ok(run)
}

/// Builds the error message for a non-2xx response.
///
/// The base is `HTTP <status>: <reason>`. A JSON body contributes
/// ` - <message>` and ` <hint>` when those fields are present; any other
/// non-empty body is appended verbatim as ` - <body>`.
pub fn compose_remote_error(status: StatusCode, body: &str) -> String {
    let mut message = format!(
        "HTTP {}: {}",
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    );

    match serde_json::from_str::<Value>(body) {
        Ok(json) if !json.is_null() => {
            if let Some(text) = json.get("message").and_then(truthy_text) {
                message.push_str(&format!(" - {text}"));
            }
            if let Some(hint) = json.get("hint").and_then(truthy_text) {
                message.push_str(&format!(" {hint}"));
            }
        }
        _ => {
            if !body.is_empty() {
                message.push_str(&format!(" - {body}"));
            }
        }
    }

    message
}

/// Text of a JSON field, or `None` for null, false, zero and empty strings.
fn truthy_text(value: &Value) -> Option<String> {
    match value {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        other => Some(other.to_string()),
    }
}
