//! View and JSON shapes for the webhook test page.

use serde::Serialize;
use serde_json::Value;

use crate::domain::outcome::WebhookOutcome;
use crate::domain::proposal::WebhookPayload;
use crate::domain::types::Amount;

/// Data required to render the webhook test template.
#[derive(Debug, Serialize)]
pub struct WebhookPageData {
    pub webhook_url: String,
    /// Pretty-printed payload preview.
    pub payload_json: String,
    pub component_count: usize,
    /// Listed total with thousands separators, e.g. `21,500`.
    pub total_display: String,
    pub currency: String,
    /// Set when the listed total differs from the component sum.
    pub components_total_display: Option<String>,
    pub success: bool,
    /// Pretty-printed response body of a successful dispatch.
    pub response_json: Option<String>,
    pub error: Option<String>,
}

impl WebhookPageData {
    pub fn new(webhook_url: &str, payload: &WebhookPayload, outcome: &WebhookOutcome) -> Self {
        let components_total_display = if payload.has_total_mismatch() {
            Amount::new(payload.components_total())
                .ok()
                .map(Amount::grouped)
        } else {
            None
        };

        Self {
            webhook_url: webhook_url.to_string(),
            payload_json: pretty(payload),
            component_count: payload.components.len(),
            total_display: payload.total_amount.grouped(),
            currency: payload.currency.to_string(),
            components_total_display,
            success: matches!(outcome, WebhookOutcome::Succeeded(_)),
            response_json: outcome.response().map(pretty),
            error: outcome.error().map(str::to_string),
        }
    }
}

/// JSON result of `POST /api/webhook-test`.
#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum DispatchResponse {
    Succeeded { response: Value },
    Failed { error: String },
}

fn pretty<T: Serialize + ?Sized>(value: &T) -> String {
    serde_json::to_string_pretty(value).unwrap_or_default()
}
