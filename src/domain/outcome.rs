//! Transient outcome of a webhook test dispatch.
//!
//! A [`WebhookTest`] is owned by one page invocation. Starting a dispatch
//! hands out a [`PendingGuard`] that mutably borrows the state, so the same
//! state cannot be re-triggered while a request is in flight. Whatever path
//! the dispatch takes, the guard leaves the state out of `Pending` when it is
//! dropped.

use serde_json::Value;

/// Message used when a dispatch ends without a more specific error.
pub const DEFAULT_FAILURE_MESSAGE: &str = "Failed to send webhook";

#[derive(Clone, Debug, Default, PartialEq)]
pub enum WebhookOutcome {
    #[default]
    Idle,
    Pending,
    /// Parsed JSON body returned by the endpoint.
    Succeeded(Value),
    /// Human-readable error message.
    Failed(String),
}

impl WebhookOutcome {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn response(&self) -> Option<&Value> {
        match self {
            Self::Succeeded(body) => Some(body),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// Outcome state of the webhook test page.
#[derive(Debug, Default)]
pub struct WebhookTest {
    outcome: WebhookOutcome,
}

impl WebhookTest {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn outcome(&self) -> &WebhookOutcome {
        &self.outcome
    }

    /// Resets any previous response or error and enters `Pending`.
    pub fn begin(&mut self) -> PendingGuard<'_> {
        self.outcome = WebhookOutcome::Pending;
        PendingGuard {
            outcome: &mut self.outcome,
        }
    }
}

/// Exclusive handle on a `Pending` outcome.
#[derive(Debug)]
pub struct PendingGuard<'a> {
    outcome: &'a mut WebhookOutcome,
}

impl PendingGuard<'_> {
    pub fn succeed(self, body: Value) {
        *self.outcome = WebhookOutcome::Succeeded(body);
    }

    pub fn fail(self, message: impl Into<String>) {
        let message = message.into();
        *self.outcome = if message.is_empty() {
            WebhookOutcome::Failed(DEFAULT_FAILURE_MESSAGE.to_string())
        } else {
            WebhookOutcome::Failed(message)
        };
    }
}

impl Drop for PendingGuard<'_> {
    fn drop(&mut self) {
        if self.outcome.is_pending() {
            *self.outcome = WebhookOutcome::Failed(DEFAULT_FAILURE_MESSAGE.to_string());
        }
    }
}
