//! Response bodies of the sample API.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::sample_user::NewSampleUser;
use crate::forms::FieldErrors;

/// Body returned by `index` in JSON mode.
#[derive(Debug, Serialize)]
pub struct GreetingResponse {
    pub message: String,
    pub timestamp: DateTime<Utc>,
    pub status: &'static str,
}

/// Body returned by a successful `store`.
#[derive(Debug, Serialize)]
pub struct StoreResponse {
    pub message: &'static str,
    pub data: NewSampleUser,
    pub id: u32,
}

/// Body returned for rejected input.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
}

impl ErrorResponse {
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            errors: None,
        }
    }
}

impl From<FieldErrors> for ErrorResponse {
    fn from(errors: FieldErrors) -> Self {
        Self {
            message: errors.summary(),
            errors: Some(errors),
        }
    }
}
