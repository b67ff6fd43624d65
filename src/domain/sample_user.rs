//! Synthetic user records served by the sample API.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Fixture record returned by the `show` handler. Never persisted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct SampleUser {
    /// Identifier echoed from the request path, unvalidated.
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl SampleUser {
    /// Builds the record for `id` created `days_ago` days before `now`.
    pub fn synthesize(id: &str, now: DateTime<Utc>, days_ago: u32) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Sample User {id}"),
            email: format!("user{id}@example.com"),
            phone: None,
            message: None,
            created_at: now - Duration::days(i64::from(days_ago)),
        }
    }
}

/// Validated subset of the fields accepted by the `store` handler.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct NewSampleUser {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
