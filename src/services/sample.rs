//! Fixture responses of the sample API.

use chrono::{DateTime, Utc};

use crate::domain::sample_user::{NewSampleUser, SampleUser};
use crate::dto::sample::GreetingResponse;
use crate::forms::sample::StoreSampleForm;
use crate::random::RandomSource;
use crate::services::ServiceResult;

/// Bounds, in days, of the synthetic `created_at` offset.
pub const CREATED_DAYS_AGO: (u32, u32) = (1, 30);
/// Bounds of the synthetic identifier assigned by `store`.
pub const STORED_ID_RANGE: (u32, u32) = (1000, 9999);

/// How the `index` handler presents its greeting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputMode {
    Json,
    View,
}

impl OutputMode {
    pub fn greeting(self) -> &'static str {
        match self {
            OutputMode::Json => "Hello World!",
            OutputMode::View => "Hello World from Controller 2!",
        }
    }
}

/// Success envelope returned by `index`.
pub fn greet(mode: OutputMode, now: DateTime<Utc>) -> GreetingResponse {
    GreetingResponse {
        message: mode.greeting().to_string(),
        timestamp: now,
        status: "success",
    }
}

/// Validated input together with its freshly assigned identifier.
#[derive(Debug, PartialEq, Eq)]
pub struct StoredSampleUser {
    pub id: u32,
    pub data: NewSampleUser,
}

/// Builds the synthetic record for `id`, created 1 to 30 days before `now`.
pub fn show_sample_user<R>(random: &R, id: &str, now: DateTime<Utc>) -> SampleUser
where
    R: RandomSource + ?Sized,
{
    let (low, high) = CREATED_DAYS_AGO;
    let days_ago = random.pick(low, high).clamp(low, high);
    SampleUser::synthesize(id, now, days_ago)
}

/// Validates the submitted fields and assigns a random identifier.
pub fn store_sample_user<R>(random: &R, form: StoreSampleForm) -> ServiceResult<StoredSampleUser>
where
    R: RandomSource + ?Sized,
{
    let data = form.validate_input().map_err(|err| {
        log::warn!("Rejected sample user input: {err}");
        err
    })?;

    let (low, high) = STORED_ID_RANGE;
    let id = random.pick(low, high).clamp(low, high);
    log::info!("Accepted sample user {id}");

    Ok(StoredSampleUser { id, data })
}
