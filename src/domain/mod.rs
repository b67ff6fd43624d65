//! Domain types shared by the sample API and the webhook test page.

pub mod outcome;
pub mod proposal;
pub mod sample_user;
pub mod types;
