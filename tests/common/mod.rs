//! Shared helpers for integration tests.

#![allow(dead_code)]

use hello_webhook::random::RandomSource;

/// Random source that always answers with one end of the requested range.
pub enum FixedRandom {
    Low,
    High,
}

impl RandomSource for FixedRandom {
    fn pick(&self, low: u32, high: u32) -> u32 {
        match self {
            FixedRandom::Low => low,
            FixedRandom::High => high,
        }
    }
}

/// Initializes the application routes against `$webhook_url` with `$random`.
macro_rules! init_app {
    ($webhook_url:expr, $random:expr) => {{
        let tera = tera::Tera::new("templates/**/*").expect("templates should parse");
        let dispatcher = hello_webhook::services::webhook::WebhookDispatcher::new($webhook_url)
            .expect("webhook client should build");
        let random: std::sync::Arc<dyn hello_webhook::random::RandomSource> =
            std::sync::Arc::new($random);
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(actix_web::web::Data::new(tera))
                .app_data(actix_web::web::Data::new(dispatcher))
                .app_data(actix_web::web::Data::from(random))
                .configure(hello_webhook::routes::configure),
        )
        .await
    }};
}

pub(crate) use init_app;
