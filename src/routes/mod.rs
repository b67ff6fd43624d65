//! HTTP routes and the helpers they share.

use actix_web::{HttpResponse, web};
use tera::{Context, Tera};

use crate::services::sample::OutputMode;

pub mod sample;
pub mod webhook;

/// Renders `template` or logs the failure and answers 500.
pub fn render_template(tera: &Tera, template: &str, context: &Context) -> HttpResponse {
    match tera.render(template, context) {
        Ok(body) => HttpResponse::Ok()
            .content_type("text/html; charset=utf-8")
            .body(body),
        Err(err) => {
            log::error!("Failed to render template '{template}': {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Registers the sample handler set relative to the enclosing scope.
fn sample_api(cfg: &mut web::ServiceConfig) {
    cfg.service(sample::index)
        .service(sample::show)
        .service(sample::store);
}

/// Registers every route of the application.
///
/// The sample handler set is mounted once per [`OutputMode`]: JSON at the
/// root and under `/api`, the view variant under `/hello`. The root mount is
/// registered last so that `/{id}` does not shadow the other paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(webhook::show_webhook_test)
        .service(webhook::send_webhook_test)
        .service(
            web::scope("/api")
                .app_data(web::Data::new(OutputMode::Json))
                .service(webhook::api_send_webhook_test)
                .configure(sample_api),
        )
        .service(
            web::scope("/hello")
                .app_data(web::Data::new(OutputMode::View))
                .configure(sample_api),
        )
        .service(
            web::scope("")
                .app_data(web::Data::new(OutputMode::Json))
                .configure(sample_api),
        );
}
