//! Routes of the webhook test page.

use actix_web::{HttpResponse, Responder, get, post, web};
use chrono::Utc;
use tera::{Context, Tera};

use crate::domain::outcome::WebhookOutcome;
use crate::dto::webhook::{DispatchResponse, WebhookPageData};
use crate::routes::render_template;
use crate::services::webhook::{self as webhook_service, WebhookDispatcher, WebhookTestRun};

fn render_page(
    tera: &Tera,
    dispatcher: &WebhookDispatcher,
    run: &WebhookTestRun,
) -> HttpResponse {
    let page = WebhookPageData::new(dispatcher.url(), &run.payload, run.state.outcome());
    let mut context = Context::new();
    context.insert("page", &page);
    render_template(tera, "webhook/index.html", &context)
}

#[get("/webhook-test")]
/// Shows the payload preview and the send button.
pub async fn show_webhook_test(
    dispatcher: web::Data<WebhookDispatcher>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match webhook_service::prepare_webhook_test(Utc::now()) {
        Ok(run) => render_page(&tera, &dispatcher, &run),
        Err(err) => {
            log::error!("Failed to prepare webhook test: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/webhook-test")]
/// Sends the test proposal and renders the outcome.
pub async fn send_webhook_test(
    dispatcher: web::Data<WebhookDispatcher>,
    tera: web::Data<Tera>,
) -> impl Responder {
    match webhook_service::run_webhook_test(&dispatcher, Utc::now()).await {
        Ok(run) => render_page(&tera, &dispatcher, &run),
        Err(err) => {
            log::error!("Failed to run webhook test: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

#[post("/webhook-test")]
/// Sends the test proposal and reports the outcome as JSON.
pub async fn api_send_webhook_test(dispatcher: web::Data<WebhookDispatcher>) -> impl Responder {
    let run = match webhook_service::run_webhook_test(&dispatcher, Utc::now()).await {
        Ok(run) => run,
        Err(err) => {
            log::error!("Failed to run webhook test: {err}");
            return HttpResponse::InternalServerError().finish();
        }
    };

    match run.state.outcome() {
        WebhookOutcome::Succeeded(body) => HttpResponse::Ok().json(DispatchResponse::Succeeded {
            response: body.clone(),
        }),
        WebhookOutcome::Failed(error) => {
            HttpResponse::BadGateway().json(DispatchResponse::Failed {
                error: error.clone(),
            })
        }
        other => {
            log::error!("Webhook test finished in unexpected state {other:?}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
