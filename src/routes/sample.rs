//! Sample API handlers, shared by the JSON and view mounts.

use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use chrono::Utc;
use tera::{Context, Tera};

use crate::dto::sample::{ErrorResponse, StoreResponse};
use crate::forms::sample::StoreSampleForm;
use crate::random::RandomSource;
use crate::routes::render_template;
use crate::services::ServiceError;
use crate::services::sample::{self as sample_service, OutputMode};

#[get("/")]
/// Greets the caller as JSON or as a rendered page, depending on the mount.
pub async fn index(mode: web::Data<OutputMode>, tera: web::Data<Tera>) -> impl Responder {
    let greeting = sample_service::greet(*mode.get_ref(), Utc::now());
    match mode.get_ref() {
        OutputMode::Json => HttpResponse::Ok().json(greeting),
        OutputMode::View => {
            let mut context = Context::new();
            context.insert("message", &greeting.message);
            context.insert("timestamp", &greeting.timestamp.to_rfc3339());
            render_template(&tera, "hello/index.html", &context)
        }
    }
}

#[get("/{id}")]
/// Returns a synthetic user for any identifier.
pub async fn show(id: web::Path<String>, random: web::Data<dyn RandomSource>) -> impl Responder {
    let user = sample_service::show_sample_user(random.get_ref(), &id, Utc::now());
    HttpResponse::Ok().json(user)
}

#[post("/")]
/// Validates the posted fields and echoes them back with a new identifier.
pub async fn store(
    req: HttpRequest,
    body: web::Bytes,
    random: web::Data<dyn RandomSource>,
) -> impl Responder {
    let form = if req.content_type() == "application/x-www-form-urlencoded" {
        StoreSampleForm::from_urlencoded(&body)
    } else {
        StoreSampleForm::from_json(&body)
    };

    let result = form
        .map_err(ServiceError::from)
        .and_then(|form| sample_service::store_sample_user(random.get_ref(), form));

    match result {
        Ok(stored) => HttpResponse::Created().json(StoreResponse {
            message: "Data received successfully",
            data: stored.data,
            id: stored.id,
        }),
        Err(ServiceError::Validation(errors)) => {
            HttpResponse::UnprocessableEntity().json(ErrorResponse::from(errors))
        }
        Err(ServiceError::Malformed(message)) => {
            HttpResponse::BadRequest().json(ErrorResponse::message(message))
        }
        Err(err) => {
            log::error!("Failed to store sample user: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
