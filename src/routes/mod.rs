//! HTTP transport: builds request objects, dispatches them through the
//! mediator and maps the outcome to a status code.

use actix_web::{HttpResponse, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod client;
pub mod department;
pub mod employee;

/// Maps a handler failure to an HTTP response.
///
/// Validation failures are the caller's fault (400); everything else is a
/// server-side failure (500) and gets logged.
pub(crate) fn error_response(err: &ServiceError) -> HttpResponse {
    match err {
        ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        ServiceError::Configuration(request_type) => {
            log::error!("No handler registered for {request_type}");
            HttpResponse::InternalServerError().finish()
        }
        ServiceError::Repository(err) => {
            log::error!("Store failure: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Registers every API route under `/api`.
///
/// Literal `search` segments are registered before their `{id}` siblings so
/// they are not captured as path parameters.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(client::list_clients)
            .service(client::search_clients)
            .service(client::get_client)
            .service(client::create_client)
            .service(client::update_client)
            .service(client::delete_client)
            .service(employee::list_employees)
            .service(employee::search_employees)
            .service(employee::get_employee)
            .service(employee::create_employee)
            .service(employee::update_employee)
            .service(employee::delete_employee)
            .service(department::list_departments)
            .service(department::get_department)
            .service(department::create_department)
            .service(department::update_department)
            .service(department::delete_department),
    );
}
