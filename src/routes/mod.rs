// Route exports
pub mod risk;

use actix_web::{error, web, HttpRequest, HttpResponse};
use crate::models::ErrorResponse;

pub use risk::AppState;

/// Turn an unreadable applicant body into a JSON 400
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("Rejected applicant payload on {}: {}", req.path(), err);
    let response = HttpResponse::BadRequest().json(ErrorResponse {
        error: "invalid_applicant_payload".to_string(),
        message: format!("Applicant data could not be read: {}", err),
        status_code: 400,
    });
    error::InternalError::from_response(err, response).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(handle_json_payload_error))
            .configure(risk::configure),
    );
}
