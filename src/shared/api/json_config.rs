// src/shared/api/json_config.rs
use crate::shared::api::ApiResponse;
use actix_web::{error::JsonPayloadError, web::JsonConfig, HttpResponse};
use tracing::warn;

/// Form bodies are tiny; anything larger is not a registration.
const MAX_BODY_BYTES: usize = 16 * 1024;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default()
        .limit(MAX_BODY_BYTES)
        .error_handler(|err, req| {
            warn!(path = %req.path(), error = %err, "Rejected request body");
            let response = payload_error_response(&err);
            actix_web::error::InternalError::from_response(err, response).into()
        })
}

fn payload_error_response(err: &JsonPayloadError) -> HttpResponse {
    match err {
        JsonPayloadError::ContentType => ApiResponse::bad_request(
            "INVALID_CONTENT_TYPE",
            "Content-Type must be application/json",
        ),
        JsonPayloadError::OverflowKnownLength { .. } | JsonPayloadError::Overflow { .. } => {
            ApiResponse::bad_request("PAYLOAD_TOO_LARGE", "Request body is too large")
        }
        other => ApiResponse::bad_request(
            "VALIDATION_ERROR",
            &format!("Request body must be a JSON object of form fields: {other}"),
        ),
    }
}
