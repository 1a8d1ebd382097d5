// src/shared/api/response.rs
use actix_web::{http::StatusCode, HttpResponse};
use serde::Serialize;

#[derive(Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

/// Error body. `error` carries the human-readable message shown by the form.
#[derive(Serialize, Clone)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
    pub code: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<String>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success(data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            message: None,
            data: Some(data),
        })
    }

    pub fn success_with_message(message: &str, data: T) -> HttpResponse {
        HttpResponse::Ok().json(ApiResponse {
            success: true,
            message: Some(message.to_string()),
            data: Some(data),
        })
    }
}

impl ApiResponse<()> {
    pub fn error(status: StatusCode, code: &str, message: &str) -> HttpResponse {
        Self::error_with_fields(status, code, message, Vec::new())
    }

    pub fn error_with_fields(
        status: StatusCode,
        code: &str,
        message: &str,
        fields: Vec<String>,
    ) -> HttpResponse {
        HttpResponse::build(status).json(ApiError {
            success: false,
            error: message.to_string(),
            code: code.to_string(),
            fields,
        })
    }

    pub fn bad_request(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::BAD_REQUEST, code, message)
    }

    pub fn server_error(code: &str, message: &str) -> HttpResponse {
        Self::error(StatusCode::INTERNAL_SERVER_ERROR, code, message)
    }

    pub fn internal_error() -> HttpResponse {
        Self::server_error("INTERNAL_ERROR", "Internal server error")
    }
}
