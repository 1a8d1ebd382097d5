use actix_web::{http::StatusCode, post, web, HttpResponse, Responder};
use serde::Deserialize;
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    registration::application::{
        domain::entities::Registration,
        ports::incoming::use_cases::{
            RegistrationCommandError, RegistrationInput, SubmitRegistrationError,
        },
    },
    shared::api::ApiResponse,
    AppState,
};

//
// ──────────────────────────────────────────────────────────
// Request DTO
// ──────────────────────────────────────────────────────────
//

/// Every field is optional on the wire so missing keys reach validation
/// instead of failing deserialization.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(default)]
pub struct RegisterRequest {
    #[schema(example = "Jane Doe")]
    pub name: Option<String>,
    #[schema(example = "jane@example.com")]
    pub email: Option<String>,
    #[schema(example = "+254700000000")]
    pub phone: Option<String>,
    #[schema(example = "beginner")]
    pub level: Option<String>,
    #[schema(example = "premium")]
    pub plan: Option<String>,
    #[schema(example = "en")]
    pub language: Option<String>,
}

impl From<RegisterRequest> for RegistrationInput {
    fn from(req: RegisterRequest) -> Self {
        Self {
            name: req.name,
            email: req.email,
            phone: req.phone,
            level: req.level,
            plan: req.plan,
            language: req.language,
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Route
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/api/register",
    tag = "registrations",
    request_body = RegisterRequest,
    responses(
        (
            status = 200,
            description = "Registration stored",
            body = inline(SuccessResponse<Vec<Registration>>),
            example = json!({
                "success": true,
                "message": "Registration successful!",
                "data": [{
                    "id": "123e4567-e89b-12d3-a456-426614174000",
                    "created_at": "2026-03-10T09:15:00Z",
                    "name": "Jane Doe",
                    "email": "jane@example.com",
                    "phone": "+254700000000",
                    "level": "beginner",
                    "plan": "premium",
                    "language": "en",
                    "status": "pending"
                }]
            })
        ),
        (
            status = 400,
            description = "Missing fields, invalid email or malformed body",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "All fields are required",
                "code": "MISSING_FIELDS",
                "fields": ["phone", "plan"]
            })
        ),
        (
            status = 500,
            description = "Registration could not be saved",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "Failed to save registration. Please try again.",
                "code": "PERSISTENCE_ERROR"
            })
        )
    )
)]
#[post("/api/register")]
pub async fn register_handler(
    data: web::Data<AppState>,
    payload: web::Json<RegisterRequest>,
) -> impl Responder {
    info!(plan = ?payload.plan, "Registration attempt");

    match data
        .registration
        .submit
        .execute(payload.into_inner().into())
        .await
    {
        Ok(registration) => {
            info!(
                registration_id = %registration.id,
                plan = %registration.plan,
                "Registration stored"
            );
            ApiResponse::success_with_message("Registration successful!", vec![registration])
        }
        Err(err) => map_submit_error(err),
    }
}

//
// ──────────────────────────────────────────────────────────
// Error Mapping
// ──────────────────────────────────────────────────────────
//

fn map_submit_error(err: SubmitRegistrationError) -> HttpResponse {
    match err {
        SubmitRegistrationError::InvalidInput(RegistrationCommandError::MissingFields(fields)) => {
            warn!(?fields, "Registration rejected: missing fields");
            ApiResponse::error_with_fields(
                StatusCode::BAD_REQUEST,
                "MISSING_FIELDS",
                "All fields are required",
                fields.into_iter().map(String::from).collect(),
            )
        }
        SubmitRegistrationError::InvalidInput(RegistrationCommandError::InvalidEmail) => {
            warn!("Registration rejected: invalid email");
            ApiResponse::bad_request("INVALID_EMAIL", "Invalid email format")
        }
        SubmitRegistrationError::PersistenceError(msg) => {
            error!(error = %msg, "Failed to persist registration");
            ApiResponse::server_error(
                "PERSISTENCE_ERROR",
                "Failed to save registration. Please try again.",
            )
        }
        SubmitRegistrationError::Unexpected(msg) => {
            error!(error = %msg, "Unexpected registration failure");
            ApiResponse::internal_error()
        }
    }
}
