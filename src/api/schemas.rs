// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Standard success response wrapper
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    /// Always true for successful responses
    #[schema(example = true)]
    pub success: bool,
    /// Present on write confirmations
    #[schema(example = "Registration successful!")]
    pub message: Option<String>,
    /// Response data
    pub data: T,
}

/// Standard error response wrapper
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Always false for error responses
    #[schema(example = false)]
    pub success: bool,

    /// Human-readable error message
    #[schema(example = "Invalid email format")]
    pub error: String,

    /// Error code for programmatic handling
    #[schema(example = "INVALID_EMAIL")]
    pub code: String,

    /// Missing form fields, only for MISSING_FIELDS
    #[schema(example = json!(["phone"]))]
    pub fields: Option<Vec<String>>,
}
