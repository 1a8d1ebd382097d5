use crate::api::schemas::{ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::registration::{
    adapter::incoming::web::routes::{RegisterRequest, RegistrationSummaryResponse},
    application::domain::entities::{Registration, RegistrationStats, RevenueEstimate},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Course Registration API",
        version = "1.0.0",
        description = "Public registration form endpoint and admin dashboard feed"
    ),
    paths(
        crate::registration::adapter::incoming::web::routes::register_handler,
        crate::registration::adapter::incoming::web::routes::get_registration_summary_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<RegistrationSummaryResponse>,
            ErrorResponse,

            RegisterRequest,
            Registration,
            RegistrationStats,
            RevenueEstimate,
            RegistrationSummaryResponse
        )
    ),
    tags(
        (name = "registrations", description = "Course registration endpoints"),
    )
)]
pub struct ApiDoc;
