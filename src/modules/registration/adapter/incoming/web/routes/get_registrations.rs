use actix_web::{get, web, HttpResponse, Responder};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::{IntoParams, ToSchema};

use crate::{
    api::schemas::{ErrorResponse, SuccessResponse},
    registration::application::{
        domain::entities::{viewer_offset_from_minutes, Registration, RegistrationStats},
        ports::incoming::use_cases::{LoadSummaryError, RegistrationSummary},
    },
    shared::api::ApiResponse,
    AppState,
};

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SummaryQuery {
    /// Viewer's offset from UTC in minutes, east positive (Nairobi = 180)
    #[param(value_type = Option<i32>, example = 180)]
    pub utc_offset_minutes: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RegistrationSummaryResponse {
    /// Newest first
    pub registrations: Vec<Registration>,
    pub stats: RegistrationStats,
}

impl From<RegistrationSummary> for RegistrationSummaryResponse {
    fn from(summary: RegistrationSummary) -> Self {
        Self {
            registrations: summary.registrations,
            stats: summary.stats,
        }
    }
}

#[utoipa::path(
    get,
    path = "/api/admin/registrations",
    tag = "registrations",
    params(SummaryQuery),
    responses(
        (
            status = 200,
            description = "All registrations with dashboard counters",
            body = inline(SuccessResponse<RegistrationSummaryResponse>)
        ),
        (
            status = 400,
            description = "Invalid UTC offset",
            body = ErrorResponse
        ),
        (
            status = 500,
            description = "Registrations could not be loaded",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": "Failed to load registrations",
                "code": "PERSISTENCE_ERROR"
            })
        )
    )
)]
#[get("/api/admin/registrations")]
pub async fn get_registration_summary_handler(
    data: web::Data<AppState>,
    query: web::Query<SummaryQuery>,
) -> impl Responder {
    let viewer_offset = match parse_offset(query.utc_offset_minutes.as_deref()) {
        Ok(offset) => offset,
        Err(resp) => return resp,
    };

    match data.registration.load_summary.execute(viewer_offset).await {
        Ok(summary) => {
            info!(
                total = summary.stats.total,
                today = summary.stats.today,
                "Registration summary loaded"
            );
            ApiResponse::success(RegistrationSummaryResponse::from(summary))
        }
        Err(err) => map_load_summary_error(err),
    }
}

fn parse_offset(raw: Option<&str>) -> Result<Option<FixedOffset>, HttpResponse> {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return Ok(None);
    };

    raw.parse::<i32>()
        .ok()
        .and_then(viewer_offset_from_minutes)
        .map(Some)
        .ok_or_else(|| {
            warn!(utc_offset_minutes = raw, "Rejected dashboard offset");
            ApiResponse::bad_request(
                "INVALID_UTC_OFFSET",
                "utc_offset_minutes must be an integer between -840 and 840",
            )
        })
}

fn map_load_summary_error(err: LoadSummaryError) -> HttpResponse {
    match err {
        LoadSummaryError::PersistenceError(msg) => {
            error!(error = %msg, "Failed to load registrations");
            ApiResponse::server_error("PERSISTENCE_ERROR", "Failed to load registrations")
        }
        LoadSummaryError::Unexpected(msg) => {
            error!(error = %msg, "Unexpected failure loading registrations");
            ApiResponse::internal_error()
        }
    }
}
