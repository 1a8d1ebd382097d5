pub mod api;
pub mod config;
pub mod health;
pub mod modules;
pub mod shared;
pub use modules::registration;

use crate::api::openapi::ApiDoc;
use crate::config::AppConfig;
use crate::registration::adapter::outgoing::{
    RegistrationQueryPostgres, RegistrationRepositoryPostgres,
};
use crate::registration::application::registration_use_cases::RegistrationUseCases;
use crate::registration::application::services::{
    LoadRegistrationSummaryService, SubmitRegistrationService,
};
use crate::shared::api::custom_json_config;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub registration: RegistrationUseCases,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    // Environment variable loading
    let env = std::env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

    // Try .env.{environment} first, then fall back to .env
    let env_file = format!(".env.{}", env);
    if dotenvy::from_filename(&env_file).is_err() {
        dotenvy::dotenv().ok();
    }

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let conn = shared::database::connect(&config.database)
        .await
        .context("Database setup failed")?;
    let db_arc = Arc::new(conn);

    let timeout = config.database.timeout;
    let registration_repo = RegistrationRepositoryPostgres::new(Arc::clone(&db_arc), timeout);
    let registration_query = RegistrationQueryPostgres::new(Arc::clone(&db_arc), timeout);

    let state = AppState {
        registration: RegistrationUseCases {
            submit: Arc::new(SubmitRegistrationService::new(registration_repo)),
            load_summary: Arc::new(LoadRegistrationSummaryService::new(
                registration_query,
                config.dashboard.default_offset,
                config.dashboard.pricing.clone(),
            )),
        },
    };

    let db_for_server = Arc::clone(&db_arc);

    info!(%server_url, "Server listening");

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Registration
    cfg.service(crate::registration::adapter::incoming::web::routes::register_handler);
    cfg.service(
        crate::registration::adapter::incoming::web::routes::get_registration_summary_handler,
    );
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
