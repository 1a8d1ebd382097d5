use async_trait::async_trait;
use chrono::FixedOffset;

use crate::registration::application::domain::entities::{Registration, RegistrationStats};

#[derive(Debug, Clone)]
pub struct RegistrationSummary {
    pub registrations: Vec<Registration>,
    pub stats: RegistrationStats,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoadSummaryError {
    #[error("Failed to load registrations: {0}")]
    PersistenceError(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[async_trait]
pub trait LoadRegistrationSummaryUseCase: Send + Sync {
    /// `viewer_offset` decides what "today" means; `None` uses the server default.
    async fn execute(
        &self,
        viewer_offset: Option<FixedOffset>,
    ) -> Result<RegistrationSummary, LoadSummaryError>;
}
