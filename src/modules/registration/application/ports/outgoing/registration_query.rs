use async_trait::async_trait;
use std::time::Duration;

use crate::registration::application::domain::entities::Registration;

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistrationQueryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Database call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

#[async_trait]
pub trait RegistrationQuery: Send + Sync {
    /// Every registration, newest first.
    async fn list_registrations(&self) -> Result<Vec<Registration>, RegistrationQueryError>;
}
