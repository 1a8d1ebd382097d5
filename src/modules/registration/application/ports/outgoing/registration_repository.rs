use async_trait::async_trait;
use std::time::Duration;

use crate::registration::application::domain::entities::Registration;

/// Insert payload. `id` and `created_at` are assigned by the database.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistrationData {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub level: String,
    pub plan: String,
    pub language: String,
    pub status: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum RegistrationRepositoryError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Database call timed out after {0:?}")]
    Timeout(Duration),

    #[error("Unexpected database response: {0}")]
    Unexpected(String),
}

#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn create_registration(
        &self,
        data: NewRegistrationData,
    ) -> Result<Registration, RegistrationRepositoryError>;
}
