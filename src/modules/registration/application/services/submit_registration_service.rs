use async_trait::async_trait;

use crate::registration::application::{
    domain::entities::{Registration, STATUS_PENDING},
    ports::{
        incoming::use_cases::{
            RegistrationInput, SubmitRegistrationCommand, SubmitRegistrationError,
            SubmitRegistrationUseCase,
        },
        outgoing::{NewRegistrationData, RegistrationRepository, RegistrationRepositoryError},
    },
};

#[derive(Debug, Clone)]
pub struct SubmitRegistrationService<R>
where
    R: RegistrationRepository + Send + Sync,
{
    repository: R,
}

impl<R> SubmitRegistrationService<R>
where
    R: RegistrationRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> SubmitRegistrationUseCase for SubmitRegistrationService<R>
where
    R: RegistrationRepository + Send + Sync,
{
    async fn execute(
        &self,
        input: RegistrationInput,
    ) -> Result<Registration, SubmitRegistrationError> {
        // 1️⃣ Validate before touching the database
        let command = SubmitRegistrationCommand::new(input)?;

        let data = NewRegistrationData {
            name: command.name().to_string(),
            email: command.email().to_string(),
            phone: command.phone().to_string(),
            level: command.level().to_string(),
            plan: command.plan().to_string(),
            language: command.language().to_string(),
            status: STATUS_PENDING.to_string(),
        };

        // 2️⃣ Single insert, no retry
        self.repository
            .create_registration(data)
            .await
            .map_err(|e| match e {
                RegistrationRepositoryError::Unexpected(msg) => {
                    SubmitRegistrationError::Unexpected(msg)
                }
                other => SubmitRegistrationError::PersistenceError(other.to_string()),
            })
    }
}
