use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, Set};
use std::sync::Arc;
use std::time::Duration;

use crate::modules::registration::application::{
    domain::entities::Registration,
    ports::outgoing::{NewRegistrationData, RegistrationRepository, RegistrationRepositoryError},
};

// SeaORM entity imports
use super::sea_orm_entity::{ActiveModel as RegistrationActiveModel, Model as RegistrationModel};

#[derive(Debug, Clone)]
pub struct RegistrationRepositoryPostgres {
    db: Arc<DatabaseConnection>,
    timeout: Duration,
}

impl RegistrationRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, timeout: Duration) -> Self {
        Self { db, timeout }
    }
}

#[async_trait]
impl RegistrationRepository for RegistrationRepositoryPostgres {
    async fn create_registration(
        &self,
        data: NewRegistrationData,
    ) -> Result<Registration, RegistrationRepositoryError> {
        // id and created_at come from column defaults
        let active = RegistrationActiveModel {
            name: Set(data.name),
            email: Set(data.email),
            phone: Set(data.phone),
            level: Set(data.level),
            plan: Set(data.plan),
            language: Set(data.language),
            status: Set(data.status),
            ..Default::default()
        };

        let inserted: RegistrationModel =
            tokio::time::timeout(self.timeout, active.insert(&*self.db))
                .await
                .map_err(|_| RegistrationRepositoryError::Timeout(self.timeout))?
                .map_err(map_db_err)?;

        Ok(inserted.to_registration())
    }
}

fn map_db_err(err: DbErr) -> RegistrationRepositoryError {
    match err {
        DbErr::Type(msg) | DbErr::Json(msg) | DbErr::RecordNotFound(msg) => {
            RegistrationRepositoryError::Unexpected(msg)
        }
        DbErr::RecordNotInserted => {
            RegistrationRepositoryError::Unexpected("insert returned no row".to_string())
        }
        other => RegistrationRepositoryError::DatabaseError(other.to_string()),
    }
}
