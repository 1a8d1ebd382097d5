use async_trait::async_trait;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, QueryOrder};
use std::sync::Arc;
use std::time::Duration;

use crate::modules::registration::application::{
    domain::entities::Registration,
    ports::outgoing::{RegistrationQuery, RegistrationQueryError},
};

// SeaORM entity
use super::sea_orm_entity::{
    Column as RegistrationColumn, Entity as RegistrationEntity, Model as RegistrationModel,
};

#[derive(Debug, Clone)]
pub struct RegistrationQueryPostgres {
    db: Arc<DatabaseConnection>,
    timeout: Duration,
}

impl RegistrationQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>, timeout: Duration) -> Self {
        Self { db, timeout }
    }
}

#[async_trait]
impl RegistrationQuery for RegistrationQueryPostgres {
    async fn list_registrations(&self) -> Result<Vec<Registration>, RegistrationQueryError> {
        // id breaks created_at ties so repeated loads agree on order
        let select = RegistrationEntity::find()
            .order_by_desc(RegistrationColumn::CreatedAt)
            .order_by_desc(RegistrationColumn::Id)
            .all(&*self.db);

        let models: Vec<RegistrationModel> = tokio::time::timeout(self.timeout, select)
            .await
            .map_err(|_| RegistrationQueryError::Timeout(self.timeout))?
            .map_err(map_db_err)?;

        Ok(models.iter().map(RegistrationModel::to_registration).collect())
    }
}

fn map_db_err(err: DbErr) -> RegistrationQueryError {
    match err {
        DbErr::Type(msg) | DbErr::Json(msg) => RegistrationQueryError::Unexpected(msg),
        other => RegistrationQueryError::DatabaseError(other.to_string()),
    }
}
