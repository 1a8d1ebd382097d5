use async_trait::async_trait;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use crate::registration::application::domain::entities::Registration;
use crate::registration::application::ports::outgoing::{
    NewRegistrationData, RegistrationQuery, RegistrationQueryError, RegistrationRepository,
    RegistrationRepositoryError,
};

/// Shared in-memory table serving both the write and the read port.
#[derive(Clone, Default)]
pub struct InMemoryRegistrationStore {
    rows: Arc<Mutex<Vec<Registration>>>,
}

impl InMemoryRegistrationStore {
    pub fn with_rows(rows: Vec<Registration>) -> Self {
        Self {
            rows: Arc::new(Mutex::new(rows)),
        }
    }

    pub fn count(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl RegistrationRepository for InMemoryRegistrationStore {
    async fn create_registration(
        &self,
        data: NewRegistrationData,
    ) -> Result<Registration, RegistrationRepositoryError> {
        let registration = Registration {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            name: data.name,
            email: data.email,
            phone: data.phone,
            level: data.level,
            plan: data.plan,
            language: data.language,
            status: data.status,
        };
        self.rows.lock().unwrap().push(registration.clone());
        Ok(registration)
    }
}

#[async_trait]
impl RegistrationQuery for InMemoryRegistrationStore {
    async fn list_registrations(&self) -> Result<Vec<Registration>, RegistrationQueryError> {
        let mut rows = self.rows.lock().unwrap().clone();
        rows.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(rows)
    }
}
