use async_trait::async_trait;
use chrono::{FixedOffset, Utc};
use uuid::Uuid;

use crate::registration::application::domain::entities::{
    Registration, DEFAULT_LANGUAGE, STATUS_PENDING,
};
use crate::registration::application::ports::incoming::use_cases::{
    LoadRegistrationSummaryUseCase, LoadSummaryError, RegistrationInput, RegistrationSummary,
    SubmitRegistrationError, SubmitRegistrationUseCase,
};

#[derive(Default, Clone)]
pub struct StubSubmitRegistrationUseCase;

#[async_trait]
impl SubmitRegistrationUseCase for StubSubmitRegistrationUseCase {
    async fn execute(
        &self,
        _input: RegistrationInput,
    ) -> Result<Registration, SubmitRegistrationError> {
        unimplemented!("Not used in this test")
    }
}

#[derive(Default, Clone)]
pub struct StubLoadRegistrationSummaryUseCase;

#[async_trait]
impl LoadRegistrationSummaryUseCase for StubLoadRegistrationSummaryUseCase {
    async fn execute(
        &self,
        _viewer_offset: Option<FixedOffset>,
    ) -> Result<RegistrationSummary, LoadSummaryError> {
        unimplemented!("Not used in this test")
    }
}

/// A stored registration created now, with the remaining fields filled in.
pub fn sample_registration(name: &str, plan: &str) -> Registration {
    Registration {
        id: Uuid::new_v4(),
        created_at: Utc::now(),
        name: name.to_string(),
        email: "jane@example.com".to_string(),
        phone: "+254700000000".to_string(),
        level: "beginner".to_string(),
        plan: plan.to_string(),
        language: DEFAULT_LANGUAGE.to_string(),
        status: STATUS_PENDING.to_string(),
    }
}
