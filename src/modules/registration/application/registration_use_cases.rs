use std::sync::Arc;

use crate::registration::application::ports::incoming::use_cases::{
    LoadRegistrationSummaryUseCase, SubmitRegistrationUseCase,
};

#[derive(Clone)]
pub struct RegistrationUseCases {
    pub submit: Arc<dyn SubmitRegistrationUseCase + Send + Sync>,
    pub load_summary: Arc<dyn LoadRegistrationSummaryUseCase + Send + Sync>,
}
