use crate::registration::application::ports::incoming::use_cases::{
    LoadRegistrationSummaryUseCase, SubmitRegistrationUseCase,
};
use crate::registration::application::registration_use_cases::RegistrationUseCases;
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    submit: Arc<dyn SubmitRegistrationUseCase + Send + Sync>,
    load_summary: Arc<dyn LoadRegistrationSummaryUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            submit: Arc::new(StubSubmitRegistrationUseCase),
            load_summary: Arc::new(StubLoadRegistrationSummaryUseCase),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_submit_registration(
        mut self,
        uc: impl SubmitRegistrationUseCase + Send + Sync + 'static,
    ) -> Self {
        self.submit = Arc::new(uc);
        self
    }

    pub fn with_load_summary(
        mut self,
        uc: impl LoadRegistrationSummaryUseCase + Send + Sync + 'static,
    ) -> Self {
        self.load_summary = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            registration: RegistrationUseCases {
                submit: self.submit,
                load_summary: self.load_summary,
            },
        })
    }
}
