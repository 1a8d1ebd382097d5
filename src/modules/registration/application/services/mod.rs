mod load_registration_summary_service;
mod submit_registration_service;

pub use load_registration_summary_service::LoadRegistrationSummaryService;
pub use submit_registration_service::SubmitRegistrationService;
