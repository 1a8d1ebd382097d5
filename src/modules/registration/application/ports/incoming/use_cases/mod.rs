mod load_registration_summary_use_case;
mod submit_registration_use_case;

pub use load_registration_summary_use_case::{
    LoadRegistrationSummaryUseCase, LoadSummaryError, RegistrationSummary,
};
pub use submit_registration_use_case::{
    RegistrationCommandError, RegistrationInput, SubmitRegistrationCommand,
    SubmitRegistrationError, SubmitRegistrationUseCase,
};
