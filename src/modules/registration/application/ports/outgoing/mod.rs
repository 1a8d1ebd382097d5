mod registration_query;
mod registration_repository;

pub use registration_query::{RegistrationQuery, RegistrationQueryError};
pub use registration_repository::{
    NewRegistrationData, RegistrationRepository, RegistrationRepositoryError,
};
