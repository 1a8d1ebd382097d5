mod get_registrations;
mod register;

pub use get_registrations::{
    __path_get_registration_summary_handler, get_registration_summary_handler,
    RegistrationSummaryResponse, SummaryQuery,
};
pub use register::{__path_register_handler, register_handler, RegisterRequest};
