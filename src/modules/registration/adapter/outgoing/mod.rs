pub mod sea_orm_entity;
mod registration_query_postgres;
mod registration_repository_postgres;

pub use registration_query_postgres::RegistrationQueryPostgres;
pub use registration_repository_postgres::RegistrationRepositoryPostgres;
