pub mod api;
pub mod database;
