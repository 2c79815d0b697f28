//! Site-wide settings stored as key/value rows.

pub mod dtos;
pub mod handlers;
pub mod models;
pub mod repository;
pub mod routes;
pub mod services;

pub use repository::{PgSettingsRepository, SettingsRepository};
pub use services::SettingsService;
