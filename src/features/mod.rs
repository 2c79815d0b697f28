pub mod auth;
pub mod calculator;
pub mod categories;
pub mod dashboard;
pub mod glossary;
pub mod posts;
pub mod settings;
pub mod taxonomy;
