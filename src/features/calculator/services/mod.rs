mod calculator_service;

pub use calculator_service::*;
