mod calculator_dto;

pub use calculator_dto::*;
