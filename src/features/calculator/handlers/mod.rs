mod calculator_handler;

pub use calculator_handler::*;
