mod setting;

pub use setting::*;
