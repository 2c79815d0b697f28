mod insurance_type;

pub use insurance_type::*;
