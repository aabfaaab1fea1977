pub mod geo;
pub mod math;
