pub mod jpeg;
pub mod pdf;
