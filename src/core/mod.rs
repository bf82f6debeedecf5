//! Core processing building blocks: stitch parameters, width padding and
//! vertical compositing. These are internal primitives consumed by the
//! high-level `api` module.
pub mod params;
pub mod processing;
