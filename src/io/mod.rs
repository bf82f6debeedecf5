//! I/O layer: the directory `loader` that produces an `ImageSet`, and `writers`
//! for the JPEG and single-page PDF outputs.
pub mod loader;
pub use loader::{ImageSet, LoadedImage};

pub mod writers;
