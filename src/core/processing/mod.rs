pub mod padding;
pub mod save;
pub mod stitch;
