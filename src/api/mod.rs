//! High-level, ergonomic library API: stitch a directory to an in-memory canvas or
//! straight to a file. Prefer these entrypoints over the low-level `core` and `io`
//! modules when embedding notestitch.
use std::path::{Path, PathBuf};

use image::RgbImage;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::params::StitchParams;
use crate::core::processing::save::save_stitched_image;
use crate::core::processing::stitch::{Placement, Stitcher};
use crate::error::Result;
use crate::io::loader::ImageSet;
use crate::types::ImageOrder;

/// Summary of one stitch: sizing scalars and where every source page landed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StitchReport {
    pub source_dir: PathBuf,
    pub extension: String,
    pub order: ImageOrder,
    pub max_width: u32,
    pub max_height: u32,
    pub combined_height: u64,
    pub placements: Vec<Placement>,
}

impl StitchReport {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Result of in-memory stitching
#[derive(Debug, Clone)]
pub struct StitchedImage {
    pub canvas: RgbImage,
    pub report: StitchReport,
}

/// Pads and stacks an already loaded set (no disk I/O)
pub fn stitch_image_set(set: &ImageSet) -> Result<StitchedImage> {
    let stitcher = Stitcher::new(set);
    let canvas = stitcher.stitch()?;

    let report = StitchReport {
        source_dir: set.directory().to_path_buf(),
        extension: set.extension().to_string(),
        order: set.order(),
        max_width: stitcher.max_width(),
        max_height: stitcher.max_height(),
        combined_height: stitcher.combined_height(),
        placements: stitcher.placements(),
    };

    Ok(StitchedImage { canvas, report })
}

/// Loads every matching image in `dir` and stitches them in memory
pub fn stitch_directory(dir: &Path, params: &StitchParams) -> Result<StitchedImage> {
    let set = ImageSet::load(dir, &params.extension, params.order)?;
    stitch_image_set(&set)
}

/// Loads, stitches and writes `dir/<params.output>`; returns the written path
pub fn stitch_directory_to_path(dir: &Path, params: &StitchParams) -> Result<PathBuf> {
    let stitched = stitch_directory(dir, params)?;
    let output = dir.join(&params.output);
    save_stitched_image(&stitched.canvas, &output)?;
    info!(
        "Wrote {} pages from {:?} to {:?}",
        stitched.report.placements.len(),
        dir,
        output
    );
    Ok(output)
}
