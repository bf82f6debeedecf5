use image::RgbImage;
use std::path::Path;
use tracing::info;

use crate::error::{Error, Result};
use crate::io::writers::jpeg::write_rgb_jpeg;
use crate::io::writers::pdf::write_rgb_pdf;
use crate::types::OutputFormat;

/// Writes the stitched canvas, choosing the encoder from the output extension.
pub fn save_stitched_image(canvas: &RgbImage, output: &Path) -> Result<()> {
    let format = OutputFormat::from_path(output)?;
    let (cols, rows) = canvas.dimensions();

    if cols == 0 || rows == 0 {
        return Err(Error::EmptyCanvas {
            width: cols,
            height: rows,
        });
    }

    match format {
        OutputFormat::Pdf => write_rgb_pdf(output, cols, rows, canvas.as_raw())?,
        OutputFormat::Jpeg => write_rgb_jpeg(output, cols, rows, canvas.as_raw())?,
        OutputFormat::Raster(image_format) => canvas
            .save_with_format(output, image_format)
            .map_err(Error::encode)?,
    }

    info!("save_stitched_image: {}x{} {} saved to {:?}", cols, rows, format, output);
    Ok(())
}
