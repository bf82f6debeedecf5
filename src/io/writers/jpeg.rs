use jpeg_encoder::{ColorType, Encoder};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::{Error, Result};

pub const JPEG_QUALITY: u8 = 90;

/// JPEG stores dimensions as u16; anything larger cannot be encoded.
fn jpeg_dimensions(cols: u32, rows: u32) -> Result<(u16, u16)> {
    match (u16::try_from(cols), u16::try_from(rows)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(Error::Encode(format!(
            "{}x{} exceeds the JPEG limit of {} pixels per side",
            cols,
            rows,
            u16::MAX
        ))),
    }
}

/// Encodes interleaved RGB into an in-memory JPEG.
pub fn encode_rgb_jpeg(cols: u32, rows: u32, rgb_data: &[u8]) -> Result<Vec<u8>> {
    let (width, height) = jpeg_dimensions(cols, rows)?;
    let mut buf = Vec::new();
    let encoder = Encoder::new(&mut buf, JPEG_QUALITY);
    encoder
        .encode(rgb_data, width, height, ColorType::Rgb)
        .map_err(Error::encode)?;
    Ok(buf)
}

pub fn write_rgb_jpeg(output: &Path, cols: u32, rows: u32, rgb_data: &[u8]) -> Result<()> {
    let (width, height) = jpeg_dimensions(cols, rows)?;
    let file = File::create(output).map_err(Error::encode)?;
    let mut writer = BufWriter::new(file);
    let encoder = Encoder::new(&mut writer, JPEG_QUALITY);
    encoder
        .encode(rgb_data, width, height, ColorType::Rgb)
        .map_err(Error::encode)?;
    writer.flush().map_err(Error::encode)?;
    Ok(())
}
