//! Shared types and enums used across notestitch.
//! Includes `ImageOrder` (how loaded pages are sequenced) and `OutputFormat`
//! (how the stitched canvas is encoded, inferred from the output file name).
use std::path::Path;

use clap::ValueEnum;
use image::ImageFormat;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Sequence in which matching files are stacked, top to bottom.
#[derive(
    Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ImageOrder {
    /// Raw directory-listing order, as returned by the platform
    Listing,
    /// Lexicographic by file name
    #[default]
    Name,
}

impl std::fmt::Display for ImageOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageOrder::Listing => write!(f, "listing"),
            ImageOrder::Name => write!(f, "name"),
        }
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OutputFormat {
    /// Single-page PDF with the canvas embedded as a JPEG stream
    Pdf,
    Jpeg,
    /// Any other format the `image` crate can encode
    Raster(ImageFormat),
}

impl OutputFormat {
    /// Infers the encoder from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Result<Self> {
        let unsupported = || Error::UnsupportedFormat {
            path: path.to_path_buf(),
        };

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .ok_or_else(unsupported)?
            .to_ascii_lowercase();

        match ext.as_str() {
            "pdf" => Ok(OutputFormat::Pdf),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            _ => match ImageFormat::from_extension(&ext) {
                Some(format) if format.writing_enabled() => Ok(OutputFormat::Raster(format)),
                _ => Err(unsupported()),
            },
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Pdf => write!(f, "PDF"),
            OutputFormat::Jpeg => write!(f, "JPEG"),
            OutputFormat::Raster(format) => write!(f, "{:?}", format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_format_from_extension() {
        assert_eq!(
            OutputFormat::from_path(Path::new("notes/stitched.pdf")).unwrap(),
            OutputFormat::Pdf
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out.JPG")).unwrap(),
            OutputFormat::Jpeg
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("out.png")).unwrap(),
            OutputFormat::Raster(ImageFormat::Png)
        );
    }

    #[test]
    fn output_format_rejects_unknown_and_missing_extension() {
        assert!(matches!(
            OutputFormat::from_path(Path::new("out.docx")),
            Err(Error::UnsupportedFormat { .. })
        ));
        assert!(matches!(
            OutputFormat::from_path(Path::new("stitched")),
            Err(Error::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn image_order_defaults_to_name() {
        assert_eq!(ImageOrder::default(), ImageOrder::Name);
        assert_eq!(ImageOrder::Listing.to_string(), "listing");
    }
}
