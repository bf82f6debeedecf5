//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Every variant aborts the run: the loader, stitcher and writers never retry or skip.
use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Cannot read {path:?}: {source}")]
    FileSystem {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Cannot decode image {path:?}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Any failure producing the output file, including the write itself
    #[error("Encoding error: {0}")]
    Encode(String),

    #[error("Unsupported output format for {path:?}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Refusing to write an empty {width}x{height} canvas")]
    EmptyCanvas { width: u32, height: u32 },

    #[error("Canvas of {width}x{height} exceeds the maximum raster size")]
    CanvasTooLarge { width: u64, height: u64 },

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn encode<E: std::fmt::Display>(e: E) -> Self {
        Error::Encode(e.to_string())
    }

    pub(crate) fn file_system(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::FileSystem {
            path: path.into(),
            source,
        }
    }
}
