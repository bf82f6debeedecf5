use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::ImageOrder;

/// Stitching parameters suitable for config files and CLI presets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StitchParams {
    /// File extension to match, without the leading dot (case-sensitive)
    pub extension: String,
    /// Output file name, resolved against the source directory
    pub output: PathBuf,
    pub order: ImageOrder,
}

impl Default for StitchParams {
    fn default() -> Self {
        Self {
            extension: "png".to_string(),
            output: PathBuf::from("stitched.pdf"),
            order: ImageOrder::Name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_preset_falls_back_to_defaults() {
        let params: StitchParams = serde_json::from_str(r#"{"extension":"jpg"}"#).unwrap();
        assert_eq!(params.extension, "jpg");
        assert_eq!(params.output, PathBuf::from("stitched.pdf"));
        assert_eq!(params.order, ImageOrder::Name);
    }
}
