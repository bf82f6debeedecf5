use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use notestitch::{ImageOrder, StitchParams};

#[derive(Parser, Debug)]
#[command(name = "notestitch", version, about = "Stitch note pages into one image or PDF")]
pub struct CliArgs {
    /// Directory containing the source images; the output is written here too
    pub path: PathBuf,

    /// Extension of the images to stitch, without the dot (case-sensitive)
    #[arg(long = "tp", default_value = "png")]
    pub tp: String,

    /// Output file name; the format follows its extension (pdf, png, jpg, ...)
    #[arg(long = "out", default_value = "stitched.pdf")]
    pub out: PathBuf,

    /// Page order: by file name, or raw directory listing
    #[arg(long, value_enum, default_value_t = ImageOrder::Name)]
    pub order: ImageOrder,

    /// Enable logging
    #[arg(long, default_value_t = false)]
    pub log: bool,
}

impl CliArgs {
    /// Parses the process arguments, accepting the single-dash `-tp`/`-out` spellings.
    pub fn parse_with_legacy_flags() -> Self {
        Self::parse_from(normalize_legacy_flags(std::env::args_os()))
    }

    pub fn params(&self) -> StitchParams {
        StitchParams {
            extension: self.tp.clone(),
            output: self.out.clone(),
            order: self.order,
        }
    }
}

const LEGACY_FLAGS: [&str; 2] = ["tp", "out"];

/// Rewrites `-tp`/`-out` (and their `=value` forms) to `--tp`/`--out`.
pub fn normalize_legacy_flags<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    args.into_iter()
        .map(|arg| {
            let Some(text) = arg.to_str() else {
                return arg;
            };
            let Some(rest) = text.strip_prefix('-').filter(|r| !r.starts_with('-')) else {
                return arg;
            };
            let flag = rest.split('=').next().unwrap_or(rest);
            if LEGACY_FLAGS.contains(&flag) {
                OsString::from(format!("-{}", text))
            } else {
                arg
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(args: &[&str]) -> Vec<OsString> {
        args.iter().map(OsString::from).collect()
    }

    #[test]
    fn rewrites_single_dash_flags() {
        let normalized = normalize_legacy_flags(os(&[
            "notestitch", "notes", "-tp", "jpg", "-out=all.png", "--log",
        ]));
        assert_eq!(
            normalized,
            os(&["notestitch", "notes", "--tp", "jpg", "--out=all.png", "--log"])
        );
    }

    #[test]
    fn leaves_values_and_other_flags_alone() {
        let args = os(&["notestitch", "-", "-h", "--tp", "tp", "-tpx"]);
        assert_eq!(normalize_legacy_flags(args.clone()), args);
    }

    #[test]
    fn defaults_without_flags() {
        let args = CliArgs::parse_from(normalize_legacy_flags(os(&["notestitch", "notes"])));
        let params = args.params();
        assert_eq!(args.path, PathBuf::from("notes"));
        assert_eq!(params.extension, "png");
        assert_eq!(params.output, PathBuf::from("stitched.pdf"));
        assert_eq!(params.order, ImageOrder::Name);
        assert!(!args.log);
    }

    #[test]
    fn parses_legacy_invocation() {
        let args = CliArgs::parse_from(normalize_legacy_flags(os(&[
            "notestitch", "scans", "-tp", "jpg", "-out", "notes.png", "--order", "listing",
        ])));
        assert_eq!(args.tp, "jpg");
        assert_eq!(args.out, PathBuf::from("notes.png"));
        assert_eq!(args.order, ImageOrder::Listing);
    }
}
