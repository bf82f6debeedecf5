//! Directory loader: enumerates files with one extension and decodes them eagerly.
//!
//! Only regular files directly inside the directory are considered (symlinks are
//! followed, subdirectories are never entered). The extension match is a
//! case-sensitive suffix test on `".<ext>"`. Ordering is explicit through
//! [`ImageOrder`]; once loaded, a set never changes.
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, ImageReader};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::types::ImageOrder;

/// One decoded source page and the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedImage {
    /// File name for display; non UTF-8 bytes are replaced
    pub name: String,
    pub path: PathBuf,
    pub image: DynamicImage,
}

#[derive(Debug, Clone)]
pub struct ImageSet {
    directory: PathBuf,
    extension: String,
    order: ImageOrder,
    entries: Vec<LoadedImage>,
    combined_height: u64,
}

impl ImageSet {
    /// Lists `directory`, keeps files ending in `".<extension>"`, orders them and decodes
    /// each one. The first unreadable directory entry or undecodable file aborts the load.
    pub fn load(directory: &Path, extension: &str, order: ImageOrder) -> Result<Self> {
        if extension.is_empty() {
            return Err(Error::InvalidArgument {
                arg: "extension",
                value: extension.to_string(),
            });
        }

        let names = list_matching_files(directory, extension, order)?;
        info!(
            "Found {} '.{}' files in {:?} ({} order)",
            names.len(),
            extension,
            directory,
            order
        );

        let mut entries = Vec::with_capacity(names.len());
        for file_name in names {
            let path = directory.join(&file_name);
            let image = decode_image(&path)?;
            let name = file_name.to_string_lossy().into_owned();
            let (width, height) = image.dimensions();
            debug!("Loaded {}: {}x{} {:?}", name, width, height, image.color());
            entries.push(LoadedImage { name, path, image });
        }

        let combined_height = entries
            .iter()
            .map(|entry| u64::from(entry.image.height()))
            .sum();

        Ok(Self {
            directory: directory.to_path_buf(),
            extension: extension.to_string(),
            order,
            entries,
            combined_height,
        })
    }

    pub fn directory(&self) -> &Path {
        &self.directory
    }

    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Order the entries were sequenced in at load time.
    pub fn order(&self) -> ImageOrder {
        self.order
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of all image heights, 0 for an empty set.
    pub fn combined_height(&self) -> u64 {
        self.combined_height
    }

    pub fn name(&self, index: usize) -> Option<&str> {
        self.entries.get(index).map(|entry| entry.name.as_str())
    }

    pub fn image(&self, index: usize) -> Option<&DynamicImage> {
        self.entries.get(index).map(|entry| &entry.image)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    pub fn images(&self) -> impl Iterator<Item = &DynamicImage> {
        self.entries.iter().map(|entry| &entry.image)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LoadedImage> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ImageSet {
    type Item = &'a LoadedImage;
    type IntoIter = std::slice::Iter<'a, LoadedImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// File names in `directory` ending with `".<extension>"`, in the requested order.
///
/// The suffix is matched on the raw name bytes, so names that are not UTF-8 are kept.
pub fn list_matching_files(
    directory: &Path,
    extension: &str,
    order: ImageOrder,
) -> Result<Vec<OsString>> {
    let suffix = format!(".{}", extension);
    let mut names = Vec::new();

    for entry in fs::read_dir(directory).map_err(|e| Error::file_system(directory, e))? {
        let entry = entry.map_err(|e| Error::file_system(directory, e))?;
        let name = entry.file_name();
        if !name.as_encoded_bytes().ends_with(suffix.as_bytes()) {
            continue;
        }

        let path = entry.path();
        let metadata = fs::metadata(&path).map_err(|e| Error::file_system(&path, e))?;
        if !metadata.is_file() {
            debug!("Skipping non-file entry: {:?}", path);
            continue;
        }
        names.push(name);
    }

    if order == ImageOrder::Name {
        names.sort();
    }
    Ok(names)
}

fn decode_image(path: &Path) -> Result<DynamicImage> {
    let decode_err = |source: image::ImageError| Error::Decode {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_err(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_err)
}
