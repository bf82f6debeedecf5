use image::buffer::ConvertBuffer;
use image::{DynamicImage, GenericImageView, RgbImage, RgbaImage, imageops};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::core::processing::padding::{centering_offset, pad_all};
use crate::error::{Error, Result};
use crate::io::loader::ImageSet;

/// Largest width and largest height over `images`; `(0, 0)` when empty.
pub fn max_dimensions<'a, I>(images: I) -> (u32, u32)
where
    I: IntoIterator<Item = &'a DynamicImage>,
{
    images
        .into_iter()
        .map(|image| image.dimensions())
        .fold((0, 0), |(max_w, max_h), (w, h)| (max_w.max(w), max_h.max(h)))
}

/// Stacks `padded` top to bottom on a black RGB canvas of `width` x `total_height`.
///
/// Alpha is dropped. Pixels falling outside the canvas are clipped, and an empty
/// input on a 0x0 canvas yields a 0x0 image.
pub fn stitch_images(padded: &[RgbaImage], width: u32, total_height: u32) -> RgbImage {
    let mut canvas = RgbImage::new(width, total_height);
    let mut offset: i64 = 0;

    for image in padded {
        let rgb: RgbImage = image.convert();
        imageops::replace(&mut canvas, &rgb, 0, offset);
        debug!("Placed {}x{} at y={}", rgb.width(), rgb.height(), offset);
        offset += i64::from(image.height());
    }

    canvas
}

/// Where one source image lands on the stitched canvas.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Placement {
    pub name: String,
    pub width: u32,
    pub height: u32,
    /// Left edge of the source pixels; negative if the image overhangs
    pub x: i64,
    pub y: u64,
}

/// Pads and stacks the images of one `ImageSet`.
///
/// All sizing scalars are computed once at construction.
pub struct Stitcher<'a> {
    set: &'a ImageSet,
    max_width: u32,
    max_height: u32,
}

impl<'a> Stitcher<'a> {
    pub fn new(set: &'a ImageSet) -> Self {
        let (max_width, max_height) = max_dimensions(set.images());
        info!(
            "Stitcher: {} images, max_width={}, max_height={}, combined_height={}",
            set.len(),
            max_width,
            max_height,
            set.combined_height()
        );
        Self {
            set,
            max_width,
            max_height,
        }
    }

    pub fn max_width(&self) -> u32 {
        self.max_width
    }

    pub fn max_height(&self) -> u32 {
        self.max_height
    }

    pub fn combined_height(&self) -> u64 {
        self.set.combined_height()
    }

    /// Every image padded to `max_width`, in load order.
    pub fn padded(&self) -> Vec<RgbaImage> {
        pad_all(self.set.images(), self.max_width)
    }

    pub fn placements(&self) -> Vec<Placement> {
        let mut y = 0u64;
        self.set
            .iter()
            .map(|entry| {
                let (width, height) = entry.image.dimensions();
                let placement = Placement {
                    name: entry.name.clone(),
                    width,
                    height,
                    x: centering_offset(self.max_width, width),
                    y,
                };
                y += u64::from(height);
                placement
            })
            .collect()
    }

    /// Pads every image and composes the final canvas.
    pub fn stitch(&self) -> Result<RgbImage> {
        let total_height =
            u32::try_from(self.combined_height()).map_err(|_| Error::CanvasTooLarge {
                width: u64::from(self.max_width),
                height: self.combined_height(),
            })?;

        let padded = self.padded();
        let canvas = stitch_images(&padded, self.max_width, total_height);
        info!(
            "Stitched {} images into {}x{}",
            padded.len(),
            canvas.width(),
            canvas.height()
        );
        Ok(canvas)
    }
}
