use image::{DynamicImage, GenericImageView, Rgba, RgbaImage, imageops};
use tracing::debug;

/// Opaque white, the fill for padded margins.
pub const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// Offset that centers `inner` within `outer`, rounded toward negative infinity.
/// Negative when `inner` is larger; the overhang is clipped on paste.
pub fn centering_offset(outer: u32, inner: u32) -> i64 {
    (i64::from(outer) - i64::from(inner)).div_euclid(2)
}

/// Centers `image` horizontally on a white `target_width` x `image.height` background.
///
/// Images with an alpha channel are blended over the white fill, so the result is
/// fully opaque. The vertical offset centers the image on a background of its own
/// height and is therefore always 0. The source image is left untouched.
pub fn pad_to_width(image: &DynamicImage, target_width: u32) -> RgbaImage {
    let (width, height) = image.dimensions();
    let mut background = RgbaImage::from_pixel(target_width, height, BACKGROUND);

    let pad_left = centering_offset(target_width, width);
    let pad_top = centering_offset(background.height(), height);

    debug!(
        "Padding: {}x{} -> {}x{}, pad_left={}, pad_top={}",
        width, height, target_width, height, pad_left, pad_top
    );

    if image.color().has_alpha() {
        imageops::overlay(&mut background, &image.to_rgba8(), pad_left, pad_top);
    } else {
        imageops::replace(&mut background, &image.to_rgba8(), pad_left, pad_top);
    }
    background
}

/// Pads every image to `target_width`, keeping input order.
pub fn pad_all<'a, I>(images: I, target_width: u32) -> Vec<RgbaImage>
where
    I: IntoIterator<Item = &'a DynamicImage>,
{
    images
        .into_iter()
        .map(|image| pad_to_width(image, target_width))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use proptest::prelude::*;

    fn solid_rgb(width: u32, height: u32, color: [u8; 3]) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, Rgb(color)))
    }

    #[test]
    fn centering_offset_floors_like_integer_division() {
        assert_eq!(centering_offset(200, 100), 50);
        assert_eq!(centering_offset(200, 150), 25);
        assert_eq!(centering_offset(200, 199), 0);
        assert_eq!(centering_offset(200, 200), 0);
        assert_eq!(centering_offset(100, 101), -1);
    }

    #[test]
    fn pads_narrow_image_centered_on_white() {
        let red = solid_rgb(100, 50, [255, 0, 0]);
        let padded = pad_to_width(&red, 200);

        assert_eq!(padded.dimensions(), (200, 50));
        assert_eq!(padded.get_pixel(0, 0), &BACKGROUND);
        assert_eq!(padded.get_pixel(49, 25), &BACKGROUND);
        assert_eq!(padded.get_pixel(50, 0), &Rgba([255, 0, 0, 255]));
        assert_eq!(padded.get_pixel(149, 49), &Rgba([255, 0, 0, 255]));
        assert_eq!(padded.get_pixel(150, 49), &BACKGROUND);
    }

    #[test]
    fn full_width_image_is_copied_unchanged() {
        let blue = solid_rgb(200, 80, [0, 0, 255]);
        let padded = pad_to_width(&blue, 200);

        assert_eq!(padded.dimensions(), (200, 80));
        assert!(padded.pixels().all(|p| *p == Rgba([0, 0, 255, 255])));
    }

    #[test]
    fn transparent_pixels_blend_into_background() {
        let mut rgba = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
        rgba.put_pixel(1, 0, Rgba([0, 0, 0, 0]));
        let source = DynamicImage::ImageRgba8(rgba);

        let padded = pad_to_width(&source, 4);

        assert_eq!(padded.get_pixel(1, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(padded.get_pixel(2, 0), &BACKGROUND);
        assert!(padded.pixels().all(|p| p[3] == 255));
        // source untouched
        assert_eq!(source.get_pixel(1, 0), Rgba([0, 0, 0, 0]));
    }

    #[test]
    fn pad_all_keeps_order() {
        let images = vec![
            solid_rgb(10, 3, [1, 1, 1]),
            solid_rgb(20, 5, [2, 2, 2]),
            solid_rgb(15, 4, [3, 3, 3]),
        ];
        let padded = pad_all(&images, 20);
        let heights: Vec<u32> = padded.iter().map(|p| p.height()).collect();
        assert_eq!(heights, vec![3, 5, 4]);
        assert!(padded.iter().all(|p| p.width() == 20));
    }

    proptest! {
        #[test]
        fn padding_normalizes_width_and_keeps_height(
            width in 1u32..64,
            height in 1u32..64,
            extra in 0u32..64,
        ) {
            let image = solid_rgb(width, height, [10, 20, 30]);
            let padded = pad_to_width(&image, width + extra);
            prop_assert_eq!(padded.width(), width + extra);
            prop_assert_eq!(padded.height(), height);
        }
    }
}
