//! Pixel masking against a color bucket.
//!
//! This module provides:
//! - `color_mask`: binary membership mask for one bucket
//! - `isolate`: source image with everything outside the mask blacked out,
//!   the form handed to OCR

use image::{GrayImage, Luma, RgbImage};

use super::hsv::HsvImage;
use super::spec::ColorSpec;

/// Builds a binary mask: 255 where the pixel falls in the bucket, 0
/// elsewhere. An all-zero mask is a valid result, not a failure.
pub fn color_mask(hsv: &HsvImage, spec: &ColorSpec) -> GrayImage {
    let (width, height) = hsv.dimensions();
    let mut mask = GrayImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let value = if spec.matches(hsv.get(x, y)) { 255u8 } else { 0u8 };
            mask.put_pixel(x, y, Luma([value]));
        }
    }
    mask
}

/// Keeps only the pixels belonging to the bucket; all others become black.
/// `hsv` must be the conversion of `src`.
pub fn isolate(src: &RgbImage, hsv: &HsvImage, spec: &ColorSpec) -> RgbImage {
    let mask = color_mask(hsv, spec);
    let (width, height) = src.dimensions();
    let mut output = RgbImage::new(width, height);
    for (x, y, pixel) in src.enumerate_pixels() {
        if mask.get_pixel(x, y).0[0] != 0 {
            output.put_pixel(x, y, *pixel);
        }
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_image() -> RgbImage {
        let mut img = RgbImage::new(3, 1);
        // Red label ink, blue label ink, white background
        img.put_pixel(0, 0, image::Rgb([0xe1, 0x32, 0x1f]));
        img.put_pixel(1, 0, image::Rgb([0x2f, 0x2c, 0x57]));
        img.put_pixel(2, 0, image::Rgb([255, 255, 255]));
        img
    }

    #[test]
    fn test_mask_selects_only_matching_pixels() {
        let img = sample_image();
        let hsv = HsvImage::from_rgb(&img);

        let red_mask = color_mask(&hsv, &ColorSpec::red());
        assert_eq!(red_mask.get_pixel(0, 0).0[0], 255);
        assert_eq!(red_mask.get_pixel(1, 0).0[0], 0);
        assert_eq!(red_mask.get_pixel(2, 0).0[0], 0);

        let blue_mask = color_mask(&hsv, &ColorSpec::blue());
        assert_eq!(blue_mask.get_pixel(0, 0).0[0], 0);
        assert_eq!(blue_mask.get_pixel(1, 0).0[0], 255);
        assert_eq!(blue_mask.get_pixel(2, 0).0[0], 0);
    }

    #[test]
    fn test_mask_is_binary() {
        let img = sample_image();
        let hsv = HsvImage::from_rgb(&img);
        let mask = color_mask(&hsv, &ColorSpec::red());
        for pixel in mask.pixels() {
            assert!(pixel.0[0] == 0 || pixel.0[0] == 255);
        }
    }

    #[test]
    fn test_isolate_blacks_out_everything_else() {
        let img = sample_image();
        let hsv = HsvImage::from_rgb(&img);
        let isolated = isolate(&img, &hsv, &ColorSpec::red());

        assert_eq!(isolated.get_pixel(0, 0).0, [0xe1, 0x32, 0x1f]);
        assert_eq!(isolated.get_pixel(1, 0).0, [0, 0, 0]);
        assert_eq!(isolated.get_pixel(2, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_absent_color_yields_empty_mask() {
        let mut img = RgbImage::new(2, 2);
        for pixel in img.pixels_mut() {
            *pixel = image::Rgb([255, 255, 255]);
        }
        let hsv = HsvImage::from_rgb(&img);

        let mask = color_mask(&hsv, &ColorSpec::blue());
        assert!(mask.pixels().all(|p| p.0[0] == 0));

        let isolated = isolate(&img, &hsv, &ColorSpec::blue());
        assert!(isolated.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_wrapped_red_hue_is_isolated() {
        let mut img = RgbImage::new(1, 1);
        // Crimson with hue just below the wraparound point
        img.put_pixel(0, 0, image::Rgb([200, 0, 40]));
        let hsv = HsvImage::from_rgb(&img);
        let mask = color_mask(&hsv, &ColorSpec::red());
        assert_eq!(mask.get_pixel(0, 0).0[0], 255);
    }
}
