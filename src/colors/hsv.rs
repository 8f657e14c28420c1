//! RGB to HSV conversion for color-range masking.
//!
//! Pixels are converted once per image and cached, since every color
//! bucket is classified against the same HSV data. Channels are stored
//! on the range scale: hue halved to 0-180 so it fits a byte, saturation
//! and value stretched to 0-255.

use image::RgbImage;
use palette::{Hsv, IntoColor, Srgb};

/// An image converted to byte-scaled HSV, row-major.
pub struct HsvImage {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 3]>,
}

impl HsvImage {
    /// Converts every pixel of an RGB image.
    pub fn from_rgb(img: &RgbImage) -> Self {
        let (width, height) = img.dimensions();
        let pixels = img.pixels().map(|p| convert_pixel(p.0)).collect();
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn get(&self, x: u32, y: u32) -> [u8; 3] {
        self.pixels[(y * self.width + x) as usize]
    }
}

fn convert_pixel(rgb: [u8; 3]) -> [u8; 3] {
    let srgb = Srgb::new(
        rgb[0] as f32 / 255.0,
        rgb[1] as f32 / 255.0,
        rgb[2] as f32 / 255.0,
    );
    let hsv: Hsv = srgb.into_color();
    [
        (hsv.hue.into_positive_degrees() / 2.0).round() as u8,
        (hsv.saturation * 255.0).round() as u8,
        (hsv.value * 255.0).round() as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_primary_colors() {
        assert_eq!(convert_pixel([255, 0, 0]), [0, 255, 255]);
        assert_eq!(convert_pixel([0, 255, 0]), [60, 255, 255]);
        assert_eq!(convert_pixel([0, 0, 255]), [120, 255, 255]);
    }

    #[test]
    fn test_achromatic_pixels() {
        let white = convert_pixel([255, 255, 255]);
        assert_eq!(white[1], 0);
        assert_eq!(white[2], 255);

        let black = convert_pixel([0, 0, 0]);
        assert_eq!(black[2], 0);
    }

    #[test]
    fn test_label_colors_land_in_their_ranges() {
        // Red label ink (#e1321f)
        let red = convert_pixel([0xe1, 0x32, 0x1f]);
        assert!(red[0] <= 10);
        assert!(red[1] >= 100 && red[2] >= 100);

        // Blue label ink (#2f2c57)
        let blue = convert_pixel([0x2f, 0x2c, 0x57]);
        assert!((110..=130).contains(&blue[0]));
        assert!(blue[1] >= 50 && blue[2] >= 50);
    }

    #[test]
    fn test_from_rgb_preserves_layout() {
        let mut img = RgbImage::new(2, 2);
        img.put_pixel(0, 0, image::Rgb([255, 0, 0]));
        img.put_pixel(1, 0, image::Rgb([0, 255, 0]));
        img.put_pixel(0, 1, image::Rgb([0, 0, 255]));
        img.put_pixel(1, 1, image::Rgb([0, 0, 0]));

        let hsv = HsvImage::from_rgb(&img);
        assert_eq!(hsv.dimensions(), (2, 2));
        assert_eq!(hsv.get(0, 0)[0], 0);
        assert_eq!(hsv.get(1, 0)[0], 60);
        assert_eq!(hsv.get(0, 1)[0], 120);
        assert_eq!(hsv.get(1, 1)[2], 0);
    }
}
