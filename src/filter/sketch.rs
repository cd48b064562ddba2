//! Pencil sketch and edge map.

use image::{GrayImage, RgbImage, imageops};
use imageproc::edges::canny;
use imageproc::filter::gaussian_blur_f32;

use super::Filter;
use super::channel::gray_to_rgb;
use crate::error::{FilterResult, ensure_non_empty};

/// Blur sigma of a 21x21 Gaussian kernel with automatic sigma.
pub const SKETCH_SIGMA: f32 = 3.5;
/// Blur sigma of an 11x11 Gaussian kernel with automatic sigma.
pub const EDGE_SIGMA: f32 = 2.0;
pub const EDGE_LOW_THRESHOLD: f32 = 100.0;
pub const EDGE_HIGH_THRESHOLD: f32 = 150.0;

/// Color dodge of the grayscale image against its blurred negative.
#[derive(Debug, Clone, Copy, Default)]
pub struct PencilSketch;

impl Filter for PencilSketch {
    fn apply(&self, image: &RgbImage) -> FilterResult<RgbImage> {
        ensure_non_empty(image.width(), image.height())?;

        let gray = imageops::grayscale(image);
        let mut negative = gray.clone();
        imageops::invert(&mut negative);
        let mut blurred = gaussian_blur_f32(&negative, SKETCH_SIGMA);
        imageops::invert(&mut blurred);

        Ok(gray_to_rgb(dodge(&gray, &blurred)))
    }
}

/// `round(256 * base / blend)` saturated to 255; a zero divisor gives 0.
fn dodge(base: &GrayImage, blend: &GrayImage) -> GrayImage {
    let mut out = base.clone();
    for (dst, divisor) in out.pixels_mut().zip(blend.pixels()) {
        let d = divisor[0];
        dst[0] = if d == 0 {
            0
        } else {
            (256.0 * f32::from(dst[0]) / f32::from(d)).round().min(255.0) as u8
        };
    }
    out
}

/// Canny edges of the blurred image, white on black.
#[derive(Debug, Clone, Copy, Default)]
pub struct CannyEdges;

impl Filter for CannyEdges {
    fn apply(&self, image: &RgbImage) -> FilterResult<RgbImage> {
        ensure_non_empty(image.width(), image.height())?;

        let blurred = gaussian_blur_f32(image, EDGE_SIGMA);
        let gray = imageops::grayscale(&blurred);
        let edges = canny(&gray, EDGE_LOW_THRESHOLD, EDGE_HIGH_THRESHOLD);
        Ok(gray_to_rgb(edges))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Luma, Rgb};

    fn is_binary(image: &GrayImage) -> bool {
        image.pixels().all(|&Luma([v])| v == 0 || v == 255)
    }

    #[test]
    fn test_dodge() {
        let base = GrayImage::from_raw(4, 1, vec![100, 200, 50, 0]).unwrap();
        let blend = GrayImage::from_raw(4, 1, vec![200, 100, 0, 10]).unwrap();
        let out = dodge(&base, &blend);
        assert_eq!(out.as_raw(), &vec![128, 255, 0, 0]);
    }

    #[test]
    fn test_flat_image_sketches_to_white() {
        // a flat negative blurs to itself (up to float error), so each pixel is
        // divided by roughly its own value
        let img = RgbImage::from_pixel(8, 8, Rgb([120, 120, 120]));
        let out = PencilSketch.apply(&img).unwrap();
        assert!(out.pixels().all(|p| p[0] >= 250 && p[0] == p[1] && p[1] == p[2]));
    }

    #[test]
    fn test_flat_image_has_no_edges() {
        let img = RgbImage::from_pixel(16, 16, Rgb([30, 60, 90]));
        let out = CannyEdges.apply(&img).unwrap();
        assert!(out.pixels().all(|p| p.0 == [0, 0, 0]));
    }

    #[test]
    fn test_step_edge_is_found() {
        let img = RgbImage::from_fn(32, 32, |x, _| {
            if x < 16 { Rgb([0, 0, 0]) } else { Rgb([255, 255, 255]) }
        });
        let out = CannyEdges.apply(&img).unwrap();
        let gray = imageops::grayscale(&out);
        assert!(is_binary(&gray));
        assert!(gray.pixels().any(|p| p[0] == 255));
        // edges stay near the step
        for (x, _, p) in gray.enumerate_pixels() {
            if p[0] == 255 {
                assert!((12..=19).contains(&x), "edge at column {x}");
            }
        }
    }

    #[test]
    fn test_empty_image_is_rejected() {
        assert!(PencilSketch.apply(&RgbImage::new(0, 0)).is_err());
        assert!(CannyEdges.apply(&RgbImage::new(3, 0)).is_err());
    }
}
