//! Contrast, brightness and blur adjustments.
//!
//! Contrast and brightness blend the image with a flat "degenerate" image:
//! `out = flat + factor * (in - flat)`. A factor of 1.0 is the identity; the
//! result is truncated and clipped to 0..=255.

use std::ops::RangeInclusive;

use image::{Rgb, RgbImage};
use imageproc::filter::gaussian_blur_f32;

use super::Filter;
use crate::error::{FilterError, FilterResult, ensure_non_empty};

pub const CONTRAST_RANGE: RangeInclusive<f32> = 0.5..=3.5;
pub const BRIGHTNESS_RANGE: RangeInclusive<f32> = 0.5..=3.5;
pub const BLUR_SIGMA_RANGE: RangeInclusive<f32> = 0.5..=3.5;

pub const DEFAULT_CONTRAST: f32 = 3.0;
pub const DEFAULT_BRIGHTNESS: f32 = 2.5;
pub const DEFAULT_BLUR_SIGMA: f32 = 1.75;

fn check_range(name: &str, value: f32, range: &RangeInclusive<f32>) -> FilterResult<()> {
    if !value.is_finite() || !range.contains(&value) {
        return Err(FilterError::InvalidParameter(format!(
            "{name} {value} outside {:.1}..={:.1}",
            range.start(),
            range.end()
        )));
    }
    Ok(())
}

/// ITU-R 601-2 luma in 16-bit fixed point, rounded.
fn luma(p: &Rgb<u8>) -> u32 {
    let [r, g, b] = p.0.map(u32::from);
    (r * 19595 + g * 38470 + b * 7471 + 0x8000) >> 16
}

fn blend_toward(image: &RgbImage, flat: f32, factor: f32) -> RgbImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        for c in pixel.0.iter_mut() {
            let v = flat + factor * (f32::from(*c) - flat);
            *c = v.clamp(0.0, 255.0) as u8;
        }
    }
    out
}

#[derive(Debug, Clone, Copy)]
pub struct Contrast {
    pub factor: f32,
}

impl Default for Contrast {
    fn default() -> Self {
        Self {
            factor: DEFAULT_CONTRAST,
        }
    }
}

impl Filter for Contrast {
    fn apply(&self, image: &RgbImage) -> FilterResult<RgbImage> {
        ensure_non_empty(image.width(), image.height())?;
        check_range("contrast", self.factor, &CONTRAST_RANGE)?;

        let count = u64::from(image.width()) * u64::from(image.height());
        let total: u64 = image.pixels().map(|p| u64::from(luma(p))).sum();
        let mean = (total as f64 / count as f64 + 0.5).floor() as f32;
        Ok(blend_toward(image, mean, self.factor))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Brightness {
    pub factor: f32,
}

impl Default for Brightness {
    fn default() -> Self {
        Self {
            factor: DEFAULT_BRIGHTNESS,
        }
    }
}

impl Filter for Brightness {
    fn apply(&self, image: &RgbImage) -> FilterResult<RgbImage> {
        ensure_non_empty(image.width(), image.height())?;
        check_range("brightness", self.factor, &BRIGHTNESS_RANGE)?;
        Ok(blend_toward(image, 0.0, self.factor))
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Blur {
    pub sigma: f32,
}

impl Default for Blur {
    fn default() -> Self {
        Self {
            sigma: DEFAULT_BLUR_SIGMA,
        }
    }
}

impl Filter for Blur {
    fn apply(&self, image: &RgbImage) -> FilterResult<RgbImage> {
        ensure_non_empty(image.width(), image.height())?;
        check_range("blur sigma", self.sigma, &BLUR_SIGMA_RANGE)?;
        Ok(gaussian_blur_f32(image, self.sigma))
    }
}
