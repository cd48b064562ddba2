use image::RgbImage;
use image::imageops;

use super::Filter;
use super::channel::gray_to_rgb;
use crate::error::{FilterResult, ensure_non_empty};

#[derive(Debug, Clone, Copy, Default)]
pub struct Grayscale;

impl Filter for Grayscale {
    fn apply(&self, image: &RgbImage) -> FilterResult<RgbImage> {
        ensure_non_empty(image.width(), image.height())?;
        Ok(gray_to_rgb(imageops::grayscale(image)))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Invert;

impl Filter for Invert {
    fn apply(&self, image: &RgbImage) -> FilterResult<RgbImage> {
        ensure_non_empty(image.width(), image.height())?;
        let mut out = image.clone();
        imageops::invert(&mut out);
        Ok(out)
    }
}
