pub mod channel;
pub mod enhance;
pub mod seasonal;
pub mod sepia;
pub mod sketch;
pub mod tone;

use image::RgbImage;

use crate::error::FilterResult;

/// A pure image-to-image transform. The input is never modified.
pub trait Filter {
    fn apply(&self, image: &RgbImage) -> FilterResult<RgbImage>;
}
