use image::{Rgb, RgbImage};

use super::Filter;
use crate::error::{FilterResult, ensure_non_empty};

/// Output channel `i` is `MATRIX[i] . [c0, c1, c2]`, in stored channel order.
pub const SEPIA_MATRIX: [[f32; 3]; 3] = [
    [0.272, 0.534, 0.131],
    [0.349, 0.686, 0.168],
    [0.393, 0.769, 0.189],
];

#[derive(Debug, Clone, Copy, Default)]
pub struct Sepia;

impl Filter for Sepia {
    fn apply(&self, image: &RgbImage) -> FilterResult<RgbImage> {
        ensure_non_empty(image.width(), image.height())?;

        let mut out = image.clone();
        for pixel in out.pixels_mut() {
            let src = pixel.0.map(f32::from);
            let mut dst = [0u8; 3];
            for (row, value) in SEPIA_MATRIX.iter().zip(dst.iter_mut()) {
                let v = row[0] * src[0] + row[1] * src[1] + row[2] * src[2];
                *value = v.round().clamp(0.0, 255.0) as u8;
            }
            *pixel = Rgb(dst);
        }
        Ok(out)
    }
}
