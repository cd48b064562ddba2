use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

use crate::error::{FilterError, FilterResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

impl Channel {
    pub const ALL: &[Channel] = &[Channel::Red, Channel::Green, Channel::Blue];

    pub fn index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Channel::Red => "R",
            Channel::Green => "G",
            Channel::Blue => "B",
        }
    }
}

/// Split an RGB image into its three planes, in R, G, B order.
pub fn split(image: &RgbImage) -> [GrayImage; 3] {
    let (w, h) = image.dimensions();
    std::array::from_fn(|c| GrayImage::from_fn(w, h, |x, y| Luma([image.get_pixel(x, y)[c]])))
}

/// Recombine three planes into an RGB image. All planes must have the same size.
pub fn merge(planes: [GrayImage; 3]) -> FilterResult<RgbImage> {
    let dims = planes[0].dimensions();
    if let Some(bad) = planes.iter().find(|p| p.dimensions() != dims) {
        return Err(FilterError::InvalidImage(format!(
            "channel planes differ in size: {:?} vs {:?}",
            dims,
            bad.dimensions()
        )));
    }

    let [r, g, b] = planes;
    let mut out = RgbImage::new(dims.0, dims.1);
    for (((dst, r), g), b) in out.pixels_mut().zip(r.pixels()).zip(g.pixels()).zip(b.pixels()) {
        *dst = Rgb([r[0], g[0], b[0]]);
    }
    Ok(out)
}

/// Exchange the red and blue planes.
pub fn swap_red_blue(image: &RgbImage) -> RgbImage {
    let mut out = image.clone();
    for pixel in out.pixels_mut() {
        let [r, g, b] = pixel.0;
        pixel.0 = [b, g, r];
    }
    out
}

/// Replicate a single-channel image into RGB for display.
pub fn gray_to_rgb(image: GrayImage) -> RgbImage {
    DynamicImage::ImageLuma8(image).to_rgb8()
}
