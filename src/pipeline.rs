use image::{DynamicImage, RgbImage};

use crate::error::FilterResult;
use crate::filter::Filter;
use crate::filter::enhance::{self, Blur, Brightness, Contrast};
use crate::filter::seasonal::SeasonalMode;
use crate::filter::sepia::Sepia;
use crate::filter::sketch::{CannyEdges, PencilSketch};
use crate::filter::tone::{Grayscale, Invert};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Grayscale,
    PencilSketch,
    Sepia,
    Invert,
    Summer,
    Winter,
    Contrast,
    Brightness,
    Blur,
    CannyEdges,
}

impl FilterKind {
    pub const ALL: &[FilterKind] = &[
        FilterKind::Grayscale,
        FilterKind::PencilSketch,
        FilterKind::Sepia,
        FilterKind::Invert,
        FilterKind::Summer,
        FilterKind::Winter,
        FilterKind::Contrast,
        FilterKind::Brightness,
        FilterKind::Blur,
        FilterKind::CannyEdges,
    ];

    pub fn name(self) -> &'static str {
        match self {
            FilterKind::Grayscale => "Gray-Scale",
            FilterKind::PencilSketch => "Pencil Effect",
            FilterKind::Sepia => "Sepia Effect",
            FilterKind::Invert => "Invert Effect",
            FilterKind::Summer => "Summer Effect",
            FilterKind::Winter => "Winter Effect",
            FilterKind::Contrast => "Contrast",
            FilterKind::Brightness => "Brightness",
            FilterKind::Blur => "Blurring",
            FilterKind::CannyEdges => "Cannize Effect",
        }
    }

    /// Filters with a user-controlled strength slider.
    pub fn is_adjustable(self) -> bool {
        matches!(
            self,
            FilterKind::Contrast | FilterKind::Brightness | FilterKind::Blur
        )
    }

    pub fn seasonal_mode(self) -> Option<SeasonalMode> {
        match self {
            FilterKind::Summer => Some(SeasonalMode::WarmShift),
            FilterKind::Winter => Some(SeasonalMode::CoolShift),
            _ => None,
        }
    }
}

/// Everything the user controls.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterParams {
    pub kind: FilterKind,
    pub contrast: f32,
    pub brightness: f32,
    pub blur_sigma: f32,
}

impl Default for FilterParams {
    fn default() -> Self {
        Self {
            kind: FilterKind::Summer,
            contrast: enhance::DEFAULT_CONTRAST,
            brightness: enhance::DEFAULT_BRIGHTNESS,
            blur_sigma: enhance::DEFAULT_BLUR_SIGMA,
        }
    }
}

impl FilterParams {
    pub fn filter(&self) -> Box<dyn Filter> {
        match self.kind {
            FilterKind::Grayscale => Box::new(Grayscale),
            FilterKind::PencilSketch => Box::new(PencilSketch),
            FilterKind::Sepia => Box::new(Sepia),
            FilterKind::Invert => Box::new(Invert),
            FilterKind::Summer => Box::new(SeasonalMode::WarmShift),
            FilterKind::Winter => Box::new(SeasonalMode::CoolShift),
            FilterKind::Contrast => Box::new(Contrast {
                factor: self.contrast,
            }),
            FilterKind::Brightness => Box::new(Brightness {
                factor: self.brightness,
            }),
            FilterKind::Blur => Box::new(Blur {
                sigma: self.blur_sigma,
            }),
            FilterKind::CannyEdges => Box::new(CannyEdges),
        }
    }
}

/// Run the selected filter on an RGB image.
pub fn apply(image: &RgbImage, params: &FilterParams) -> FilterResult<RgbImage> {
    let start = web_time::Instant::now();
    let out = params.filter().apply(image)?;
    log::debug!(
        "{} on {}x{} took {:.1}ms",
        params.kind.name(),
        image.width(),
        image.height(),
        start.elapsed().as_secs_f64() * 1000.0
    );
    Ok(out)
}

/// Convert `source` to 8-bit RGB (alpha is dropped) and run the selected filter.
/// Returns the result as (width, height, rgb_bytes).
pub fn process(
    source: &DynamicImage,
    params: &FilterParams,
) -> FilterResult<(usize, usize, Vec<u8>)> {
    let rgb = source.to_rgb8();
    let out = apply(&rgb, params)?;
    let (w, h) = out.dimensions();
    Ok((w as usize, h as usize, out.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FilterError;
    use image::{Rgb, Rgba, RgbaImage};

    fn sample() -> RgbImage {
        RgbImage::from_fn(12, 10, |x, y| Rgb([x as u8 * 20, y as u8 * 25, 128]))
    }

    #[test]
    fn test_every_filter_keeps_dimensions() {
        let img = sample();
        for &kind in FilterKind::ALL {
            let params = FilterParams {
                kind,
                ..Default::default()
            };
            let out = apply(&img, &params).unwrap();
            assert_eq!(out.dimensions(), img.dimensions(), "{}", kind.name());
        }
    }

    #[test]
    fn test_process_returns_packed_rgb() {
        let rgba = RgbaImage::from_pixel(3, 2, Rgba([255, 255, 255, 10]));
        let source = DynamicImage::ImageRgba8(rgba);
        let (w, h, bytes) = process(&source, &FilterParams::default()).unwrap();
        assert_eq!((w, h), (3, 2));
        assert_eq!(bytes.len(), w * h * 3);
        // summer on white: red keeps 255, blue drops to 254
        assert_eq!(&bytes[..3], &[255, 255, 254]);
    }

    #[test]
    fn test_seasonal_kinds_map_to_modes() {
        assert_eq!(FilterKind::Summer.seasonal_mode(), Some(SeasonalMode::WarmShift));
        assert_eq!(FilterKind::Winter.seasonal_mode(), Some(SeasonalMode::CoolShift));
        assert_eq!(FilterKind::Sepia.seasonal_mode(), None);
    }

    #[test]
    fn test_adjustable_filters_validate_params() {
        let params = FilterParams {
            kind: FilterKind::Brightness,
            brightness: 10.0,
            ..Default::default()
        };
        let err = apply(&sample(), &params).unwrap_err();
        assert!(matches!(err, FilterError::InvalidParameter(_)));
    }

    #[test]
    fn test_empty_source_is_rejected() {
        let source = DynamicImage::new_rgb8(0, 0);
        for &kind in FilterKind::ALL {
            let params = FilterParams {
                kind,
                ..Default::default()
            };
            assert!(process(&source, &params).is_err(), "{}", kind.name());
        }
    }
}
