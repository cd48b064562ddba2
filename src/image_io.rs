use std::io::Cursor;
use std::path::Path;

use image::{DynamicImage, GenericImageView, ImageFormat, RgbImage};

use crate::error::{FilterError, FilterResult};

pub fn load_image(path: &Path) -> FilterResult<DynamicImage> {
    let img = image::open(path)?;
    log::info!("Loaded {} ({}x{})", path.display(), img.width(), img.height());
    Ok(img)
}

/// Decode an in-memory file (format guessed from its header).
pub fn decode_image(bytes: &[u8]) -> FilterResult<DynamicImage> {
    let img = image::load_from_memory(bytes)?;
    log::info!("Decoded {} bytes ({}x{})", bytes.len(), img.width(), img.height());
    Ok(img)
}

/// Downscale to fit within `max_w` x `max_h`, preserving aspect ratio.
/// Images that already fit are returned unchanged.
pub fn fit_within(img: &DynamicImage, max_w: u32, max_h: u32) -> DynamicImage {
    let (iw, ih) = img.dimensions();
    if iw <= max_w && ih <= max_h {
        return img.clone();
    }
    let scale = f64::min(max_w as f64 / iw as f64, max_h as f64 / ih as f64);
    let new_w = ((iw as f64 * scale).round() as u32).max(1);
    let new_h = ((ih as f64 * scale).round() as u32).max(1);
    img.resize_exact(new_w, new_h, image::imageops::FilterType::Lanczos3)
}

/// Wrap tightly packed RGB bytes. The buffer length must be exactly `w * h * 3`.
pub fn rgb_from_raw(width: usize, height: usize, bytes: Vec<u8>) -> FilterResult<RgbImage> {
    let expected = width * height * 3;
    if bytes.len() != expected {
        return Err(FilterError::InvalidImage(format!(
            "expected {expected} bytes for {width}x{height} RGB, got {}",
            bytes.len()
        )));
    }
    let w = u32::try_from(width)
        .map_err(|_| FilterError::InvalidImage(format!("width {width} too large")))?;
    let h = u32::try_from(height)
        .map_err(|_| FilterError::InvalidImage(format!("height {height} too large")))?;
    RgbImage::from_raw(w, h, bytes)
        .ok_or_else(|| FilterError::InvalidImage(format!("bad buffer for {width}x{height}")))
}

pub fn save_image(img: &RgbImage, path: &Path) -> FilterResult<()> {
    img.save(path)?;
    log::info!("Saved {}", path.display());
    Ok(())
}

pub fn encode_png(img: &RgbImage) -> FilterResult<Vec<u8>> {
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, ImageFormat::Png)?;
    Ok(out.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgb;

    #[test]
    fn test_fit_within_downscales_preserving_aspect() {
        let img = DynamicImage::new_rgb8(400, 200);
        let fitted = fit_within(&img, 100, 100);
        assert_eq!(fitted.dimensions(), (100, 50));
    }

    #[test]
    fn test_fit_within_never_upscales() {
        let img = DynamicImage::new_rgb8(40, 20);
        assert_eq!(fit_within(&img, 100, 100).dimensions(), (40, 20));
    }

    #[test]
    fn test_rgb_from_raw_checks_length() {
        assert!(rgb_from_raw(2, 2, vec![0; 12]).is_ok());
        assert!(matches!(
            rgb_from_raw(2, 2, vec![0; 11]),
            Err(FilterError::InvalidImage(_))
        ));
        assert!(matches!(
            rgb_from_raw(2, 2, vec![0; 13]),
            Err(FilterError::InvalidImage(_))
        ));
    }

    #[test]
    fn test_png_encode_decode() {
        let img = RgbImage::from_fn(3, 3, |x, y| Rgb([x as u8 * 80, y as u8 * 80, 7]));
        let png = encode_png(&img).unwrap();
        let decoded = decode_image(&png).unwrap().to_rgb8();
        assert_eq!(decoded, img);
    }

    #[test]
    fn test_decode_garbage_fails() {
        assert!(matches!(
            decode_image(b"not an image"),
            Err(FilterError::Image(_))
        ));
    }
}
