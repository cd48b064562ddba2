use image::GrayImage;

/// One entry per 8-bit level.
pub const TABLE_SIZE: usize = 256;

/// Sampled tone curve, read by integer index.
#[derive(Debug, Clone, PartialEq)]
pub struct LookupTable {
    entries: [f64; TABLE_SIZE],
}

impl LookupTable {
    pub fn from_entries(entries: [f64; TABLE_SIZE]) -> Self {
        Self { entries }
    }

    /// Raw curve value at `level`.
    pub fn get(&self, level: usize) -> f64 {
        self.entries[level]
    }

    pub fn entries(&self) -> &[f64; TABLE_SIZE] {
        &self.entries
    }

    /// Remap one 8-bit value. The entry is truncated toward zero; values
    /// outside 0..=255 saturate.
    pub fn map(&self, level: u8) -> u8 {
        self.entries[level as usize] as u8
    }

    /// Remap every sample of a single-channel plane.
    pub fn apply_plane(&self, plane: &GrayImage) -> GrayImage {
        let bytes: [u8; TABLE_SIZE] = std::array::from_fn(|i| self.entries[i] as u8);
        let mut out = plane.clone();
        for pixel in out.pixels_mut() {
            pixel[0] = bytes[pixel[0] as usize];
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Luma;

    #[test]
    fn test_map_truncates_and_saturates() {
        let mut entries = [0.0f64; TABLE_SIZE];
        entries[1] = 1.99;
        entries[2] = -4.0;
        entries[3] = 300.0;
        let table = LookupTable::from_entries(entries);
        assert_eq!(table.map(1), 1);
        assert_eq!(table.map(2), 0);
        assert_eq!(table.map(3), 255);
    }

    #[test]
    fn test_apply_plane_matches_map() {
        let mut entries = [0.0f64; TABLE_SIZE];
        for (i, e) in entries.iter_mut().enumerate() {
            *e = (255 - i) as f64 + 0.5;
        }
        let table = LookupTable::from_entries(entries);
        let plane = GrayImage::from_fn(4, 3, |x, y| Luma([(x * 40 + y * 7) as u8]));

        let out = table.apply_plane(&plane);
        assert_eq!(out.dimensions(), plane.dimensions());
        for (src, dst) in plane.pixels().zip(out.pixels()) {
            assert_eq!(dst[0], table.map(src[0]));
            assert_eq!(dst[0], 255 - src[0]);
        }
    }
}
