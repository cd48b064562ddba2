//! Summer/winter color grading.
//!
//! Two of the three planes go through a tone curve: the warm shift lifts red
//! and pulls blue down, the cool shift does the opposite. Green is never
//! touched.

use std::str::FromStr;

use image::RgbImage;

use super::Filter;
use super::channel::{self, Channel};
use crate::curve::{BOOST, CUT, ControlCurve};
use crate::error::{FilterError, FilterResult, ensure_non_empty};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeasonalMode {
    WarmShift,
    CoolShift,
}

impl SeasonalMode {
    pub const ALL: &[SeasonalMode] = &[SeasonalMode::WarmShift, SeasonalMode::CoolShift];

    pub fn name(self) -> &'static str {
        match self {
            SeasonalMode::WarmShift => "warm-shift",
            SeasonalMode::CoolShift => "cool-shift",
        }
    }

    /// Which curve each remapped channel goes through.
    pub fn assignments(self) -> [(Channel, ControlCurve); 2] {
        match self {
            SeasonalMode::WarmShift => [(Channel::Red, BOOST), (Channel::Blue, CUT)],
            SeasonalMode::CoolShift => [(Channel::Red, CUT), (Channel::Blue, BOOST)],
        }
    }
}

impl FromStr for SeasonalMode {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "warm-shift" | "warm" | "summer" => Ok(SeasonalMode::WarmShift),
            "cool-shift" | "cool" | "winter" => Ok(SeasonalMode::CoolShift),
            other => Err(FilterError::InvalidMode(format!(
                "unknown seasonal mode '{other}', expected warm-shift or cool-shift"
            ))),
        }
    }
}

/// Recolor `image` through the curves selected by `mode`.
pub fn apply(image: &RgbImage, mode: SeasonalMode) -> FilterResult<RgbImage> {
    ensure_non_empty(image.width(), image.height())?;

    let mut planes = channel::split(image);
    for (ch, curve) in mode.assignments() {
        let table = curve.table()?;
        planes[ch.index()] = table.apply_plane(&planes[ch.index()]);
    }
    channel::merge(planes)
}

impl Filter for SeasonalMode {
    fn apply(&self, image: &RgbImage) -> FilterResult<RgbImage> {
        apply(image, *self)
    }
}
