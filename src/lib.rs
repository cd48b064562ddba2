//! Image Convertor - library crate.
//!
//! Provides the filter set (seasonal color curves, sepia, sketch, tone and
//! enhancement adjustments) and image I/O used by the desktop/web app.

pub mod curve;
pub mod error;
pub mod filter;
pub mod image_io;
pub mod pipeline;

pub use error::{FilterError, FilterResult};
