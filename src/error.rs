pub type FilterResult<T> = Result<T, FilterError>;

#[derive(thiserror::Error, Debug)]
pub enum FilterError {
    #[error("Invalid mode: {0}")]
    InvalidMode(String),
    #[error("Invalid image: {0}")]
    InvalidImage(String),
    #[error("Invalid curve: {0}")]
    InvalidCurve(String),
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Reject images with no pixels.
pub(crate) fn ensure_non_empty(width: u32, height: u32) -> FilterResult<()> {
    if width == 0 || height == 0 {
        return Err(FilterError::InvalidImage(format!(
            "image has no pixels ({width}x{height})"
        )));
    }
    Ok(())
}
