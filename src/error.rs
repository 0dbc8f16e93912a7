//! Custom error types for diffimg.

use std::path::PathBuf;
use thiserror::Error;

use crate::image::Shape;

/// Main error type for the diffimg library.
#[derive(Error, Debug)]
pub enum Error {
    /// Failed to open or decode an image file.
    #[error("failed to load image from {path}: {source}")]
    ImageLoad {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// The two images cannot be compared sample by sample.
    #[error("image shape mismatch: {first} vs {second}")]
    ShapeMismatch { first: Shape, second: Shape },

    /// Decoded pixel buffer does not match the image dimensions.
    #[error("invalid sample layout: {0}")]
    Layout(#[from] ndarray::ShapeError),
}

/// Result type alias for diffimg operations.
pub type Result<T> = std::result::Result<T, Error>;
