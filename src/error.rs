//! Unified error type for apple-draw.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while producing the apple image.
#[derive(Debug, Error)]
pub enum DrawError {
    /// The output directory could not be created.
    #[error("Cannot create output directory {}: {source}", .path.display())]
    OutputDir {
        /// Directory that was requested.
        path: PathBuf,
        /// Underlying filesystem error.
        source: std::io::Error,
    },

    /// The canvas could not be encoded or written.
    #[error("Failed to save {}: {source}", .path.display())]
    Encode {
        /// Destination file.
        path: PathBuf,
        /// Underlying encoder error.
        source: image::ImageError,
    },
}
