//! Output directory handling and PNG encoding.

use std::path::{Path, PathBuf};

use crate::canvas::Canvas;
use crate::error::DrawError;

/// Directory the image is written into, relative to the working directory.
pub const OUTPUT_DIR: &str = "apples";

/// File name of the image inside [`OUTPUT_DIR`].
pub const OUTPUT_FILE: &str = "apple.png";

/// Create `dir` (and any parents) unless it already exists.
///
/// # Errors
///
/// Returns an error if the directory cannot be created, including when a
/// non-directory already occupies the path.
pub fn ensure_output_dir(dir: &Path) -> Result<(), DrawError> {
    std::fs::create_dir_all(dir)
        .map_err(|source| DrawError::OutputDir { path: dir.to_path_buf(), source })
}

/// Path of the image file inside `dir`.
#[must_use]
pub fn output_path(dir: &Path) -> PathBuf {
    dir.join(OUTPUT_FILE)
}

/// Encode the canvas as PNG and write it to `path`, replacing any existing file.
///
/// # Errors
///
/// Returns an error if encoding fails or the file cannot be written.
pub fn save_png(canvas: &Canvas, path: &Path) -> Result<(), DrawError> {
    canvas
        .as_image()
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|source| DrawError::Encode { path: path.to_path_buf(), source })
}
