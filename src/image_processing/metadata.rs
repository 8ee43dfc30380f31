use image::ImageReader;
use serde::Serialize;
use std::path::Path;

use super::orientation::{read_exif_orientation, ExifOrientation};
use crate::error::JobError;

/// Read-only facts about a source image, read fresh for every job
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SourceMetadata {
    pub width: u32,
    pub height: u32,
    /// Orientation tag found in the source; never carried to the output
    #[serde(skip)]
    pub orientation: Option<ExifOrientation>,
}

/// Read dimensions from the image header without decoding pixels
///
/// The container is sniffed from content, so a mislabeled file still works
/// and a corrupt one fails here with a decode error.
pub fn read_source_metadata(image_path: &Path) -> Result<SourceMetadata, JobError> {
    let reader = ImageReader::open(image_path)
        .map_err(|e| JobError::Decode(image::ImageError::IoError(e)))?
        .with_guessed_format()
        .map_err(|e| JobError::Decode(image::ImageError::IoError(e)))?;
    let (width, height) = reader.into_dimensions().map_err(JobError::Decode)?;

    let orientation = read_exif_orientation(image_path);

    Ok(SourceMetadata {
        width,
        height,
        orientation,
    })
}
