use image::imageops::{self, FilterType};

use crate::error::SnapshotError;
use crate::payload::ImageData;

/// Preview height used for history entries, in pixels.
pub const DEFAULT_PREVIEW_HEIGHT: u32 = 70;

/// Derive a preview at `target_height`, preserving aspect ratio.
///
/// The target width is `floor(width * target_height / height)`. The source
/// buffer is left untouched; the result is a new owned buffer. Resampling is
/// bilinear, which is deterministic for identical input.
pub fn generate(source: &ImageData, target_height: u32) -> Result<ImageData, SnapshotError> {
    if source.height == 0 || target_height == 0 {
        return Err(SnapshotError::InvalidImageDimensions {
            width: source.width,
            height: source.height,
        });
    }

    let rgba = source
        .to_rgba()
        .ok_or(SnapshotError::InvalidImageDimensions {
            width: source.width,
            height: source.height,
        })?;

    let target_width =
        (source.width as u64 * target_height as u64 / source.height as u64) as u32;
    let resized = imageops::resize(&rgba, target_width, target_height, FilterType::Triangle);
    Ok(ImageData::from_rgba(resized))
}
