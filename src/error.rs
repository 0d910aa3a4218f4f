use thiserror::Error;

/// Payload-level failures during an observe cycle.
///
/// These are recoverable: the detector logs them and treats the offending
/// snapshot as unchanged rather than inserting a malformed entry.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("invalid image dimensions {width}x{height}")]
    InvalidImageDimensions { width: u32, height: u32 },

    #[error("canonical image encoding failed: {0}")]
    EncodingFailure(#[from] image::ImageError),
}
