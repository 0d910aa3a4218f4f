use image::codecs::png::PngEncoder;
use image::error::{ImageError, ParameterError, ParameterErrorKind};
use image::{ExtendedColorType, ImageEncoder};
use sha2::{Digest, Sha256};

use crate::error::SnapshotError;
use crate::payload::{ImageData, Payload};

/// Value used solely to decide payload equality for deduplication.
///
/// Text compares by exact value (case-sensitive, no normalization). Images
/// compare by a SHA-256 digest over a canonical lossless encoding, so two
/// logically identical images with different in-memory layouts still match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdentityKey {
    Text(String),
    Image(String),
}

/// Compute the identity key for a payload. Pure function of payload content.
pub fn identity_of(payload: &Payload) -> Result<IdentityKey, SnapshotError> {
    match payload {
        Payload::Text(s) => Ok(IdentityKey::Text(s.clone())),
        Payload::Image(img) => Ok(IdentityKey::Image(image_digest(img)?)),
    }
}

fn image_digest(img: &ImageData) -> Result<String, SnapshotError> {
    let png = encode_canonical_png(img)?;
    let mut hasher = Sha256::new();
    hasher.update(&png);
    Ok(format!("{:x}", hasher.finalize()))
}

/// Re-encode the pixel buffer to PNG, the single canonical encoding used for
/// hashing. Hashing the encoded bytes instead of the raw buffer keeps the
/// digest independent of stride, padding, and source format.
fn encode_canonical_png(img: &ImageData) -> Result<Vec<u8>, SnapshotError> {
    if img.width == 0 || img.height == 0 {
        return Err(SnapshotError::InvalidImageDimensions {
            width: img.width,
            height: img.height,
        });
    }

    // write_image asserts on length mismatch; turn it into a recoverable error
    let expected = img.width as u64 * img.height as u64 * 4;
    if img.pixels.len() as u64 != expected {
        return Err(SnapshotError::EncodingFailure(ImageError::Parameter(
            ParameterError::from_kind(ParameterErrorKind::DimensionMismatch),
        )));
    }

    let mut buf = Vec::new();
    PngEncoder::new(&mut buf).write_image(
        &img.pixels,
        img.width,
        img.height,
        ExtendedColorType::Rgba8,
    )?;
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checker(width: u32, height: u32) -> ImageData {
        let mut pixels = Vec::with_capacity((width * height * 4) as usize);
        for y in 0..height {
            for x in 0..width {
                let v = if (x + y) % 2 == 0 { 255 } else { 0 };
                pixels.extend_from_slice(&[v, v, v, 255]);
            }
        }
        ImageData::new(width, height, pixels)
    }

    #[test]
    fn text_identity_is_the_exact_value() {
        let key = identity_of(&Payload::Text("Hello".into())).unwrap();
        assert_eq!(key, IdentityKey::Text("Hello".into()));
        // case-sensitive
        let other = identity_of(&Payload::Text("hello".into())).unwrap();
        assert_ne!(key, other);
    }

    #[test]
    fn identical_pixels_in_distinct_buffers_match() {
        let a = Payload::Image(checker(8, 8));
        let b = Payload::Image(checker(8, 8));
        assert_eq!(identity_of(&a).unwrap(), identity_of(&b).unwrap());
    }

    #[test]
    fn different_pixels_do_not_match() {
        let a = identity_of(&Payload::Image(checker(8, 8))).unwrap();
        let mut flipped = checker(8, 8);
        flipped.pixels[0] = 128;
        let b = identity_of(&Payload::Image(flipped)).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn text_and_image_identities_never_collide() {
        let digest = match identity_of(&Payload::Image(checker(2, 2))).unwrap() {
            IdentityKey::Image(d) => d,
            other => panic!("expected image identity, got {other:?}"),
        };
        // a text payload that happens to equal the digest string is still text
        let text_key = identity_of(&Payload::Text(digest.clone())).unwrap();
        assert_ne!(text_key, IdentityKey::Image(digest));
    }

    #[test]
    fn zero_sized_image_is_rejected() {
        let img = ImageData::new(4, 0, Vec::new());
        let err = identity_of(&Payload::Image(img)).unwrap_err();
        assert!(matches!(
            err,
            SnapshotError::InvalidImageDimensions {
                width: 4,
                height: 0
            }
        ));
    }

    #[test]
    fn buffer_not_matching_dimensions_is_an_encoding_failure() {
        let img = ImageData::new(4, 4, vec![0u8; 7]);
        let err = identity_of(&Payload::Image(img)).unwrap_err();
        assert!(matches!(err, SnapshotError::EncodingFailure(_)));
    }
}
