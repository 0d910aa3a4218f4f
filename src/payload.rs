/// Raw RGBA8 pixel buffer with explicit dimensions.
///
/// Pixels are row-major with no stride padding; `pixels.len()` must equal
/// `width * height * 4`. Buffers that violate this are caught when the image
/// is encoded or resized, not at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl ImageData {
    pub fn new(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        Self {
            width,
            height,
            pixels,
        }
    }

    pub(crate) fn to_rgba(&self) -> Option<image::RgbaImage> {
        image::RgbaImage::from_raw(self.width, self.height, self.pixels.clone())
    }

    pub(crate) fn from_rgba(img: image::RgbaImage) -> Self {
        let (width, height) = img.dimensions();
        Self {
            width,
            height,
            pixels: img.into_raw(),
        }
    }
}

/// Content captured from the clipboard at one observation: text or image,
/// never both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Text(String),
    Image(ImageData),
}

impl Payload {
    pub fn is_text(&self) -> bool {
        matches!(self, Payload::Text(_))
    }

    pub fn is_image(&self) -> bool {
        matches!(self, Payload::Image(_))
    }

    /// Short display string for list rendering.
    pub fn title(&self) -> String {
        match self {
            Payload::Text(s) => s.chars().take(40).collect(),
            Payload::Image(img) => format!("[image {}x{}]", img.width, img.height),
        }
    }
}
