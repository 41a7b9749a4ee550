//! Decoded image data in CPU-friendly format.

use crate::codec::CodecError;

const RGBA8_BYTES_PER_PIXEL: usize = 4;

/// Immutable RGBA8 image, rows top to bottom.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageAsset {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl ImageAsset {
    /// Wrap an RGBA8 buffer, checking that its size matches the dimensions.
    pub fn new_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Result<Self, CodecError> {
        let expected = width as usize * height as usize * RGBA8_BYTES_PER_PIXEL;
        if pixels.len() != expected {
            return Err(CodecError::new(format!(
                "pixel buffer has {} bytes, expected {} for {}x{} RGBA8",
                pixels.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
