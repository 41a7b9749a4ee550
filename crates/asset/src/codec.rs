//! Image decode capability.

use thiserror::Error;

use crate::image_asset::ImageAsset;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct CodecError {
    reason: String,
}

impl CodecError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Turns encoded bytes into an RGBA8 [`ImageAsset`].
pub trait ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<ImageAsset, CodecError>;
}

/// Default codec backed by the `image` crate (PNG and JPEG).
#[derive(Clone, Copy, Debug, Default)]
pub struct ImageCrateCodec;

impl ImageCodec for ImageCrateCodec {
    fn decode(&self, bytes: &[u8]) -> Result<ImageAsset, CodecError> {
        if bytes.is_empty() {
            return Err(CodecError::new("empty input"));
        }

        let img = image::load_from_memory(bytes).map_err(|e| CodecError::new(e.to_string()))?;
        let rgba = img.to_rgba8();
        let (width, height) = rgba.dimensions();
        ImageAsset::new_rgba8(width, height, rgba.into_raw())
    }
}
