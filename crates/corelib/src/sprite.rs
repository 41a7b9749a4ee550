//! Sprite built from a loaded image.

use std::sync::Arc;

use asset::ImageAsset;

use crate::{Vec2, vec2};

/// Default pixels per world unit for sprites created at runtime.
pub const DEFAULT_PIXELS_PER_UNIT: f32 = 100.0;

/// Full-image sprite. Cloning shares the pixel data.
#[derive(Clone, Debug, PartialEq)]
pub struct Sprite {
    image: Arc<ImageAsset>,
    /// Normalized pivot, `(0.5, 0.5)` is the center.
    pub pivot: Vec2,
    pub pixels_per_unit: f32,
}

impl Sprite {
    pub fn from_image(image: ImageAsset) -> Self {
        Self {
            image: Arc::new(image),
            pivot: vec2(0.5, 0.5),
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
        }
    }

    #[inline]
    pub fn image(&self) -> &ImageAsset {
        &self.image
    }

    /// Size of the sprite rect in pixels.
    #[inline]
    pub fn rect_size(&self) -> Vec2 {
        vec2(self.image.width() as f32, self.image.height() as f32)
    }
}
