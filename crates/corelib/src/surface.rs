//! Surfaces a sprite can be shown on: a world-space sprite renderer or a
//! UI image. The caller picks one; both share the [`DisplaySurface`] API.

use crate::{Color, Sprite, Vec2};

/// How the surface is sized after a sprite is applied.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScaleMode {
    /// Keep the loaded image's pixel size.
    #[default]
    ScaleToLoadedImage,
    /// Match the size configured on the surface.
    ScaleToSprite,
}

pub trait DisplaySurface {
    fn set_sprite(&mut self, sprite: Sprite);
    fn set_color(&mut self, color: Color);
    /// Resize according to `mode`. No-op without a sprite.
    fn apply_scale(&mut self, mode: ScaleMode);

    fn sprite(&self) -> Option<&Sprite>;
    fn color(&self) -> Color;
}

/// Sprite size in units of `pixels_per_unit`, `None` for degenerate sprites.
fn unit_size(sprite: &Sprite) -> Option<Vec2> {
    let size = sprite.rect_size();
    if size.x <= 0.0 || size.y <= 0.0 || sprite.pixels_per_unit <= 0.0 {
        return None;
    }
    Some(size / sprite.pixels_per_unit)
}

/// World-space sprite. Renders at image size unless scaled down to one unit.
#[derive(Clone, Debug)]
pub struct SpriteRendererSurface {
    pub sprite: Option<Sprite>,
    pub color: Color,
    pub local_scale: Vec2,
}

impl SpriteRendererSurface {
    pub fn new() -> Self {
        Self::with_color(Color::WHITE)
    }

    pub fn with_color(color: Color) -> Self {
        Self {
            sprite: None,
            color,
            local_scale: Vec2::ONE,
        }
    }
}

impl Default for SpriteRendererSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl DisplaySurface for SpriteRendererSurface {
    fn set_sprite(&mut self, sprite: Sprite) {
        self.sprite = Some(sprite);
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn apply_scale(&mut self, mode: ScaleMode) {
        if mode != ScaleMode::ScaleToSprite {
            return;
        }
        if let Some(size) = self.sprite.as_ref().and_then(unit_size) {
            self.local_scale = Vec2::ONE / size;
        }
    }

    fn sprite(&self) -> Option<&Sprite> {
        self.sprite.as_ref()
    }

    fn color(&self) -> Color {
        self.color
    }
}

/// UI image with a layout size. Keeps its configured size unless grown to
/// the loaded image.
#[derive(Clone, Debug)]
pub struct UiImageSurface {
    pub sprite: Option<Sprite>,
    pub color: Color,
    pub size_delta: Vec2,
}

impl UiImageSurface {
    pub fn new(size_delta: Vec2) -> Self {
        Self {
            sprite: None,
            color: Color::WHITE,
            size_delta,
        }
    }
}

impl Default for UiImageSurface {
    fn default() -> Self {
        Self::new(Vec2::splat(100.0))
    }
}

impl DisplaySurface for UiImageSurface {
    fn set_sprite(&mut self, sprite: Sprite) {
        self.sprite = Some(sprite);
    }

    fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    fn apply_scale(&mut self, mode: ScaleMode) {
        if mode != ScaleMode::ScaleToLoadedImage {
            return;
        }
        if let Some(size) = self.sprite.as_ref().and_then(unit_size) {
            self.size_delta *= size;
        }
    }

    fn sprite(&self) -> Option<&Sprite> {
        self.sprite.as_ref()
    }

    fn color(&self) -> Color {
        self.color
    }
}
