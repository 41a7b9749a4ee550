//! Host-side presentation types: color, sprite and the display surfaces a
//! loaded image can be applied to.

pub use glam::{Vec2, vec2};

pub mod color;
pub mod sprite;
pub mod surface;

pub use color::Color;
pub use sprite::Sprite;
pub use surface::{DisplaySurface, ScaleMode, SpriteRendererSurface, UiImageSurface};
