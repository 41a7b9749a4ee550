//! Platform layer: host paths and the component that puts a runtime-loaded
//! image onto a display surface.
//!
//! - [`paths`] reports the directories the host exposes (cwd, data, ...).
//! - [`sprite_loader`] loads an image relative to the data directory and
//!   applies it, deciding which failures get logged.

pub mod paths;
pub mod sprite_loader;

pub use paths::{HostPaths, PathReportOptions};
pub use sprite_loader::{SpriteLoader, SpriteLoaderConfig};
