//! Component that loads an image at startup and applies it to a sprite
//! renderer or UI image. Paths are relative to a base directory (normally
//! the data directory) unless the loader is built with
//! [`SpriteLoader::absolute`].

use std::path::{Path, PathBuf};

use asset::{
    AssetImageLoader, ImageAsset, ImageCodec, ImageCrateCodec, LoadError, LoadRequest,
    RequestError,
};
use corelib::{Color, DisplaySurface, ScaleMode, Sprite};

/// Per-component settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SpriteLoaderConfig {
    /// Image path, relative to the base directory if there is one.
    pub relative_file_path: String,
    pub scale_mode: ScaleMode,
    /// Log a missing file as an error. Turn off while image files are not
    /// shipped yet.
    pub missing_file_is_error: bool,
    /// Reset the surface tint to white after applying the image.
    pub clear_color_after_load: bool,
}

impl Default for SpriteLoaderConfig {
    fn default() -> Self {
        Self {
            relative_file_path: String::new(),
            scale_mode: ScaleMode::ScaleToLoadedImage,
            missing_file_is_error: true,
            clear_color_after_load: true,
        }
    }
}

/// Log level for a failed load. A missing file is only an error when the
/// request asked for it; undecodable data always is.
pub fn severity(err: &LoadError) -> log::Level {
    match err {
        LoadError::NotFound { report, .. } if report.is_error() => log::Level::Error,
        LoadError::NotFound { .. } => log::Level::Debug,
        LoadError::DecodeFailed { .. } => log::Level::Error,
    }
}

pub struct SpriteLoader<C = ImageCrateCodec> {
    name: String,
    config: SpriteLoaderConfig,
    base_dir: Option<PathBuf>,
    loader: AssetImageLoader<C>,
}

impl SpriteLoader<ImageCrateCodec> {
    pub fn new(name: impl Into<String>, config: SpriteLoaderConfig, base_dir: impl Into<PathBuf>) -> Self {
        Self::with_loader(name, config, Some(base_dir.into()), AssetImageLoader::new())
    }

    /// Use `relative_file_path` verbatim.
    pub fn absolute(name: impl Into<String>, config: SpriteLoaderConfig) -> Self {
        Self::with_loader(name, config, None, AssetImageLoader::new())
    }
}

impl<C: ImageCodec> SpriteLoader<C> {
    pub fn with_loader(
        name: impl Into<String>,
        config: SpriteLoaderConfig,
        base_dir: Option<PathBuf>,
        loader: AssetImageLoader<C>,
    ) -> Self {
        Self {
            name: name.into(),
            config,
            base_dir,
            loader,
        }
    }

    pub fn base_dir(&self) -> Option<&Path> {
        self.base_dir.as_deref()
    }

    fn request(&self) -> Result<LoadRequest, RequestError> {
        let path = self.config.relative_file_path.as_str();
        let request = match &self.base_dir {
            Some(base) => LoadRequest::relative(base, path)?,
            None => LoadRequest::absolute(path),
        };
        Ok(request.missing_file_is_error(self.config.missing_file_is_error))
    }

    /// Load the configured file, logging failures at [`severity`].
    /// Returns `None` when nothing should be applied.
    pub fn load_image(&self) -> Option<ImageAsset> {
        let request = match self.request() {
            Ok(request) => request,
            Err(e) => {
                log::error!("Sprite loader for {} misconfigured: {}", self.name, e);
                return None;
            }
        };

        match self.loader.load(&request) {
            Ok(image) => {
                log::info!(
                    "Loaded image for {} ({}x{})",
                    self.name,
                    image.width(),
                    image.height()
                );
                Some(image)
            }
            Err(e) => {
                log::log!(severity(&e), "{} ({})", e, self.name);
                None
            }
        }
    }

    /// Load and apply to `surface`. Returns whether a sprite was applied.
    pub fn apply<S: DisplaySurface + ?Sized>(&self, surface: &mut S) -> bool {
        let Some(image) = self.load_image() else {
            return false;
        };

        surface.set_sprite(Sprite::from_image(image));
        if self.config.clear_color_after_load {
            surface.set_color(Color::WHITE);
        }
        surface.apply_scale(self.config.scale_mode);
        true
    }
}
