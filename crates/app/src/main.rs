//! Entry point: load an image from disk and apply it to a display surface.
//! Flags: --path=, --base=, --absolute, --surface=, --scale-mode=,
//! --missing-is-error=, --clear-color=, --show-paths, --app-name=

use std::path::PathBuf;

use anyhow::{Context, Result};
use corelib::{DisplaySurface, ScaleMode, SpriteRendererSurface, UiImageSurface};
use platform::{HostPaths, PathReportOptions, SpriteLoader, SpriteLoaderConfig};

const DEFAULT_APP_NAME: &str = "SpriteLoad";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SurfaceKind {
    Sprite,
    UiImage,
}

fn value_of<'a>(args: &'a [String], key: &str) -> Option<&'a str> {
    // Last occurrence wins.
    args.iter().rev().find_map(|a| a.strip_prefix(key))
}

fn parse_switch(args: &[String], name: &str, default: bool) -> bool {
    let key = format!("{name}=");
    for arg in args.iter().rev() {
        if arg == name {
            return true;
        }
        if let Some(val) = arg.strip_prefix(&key) {
            return matches!(
                val.to_ascii_lowercase().as_str(),
                "1" | "true" | "on" | "yes"
            );
        }
    }
    default
}

fn parse_surface_arg(args: &[String]) -> SurfaceKind {
    // Accept: --surface=sprite|image
    match value_of(args, "--surface=").map(str::to_ascii_lowercase).as_deref() {
        None | Some("sprite") | Some("renderer") => SurfaceKind::Sprite,
        Some("image") | Some("ui") => SurfaceKind::UiImage,
        Some(other) => {
            log::warn!("Unknown surface '{}', falling back to sprite.", other);
            SurfaceKind::Sprite
        }
    }
}

fn parse_scale_mode_arg(args: &[String]) -> ScaleMode {
    // Accept: --scale-mode=image|sprite
    match value_of(args, "--scale-mode=").map(str::to_ascii_lowercase).as_deref() {
        None | Some("image") | Some("loaded") => ScaleMode::ScaleToLoadedImage,
        Some("sprite") => ScaleMode::ScaleToSprite,
        Some(other) => {
            log::warn!("Unknown scale mode '{}', keeping loaded image size.", other);
            ScaleMode::ScaleToLoadedImage
        }
    }
}

fn parse_config(args: &[String]) -> SpriteLoaderConfig {
    let defaults = SpriteLoaderConfig::default();
    SpriteLoaderConfig {
        relative_file_path: value_of(args, "--path=").unwrap_or("sprite.png").to_owned(),
        scale_mode: parse_scale_mode_arg(args),
        missing_file_is_error: parse_switch(
            args,
            "--missing-is-error",
            defaults.missing_file_is_error,
        ),
        clear_color_after_load: parse_switch(args, "--clear-color", defaults.clear_color_after_load),
    }
}

fn make_surface(kind: SurfaceKind) -> Box<dyn DisplaySurface> {
    match kind {
        SurfaceKind::Sprite => Box::new(SpriteRendererSurface::new()),
        SurfaceKind::UiImage => Box::new(UiImageSurface::default()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let app_name = value_of(&args, "--app-name=").unwrap_or(DEFAULT_APP_NAME);
    let absolute = parse_switch(&args, "--absolute", false);
    let kind = parse_surface_arg(&args);
    let config = parse_config(&args);

    let paths = HostPaths::detect(app_name).context("Failed to detect host paths")?;
    if parse_switch(&args, "--show-paths", false) {
        print!("{}", paths.report(&PathReportOptions::default()));
    }

    log::info!(
        "Loading '{}' (absolute={}, surface={:?}, scale_mode={:?})",
        config.relative_file_path,
        absolute,
        kind,
        config.scale_mode
    );

    let loader = if absolute {
        SpriteLoader::absolute(app_name, config)
    } else {
        let base = value_of(&args, "--base=")
            .map(PathBuf::from)
            .unwrap_or_else(|| paths.data_dir.clone());
        SpriteLoader::new(app_name, config, base)
    };

    let mut surface = make_surface(kind);
    let applied = loader.apply(surface.as_mut());

    match surface.sprite() {
        Some(sprite) if applied => {
            let size = sprite.rect_size();
            log::info!("Applied {}x{} sprite, color={:?}", size.x, size.y, surface.color());
        }
        _ => log::info!("No sprite applied."),
    }

    Ok(())
}
