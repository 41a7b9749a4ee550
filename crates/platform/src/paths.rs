//! Host-provided directories and a printable report of them.

use std::{
    env,
    fmt::Write as _,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow};
use directories::BaseDirs;

/// Directories an application build can read assets from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HostPaths {
    pub current_dir: PathBuf,
    /// `<exe dir>/<app>_Data`, where end users drop replacement assets.
    pub data_dir: PathBuf,
    /// Per-user writable directory.
    pub persistent_data_dir: PathBuf,
    /// `<data dir>/StreamingAssets`.
    pub streaming_assets_dir: PathBuf,
}

impl HostPaths {
    /// Probe the running process for its directories.
    pub fn detect(app_name: &str) -> Result<Self> {
        let current_dir = env::current_dir().context("Failed to read current directory")?;
        let exe = env::current_exe().context("Failed to locate current executable")?;
        let exe_dir = exe
            .parent()
            .ok_or_else(|| anyhow!("Executable has no parent directory: {}", exe.display()))?;
        let persistent_root = persistent_root()?;

        Ok(Self::from_roots(current_dir, exe_dir, &persistent_root, app_name))
    }

    /// Derive the layout from explicit roots.
    pub fn from_roots(
        current_dir: PathBuf,
        exe_dir: &Path,
        persistent_root: &Path,
        app_name: &str,
    ) -> Self {
        let data_dir = exe_dir.join(format!("{app_name}_Data"));
        let streaming_assets_dir = data_dir.join("StreamingAssets");
        Self {
            current_dir,
            persistent_data_dir: persistent_root.join(app_name),
            data_dir,
            streaming_assets_dir,
        }
    }

    /// One `Label: path` line per enabled entry, newline-terminated.
    pub fn report(&self, options: &PathReportOptions) -> String {
        let entries = [
            (options.show_current_directory, "CWD", &self.current_dir),
            (options.show_data_path, "App Data", &self.data_dir),
            (
                options.show_persistent_data_path,
                "Persistent Data",
                &self.persistent_data_dir,
            ),
            (
                options.show_streaming_assets_path,
                "Streaming Assets",
                &self.streaming_assets_dir,
            ),
        ];

        let mut out = String::new();
        for (enabled, label, path) in entries {
            if enabled {
                // Writing to a String cannot fail.
                let _ = writeln!(out, "{label}: {}", path.display());
            }
        }
        out
    }
}

/// Per-user data root: `~/.local/share`, `~/Library/Application Support`
/// or `%APPDATA%`, depending on the platform.
fn persistent_root() -> Result<PathBuf> {
    let dirs = BaseDirs::new().ok_or_else(|| anyhow!("Failed to resolve user data directory"))?;
    Ok(dirs.data_dir().to_path_buf())
}

/// Which entries [`HostPaths::report`] includes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PathReportOptions {
    pub show_current_directory: bool,
    pub show_data_path: bool,
    pub show_persistent_data_path: bool,
    pub show_streaming_assets_path: bool,
}

impl Default for PathReportOptions {
    fn default() -> Self {
        Self {
            show_current_directory: true,
            show_data_path: true,
            show_persistent_data_path: true,
            show_streaming_assets_path: true,
        }
    }
}
