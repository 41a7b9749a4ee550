//! Load requests and path resolution.

use std::path::{Component, Path, PathBuf};

use spriteload_core::MissingFileReport;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum RequestError {
    #[error("relative request needs a non-empty base directory")]
    EmptyBaseDirectory,
}

/// How a request's path is interpreted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum PathMode {
    #[default]
    Absolute,
    /// Path is joined onto a non-empty `base`.
    RelativeToBase { base: PathBuf },
}

/// Per-invocation load parameters.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoadRequest {
    path: PathBuf,
    path_mode: PathMode,
    missing_file_is_error: bool,
}

impl LoadRequest {
    /// Request for a path used verbatim.
    pub fn absolute(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            path_mode: PathMode::Absolute,
            missing_file_is_error: true,
        }
    }

    /// Request for a path under `base_directory`.
    pub fn relative(
        base_directory: impl Into<PathBuf>,
        path: impl Into<PathBuf>,
    ) -> Result<Self, RequestError> {
        let base = base_directory.into();
        if base.as_os_str().is_empty() {
            return Err(RequestError::EmptyBaseDirectory);
        }
        Ok(Self {
            path: path.into(),
            path_mode: PathMode::RelativeToBase { base },
            missing_file_is_error: true,
        })
    }

    pub fn missing_file_is_error(mut self, value: bool) -> Self {
        self.missing_file_is_error = value;
        self
    }

    #[inline]
    pub fn missing_file_report(&self) -> MissingFileReport {
        MissingFileReport::from_flag(self.missing_file_is_error)
    }

    /// Resolve to the path the loader will open.
    pub fn resolve(&self) -> PathBuf {
        match &self.path_mode {
            PathMode::Absolute => self.path.clone(),
            PathMode::RelativeToBase { base } => join_normalized(base, &self.path),
        }
    }
}

/// Join on path components so separator runs collapse and a root or prefix
/// on `path` cannot replace `base`. Prefixes on `base` (UNC, drive) survive.
fn join_normalized(base: &Path, path: &Path) -> PathBuf {
    let mut out: PathBuf = base.components().collect();
    for component in path.components() {
        match component {
            Component::Normal(_) | Component::ParentDir => out.push(component),
            Component::Prefix(_) | Component::RootDir | Component::CurDir => {}
        }
    }
    out
}
