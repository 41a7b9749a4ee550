//! Core shared types and errors for runtime asset loading.

use std::path::{Path, PathBuf};

use thiserror::Error;

/// Whether a missing file should be surfaced to the user.
/// The loader only carries this along; callers act on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MissingFileReport {
    Error,
    Silent,
}

impl MissingFileReport {
    #[inline]
    pub fn from_flag(missing_file_is_error: bool) -> Self {
        if missing_file_is_error {
            Self::Error
        } else {
            Self::Silent
        }
    }

    #[inline]
    pub fn is_error(self) -> bool {
        matches!(self, Self::Error)
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    /// Resolved path does not reference an existing file.
    #[error("File does not exist: [{}]", .path.display())]
    NotFound {
        path: PathBuf,
        report: MissingFileReport,
    },

    /// File was read but its contents could not be decoded.
    #[error("Failed to load data at [{}] (but file exists): {}", .path.display(), .reason)]
    DecodeFailed { path: PathBuf, reason: String },
}

impl LoadError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_decode_failed(&self) -> bool {
        matches!(self, Self::DecodeFailed { .. })
    }

    /// Path the loader attempted.
    pub fn path(&self) -> &Path {
        match self {
            Self::NotFound { path, .. } | Self::DecodeFailed { path, .. } => path,
        }
    }
}

pub type LoadResult<T> = Result<T, LoadError>;
