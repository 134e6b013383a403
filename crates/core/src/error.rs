//! Error types raised by map and image loading.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the viewer core.
///
/// Every variant is recoverable: callers report it and keep their previous
/// map, image and viewport untouched.
#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("map `{stem}` does not exist ({})", path.display())]
    MapNotFound { stem: String, path: PathBuf },

    #[error("failed to load map {}: {source}", path.display())]
    MapParse {
        path: PathBuf,
        #[source]
        source: MapParseError,
    },

    #[error("cannot decode image {}: {source}", path.display())]
    ImageDecode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl ViewerError {
    pub(crate) fn map_parse(path: impl Into<PathBuf>, source: impl Into<MapParseError>) -> Self {
        ViewerError::MapParse {
            path: path.into(),
            source: source.into(),
        }
    }
}

/// Why a map document could not be read, written or accepted.
#[derive(Debug, Error)]
pub enum MapParseError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("map dimensions must be positive, got {width}x{height}")]
    EmptyDimensions { width: usize, height: usize },

    #[error("expected {expected} terrain rows, found {found}")]
    RowCount { expected: usize, found: usize },

    #[error("terrain row {row} has {found} entries, expected {expected}")]
    RowLength {
        row: usize,
        expected: usize,
        found: usize,
    },
}

pub type Result<T> = std::result::Result<T, ViewerError>;
