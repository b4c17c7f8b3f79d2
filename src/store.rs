//! On-disk persistence for the notes scratchpad.
//!
//! A single JSON document in the user's data directory. Saves replace
//! the whole file; there is no merging.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from loading or saving notes.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("notes file {path} is corrupt: {source}")]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// One saved note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    pub title: String,
    pub content: String,
    pub saved_at: DateTime<Local>,
}

impl NoteRecord {
    #[must_use]
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            saved_at: Local::now(),
        }
    }
}

/// Load notes from `path`. A missing file is an empty list, not an
/// error.
///
/// # Errors
///
/// Returns `StoreError` on unreadable or corrupt files.
pub fn load_notes(path: &Path) -> Result<Vec<NoteRecord>, StoreError> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(source) => {
            return Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };
    serde_json::from_str(&text).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })
}

/// Write the full note list to `path`, creating parent directories as
/// needed.
///
/// # Errors
///
/// Returns `StoreError::Io` on any filesystem failure.
pub fn save_notes(path: &Path, notes: &[NoteRecord]) -> Result<(), StoreError> {
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(io_err)?;
    }
    let text = serde_json::to_string_pretty(notes).map_err(|source| StoreError::Corrupt {
        path: path.to_path_buf(),
        source,
    })?;
    std::fs::write(path, text).map_err(io_err)
}
