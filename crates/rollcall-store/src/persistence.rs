//! Load/save of the history file.
//!
//! Loading never fails: a missing or unreadable file yields an empty state.

use std::path::{Path, PathBuf};

use rollcall_core::errors::StoreError;
use rollcall_core::HistoryState;
use tracing::{debug, warn};

/// Read the history file, falling back to an empty state on any failure.
pub fn load_or_default(path: &Path, capacity: usize) -> HistoryState {
    match try_load(path) {
        Ok(Some(mut state)) => {
            trim_history(&mut state, capacity);
            debug!(
                path = %path.display(),
                entries = state.history.len(),
                candidates = state.name_probabilities.len(),
                "history loaded"
            );
            state
        }
        Ok(None) => {
            debug!(path = %path.display(), "no history file, starting empty");
            HistoryState::new()
        }
        Err(e) => {
            warn!(error = %e, "history unusable, starting empty");
            HistoryState::new()
        }
    }
}

/// Read the history file. `Ok(None)` when it does not exist.
pub fn try_load(path: &Path) -> Result<Option<HistoryState>, StoreError> {
    let content = match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(StoreError::ReadFailed {
                path: path.display().to_string(),
                message: e.to_string(),
            })
        }
    };
    if content.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&content)
        .map(Some)
        .map_err(|e| StoreError::Corrupt {
            path: path.display().to_string(),
            message: e.to_string(),
        })
}

/// Serialize the full state and replace the file.
///
/// Writes a sibling temp file first and renames it over the target so a
/// crash mid-write leaves the previous file intact.
pub fn save(path: &Path, state: &HistoryState) -> Result<(), StoreError> {
    let write_err = |message: String| StoreError::WriteFailed {
        path: path.display().to_string(),
        message,
    };

    let json = serde_json::to_string_pretty(state).map_err(|e| write_err(e.to_string()))?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| write_err(e.to_string()))?;
    }

    let tmp = temp_path(path);
    std::fs::write(&tmp, json).map_err(|e| write_err(e.to_string()))?;
    std::fs::rename(&tmp, path).map_err(|e| {
        let _ = std::fs::remove_file(&tmp);
        write_err(e.to_string())
    })
}

fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}

/// Drop the oldest log entries beyond `capacity`.
pub fn trim_history(state: &mut HistoryState, capacity: usize) {
    if state.history.len() > capacity {
        let excess = state.history.len() - capacity;
        state.history.drain(..excess);
    }
}
