//! HistoryStore: owns the in-memory state, implements IHistoryStore and
//! persists after every mutation.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Utc;
use rollcall_core::config::StoreConfig;
use rollcall_core::errors::{RollCallResult, StoreError};
use rollcall_core::traits::IHistoryStore;
use rollcall_core::HistoryState;
use tracing::{debug, warn};

use crate::persistence;

/// The history store. One mutex serializes every load/mutate/save cycle.
///
/// The in-memory state is authoritative: when a save fails, the update is
/// kept and the error is remembered in [`HistoryStore::last_persist_error`].
pub struct HistoryStore {
    state: Mutex<HistoryState>,
    /// `None` in in-memory mode (nothing is written).
    path: Option<PathBuf>,
    capacity: usize,
    last_persist_error: Mutex<Option<String>>,
}

impl HistoryStore {
    /// Open a store backed by a JSON file, loading whatever is there.
    pub fn open(path: &Path) -> Self {
        Self::open_with_capacity(path, rollcall_core::constants::HISTORY_LOG_CAPACITY)
    }

    /// Open a file-backed store with a custom history log cap.
    pub fn open_with_capacity(path: &Path, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let state = persistence::load_or_default(path, capacity);
        Self {
            state: Mutex::new(state),
            path: Some(path.to_path_buf()),
            capacity,
            last_persist_error: Mutex::new(None),
        }
    }

    /// Open a store from config.
    pub fn from_config(config: &StoreConfig) -> Self {
        Self::open_with_capacity(Path::new(&config.history_path), config.history_capacity)
    }

    /// Open a store that never touches disk (for testing).
    pub fn open_in_memory() -> Self {
        Self::in_memory_with(HistoryState::new())
    }

    /// In-memory store seeded with an existing state (for testing).
    pub fn in_memory_with(state: HistoryState) -> Self {
        let capacity = rollcall_core::constants::HISTORY_LOG_CAPACITY;
        let mut state = state;
        persistence::trim_history(&mut state, capacity);
        Self {
            state: Mutex::new(state),
            path: None,
            capacity,
            last_persist_error: Mutex::new(None),
        }
    }

    /// Path of the backing file, if any.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Message of the most recent failed save, cleared by the next success.
    pub fn last_persist_error(&self) -> Option<String> {
        self.last_persist_error
            .lock()
            .ok()
            .and_then(|guard| guard.clone())
    }

    /// Reload from disk, replacing the in-memory state.
    pub fn reload(&self) -> RollCallResult<()> {
        if let Some(path) = &self.path {
            let fresh = persistence::load_or_default(path, self.capacity);
            *self.lock_state()? = fresh;
        }
        Ok(())
    }

    fn lock_state(&self) -> Result<std::sync::MutexGuard<'_, HistoryState>, StoreError> {
        self.state.lock().map_err(|e| StoreError::LockPoisoned {
            message: format!("history state lock poisoned: {e}"),
        })
    }

    /// Write the state, recording rather than raising failures.
    fn persist(&self, state: &HistoryState) {
        let Some(path) = &self.path else {
            return;
        };
        let outcome = persistence::save(path, state);
        let message = match outcome {
            Ok(()) => {
                debug!(path = %path.display(), entries = state.history.len(), "history saved");
                None
            }
            Err(e) => {
                warn!(error = %e, "history save failed, keeping in-memory state");
                Some(e.to_string())
            }
        };
        if let Ok(mut slot) = self.last_persist_error.lock() {
            *slot = message;
        }
    }
}

impl IHistoryStore for HistoryStore {
    fn snapshot(&self) -> RollCallResult<HistoryState> {
        Ok(self.lock_state()?.clone())
    }

    fn update(&self, mutation: &mut dyn FnMut(&mut HistoryState)) -> RollCallResult<()> {
        let mut state = self.lock_state()?;
        mutation(&mut state);
        persistence::trim_history(&mut state, self.capacity);
        self.persist(&state);
        Ok(())
    }

    fn clear(&self) -> RollCallResult<()> {
        let mut state = self.lock_state()?;
        *state = HistoryState {
            last_update: Some(Utc::now()),
            ..HistoryState::default()
        };
        debug!("history cleared");
        self.persist(&state);
        Ok(())
    }

    fn history_capacity(&self) -> usize {
        self.capacity
    }
}
