//! Local persistence for the ledger state.
//!
//! The whole state lives in a single JSON file, rewritten on every save:
//!
//! ```text
//! ~/.discipline/data.json
//! ```
//!
//! A missing file is a valid empty state.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use crate::model::LedgerState;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("corrupt state file {}: {source}", path.display())]
    Corrupt {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("corrupt state file {}: {date} has no entries", path.display())]
    CorruptLog { path: PathBuf, date: jiff::civil::Date },

    #[error("corrupt state file {}: points on {date} overflow", path.display())]
    CorruptTotal { path: PathBuf, date: jiff::civil::Date },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = core::result::Result<T, StoreError>;

/// File-based storage for the ledger state.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Creates a store backed by the file at `path`.
    ///
    /// Nothing touches the disk until [`Store::load`] or [`Store::save`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the default state file: `~/.discipline/data.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".discipline").join("data.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the persisted state.
    ///
    /// Returns the default empty state if the file doesn't exist.
    pub fn load(&self) -> Result<LedgerState> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::info!(path = %self.path.display(), "no state file, starting empty");
                return Ok(LedgerState::default());
            }
            Err(e) => return Err(e.into()),
        };

        let state: LedgerState =
            serde_json::from_str(&json).map_err(|source| StoreError::Corrupt {
                path: self.path.clone(),
                source,
            })?;

        if let Some(date) = state.first_empty_day() {
            return Err(StoreError::CorruptLog {
                path: self.path.clone(),
                date,
            });
        }
        if let Some(date) = state.first_overflowing_day() {
            return Err(StoreError::CorruptTotal {
                path: self.path.clone(),
                date,
            });
        }

        tracing::debug!(
            path = %self.path.display(),
            days = state.daily_log.len(),
            streak = state.streak,
            "loaded state"
        );
        Ok(state)
    }

    /// Writes the full state, replacing whatever was on disk.
    ///
    /// The parent directory is created if it doesn't exist.
    pub fn save(&self, state: &LedgerState) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(state).map_err(io::Error::from)?;
        fs::write(&self.path, json)?;
        tracing::debug!(path = %self.path.display(), "saved state");
        Ok(())
    }
}
