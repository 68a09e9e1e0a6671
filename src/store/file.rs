//! Plain-text state file (std only).

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{message, Error, Result, StoreError};

use super::{parse_state, PositionStore};

/// Stores the state index as decimal text in a file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store at `path`. Nothing is touched until the first load or save.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Path of the state file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn io_error(e: std::io::Error) -> Error {
    Error::Store(StoreError::Io(message(&e.to_string())))
}

impl PositionStore for FileStore {
    fn load(&mut self) -> Result<Option<usize>> {
        match fs::read_to_string(&self.path) {
            Ok(text) => parse_state(&text).map(Some),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("No state file at {}", self.path.display());
                Ok(None)
            }
            Err(e) => Err(io_error(e)),
        }
    }

    fn save(&mut self, state: usize) -> Result<()> {
        fs::write(&self.path, state.to_string()).map_err(io_error)?;
        log::debug!("Saved state {} to {}", state, self.path.display());
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => {
                log::info!("Removed state file {}", self.path.display());
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::warn!("State file not found: {}", self.path.display());
                Ok(())
            }
            Err(e) => Err(io_error(e)),
        }
    }
}
