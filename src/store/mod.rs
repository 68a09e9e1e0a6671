//! Position persistence.
//!
//! The motor has no encoder, so its position survives between runs only
//! through a [`PositionStore`]. A missing record means the motor is at state 0.

#[cfg(feature = "std")]
mod file;

#[cfg(feature = "std")]
pub use file::FileStore;

use crate::error::{message, Result, StoreError};

/// Loads and saves the motor's state index.
pub trait PositionStore {
    /// Read the stored state, `None` if nothing has been stored.
    fn load(&mut self) -> Result<Option<usize>>;

    /// Store `state`, replacing any previous value.
    fn save(&mut self, state: usize) -> Result<()>;

    /// Forget the stored state.
    fn reset(&mut self) -> Result<()>;
}

/// Load the stored state, initializing the store with 0 when it is empty.
pub fn load_or_init<S: PositionStore + ?Sized>(store: &mut S) -> Result<usize> {
    match store.load()? {
        Some(state) => Ok(state),
        None => {
            store.save(0)?;
            Ok(0)
        }
    }
}

/// Parse a stored state: a decimal integer, surrounding whitespace ignored.
pub fn parse_state(text: &str) -> Result<usize> {
    text.trim()
        .parse()
        .map_err(|_| StoreError::Corrupt(message(text.trim())).into())
}

/// In-memory store, for tests and targets without a filesystem.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryStore {
    state: Option<usize>,
}

impl MemoryStore {
    /// Create a store holding `state`.
    pub fn with_state(state: usize) -> Self {
        Self { state: Some(state) }
    }

    /// Currently stored state.
    pub fn get(&self) -> Option<usize> {
        self.state
    }
}

impl PositionStore for MemoryStore {
    fn load(&mut self) -> Result<Option<usize>> {
        Ok(self.state)
    }

    fn save(&mut self, state: usize) -> Result<()> {
        self.state = Some(state);
        Ok(())
    }

    fn reset(&mut self) -> Result<()> {
        self.state = None;
        Ok(())
    }
}
