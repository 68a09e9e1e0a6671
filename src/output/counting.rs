//! Dry-run writer that records instead of driving hardware.

use core::convert::Infallible;

use super::CoilWriter;

/// Number of most recent codes a [`CountingWriter`] remembers.
pub const HISTORY_LEN: usize = 32;

/// Coil writer that counts writes and keeps the most recent codes.
#[derive(Debug, Clone)]
pub struct CountingWriter<T> {
    writes: u64,
    history: heapless::Deque<T, HISTORY_LEN>,
}

impl<T: Copy> CountingWriter<T> {
    /// Create an empty writer.
    pub fn new() -> Self {
        Self {
            writes: 0,
            history: heapless::Deque::new(),
        }
    }

    /// Total number of codes written.
    #[inline]
    pub fn writes(&self) -> u64 {
        self.writes
    }

    /// Most recently written code.
    #[inline]
    pub fn last(&self) -> Option<T> {
        self.history.back().copied()
    }

    /// Up to the last `n` codes, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = T> + '_ {
        let skip = self.history.len().saturating_sub(n);
        self.history.iter().skip(skip).copied()
    }

    /// Forget everything written so far.
    pub fn clear(&mut self) {
        self.writes = 0;
        self.history.clear();
    }
}

impl<T: Copy> Default for CountingWriter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Copy> CoilWriter<T> for CountingWriter<T> {
    type Error = Infallible;

    fn write(&mut self, code: T) -> Result<(), Self::Error> {
        self.writes += 1;
        if self.history.is_full() {
            self.history.pop_front();
        }
        // Cannot fail: a slot was just freed.
        let _ = self.history.push_back(code);
        Ok(())
    }
}
