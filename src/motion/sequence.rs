//! Circular step sequence generation.

use core::iter::FusedIterator;

use crate::motor::CoilTable;

/// Stepping direction through the coil table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    /// Increasing state index (clockwise by convention).
    Forward,
    /// Decreasing state index.
    Reverse,
}

impl Direction {
    /// Direction for a signed step count (zero counts as forward).
    #[inline]
    pub fn from_steps(steps: i64) -> Self {
        if steps < 0 {
            Direction::Reverse
        } else {
            Direction::Forward
        }
    }
}

/// Lazy sequence of `(state, code)` pairs stepping around a coil table.
///
/// Yields exactly `|steps|` items, each carrying the state index after the
/// step (wrapped into `0..N`) and the table's code at that index. The sequence
/// is single-use; the index reached so far is available from [`state`](Self::state).
#[derive(Debug, Clone)]
pub struct StepSequence<'a, T> {
    table: &'a CoilTable<T>,
    state: usize,
    remaining: u64,
    direction: Direction,
}

impl<'a, T: Copy> StepSequence<'a, T> {
    /// Start stepping `steps` times from `state`.
    ///
    /// `state` must be an index into `table`.
    pub fn new(table: &'a CoilTable<T>, state: usize, steps: i64) -> Self {
        debug_assert!(state < table.total_states());
        Self {
            table,
            state,
            remaining: steps.unsigned_abs(),
            direction: Direction::from_steps(steps),
        }
    }

    /// Index reached by the last produced item (the start index before any).
    #[inline]
    pub fn state(&self) -> usize {
        self.state
    }

    /// Direction of travel.
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Steps not yet produced.
    #[inline]
    pub fn remaining(&self) -> u64 {
        self.remaining
    }
}

/// Index one step from `state` in `direction`, rolling over at both ends.
#[inline]
pub fn wrap_step(state: usize, direction: Direction, total_states: usize) -> usize {
    match direction {
        Direction::Forward => {
            let next = state + 1;
            if next >= total_states {
                0
            } else {
                next
            }
        }
        Direction::Reverse => {
            if state == 0 {
                total_states - 1
            } else {
                state - 1
            }
        }
    }
}

impl<T: Copy> Iterator for StepSequence<'_, T> {
    type Item = (usize, T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.state = wrap_step(self.state, self.direction, self.table.total_states());
        Some((self.state, self.table[self.state]))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

impl<T: Copy> FusedIterator for StepSequence<'_, T> {}
