//! Coil activation tables.

use core::ops::Index;

use crate::config::units::Degrees;
use crate::error::ConfigError;
use crate::motion::state_to_angle;

/// Maximum number of states a coil table can hold.
pub const MAX_COIL_STATES: usize = 256;

/// Half-step sequence for a four-wire motor on the low nibble of a parallel
/// port, repeated three times for a 24-state revolution.
pub const DEFAULT_COIL_TABLE: [u8; 24] = [
    0x05, 0x07, 0x06, 0x0E, 0x0A, 0x0B, 0x09, 0x0D, //
    0x05, 0x07, 0x06, 0x0E, 0x0A, 0x0B, 0x09, 0x0D, //
    0x05, 0x07, 0x06, 0x0E, 0x0A, 0x0B, 0x09, 0x0D,
];

/// Ordered coil codes for one full mechanical revolution.
///
/// Never empty. The length is the number of discrete states `N`, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoilTable<T> {
    codes: heapless::Vec<T, MAX_COIL_STATES>,
}

impl<T: Copy> CoilTable<T> {
    /// Build a table from a slice of codes.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyCoilTable` for an empty slice and
    /// `ConfigError::TooManyStates` if it exceeds [`MAX_COIL_STATES`].
    pub fn new(codes: &[T]) -> Result<Self, ConfigError> {
        if codes.is_empty() {
            return Err(ConfigError::EmptyCoilTable);
        }
        let codes = heapless::Vec::from_slice(codes).map_err(|_| ConfigError::TooManyStates {
            len: codes.len(),
            max: MAX_COIL_STATES,
        })?;
        Ok(Self { codes })
    }

    /// Number of states `N` in one revolution.
    #[inline]
    pub fn total_states(&self) -> usize {
        self.codes.len()
    }

    /// Code at `state`, or `None` if the state is outside the table.
    #[inline]
    pub fn get(&self, state: usize) -> Option<T> {
        self.codes.get(state).copied()
    }

    /// Check that `state` indexes this table.
    pub fn check_state(&self, state: usize) -> Result<usize, ConfigError> {
        if state < self.total_states() {
            Ok(state)
        } else {
            Err(ConfigError::StateOutOfRange {
                state,
                total_states: self.total_states(),
            })
        }
    }

    /// All codes in state order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.codes
    }

    /// Every state with its angle and code, in table order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, Degrees, T)> + '_ {
        let total = self.total_states();
        self.codes
            .iter()
            .enumerate()
            .map(move |(state, &code)| (state, Degrees(state_to_angle(state as f64, total)), code))
    }
}

impl Default for CoilTable<u8> {
    fn default() -> Self {
        Self {
            codes: heapless::Vec::from_slice(&DEFAULT_COIL_TABLE)
                .unwrap_or_else(|_| unreachable!("default table fits")),
        }
    }
}

impl<T> Index<usize> for CoilTable<T> {
    type Output = T;

    fn index(&self, state: usize) -> &T {
        &self.codes[state]
    }
}

impl<T: Copy> TryFrom<&[T]> for CoilTable<T> {
    type Error = ConfigError;

    fn try_from(codes: &[T]) -> Result<Self, Self::Error> {
        Self::new(codes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_table_rejected() {
        assert_eq!(CoilTable::<u8>::new(&[]), Err(ConfigError::EmptyCoilTable));
    }

    #[test]
    fn test_oversized_table_rejected() {
        let codes = [0u8; MAX_COIL_STATES + 1];
        assert_eq!(
            CoilTable::new(&codes),
            Err(ConfigError::TooManyStates {
                len: MAX_COIL_STATES + 1,
                max: MAX_COIL_STATES
            })
        );
    }

    #[test]
    fn test_default_table() {
        let table = CoilTable::default();
        assert_eq!(table.total_states(), 24);
        assert_eq!(table[0], 0x05);
        assert_eq!(table[23], 0x0D);
        assert_eq!(table.get(24), None);
    }

    #[test]
    fn test_check_state() {
        let table = CoilTable::new(&[1u8, 2, 3]).unwrap();
        assert_eq!(table.check_state(2), Ok(2));
        assert_eq!(
            table.check_state(3),
            Err(ConfigError::StateOutOfRange {
                state: 3,
                total_states: 3
            })
        );
    }
}
