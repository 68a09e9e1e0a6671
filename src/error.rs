//! Error types for coil-stepper.
//!
//! Provides unified error handling across configuration, conversion math,
//! motor stepping and position persistence.

use core::fmt;

/// Result type alias using the library's Error type.
pub type Result<T> = core::result::Result<T, Error>;

/// Unified error type for all coil-stepper operations.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// Configuration or construction error
    Config(ConfigError),
    /// Invalid argument passed to a conversion
    Math(MathError),
    /// Motor operation error
    Motor(MotorError),
    /// Position store error
    Store(StoreError),
}

/// Configuration-related errors.
///
/// Any of these means the motor cannot be used.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Coil table has no entries, so no state space exists
    EmptyCoilTable,
    /// Coil table holds more entries than the table capacity
    TooManyStates {
        /// Number of entries supplied
        len: usize,
        /// Maximum number of entries
        max: usize,
    },
    /// Initial state is not an index into the coil table
    StateOutOfRange {
        /// Requested state
        state: usize,
        /// Number of states in the table
        total_states: usize,
    },
    /// Step delay is negative or not finite
    InvalidStepDelay(f64),
    /// A required builder field was not supplied
    Missing(&'static str),
    /// Failed to parse TOML configuration
    ParseError(heapless::String<128>),
    /// File I/O error (std only)
    #[cfg(feature = "std")]
    IoError(heapless::String<128>),
}

/// Conversion errors raised by the angle/offset/state math.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MathError {
    /// Offset must lie in [0, 1]
    OffsetOutOfRange(f64),
}

/// Motor operation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MotorError {
    /// The coil writer failed; the turn was aborted
    DeviceWrite {
        /// Last state reached by a successful write
        state: usize,
        /// Writer error, as reported by the output
        cause: heapless::String<128>,
    },
}

/// Position store errors.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StoreError {
    /// Stored content is not a decimal state index
    Corrupt(heapless::String<32>),
    /// Underlying storage failed
    Io(heapless::String<128>),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Config(e) => write!(f, "Configuration error: {}", e),
            Error::Math(e) => write!(f, "Invalid argument: {}", e),
            Error::Motor(e) => write!(f, "Motor error: {}", e),
            Error::Store(e) => write!(f, "Position store error: {}", e),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::EmptyCoilTable => write!(f, "Coil table is empty"),
            ConfigError::TooManyStates { len, max } => {
                write!(f, "Coil table has {} entries, at most {} are supported", len, max)
            }
            ConfigError::StateOutOfRange { state, total_states } => {
                write!(f, "State {} is outside 0..{}", state, total_states)
            }
            ConfigError::InvalidStepDelay(v) => {
                write!(f, "Invalid step delay: {}. Must be finite and >= 0", v)
            }
            ConfigError::Missing(field) => write!(f, "{} is required", field),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            #[cfg(feature = "std")]
            ConfigError::IoError(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for MathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MathError::OffsetOutOfRange(v) => write!(f, "Offset {} is outside [0, 1]", v),
        }
    }
}

impl fmt::Display for MotorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MotorError::DeviceWrite { state, cause } => write!(
                f,
                "Coil write failed, motor stopped at state {}: {}",
                state, cause
            ),
        }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Corrupt(content) => write!(f, "Not a state index: '{}'", content),
            StoreError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

// Conversion impls
impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Error::Config(e)
    }
}

impl From<MathError> for Error {
    fn from(e: MathError) -> Self {
        Error::Math(e)
    }
}

impl From<MotorError> for Error {
    fn from(e: MotorError) -> Self {
        Error::Motor(e)
    }
}

impl From<StoreError> for Error {
    fn from(e: StoreError) -> Self {
        Error::Store(e)
    }
}

/// Writes into a fixed-capacity string, dropping whatever does not fit.
struct Truncating<'a, const N: usize>(&'a mut heapless::String<N>);

impl<const N: usize> fmt::Write for Truncating<'_, N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        for c in s.chars() {
            if self.0.push(c).is_err() {
                break;
            }
        }
        Ok(())
    }
}

/// Truncating copy of a message into a fixed-capacity string.
pub(crate) fn message<const N: usize>(msg: &str) -> heapless::String<N> {
    let mut out = heapless::String::new();
    let _ = fmt::Write::write_str(&mut Truncating(&mut out), msg);
    out
}

/// Truncated `Debug` rendering of an error from outside the crate.
pub(crate) fn debug_message<const N: usize, E: fmt::Debug>(err: &E) -> heapless::String<N> {
    let mut out = heapless::String::new();
    let _ = fmt::write(&mut Truncating(&mut out), format_args!("{:?}", err));
    out
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}

#[cfg(feature = "std")]
impl std::error::Error for MathError {}

#[cfg(feature = "std")]
impl std::error::Error for MotorError {}

#[cfg(feature = "std")]
impl std::error::Error for StoreError {}
