//! Configuration module for coil-stepper.
//!
//! Provides types for loading and validating the motor configuration from
//! TOML files (with `std` feature) or pre-parsed data.

mod motor;
pub mod units;
#[cfg(feature = "std")]
mod loader;
mod validation;

use serde::Deserialize;

pub use motor::{MotorConfig, DEFAULT_STATE_FILE, DEFAULT_STEP_DELAY};
pub use validation::validate_config;

#[cfg(feature = "std")]
pub use loader::{load_config, parse_config};

// Re-export unit types at config level
pub use units::{Cycles, Degrees, Seconds};

/// Root configuration structure from TOML.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct StepperConfig {
    /// The motor being driven.
    #[serde(default)]
    pub motor: MotorConfig,
}
