//! Configuration validation.

use crate::error::{ConfigError, Error, Result};

use super::{MotorConfig, StepperConfig};

/// Validate a stepper configuration.
///
/// Checks:
/// - The coil table has at least one entry
/// - The step delay is finite and non-negative
pub fn validate_config(config: &StepperConfig) -> Result<()> {
    validate_motor(&config.motor)
}

fn validate_motor(config: &MotorConfig) -> Result<()> {
    if config.coil_table.is_empty() {
        return Err(Error::Config(ConfigError::EmptyCoilTable));
    }

    config.step_delay.to_duration()?;

    Ok(())
}
