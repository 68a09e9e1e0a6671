//! Builder pattern for CoilMotor.

use core::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::config::units::Seconds;
use crate::config::{MotorConfig, StepperConfig, DEFAULT_STEP_DELAY};
use crate::error::{message, ConfigError, Error, Result};
use crate::output::CoilWriter;

use super::coil::CoilTable;
use super::driver::CoilMotor;

/// Builder for creating CoilMotor instances.
pub struct CoilMotorBuilder<T, W, D>
where
    W: CoilWriter<T>,
    D: DelayNs,
{
    table: Option<CoilTable<T>>,
    writer: Option<W>,
    delay: Option<D>,
    name: Option<heapless::String<32>>,
    state: usize,
    step_delay: Seconds,
}

impl<T, W, D> Default for CoilMotorBuilder<T, W, D>
where
    T: Copy,
    W: CoilWriter<T>,
    D: DelayNs,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, W, D> CoilMotorBuilder<T, W, D>
where
    T: Copy,
    W: CoilWriter<T>,
    D: DelayNs,
{
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            table: None,
            writer: None,
            delay: None,
            name: None,
            state: 0,
            step_delay: DEFAULT_STEP_DELAY,
        }
    }

    /// Set the coil table.
    pub fn coil_table(mut self, table: CoilTable<T>) -> Self {
        self.table = Some(table);
        self
    }

    /// Set the coil writer.
    pub fn writer(mut self, writer: W) -> Self {
        self.writer = Some(writer);
        self
    }

    /// Set the delay provider.
    pub fn delay(mut self, delay: D) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Set the motor name.
    pub fn name(mut self, name: &str) -> Self {
        self.name = Some(message(name));
        self
    }

    /// Set the starting state (usually loaded from a position store).
    pub fn state(mut self, state: usize) -> Self {
        self.state = state;
        self
    }

    /// Set the pause between steps.
    pub fn step_delay(mut self, step_delay: Seconds) -> Self {
        self.step_delay = step_delay;
        self
    }

    /// Build the CoilMotor.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is missing, the step delay is
    /// invalid or the starting state does not index the coil table.
    pub fn build(self) -> Result<CoilMotor<T, W, D>> {
        let table = self
            .table
            .ok_or(Error::Config(ConfigError::Missing("coil_table")))?;
        let writer = self
            .writer
            .ok_or(Error::Config(ConfigError::Missing("writer")))?;
        let delay = self
            .delay
            .ok_or(Error::Config(ConfigError::Missing("delay")))?;
        let step_delay: Duration = self.step_delay.to_duration()?;

        let motor = CoilMotor::new(table, self.state, step_delay, writer, delay)?;
        Ok(match self.name {
            Some(name) => motor.with_name(name),
            None => motor,
        })
    }
}

impl<W, D> CoilMotorBuilder<u8, W, D>
where
    W: CoilWriter<u8>,
    D: DelayNs,
{
    /// Configure from a MotorConfig.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::EmptyCoilTable` if the configured table is empty.
    pub fn from_motor_config(mut self, config: &MotorConfig) -> Result<Self> {
        self.table = Some(CoilTable::new(&config.coil_table)?);
        self.name = Some(config.name.clone());
        self.step_delay = config.step_delay;
        Ok(self)
    }

    /// Configure from a StepperConfig.
    ///
    /// # Errors
    ///
    /// See [`from_motor_config`](Self::from_motor_config).
    pub fn from_config(self, config: &StepperConfig) -> Result<Self> {
        self.from_motor_config(&config.motor)
    }
}
