//! Motor module for coil-stepper.
//!
//! Provides the coil table and the motor driver that walks it.

mod builder;
mod coil;
pub mod delay;
mod driver;

pub use builder::CoilMotorBuilder;
pub use coil::{CoilTable, DEFAULT_COIL_TABLE, MAX_COIL_STATES};
pub use delay::NoDelay;
#[cfg(feature = "std")]
pub use delay::StdDelay;
pub use driver::CoilMotor;
