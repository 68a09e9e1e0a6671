//! # coil-stepper
//!
//! Position tracking and coil sequencing for stepper motors driven through a
//! parallel-port style digital output.
//!
//! ## Features
//!
//! - **Coil tables**: One revolution is an ordered table of coil codes; the
//!   motor position is an index into it
//! - **Shortest path**: Absolute angles are reached along the shorter direction
//! - **Wrap-around stepping**: Lazy step sequences that roll over at both ends
//! - **Injected output**: Codes go to any [`CoilWriter`]: embedded-hal pins, a
//!   byte device, or a counting dry run
//! - **Persisted position**: A [`PositionStore`] keeps the last state between runs
//! - **no_std compatible**: Core library works without standard library
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use coil_stepper::{CoilMotor, CoilMotorBuilder, Degrees, StepperConfig};
//! use coil_stepper::store::{load_or_init, FileStore};
//!
//! let mut store = FileStore::new("motor_state.ini");
//! let mut motor = CoilMotorBuilder::new()
//!     .from_config(&StepperConfig::default())?
//!     .writer(writer)
//!     .delay(delay)
//!     .state(load_or_init(&mut store)?)
//!     .build()?;
//!
//! let state = motor.turn_by_angle(Degrees(90.0))?;
//! store.save(state)?;
//! ```
//!
//! ## Feature Flags
//!
//! - `std` (default): Enables file I/O, TOML parsing and host logging
//! - `cli` (default): Builds the `coil-stepper` command line tool
//! - `defmt`: Enables defmt formatting of public types for embedded targets

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

// Core modules
pub mod config;
pub mod error;
pub mod motion;
pub mod motor;
pub mod output;
pub mod store;

#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for ergonomic API
pub use config::{validate_config, MotorConfig, StepperConfig};
pub use error::{Error, Result};
pub use motion::{Direction, StepSequence};
pub use motor::{CoilMotor, CoilMotorBuilder, CoilTable};
pub use output::CoilWriter;
pub use store::PositionStore;

// Configuration loading (std only)
#[cfg(feature = "std")]
pub use config::load_config;

// Unit types
pub use config::units::{Cycles, Degrees, Seconds, UnitExt};
