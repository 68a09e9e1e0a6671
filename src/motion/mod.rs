//! Motion module for coil-stepper.
//!
//! Provides the angle/offset/state conversions and the circular step sequence.

pub mod math;
mod sequence;

pub use math::{
    angle_to_cycles, cycles_to_steps, offset_to_state, state_to_angle, state_to_offset,
};
pub use sequence::{wrap_step, Direction, StepSequence};
