//! Conversions between state index, offset, angle and cycles.
//!
//! All functions are pure and parameterized by `total_states`, the number of
//! entries in the coil table (one full revolution). States are taken as `f64`
//! so that fractional states produced by [`offset_to_state`] round-trip.

use crate::error::MathError;

/// Degrees in one full revolution.
pub const FULL_TURN_DEGREES: f64 = 360.0;

/// Normalized offset (0..=1) of a state.
///
/// No clamping: `state == total_states` gives exactly `1.0`.
#[inline]
pub fn state_to_offset(state: f64, total_states: usize) -> f64 {
    state / total_states as f64
}

/// Fractional state for a normalized offset.
///
/// # Errors
///
/// Returns `MathError::OffsetOutOfRange` if `offset` is outside `[0, 1]` (NaN included).
pub fn offset_to_state(offset: f64, total_states: usize) -> Result<f64, MathError> {
    if !(0.0..=1.0).contains(&offset) {
        return Err(MathError::OffsetOutOfRange(offset));
    }
    Ok(total_states as f64 * offset)
}

/// Angle in degrees of a state.
///
/// `state == total_states` yields `360.0`, not `0.0`.
#[inline]
pub fn state_to_angle(state: f64, total_states: usize) -> f64 {
    FULL_TURN_DEGREES / total_states as f64 * state
}

/// Shortest signed turn, in revolutions, from `current_state` to the absolute `angle`.
///
/// The angle is reduced modulo 360. Of the forward delta (in `[0, 1)`) and the
/// same delta minus one revolution, the one with the smaller magnitude wins; on
/// a tie (exactly half a turn) the forward delta is returned.
pub fn angle_to_cycles(angle: f64, current_state: usize, total_states: usize) -> f64 {
    let target = unit_fract(angle / FULL_TURN_DEGREES);
    let current = state_to_offset(current_state as f64, total_states);
    let forward = unit_fract(target - current);
    let backward = forward - 1.0;

    if libm::fabs(backward) < forward {
        backward
    } else {
        forward
    }
}

/// Discrete step count for a turn of `cycles` revolutions.
///
/// Rounds half away from zero, so `0.5` steps become `1` and `-0.5` become `-1`.
/// Non-finite input saturates (NaN gives zero steps).
#[inline]
pub fn cycles_to_steps(cycles: f64, total_states: usize) -> i64 {
    libm::round(cycles * total_states as f64) as i64
}

/// `x mod 1` into `[0, 1)`.
fn unit_fract(x: f64) -> f64 {
    let r = x - libm::floor(x);
    // -1e-20 - floor(-1e-20) rounds to exactly 1.0
    if r >= 1.0 {
        0.0
    } else {
        r
    }
}
