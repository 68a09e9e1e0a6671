//! Coil-sequencing stepper motor driver.
//!
//! Generic over the coil code type, the coil writer and an embedded-hal delay.

use core::time::Duration;

use embedded_hal::delay::DelayNs;

use crate::config::units::{Cycles, Degrees};
use crate::error::{debug_message, MotorError, Result};
use crate::motion::{self, StepSequence};
use crate::output::CoilWriter;

use super::coil::CoilTable;
use super::delay::pause;

/// Stepper motor driven by presenting coil codes in table order.
///
/// Generic over:
/// - `T`: coil code type (a data byte for a parallel port)
/// - `W`: coil writer (must implement [`CoilWriter<T>`])
/// - `D`: delay provider for inter-step timing (must implement `DelayNs`)
///
/// The motor is the only owner of its state index. Turns take `&mut self`, so
/// two turns can never run against the same motor at once.
pub struct CoilMotor<T, W, D>
where
    W: CoilWriter<T>,
    D: DelayNs,
{
    /// Coil codes for one revolution.
    table: CoilTable<T>,

    /// Current index into `table`.
    state: usize,

    /// Pause between consecutive steps.
    step_delay: Duration,

    /// Output the codes are written to.
    writer: W,

    /// Delay provider for step timing.
    delay: D,

    /// Motor name for logging/debugging.
    name: heapless::String<32>,
}

impl<T, W, D> CoilMotor<T, W, D>
where
    T: Copy,
    W: CoilWriter<T>,
    D: DelayNs,
{
    /// Create a motor at `state`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::StateOutOfRange` if `state` does not index `table`.
    pub fn new(
        table: CoilTable<T>,
        state: usize,
        step_delay: Duration,
        writer: W,
        delay: D,
    ) -> Result<Self> {
        let state = table.check_state(state)?;
        Ok(Self {
            table,
            state,
            step_delay,
            writer,
            delay,
            name: heapless::String::new(),
        })
    }

    pub(crate) fn with_name(mut self, name: heapless::String<32>) -> Self {
        self.name = name;
        self
    }

    /// Get the motor name (empty unless set through the builder).
    #[inline]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Current state index.
    #[inline]
    pub fn state(&self) -> usize {
        self.state
    }

    /// Current angle in degrees.
    #[inline]
    pub fn angle(&self) -> Degrees {
        Degrees(motion::state_to_angle(self.state as f64, self.total_states()))
    }

    /// Number of states in one revolution.
    #[inline]
    pub fn total_states(&self) -> usize {
        self.table.total_states()
    }

    /// The coil table.
    #[inline]
    pub fn coil_table(&self) -> &CoilTable<T> {
        &self.table
    }

    /// Pause between steps.
    #[inline]
    pub fn step_delay(&self) -> Duration {
        self.step_delay
    }

    /// Every state with its angle and coil code, in table order.
    pub fn positions(&self) -> impl Iterator<Item = (usize, Degrees, T)> + '_ {
        self.table.positions()
    }

    /// Borrow the coil writer.
    #[inline]
    pub fn writer(&self) -> &W {
        &self.writer
    }

    /// Turn by a signed number of revolutions.
    ///
    /// The step count is `round(cycles * N)`, rounding half away from zero.
    /// Returns the new state.
    ///
    /// # Errors
    ///
    /// Returns `MotorError::DeviceWrite`, carrying the writer's error, if the
    /// writer fails. The turn stops there and the state stays at the last step
    /// that was written.
    pub fn turn_by_cycles(&mut self, cycles: Cycles) -> Result<usize> {
        let steps = motion::cycles_to_steps(cycles.0, self.total_states());
        self.turn_steps(steps)
    }

    /// Turn to an absolute angle along the shortest path.
    ///
    /// Exactly half a turn away goes forward. Returns the new state.
    ///
    /// # Errors
    ///
    /// See [`turn_by_cycles`](Self::turn_by_cycles).
    pub fn turn_by_angle(&mut self, angle: Degrees) -> Result<usize> {
        let cycles = motion::angle_to_cycles(angle.0, self.state, self.total_states());
        self.turn_by_cycles(Cycles(cycles))
    }

    /// Turn by an angle relative to the current position.
    ///
    /// Positive angles turn forward. Returns the new state.
    ///
    /// # Errors
    ///
    /// See [`turn_by_cycles`](Self::turn_by_cycles).
    pub fn rotate_by(&mut self, relative: Degrees) -> Result<usize> {
        self.turn_by_cycles(relative.to_cycles())
    }

    /// Step `steps` times (negative steps go in reverse), pausing between steps.
    ///
    /// Returns the new state.
    ///
    /// # Errors
    ///
    /// See [`turn_by_cycles`](Self::turn_by_cycles).
    pub fn turn_steps(&mut self, steps: i64) -> Result<usize> {
        let mut sequence = StepSequence::new(&self.table, self.state, steps);

        while let Some((state, code)) = sequence.next() {
            self.writer
                .write(code)
                .map_err(|e| MotorError::DeviceWrite {
                    state: self.state,
                    cause: debug_message(&e),
                })?;
            self.state = state;

            if sequence.remaining() > 0 {
                pause(&mut self.delay, self.step_delay);
            }
        }

        Ok(self.state)
    }

    /// Take the motor apart, returning the coil writer and delay provider.
    pub fn release(self) -> (W, D) {
        (self.writer, self.delay)
    }
}

impl<W, D> CoilMotor<u8, W, D>
where
    W: CoilWriter<u8>,
    D: DelayNs,
{
    /// Motor over [`DEFAULT_COIL_TABLE`](super::coil::DEFAULT_COIL_TABLE) at state 0.
    pub fn with_default_table(step_delay: Duration, writer: W, delay: D) -> Self {
        Self {
            table: CoilTable::default(),
            state: 0,
            step_delay,
            writer,
            delay,
            name: heapless::String::new(),
        }
    }
}

impl<T, W, D> core::fmt::Debug for CoilMotor<T, W, D>
where
    T: Copy,
    W: CoilWriter<T>,
    D: DelayNs,
{
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CoilMotor")
            .field("name", &self.name.as_str())
            .field("state", &self.state)
            .field("total_states", &self.table.total_states())
            .field("step_delay", &self.step_delay)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigError;
    use crate::motor::coil::DEFAULT_COIL_TABLE;
    use crate::output::CountingWriter;

    #[derive(Default)]
    struct CountingDelay {
        pauses: u32,
    }

    impl DelayNs for CountingDelay {
        fn delay_ns(&mut self, _ns: u32) {}

        fn delay_ms(&mut self, _ms: u32) {
            self.pauses += 1;
        }
    }

    /// Writer that fails on the write after `ok` successful ones.
    struct FailAfter {
        ok: usize,
        written: heapless::Vec<u8, 64>,
    }

    impl CoilWriter<u8> for FailAfter {
        type Error = ();

        fn write(&mut self, code: u8) -> core::result::Result<(), ()> {
            if self.written.len() == self.ok {
                return Err(());
            }
            self.written.push(code).map_err(|_| ())
        }
    }

    fn motor_at(state: usize) -> CoilMotor<u8, CountingWriter<u8>, CountingDelay> {
        CoilMotor::new(
            CoilTable::default(),
            state,
            Duration::from_millis(50),
            CountingWriter::new(),
            CountingDelay::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_full_turn_returns_to_start() {
        let mut motor = motor_at(2);
        assert_eq!(motor.turn_by_cycles(Cycles(1.0)), Ok(2));
        assert_eq!(motor.writer().writes(), 24);
        let tail: Vec<u8> = motor.writer().recent(4).collect();
        assert_eq!(tail, [0x0D, 0x05, 0x07, 0x06]);
    }

    #[test]
    fn test_backwards_two_and_a_half_turns() {
        let mut motor = motor_at(0);
        assert_eq!(motor.turn_by_cycles(Cycles(-2.5)), Ok(12));
        assert_eq!(motor.writer().writes(), 60);
        let tail: Vec<u8> = motor.writer().recent(3).collect();
        assert_eq!(tail, [0x09, 0x0B, 0x0A]);
    }

    #[test]
    fn test_no_turn_writes_nothing() {
        let mut motor = motor_at(11);
        assert_eq!(motor.turn_by_cycles(Cycles(0.0)), Ok(11));
        assert_eq!(motor.writer().writes(), 0);
        assert_eq!(motor.delay.pauses, 0);
    }

    #[test]
    fn test_pauses_between_steps_only() {
        let mut motor = motor_at(0);
        motor.turn_steps(5).unwrap();
        assert_eq!(motor.delay.pauses, 4);
    }

    #[test]
    fn test_turn_by_angle_takes_shortest_path() {
        let mut motor = motor_at(18);
        assert_eq!(motor.turn_by_angle(Degrees(180.0)), Ok(12));
        assert_eq!(motor.writer().writes(), 6);
        assert_eq!(motor.angle(), Degrees(180.0));
    }

    #[test]
    fn test_rotate_by_relative_angle() {
        let mut motor = motor_at(20);
        assert_eq!(motor.rotate_by(Degrees(90.0)), Ok(2));
        assert_eq!(motor.rotate_by(Degrees(-450.0)), Ok(20));
        assert_eq!(motor.writer().writes(), 6 + 30);
    }

    #[test]
    fn test_write_failure_keeps_partial_progress() {
        let writer = FailAfter {
            ok: 3,
            written: heapless::Vec::new(),
        };
        let mut motor = CoilMotor::new(
            CoilTable::default(),
            22,
            Duration::ZERO,
            writer,
            CountingDelay::default(),
        )
        .unwrap();

        let err = motor.turn_steps(10).unwrap_err();
        assert!(matches!(
            err,
            crate::error::Error::Motor(MotorError::DeviceWrite { state: 1, .. })
        ));
        assert_eq!(motor.state(), 1);
        assert_eq!(motor.writer().written.as_slice(), &[0x0D, 0x05, 0x07]);
    }

    #[test]
    fn test_write_failure_reports_cause() {
        struct Unplugged;

        impl CoilWriter<u8> for Unplugged {
            type Error = &'static str;

            fn write(&mut self, _code: u8) -> core::result::Result<(), Self::Error> {
                Err("EIO on /dev/lp0")
            }
        }

        let mut motor =
            CoilMotor::with_default_table(Duration::ZERO, Unplugged, CountingDelay::default());

        let err = motor.turn_by_cycles(Cycles(0.5)).unwrap_err();
        assert!(err.to_string().contains("EIO on /dev/lp0"));
        assert_eq!(motor.state(), 0);
    }

    #[test]
    fn test_reverse_undoes_forward() {
        let mut motor = motor_at(5);
        let turn = Cycles(0.75);
        assert_eq!(motor.turn_by_cycles(turn), Ok(23));
        assert_eq!(motor.turn_by_cycles(-turn), Ok(5));
        assert_eq!(motor.writer().writes(), 36);
    }

    #[test]
    fn test_initial_state_must_index_table() {
        let result = CoilMotor::new(
            CoilTable::default(),
            24,
            Duration::ZERO,
            CountingWriter::<u8>::new(),
            CountingDelay::default(),
        );
        assert!(matches!(
            result,
            Err(crate::error::Error::Config(ConfigError::StateOutOfRange {
                state: 24,
                total_states: 24
            }))
        ));
    }

    #[test]
    fn test_positions_lists_table() {
        let motor = motor_at(0);
        let positions: Vec<_> = motor.positions().collect();
        assert_eq!(positions.len(), DEFAULT_COIL_TABLE.len());
        assert_eq!(positions[0], (0, Degrees(0.0), 0x05));
        assert_eq!(positions[12], (12, Degrees(180.0), 0x0A));
        assert_eq!(positions[23], (23, Degrees(345.0), 0x0D));
    }
}
