//! Property tests for position math and stepping.

use coil_stepper::motion::{
    angle_to_cycles, cycles_to_steps, offset_to_state, state_to_angle, state_to_offset,
};
use coil_stepper::output::CountingWriter;
use coil_stepper::{CoilMotorBuilder, CoilTable, Cycles};
use proptest::prelude::*;

use coil_stepper::motor::NoDelay;

/// Table size and a state inside it.
fn table_and_state() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=256).prop_flat_map(|n| (Just(n), 0..n))
}

fn table_of(n: usize) -> CoilTable<u8> {
    let codes: Vec<u8> = (0..n).map(|i| i as u8).collect();
    CoilTable::new(&codes).unwrap()
}

proptest! {
    /// Offsets map back to the state they came from.
    #[test]
    fn offset_round_trip((n, state) in table_and_state()) {
        let offset = state_to_offset(state as f64, n);
        prop_assert!((0.0..=1.0).contains(&offset));

        let back = offset_to_state(offset, n).unwrap();
        prop_assert!((back - state as f64).abs() < 1e-12);
    }

    /// Reaching the angle of a state takes the shorter way round.
    #[test]
    fn angle_reaches_target_by_shortest_path(
        (n, from) in table_and_state(),
        target_seed in any::<usize>(),
    ) {
        let target = target_seed % n;
        let angle = state_to_angle(target as f64, n);
        let steps = cycles_to_steps(angle_to_cycles(angle, from, n), n);

        let delta = (target as i64 - from as i64).rem_euclid(n as i64);
        prop_assert_eq!(steps.rem_euclid(n as i64), delta);
        prop_assert!(2 * steps.unsigned_abs() <= n as u64);
    }

    /// A signed step count lands on the wrapped index with one write per step.
    #[test]
    fn steps_wrap_and_write_once_each(
        (n, from) in table_and_state(),
        steps in -600i64..=600,
    ) {
        let mut motor = CoilMotorBuilder::new()
            .coil_table(table_of(n))
            .writer(CountingWriter::new())
            .delay(NoDelay)
            .state(from)
            .build()
            .unwrap();

        let end = motor.turn_steps(steps).unwrap();

        prop_assert_eq!(end as i64, (from as i64 + steps).rem_euclid(n as i64));
        prop_assert_eq!(motor.writer().writes(), steps.unsigned_abs());
    }

    /// Whole revolutions leave the motor where it started.
    #[test]
    fn whole_revolutions_are_identity(
        (n, from) in table_and_state(),
        turns in -3i32..=3,
    ) {
        let mut motor = CoilMotorBuilder::new()
            .coil_table(table_of(n))
            .writer(CountingWriter::new())
            .delay(NoDelay)
            .state(from)
            .build()
            .unwrap();

        prop_assert_eq!(motor.turn_by_cycles(Cycles(f64::from(turns))), Ok(from));
        prop_assert_eq!(motor.writer().writes(), turns.unsigned_abs() as u64 * n as u64);
    }
}
