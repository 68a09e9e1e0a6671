//! Inter-step timing.

use core::time::Duration;

use embedded_hal::delay::DelayNs;

/// Block on `delay` for `duration`.
///
/// Splits into whole milliseconds and a sub-millisecond remainder so that
/// durations beyond the `u32` nanosecond range of [`DelayNs::delay_ns`] work.
pub fn pause<D: DelayNs>(delay: &mut D, duration: Duration) {
    let mut millis = duration.as_millis();
    while millis > 0 {
        let chunk = millis.min(u32::MAX as u128) as u32;
        delay.delay_ms(chunk);
        millis -= chunk as u128;
    }
    let nanos = duration.subsec_nanos() % 1_000_000;
    if nanos > 0 {
        delay.delay_ns(nanos);
    }
}

/// [`DelayNs`] provider that returns immediately, for runs that drive no hardware.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

impl DelayNs for NoDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// [`DelayNs`] provider backed by `std::thread::sleep`.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct StdDelay;

#[cfg(feature = "std")]
impl DelayNs for StdDelay {
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(Duration::from_nanos(ns as u64));
    }

    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(Duration::from_millis(ms as u64));
    }
}
