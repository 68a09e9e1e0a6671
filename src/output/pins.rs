//! Coil writer over a bank of embedded-hal output pins.

use embedded_hal::digital::OutputPin;

use super::CoilWriter;

/// Drives one [`OutputPin`] per code bit: pin `i` follows bit `i`.
///
/// This mirrors how a parallel port presents a data byte on its D0..D7 lines,
/// so a four-wire motor uses a bank of four pins on the low nibble.
pub struct PinBankWriter<P, const W: usize> {
    pins: [P; W],
}

impl<P: OutputPin, const W: usize> PinBankWriter<P, W> {
    /// Create a writer over `pins`, least significant bit first.
    pub fn new(pins: [P; W]) -> Self {
        Self { pins }
    }

    /// Give the pins back.
    pub fn release(self) -> [P; W] {
        self.pins
    }
}

impl<T, P, const W: usize> CoilWriter<T> for PinBankWriter<P, W>
where
    T: Into<u32>,
    P: OutputPin,
{
    type Error = P::Error;

    fn write(&mut self, code: T) -> Result<(), Self::Error> {
        let bits: u32 = code.into();
        for (bit, pin) in self.pins.iter_mut().enumerate() {
            let high = bits.checked_shr(bit as u32).unwrap_or(0) & 1 == 1;
            if high {
                pin.set_high()?;
            } else {
                pin.set_low()?;
            }
        }
        Ok(())
    }
}
