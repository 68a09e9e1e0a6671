//! Coil output capability.
//!
//! A [`CoilWriter`] presents one coil code to the motor hardware. The motor
//! driver only ever talks to this trait; which implementation is used is the
//! caller's decision, made once at startup.

mod counting;
mod pins;
#[cfg(feature = "std")]
mod sink;

pub use counting::CountingWriter;
pub use pins::PinBankWriter;
#[cfg(feature = "std")]
pub use sink::ByteSinkWriter;

/// Sends coil activation codes to a motor output.
pub trait CoilWriter<T> {
    /// Error type of the underlying output.
    type Error: core::fmt::Debug;

    /// Present `code` on the output.
    fn write(&mut self, code: T) -> Result<(), Self::Error>;
}

impl<T, W: CoilWriter<T> + ?Sized> CoilWriter<T> for &mut W {
    type Error = W::Error;

    #[inline]
    fn write(&mut self, code: T) -> Result<(), Self::Error> {
        W::write(self, code)
    }
}
