//! Unit types for physical quantities.
//!
//! Provides type-safe representations of angles, revolutions and durations
//! so that a relative angle is never passed where a cycle count is expected.

use core::ops::Neg;
use core::time::Duration;

use serde::Deserialize;

use crate::error::ConfigError;

/// Angular position or displacement in degrees.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Degrees(pub f64);

impl Degrees {
    /// Create a new Degrees value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Fraction of a revolution this angle spans (signed).
    #[inline]
    pub fn to_cycles(self) -> Cycles {
        Cycles(self.0 / 360.0)
    }
}

/// Signed number of revolutions; positive turns forward (clockwise).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Cycles(pub f64);

impl Cycles {
    /// Create a new Cycles value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Angle covered by this many revolutions.
    #[inline]
    pub fn to_degrees(self) -> Degrees {
        Degrees(self.0 * 360.0)
    }
}

impl Neg for Cycles {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self(-self.0)
    }
}

/// Duration in seconds, as written in configuration files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[serde(transparent)]
pub struct Seconds(pub f64);

impl Seconds {
    /// Create a new Seconds value.
    #[inline]
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    /// Get the raw value.
    #[inline]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// Convert to a [`Duration`].
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidStepDelay` for negative, NaN or infinite values.
    pub fn to_duration(self) -> Result<Duration, ConfigError> {
        if !self.0.is_finite() || self.0 < 0.0 {
            return Err(ConfigError::InvalidStepDelay(self.0));
        }
        let whole = libm::floor(self.0);
        let nanos = libm::round((self.0 - whole) * 1e9);
        // Rounding the fraction can carry into the next second.
        let (secs, nanos) = if nanos >= 1e9 {
            (whole as u64 + 1, 0)
        } else {
            (whole as u64, nanos as u32)
        };
        Ok(Duration::new(secs, nanos))
    }
}

impl TryFrom<Seconds> for Duration {
    type Error = ConfigError;

    fn try_from(value: Seconds) -> Result<Self, Self::Error> {
        value.to_duration()
    }
}

/// Extension trait for creating unit types from primitives.
pub trait UnitExt {
    /// Convert to Degrees.
    fn degrees(self) -> Degrees;
    /// Convert to Cycles.
    fn cycles(self) -> Cycles;
    /// Convert to Seconds.
    fn seconds(self) -> Seconds;
}

impl UnitExt for f64 {
    #[inline]
    fn degrees(self) -> Degrees {
        Degrees(self)
    }

    #[inline]
    fn cycles(self) -> Cycles {
        Cycles(self)
    }

    #[inline]
    fn seconds(self) -> Seconds {
        Seconds(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degrees_to_cycles() {
        assert_eq!(Degrees::new(180.0).to_cycles(), Cycles(0.5));
        assert_eq!(Degrees::new(-720.0).to_cycles(), Cycles(-2.0));
        assert_eq!(Cycles(0.25).to_degrees(), Degrees(90.0));
    }

    #[test]
    fn test_seconds_to_duration() {
        assert_eq!(0.05_f64.seconds().to_duration(), Ok(Duration::from_millis(50)));
        assert_eq!(2.5_f64.seconds().to_duration(), Ok(Duration::from_millis(2500)));
        assert_eq!(0.0_f64.seconds().to_duration(), Ok(Duration::ZERO));
    }

    #[test]
    fn test_seconds_rejects_invalid() {
        assert!(matches!(
            (-0.1_f64).seconds().to_duration(),
            Err(ConfigError::InvalidStepDelay(_))
        ));
        assert!(f64::NAN.seconds().to_duration().is_err());
        assert!(f64::INFINITY.seconds().to_duration().is_err());
    }
}
