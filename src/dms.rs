//! Degrees, minutes and seconds representation of a single angle.

use crate::constants::{DM, DS};

/// An angle split into whole degrees, whole minutes and fractional seconds.
///
/// All three parts carry the sign of the angle they were built from, so
/// `-41.063` becomes `-41° -3' -46.8"` rather than a mixed-sign triple.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DegMinSec {
    pub degrees: f64,
    pub minutes: f64,
    pub seconds: f64,
}

impl DegMinSec {
    pub fn new(degrees: f64, minutes: f64, seconds: f64) -> DegMinSec {
        Self {
            degrees,
            minutes,
            seconds,
        }
    }

    /// Splits a decimal angle, truncating towards zero at each step.
    ///
    /// # Usage
    ///
    /// ```
    /// use qthloc::DegMinSec;
    ///
    /// let dms = DegMinSec::from_decimal(-41.063);
    ///
    /// assert_eq!(dms.degrees, -41.0);
    /// assert_eq!(dms.minutes, -3.0);
    /// assert!((dms.seconds + 46.8).abs() < 1e-6);
    /// ```
    pub fn from_decimal(value: f64) -> DegMinSec {
        let degrees = value.trunc();
        let minutes = ((value - degrees) * DM).trunc();
        let seconds = (value - degrees - minutes / DM) * DS;

        Self::new(degrees, minutes, seconds)
    }

    /// Combines the parts of an angle into decimal degrees.
    ///
    /// ```
    /// use qthloc::DegMinSec;
    ///
    /// assert_eq!(DegMinSec::to_decimal(0.0, 2.0, 30.0), 2.5 / 60.0);
    /// ```
    #[inline]
    pub fn to_decimal(degrees: f64, minutes: f64, seconds: f64) -> f64 {
        degrees + minutes / DM + seconds / DS
    }

    #[inline]
    pub fn to_decimal_degrees(&self) -> f64 {
        Self::to_decimal(self.degrees, self.minutes, self.seconds)
    }
}

impl From<f64> for DegMinSec {
    fn from(value: f64) -> Self {
        Self::from_decimal(value)
    }
}

impl From<DegMinSec> for f64 {
    fn from(value: DegMinSec) -> Self {
        value.to_decimal_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn within_percent(actual: f64, expected: f64, percent: f64) -> bool {
        if expected == 0.0 {
            actual.abs() < f64::EPSILON
        } else {
            ((actual - expected) / expected).abs() * 100.0 <= percent
        }
    }

    #[test]
    fn positive_decimal_to_dms() {
        let dms = DegMinSec::from_decimal(41.063);

        assert_eq!(dms.degrees, 41.0);
        assert_eq!(dms.minutes, 3.0);
        assert!(within_percent(dms.seconds, 46.8, 1.0));
    }

    #[test]
    fn negative_decimal_to_dms_keeps_sign() {
        let dms = DegMinSec::from_decimal(-41.063);

        assert_eq!(dms.degrees, -41.0);
        assert_eq!(dms.minutes, -3.0);
        assert!(within_percent(dms.seconds, -46.8, 0.5));
    }

    #[test]
    fn zero_is_all_zero() {
        let dms = DegMinSec::from_decimal(0.0);

        assert_eq!(dms.degrees, 0.0);
        assert_eq!(dms.minutes, 0.0);
        assert_eq!(dms.seconds, 0.0);
    }

    #[test]
    fn small_negative_angle_has_zero_degrees() {
        let dms = DegMinSec::from_decimal(-0.5);

        assert_eq!(dms.degrees, 0.0);
        assert_eq!(dms.minutes, -30.0);
        assert!(dms.seconds.abs() < 1e-9);
    }

    #[test]
    fn round_trip_is_identity() {
        let values = [
            0.0, 1e-4, -1e-4, 0.5, 41.063, -41.063, 90.0, -90.0, 180.0, -180.0, 123.456_789,
        ];
        for value in values {
            let back = DegMinSec::from_decimal(value).to_decimal_degrees();
            assert!(within_percent(back, value, 0.5), "{value} came back as {back}");
        }
    }

    #[test]
    fn conversions_through_from() {
        let dms = DegMinSec::from(12.5);
        assert_eq!(dms, DegMinSec::new(12.0, 30.0, 0.0));
        assert_eq!(f64::from(dms), 12.5);
    }
}
