#![warn(clippy::pedantic)]
#![allow(
    clippy::must_use_candidate,
    clippy::return_self_not_must_use
)]

//! Conversion between geographic coordinates and
//! [Maidenhead (QTH) grid locators](https://en.wikipedia.org/wiki/Maidenhead_Locator_System),
//! the compact location notation exchanged in amateur radio contacts.
//!
//! ```
//! use qthloc::{LatLon, Locator, GridPrecision};
//!
//! let coord = LatLon::create(41.10634, -8.58875).unwrap();
//! let locator = Locator::from_latlon(&coord, GridPrecision::Ten).unwrap();
//! assert_eq!(locator.to_string(), "IN51QC95IM");
//!
//! let center = locator.to_latlon();
//! assert_eq!(center.to_grid_square(GridPrecision::Ten).unwrap(), locator);
//! ```

use thiserror::Error;

pub mod dms;
pub mod latlon;
pub mod maidenhead;
pub mod mode;

pub use dms::DegMinSec;
pub use latlon::LatLon;
pub use maidenhead::{GridPrecision, Locator};
pub use mode::{Mode, SubmodeLookup};

pub(crate) mod constants;

#[derive(Clone, Debug, Error, PartialEq)]
pub enum Error {
    #[error("Grid locator is invalid: {0}")]
    InvalidFormat(String),
    #[error("Grid precision {0} not supported, expected one of 2, 4, 6, 8, 10, 12")]
    UnsupportedPrecision(usize),
    #[error("Coordinate out of range: {0}")]
    OutOfRange(String),
    #[error("Mode is invalid: {0}")]
    InvalidMode(String),
}

pub trait ParseCoord {
    /// Parses a coordinate from its textual representation.
    ///
    /// # Errors
    ///
    /// Returns an [`Error`] describing why `value` could not be parsed.
    fn parse_coord(value: &str) -> Result<Self, Error>
    where Self: Sized;
}

/// Parses any [`ParseCoord`] type from a string.
///
/// # Errors
///
/// Propagates the error of the target type's [`ParseCoord::parse_coord`].
///
/// # Usage
///
/// ```
/// use qthloc::{from_str, Locator};
///
/// let locator: Locator = from_str("in51qd").unwrap();
/// assert_eq!(locator.as_str(), "IN51QD");
/// ```
pub fn from_str<S, T>(value: S) -> Result<T, Error>
where
    S: AsRef<str>,
    T: ParseCoord
{
    T::parse_coord(value.as_ref())
}

trait ThisOrThat {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T;
}

impl ThisOrThat for bool {
    fn ternary<T>(&self, r#true: T, r#false: T) -> T {
        if *self { r#true } else { r#false }
    }
}
