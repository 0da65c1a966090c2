//! Maidenhead grid locators.
//!
//! A locator is a sequence of character pairs. Each pair holds one longitude
//! and one latitude digit and refines the square described by the pairs
//! before it:
//!
//! ```text
//! Pair  Range  Longitude       Latitude
//! 1     A - R  20 degrees      10 degrees
//! 2     0 - 9  2 degrees       1 degree
//! 3     A - X  5 minutes       2.5 minutes
//! 4     0 - 9  30 seconds      15 seconds
//! 5     A - X  1.25 seconds    0.625 seconds
//! 6     0 - 9  0.125 seconds   0.0625 seconds
//! ```
//!
//! The origin of the grid is the south pole on the antimeridian, `(-90, -180)`.
//! See the [ADIF specification](https://www.adif.org/314/ADIF_314.htm#Maidenhead_Locator)
//! for more details.

use std::{fmt::Display, str::FromStr};

use lazy_static::lazy_static;
use num::Integer;

use crate::{
    Error,
    ParseCoord,
    ThisOrThat,
    constants::{HD, QD, TD},
    dms::DegMinSec,
    latlon::{LatLon, check_range},
};

/// Number of character pairs in the longest supported locator
pub const MAX_LEVELS: usize = 6;

/// Letters used by the first pair, `A` to `R`
const FIELD_RADIX: u8 = 18;
/// Letters used by later lettered pairs, `A` to `X`
const LETTER_RADIX: u8 = 24;
const DIGIT_RADIX: u8 = 10;

lazy_static! {
    /// Span in degrees of one step of each pair, as `(longitude, latitude)`
    static ref SPANS: [(f64, f64); MAX_LEVELS] = [
        (20.0, 10.0),
        (2.0, 1.0),
        (DegMinSec::to_decimal(0.0, 5.0, 0.0), DegMinSec::to_decimal(0.0, 2.0, 30.0)),
        (DegMinSec::to_decimal(0.0, 0.0, 30.0), DegMinSec::to_decimal(0.0, 0.0, 15.0)),
        (DegMinSec::to_decimal(0.0, 0.0, 1.25), DegMinSec::to_decimal(0.0, 0.0, 0.625)),
        (DegMinSec::to_decimal(0.0, 0.0, 0.125), DegMinSec::to_decimal(0.0, 0.0, 0.0625)),
    ];

    /// Largest normalized latitude that still falls inside the top row
    static ref TOP_EDGE: f64 = below(HD);
    /// Largest normalized longitude that still falls inside the last column
    static ref EAST_EDGE: f64 = below(TD);
}

/// Largest `f64` below a positive `value`
fn below(value: f64) -> f64 {
    f64::from_bits(value.to_bits() - 1)
}

/// Splits `value` into its step index at one level and the remainder carried
/// to the next. Past the last step the remainder saturates too, so finer
/// levels stay on their last symbol instead of wrapping to the first.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn split_level(value: f64, span: f64, radix: u8) -> (u8, f64) {
    let max_idx = f64::from(radix - 1);
    let idx = (value / span).floor();

    if idx > max_idx {
        (radix - 1, below(span))
    } else {
        (idx as u8, value % span)
    }
}

/// Returns the `(longitude, latitude)` span in degrees of one step at the
/// given pair level, or `None` past the last supported level.
///
/// ```
/// use qthloc::maidenhead::level_span;
///
/// assert_eq!(level_span(0), Some((20.0, 10.0)));
/// assert_eq!(level_span(1), Some((2.0, 1.0)));
/// assert_eq!(level_span(6), None);
/// ```
pub fn level_span(level: usize) -> Option<(f64, f64)> {
    SPANS.get(level).copied()
}

fn char_base(level: usize) -> u8 {
    level.is_even().ternary(b'A', b'0')
}

fn radix(level: usize) -> u8 {
    if level == 0 {
        FIELD_RADIX
    } else {
        level.is_even().ternary(LETTER_RADIX, DIGIT_RADIX)
    }
}

/// Number of characters in a locator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "usize", into = "usize")
)]
pub enum GridPrecision {
    Two = 2,
    Four = 4,
    #[default]
    Six = 6,
    Eight = 8,
    Ten = 10,
    Twelve = 12,
}

impl GridPrecision {
    pub const ALL: [GridPrecision; MAX_LEVELS] = [
        GridPrecision::Two,
        GridPrecision::Four,
        GridPrecision::Six,
        GridPrecision::Eight,
        GridPrecision::Ten,
        GridPrecision::Twelve,
    ];

    /// Number of characters in a locator of this precision
    #[inline]
    pub fn characters(self) -> usize {
        self as usize
    }

    /// Number of character pairs in a locator of this precision
    #[inline]
    pub fn levels(self) -> usize {
        self.characters() / 2
    }
}

impl TryFrom<usize> for GridPrecision {
    type Error = Error;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|precision| precision.characters() == value)
            .ok_or(Error::UnsupportedPrecision(value))
    }
}

impl From<GridPrecision> for usize {
    fn from(value: GridPrecision) -> Self {
        value.characters()
    }
}

/// A validated Maidenhead locator, always stored in uppercase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Locator {
    code: String,
    precision: GridPrecision,
}

impl Locator {
    pub fn precision(&self) -> GridPrecision {
        self.precision
    }

    pub fn as_str(&self) -> &str {
        &self.code
    }

    /// Parses a locator, ignoring surrounding whitespace and case.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the string does not have an even
    /// length between 2 and 12, or if any character is outside `A`-`X`/`0`-`9`
    /// or in the wrong position.
    ///
    /// # Usage
    ///
    /// ```
    /// use qthloc::{GridPrecision, Locator};
    ///
    /// let locator = Locator::parse_str(" in51qd ").unwrap();
    /// assert_eq!(locator.as_str(), "IN51QD");
    /// assert_eq!(locator.precision(), GridPrecision::Six);
    ///
    /// assert!(Locator::parse_str("IN51Q").is_err());
    /// assert!(Locator::parse_str("IN51QZ").is_err());
    /// ```
    pub fn parse_str(locator: &str) -> Result<Locator, Error> {
        Self::from_str(locator)
    }

    /// Encodes a point as a locator of the given precision.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the point lies outside
    /// `[-90, 90] x [-180, 180)`.
    ///
    /// # Usage
    ///
    /// ```
    /// use qthloc::{GridPrecision, LatLon, Locator};
    ///
    /// let coord = LatLon::create(38.59166667, -28.7975).unwrap();
    /// let locator = Locator::from_latlon(&coord, GridPrecision::Six).unwrap();
    ///
    /// assert_eq!(locator.as_str(), "HM58OO");
    /// ```
    pub fn from_latlon(value: &LatLon, precision: GridPrecision) -> Result<Locator, Error> {
        log::trace!("Encoding {value} with {} characters", precision.characters());
        check_range(value.latitude, value.longitude)?;

        // Longitudes right below 180 round up to 360 once shifted
        let mut lon = (value.longitude + HD).min(*EAST_EDGE);
        // The north pole belongs to the top row of the grid
        let mut lat = (value.latitude + QD).min(*TOP_EDGE);
        let mut code = String::with_capacity(precision.characters());

        let levels = SPANS.iter().take(precision.levels()).enumerate();
        for (level, &(lon_span, lat_span)) in levels {
            let base = char_base(level);
            let radix = radix(level);

            let (lon_idx, lon_rest) = split_level(lon, lon_span, radix);
            let (lat_idx, lat_rest) = split_level(lat, lat_span, radix);

            code.push(char::from(base + lon_idx));
            code.push(char::from(base + lat_idx));

            lon = lon_rest;
            lat = lat_rest;
        }

        log::trace!("Encoded {value} as {code}");

        Ok(Locator { code, precision })
    }

    /// Converts the locator to the point at the center of its square.
    ///
    /// ```
    /// use qthloc::Locator;
    ///
    /// let locator = Locator::parse_str("JJ00").unwrap();
    /// let center = locator.to_latlon();
    ///
    /// assert_eq!(center.latitude(), 0.5);
    /// assert_eq!(center.longitude(), 1.0);
    /// ```
    pub fn to_latlon(&self) -> LatLon {
        let mut lon = 0.0;
        let mut lat = 0.0;

        let pairs = self.code.as_bytes().chunks_exact(2).zip(SPANS.iter());
        for (level, (pair, &(lon_span, lat_span))) in pairs.enumerate() {
            let base = char_base(level);
            lon += lon_span * f64::from(pair[0] - base);
            lat += lat_span * f64::from(pair[1] - base);
        }

        // Move from the corner to the middle of the smallest square
        let (lon_span, lat_span) = SPANS[self.precision.levels() - 1];
        lon += lon_span / 2.0;
        lat += lat_span / 2.0;

        let coord = LatLon::new(lat - QD, lon - HD);
        log::trace!("Decoded {} as {coord}", self.code);
        coord
    }
}

fn invalid(value: &str, reason: &str) -> Error {
    log::debug!("Rejecting locator {value:?}: {reason}");
    Error::InvalidFormat(format!("{value:?} {reason}"))
}

impl FromStr for Locator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().to_ascii_uppercase();

        if let Some(c) = value.chars().find(|c| !matches!(c, 'A'..='X' | '0'..='9')) {
            return Err(invalid(&value, &format!("contains {c:?}, not in A-X or 0-9")));
        }

        let len = value.len();
        if len % 2 == 1 {
            return Err(invalid(&value, "does not have an even number of characters"));
        }
        let precision = GridPrecision::try_from(len)
            .map_err(|_| invalid(&value, "must have between 2 and 12 characters"))?;

        for (idx, c) in value.bytes().enumerate() {
            let level = idx / 2;
            let base = char_base(level);
            if !(base..base + radix(level)).contains(&c) {
                let expected = match level {
                    0 => "A-R",
                    _ if level.is_even() => "A-X",
                    _ => "0-9",
                };
                let reason = format!(
                    "has {:?} at position {}, expected {expected}",
                    char::from(c),
                    idx + 1,
                );
                return Err(invalid(&value, &reason));
            }
        }

        Ok(Locator { code: value, precision })
    }
}

impl ParseCoord for Locator {
    fn parse_coord(value: &str) -> Result<Self, Error> {
        Self::from_str(value)
    }
}

impl TryFrom<String> for Locator {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_str(&value)
    }
}

impl From<Locator> for String {
    fn from(value: Locator) -> Self {
        value.code
    }
}

impl AsRef<str> for Locator {
    fn as_ref(&self) -> &str {
        &self.code
    }
}

impl Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// Encodes a point as a locator string with `precision` characters.
///
/// # Errors
///
/// Returns [`Error::UnsupportedPrecision`] if `precision` is not one of
/// 2, 4, 6, 8, 10 or 12, and [`Error::OutOfRange`] if the point lies outside
/// the grid.
///
/// # Usage
///
/// ```
/// use qthloc::{maidenhead, Error, LatLon};
///
/// let coord = LatLon::create(-88.938, -178.292).unwrap();
///
/// assert_eq!(maidenhead::encode(&coord, 6).unwrap(), "AA01UB");
/// assert_eq!(maidenhead::encode(&coord, 14), Err(Error::UnsupportedPrecision(14)));
/// ```
pub fn encode(coord: &LatLon, precision: usize) -> Result<String, Error> {
    let precision = GridPrecision::try_from(precision)?;
    Locator::from_latlon(coord, precision).map(String::from)
}

/// Decodes a locator string to the point at the center of its square.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] if the string is not a valid locator.
pub fn decode(locator: &str) -> Result<LatLon, Error> {
    Locator::parse_str(locator).map(|locator| locator.to_latlon())
}
