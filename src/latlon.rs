use std::fmt::Display;

use crate::{Error, constants::{EARTH_MEAN_RADIUS_M, HD, QD}, maidenhead::{GridPrecision, Locator}};

/// Representation of a Latitude/Longitude point in decimal degrees. Can be
/// converted to/from a Maidenhead [`Locator`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawLatLon")
)]
pub struct LatLon {
    pub(crate) latitude: f64,
    pub(crate) longitude: f64,
}

impl LatLon {
    /// Internal-only constructor that doesn't check the bounds of lat/lon
    pub(crate) fn new(lat: f64, lon: f64) -> LatLon {
        Self {
            latitude: lat,
            longitude: lon,
        }
    }

    /// Tries to create a latitude/longitude point from a lat/lon pair. First checks if the
    /// values are valid:
    /// * Latitude must be in range [-90,90]
    /// * Longitude must be in range [-180,180)
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if either latitude or longitude are invalid.
    ///
    /// # Usage
    ///
    /// ```
    /// use qthloc::LatLon;
    ///
    /// let coord = LatLon::create(41.148591, -8.609848);
    ///
    /// assert!(coord.is_ok());
    ///
    /// let coord = coord.unwrap();
    ///
    /// assert_eq!(coord.latitude(), 41.148591);
    /// assert_eq!(coord.longitude(), -8.609848);
    ///
    /// let invalid_coord_lat = LatLon::create(100.0, 0.0);
    /// assert!(invalid_coord_lat.is_err());
    ///
    /// let invalid_coord_lon = LatLon::create(0.0, -200.0);
    /// assert!(invalid_coord_lon.is_err());
    ///
    /// // The antimeridian is written as -180
    /// assert!(LatLon::create(0.0, 180.0).is_err());
    /// ```
    pub fn create(lat: f64, lon: f64) -> Result<LatLon, Error> {
        check_range(lat, lon)?;
        Ok(LatLon::new(lat, lon))
    }

    /// Returns the latitude value.
    #[inline]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Returns the longitude value.
    #[inline]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Returns the distance in meters between two [`LatLon`] points
    /// using the [haversine formula](https://en.wikipedia.org/wiki/Haversine_formula).
    /// Uses the
    /// [mean radius of the Earth](https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius)
    /// in the calculation: `6371.0088`
    ///
    /// # Usage
    ///
    /// ```
    /// use qthloc::LatLon;
    ///
    /// let porto = LatLon::from_grid_square("IN51QD").unwrap();
    /// let lisbon = LatLon::from_grid_square("IM58JR").unwrap();
    ///
    /// let km = porto.haversine(&lisbon) / 1000.0;
    /// assert!((250.0..300.0).contains(&km));
    /// ```
    pub fn haversine(&self, other: &LatLon) -> f64 {
        let lat1_r = self.latitude.to_radians();
        let lat2_r = other.latitude.to_radians();

        2.0 * EARTH_MEAN_RADIUS_M * (
            ((other.latitude - self.latitude).to_radians() / 2.0).sin().powi(2) +
            lat1_r.cos() * lat2_r.cos() *
            ((other.longitude - self.longitude).to_radians() / 2.0).sin().powi(2)
        ).sqrt().asin()
    }

    /// Converts from [`LatLon`] to a Maidenhead [`Locator`]
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfRange`] if the point is outside the locator grid.
    ///
    /// # Usage
    ///
    /// ```
    /// use qthloc::{GridPrecision, LatLon};
    ///
    /// let coord = LatLon::create(41.148591, -8.609848).unwrap();
    ///
    /// let converted = coord.to_grid_square(GridPrecision::default()).unwrap();
    ///
    /// assert_eq!(converted.to_string(), "IN51QD");
    /// ```
    pub fn to_grid_square(&self, precision: GridPrecision) -> Result<Locator, Error> {
        Locator::from_latlon(self, precision)
    }

    /// Converts a Maidenhead locator string to the [`LatLon`] at the center of
    /// its square.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidFormat`] if the string is not a valid locator.
    pub fn from_grid_square(value: &str) -> Result<LatLon, Error> {
        Locator::parse_str(value).map(|locator| locator.to_latlon())
    }
}

pub(crate) fn check_range(lat: f64, lon: f64) -> Result<(), Error> {
    if !(-QD..=QD).contains(&lat) {
        log::debug!("Rejecting latitude {lat}");
        Err(Error::OutOfRange(format!("Latitude {lat} outside of valid range [-90, 90].")))
    } else if !(-HD..HD).contains(&lon) {
        log::debug!("Rejecting longitude {lon}");
        Err(Error::OutOfRange(format!("Longitude {lon} outside of valid range [-180, 180).")))
    } else {
        Ok(())
    }
}

impl From<&Locator> for LatLon {
    /// Takes the point at the center of the locator's square.
    fn from(value: &Locator) -> Self {
        value.to_latlon()
    }
}

/// Unchecked fields of a deserialized [`LatLon`]
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLatLon {
    #[serde(alias = "lat")]
    latitude: f64,
    #[serde(alias = "lon")]
    longitude: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLatLon> for LatLon {
    type Error = Error;

    fn try_from(value: RawLatLon) -> Result<Self, Self::Error> {
        LatLon::create(value.latitude, value.longitude)
    }
}

impl TryFrom<(f64, f64)> for LatLon {
    type Error = Error;

    /// Builds a point from a `(latitude, longitude)` tuple.
    fn try_from((lat, lon): (f64, f64)) -> Result<Self, Self::Error> {
        LatLon::create(lat, lon)
    }
}

impl Display for LatLon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut buf = ryu::Buffer::new();
        let lat = buf.format(self.latitude);
        let mut buf = ryu::Buffer::new();
        let lon = buf.format(self.longitude);
        write!(
            f,
            "{lat} {lon}",
        )
    }
}
