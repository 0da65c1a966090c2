/// Minutes per degree
pub(crate) const DM: f64 = 60.0;
/// Seconds per degree
pub(crate) const DS: f64 = 3600.0;
/// Degrees per quarter turn
pub(crate) const QD: f64 = 90.0;
/// Degrees per half turn
pub(crate) const HD: f64 = 2.0 * QD;
/// Degrees per turn
pub(crate) const TD: f64 = 2.0 * HD;

/// Mean radius of Earth in meters
///
/// <https://en.wikipedia.org/wiki/Earth_radius#Arithmetic_mean_radius>
pub(crate) const EARTH_MEAN_RADIUS_M: f64 = 6371.0088 * 1000.0;
