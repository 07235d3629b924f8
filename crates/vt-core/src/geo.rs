//! Geographic coordinate type and distance math.
//!
//! `Coordinate` uses `f64` latitude/longitude.  The arrival radius is 50 m
//! by default, and a tracker holds tens of coordinates at most, so full
//! double precision costs nothing and keeps threshold comparisons exact at
//! that scale.

/// A WGS-84 geographic coordinate in degrees.
///
/// No validation beyond being a numeric pair: a malformed coordinate is a
/// programming error at the feed boundary, not a runtime failure of the
/// engine.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    #[inline]
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Pure and deterministic; symmetric (`a.distance_m(b) == b.distance_m(a)`)
    /// and zero for identical points.  Accurate to well under a metre at
    /// city scale, which is all the proximity thresholds need.
    pub fn distance_m(self, other: Coordinate) -> f64 {
        const R: f64 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// `true` when `other` lies within `radius_m` metres of `self`.
    #[inline]
    pub fn within_m(self, other: Coordinate, radius_m: f64) -> bool {
        self.distance_m(other) <= radius_m
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
