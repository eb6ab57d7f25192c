use super::Vec3D;
use chrono::{DateTime, Utc};

/// Latitude/longitude in degrees and altitude in km above the WGS84 ellipsoid.
#[derive(serde::Serialize, serde::Deserialize, Debug, PartialEq, Clone, Copy)]
pub struct GeodeticPoint {
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl GeodeticPoint {
    pub const fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self { latitude, longitude, altitude }
    }

    pub const fn latitude(&self) -> f64 { self.latitude }
    pub const fn longitude(&self) -> f64 { self.longitude }
    pub const fn altitude(&self) -> f64 { self.altitude }
}

/// Result of propagating one element set to one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PositionSample {
    /// Instant this sample describes.
    epoch: DateTime<Utc>,
    /// Inertial position in km (TEME for SGP4).
    position: Vec3D,
    /// Derived ground position.
    geodetic: GeodeticPoint,
}

impl PositionSample {
    pub fn new(epoch: DateTime<Utc>, position: Vec3D, geodetic: GeodeticPoint) -> Self {
        Self { epoch, position, geodetic }
    }

    pub fn epoch(&self) -> DateTime<Utc> { self.epoch }
    pub fn position(&self) -> &Vec3D { &self.position }
    pub fn geodetic(&self) -> &GeodeticPoint { &self.geodetic }

    /// Straight-line distance in km between two samples.
    pub fn distance_to(&self, other: &PositionSample) -> f64 {
        self.position.euclid_distance(&other.position)
    }
}
