use super::{GeodeticPoint, Vec3D};
use chrono::{DateTime, Utc};
use std::f64::consts::TAU;

/// WGS84 equatorial radius in km.
pub const WGS84_A_KM: f64 = 6378.137;
/// WGS84 flattening.
pub const WGS84_F: f64 = 1.0 / 298.257_223_563;
/// Earth gravitational parameter in km^3/s^2.
pub const MU_EARTH_KM3_S2: f64 = 398_600.441_8;

const JD_UNIX_EPOCH: f64 = 2_440_587.5;
const JD_J2000: f64 = 2_451_545.0;
const GEODETIC_ITERATIONS: usize = 6;

/// Julian date of a UTC instant.
#[allow(clippy::cast_precision_loss)]
pub fn julian_date(t: DateTime<Utc>) -> f64 {
    let seconds = t.timestamp() as f64 + f64::from(t.timestamp_subsec_nanos()) * 1e-9;
    JD_UNIX_EPOCH + seconds / 86_400.0
}

/// Greenwich mean sidereal time in radians, in `[0, 2pi)` (IAU 1982 model).
pub fn gmst(t: DateTime<Utc>) -> f64 {
    let tu = (julian_date(t) - JD_J2000) / 36_525.0;
    let seconds = 67_310.548_41
        + (876_600.0 * 3600.0 + 8_640_184.812_866) * tu
        + 0.093_104 * tu.powi(2)
        - 6.2e-6 * tu.powi(3);
    (seconds.rem_euclid(86_400.0) / 240.0).to_radians().rem_euclid(TAU)
}

/// Rotates an inertial (TEME-like) vector into the earth fixed frame by the
/// sidereal angle `theta`. Polar motion is ignored.
pub fn inertial_to_earth_fixed(v: Vec3D, theta: f64) -> Vec3D {
    let (sin_t, cos_t) = theta.sin_cos();
    Vec3D::new(cos_t * v.x() + sin_t * v.y(), -sin_t * v.x() + cos_t * v.y(), v.z())
}

/// Converts an earth fixed position (km) to geodetic coordinates on WGS84.
pub fn earth_fixed_to_geodetic(v: Vec3D) -> GeodeticPoint {
    let e2 = WGS84_F * (2.0 - WGS84_F);
    let p = v.x().hypot(v.y());
    let longitude = v.y().atan2(v.x());

    let mut latitude = v.z().atan2(p * (1.0 - e2));
    for _ in 0..GEODETIC_ITERATIONS {
        let sin_lat = latitude.sin();
        let n = WGS84_A_KM / (1.0 - e2 * sin_lat * sin_lat).sqrt();
        latitude = (v.z() + e2 * n * sin_lat).atan2(p);
    }
    let (sin_lat, cos_lat) = latitude.sin_cos();
    let altitude =
        p * cos_lat + v.z() * sin_lat - WGS84_A_KM * (1.0 - e2 * sin_lat * sin_lat).sqrt();

    GeodeticPoint::new(latitude.to_degrees(), longitude.to_degrees(), altitude)
}

/// Shortcut for inertial position at instant `t` straight to geodetic.
pub fn inertial_to_geodetic(v: Vec3D, t: DateTime<Utc>) -> GeodeticPoint {
    earth_fixed_to_geodetic(inertial_to_earth_fixed(v, gmst(t)))
}
