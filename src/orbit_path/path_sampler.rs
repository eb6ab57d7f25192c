use crate::catalog::TrackedObject;
use crate::event;
use crate::propagation::{
    GeodeticPoint, PositionPropagator, effective_mean_motion, orbital_period_seconds,
};
use chrono::{DateTime, Utc};
use std::sync::Arc;

/// Number of samples spread over one orbital period.
pub const PATH_POINTS: usize = 100;

/// One point of a sampled ground track.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PathPoint {
    latitude: f64,
    longitude: f64,
    altitude: f64,
    /// Seconds after the sampling baseline.
    offset_seconds: f64,
}

impl PathPoint {
    fn new(geodetic: &GeodeticPoint, offset_seconds: f64) -> Self {
        Self {
            latitude: geodetic.latitude(),
            longitude: geodetic.longitude(),
            altitude: geodetic.altitude(),
            offset_seconds,
        }
    }

    pub fn latitude(&self) -> f64 { self.latitude }
    pub fn longitude(&self) -> f64 { self.longitude }
    pub fn altitude(&self) -> f64 { self.altitude }
    pub fn offset_seconds(&self) -> f64 { self.offset_seconds }
}

/// Samples one full orbit of an object for display.
///
/// Paths are recomputed on every call. Offsets whose propagation fails are
/// dropped, so a path may hold fewer than [`PATH_POINTS`] points.
#[derive(Clone)]
pub struct OrbitPathSampler {
    propagator: Arc<dyn PositionPropagator>,
}

impl OrbitPathSampler {
    pub fn new(propagator: Arc<dyn PositionPropagator>) -> Self { Self { propagator } }

    /// Orbital period of `obj` in seconds, always finite and positive.
    pub fn period_seconds(&self, obj: &TrackedObject) -> f64 {
        orbital_period_seconds(effective_mean_motion(self.propagator.as_ref(), obj.elements()))
    }

    /// Geodetic points at `i * period / PATH_POINTS` for `i` in `0..PATH_POINTS`.
    #[allow(clippy::cast_precision_loss)]
    pub fn sample_path(&self, obj: &TrackedObject, now: DateTime<Utc>) -> Vec<PathPoint> {
        let spacing = self.period_seconds(obj) / PATH_POINTS as f64;
        let path: Vec<PathPoint> = (0..PATH_POINTS)
            .map(|i| i as f64 * spacing)
            .filter_map(|offset| {
                match self.propagator.propagate(obj.elements(), now, offset) {
                    Ok(sample) => Some(PathPoint::new(sample.geodetic(), offset)),
                    Err(err) => {
                        event!("Path of {} skips offset {offset:.0}s: {err}", obj.name());
                        None
                    }
                }
            })
            .collect();
        if path.len() < PATH_POINTS {
            event!("Path of {} has {}/{PATH_POINTS} points", obj.name(), path.len());
        }
        path
    }
}
