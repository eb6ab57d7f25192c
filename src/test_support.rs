//! Fakes and fixtures shared by the unit tests.

use crate::catalog::{Classification, ElementSet, TrackedObject};
use crate::http_handler::FeedFetchError;
use crate::propagation::{
    GeodeticPoint, PositionPropagator, PositionSample, PropagationError, Vec3D, geodesy,
    offset_instant,
};
use crate::sync::{FeedSource, FeedSpec};
use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const ISS_NAME: &str = "ISS (ZARYA)";
pub const ISS_LINE1: &str = "1 25544U 98067A   08264.51782528 -.00002182  00000-0 -11606-4 0  2927";
pub const ISS_LINE2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.72125391563537";

/// A fixed "now" so nothing in the tests depends on the wall clock.
pub fn test_now() -> DateTime<Utc> { Utc.with_ymd_and_hms(2008, 9, 20, 12, 0, 0).unwrap() }

pub fn iss_elements() -> ElementSet { ElementSet::new(ISS_LINE1, ISS_LINE2) }

/// Three-line text for a list of (name, line1, line2).
pub fn feed_text(records: &[(&str, &str, &str)], line_end: &str) -> String {
    records
        .iter()
        .flat_map(|(name, l1, l2)| [*name, *l1, *l2])
        .map(|line| format!("{line}{line_end}"))
        .collect()
}

/// Element set whose first line doubles as a lookup key for the scripted
/// propagator.
pub fn scripted_elements(key: &str) -> ElementSet { ElementSet::new(key, format!("{key}-2")) }

pub fn object(id: u64, name: &str, classification: Classification) -> TrackedObject {
    TrackedObject::new(id, name, scripted_elements(name), classification)
}

type Trajectory = Box<dyn Fn(f64) -> Option<Vec3D> + Send + Sync>;

/// Propagator driven by closures keyed by `line1`.
///
/// A trajectory returning `None` simulates a propagation failure at that
/// offset, an unknown key fails every call.
#[derive(Default)]
pub struct ScriptedPropagator {
    trajectories: HashMap<String, Trajectory>,
    mean_motions: HashMap<String, f64>,
    calls: Mutex<Vec<(String, f64)>>,
}

impl ScriptedPropagator {
    pub fn new() -> Self { Self::default() }

    pub fn with_trajectory(
        mut self,
        key: &str,
        trajectory: impl Fn(f64) -> Option<Vec3D> + Send + Sync + 'static,
    ) -> Self {
        self.trajectories.insert(key.to_string(), Box::new(trajectory));
        self
    }

    pub fn with_mean_motion(mut self, key: &str, mean_motion: f64) -> Self {
        self.mean_motions.insert(key.to_string(), mean_motion);
        self
    }

    /// Offsets requested so far for `key`, in call order.
    pub fn offsets_for(&self, key: &str) -> Vec<f64> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| k == key)
            .map(|(_, offset)| *offset)
            .collect()
    }

    pub fn into_arc(self) -> Arc<dyn PositionPropagator> { Arc::new(self) }
}

impl PositionPropagator for ScriptedPropagator {
    fn propagate(
        &self,
        elements: &ElementSet,
        baseline: DateTime<Utc>,
        offset_seconds: f64,
    ) -> Result<PositionSample, PropagationError> {
        self.calls.lock().unwrap().push((elements.line1().to_string(), offset_seconds));
        let trajectory =
            self.trajectories.get(elements.line1()).ok_or(PropagationError::MalformedElements)?;
        let position = trajectory(offset_seconds).ok_or(PropagationError::Degenerate)?;
        let at = offset_instant(baseline, offset_seconds)?;
        Ok(PositionSample::new(at, position, geodesy::inertial_to_geodetic(position, at)))
    }

    fn mean_motion(&self, elements: &ElementSet) -> Result<f64, PropagationError> {
        self.mean_motions.get(elements.line1()).copied().ok_or(PropagationError::MalformedElements)
    }
}

/// Trajectory that never moves.
pub fn fixed(x: f64, y: f64, z: f64) -> impl Fn(f64) -> Option<Vec3D> + Send + Sync + 'static {
    move |_| Some(Vec3D::new(x, y, z))
}

pub fn geodetic_is_sane(point: &GeodeticPoint) -> bool {
    (-90.0..=90.0).contains(&point.latitude()) && (-180.0..=180.0).contains(&point.longitude())
}

/// Feed source serving canned text; sources listed in `failing` error out.
#[derive(Default)]
pub struct StaticFeedSource {
    feeds: Mutex<HashMap<String, String>>,
    failing: Vec<String>,
}

impl StaticFeedSource {
    pub fn new() -> Self { Self::default() }

    pub fn with_feed(self, source: &str, raw: impl Into<String>) -> Self {
        self.feeds.lock().unwrap().insert(source.to_string(), raw.into());
        self
    }

    pub fn with_failure(mut self, source: &str) -> Self {
        self.failing.push(source.to_string());
        self
    }

    pub fn replace_feed(&self, source: &str, raw: impl Into<String>) {
        self.feeds.lock().unwrap().insert(source.to_string(), raw.into());
    }
}

#[async_trait]
impl FeedSource for StaticFeedSource {
    async fn fetch(&self, feed: &FeedSpec) -> Result<String, FeedFetchError> {
        if self.failing.iter().any(|s| s == feed.source()) {
            return Err(FeedFetchError::NoConnection);
        }
        self.feeds
            .lock()
            .unwrap()
            .get(feed.source())
            .cloned()
            .ok_or(FeedFetchError::ClientError(404))
    }
}
