use crate::catalog::{Classification, ObjectId, TrackedObject};
use crate::propagation::PositionPropagator;
use crate::warn;
use chrono::{DateTime, Utc};

/// Where an object is right now.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LivePosition {
    id: ObjectId,
    name: String,
    classification: Classification,
    latitude: f64,
    longitude: f64,
    altitude: f64,
}

impl LivePosition {
    pub fn id(&self) -> ObjectId { self.id }
    pub fn name(&self) -> &str { &self.name }
    pub fn classification(&self) -> Classification { self.classification }
    pub fn latitude(&self) -> f64 { self.latitude }
    pub fn longitude(&self) -> f64 { self.longitude }
    pub fn altitude(&self) -> f64 { self.altitude }
}

/// Current geodetic position of every catalog member, in catalog order.
/// Objects that fail to propagate are left out.
pub fn live_positions(
    propagator: &dyn PositionPropagator,
    catalog: &[TrackedObject],
    now: DateTime<Utc>,
) -> Vec<LivePosition> {
    let positions: Vec<LivePosition> = catalog
        .iter()
        .filter_map(|obj| {
            let sample = propagator.propagate(obj.elements(), now, 0.0).ok()?;
            let geodetic = sample.geodetic();
            Some(LivePosition {
                id: obj.id(),
                name: obj.name().to_string(),
                classification: obj.classification(),
                latitude: geodetic.latitude(),
                longitude: geodetic.longitude(),
                altitude: geodetic.altitude(),
            })
        })
        .collect();
    let skipped = catalog.len() - positions.len();
    if skipped > 0 {
        warn!("{skipped} of {} objects could not be positioned", catalog.len());
    }
    positions
}
