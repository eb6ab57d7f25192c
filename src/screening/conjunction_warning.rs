use crate::catalog::{Classification, ObjectId};
use chrono::{DateTime, Utc};
use std::collections::HashMap;

/// A predicted close approach between the protected asset and one object
/// at one grid step.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConjunctionWarning {
    object_id: ObjectId,
    object_name: String,
    classification: Classification,
    /// Km, rounded to two decimals.
    distance_km: f64,
    time_of_approach: DateTime<Utc>,
    /// Rounded to one decimal.
    hours_from_now: f64,
    step: u32,
}

impl ConjunctionWarning {
    pub fn new(
        object_id: ObjectId,
        object_name: impl Into<String>,
        classification: Classification,
        distance_km: f64,
        time_of_approach: DateTime<Utc>,
        hours_from_now: f64,
        step: u32,
    ) -> Self {
        Self {
            object_id,
            object_name: object_name.into(),
            classification,
            distance_km,
            time_of_approach,
            hours_from_now,
            step,
        }
    }

    pub fn object_id(&self) -> ObjectId { self.object_id }
    pub fn object_name(&self) -> &str { &self.object_name }
    pub fn classification(&self) -> Classification { self.classification }
    /// Separation in km, rounded to two decimals. The minimum separation and
    /// threshold checks run on the unrounded distance, so a raw 0.103 km is
    /// reported as exactly 0.1.
    pub fn distance_km(&self) -> f64 { self.distance_km }
    pub fn time_of_approach(&self) -> DateTime<Utc> { self.time_of_approach }
    pub fn hours_from_now(&self) -> f64 { self.hours_from_now }
    pub fn step(&self) -> u32 { self.step }
}

/// Reduces a warning list to the closest approach per object, ordered by
/// distance. Ties keep the earlier step.
///
/// The screening engine never calls this; it is for consumers that want
/// one line per object.
pub fn closest_per_object(warnings: &[ConjunctionWarning]) -> Vec<ConjunctionWarning> {
    let mut closest: HashMap<ObjectId, &ConjunctionWarning> = HashMap::new();
    for warning in warnings {
        closest
            .entry(warning.object_id)
            .and_modify(|best| {
                let closer = warning
                    .distance_km
                    .total_cmp(&best.distance_km)
                    .then(warning.step.cmp(&best.step))
                    .is_lt();
                if closer {
                    *best = warning;
                }
            })
            .or_insert(warning);
    }
    let mut reduced: Vec<ConjunctionWarning> = closest.into_values().cloned().collect();
    reduced.sort_by(|a, b| {
        a.distance_km.total_cmp(&b.distance_km).then(a.object_id.cmp(&b.object_id))
    });
    reduced
}
