use super::{CircularOrbitPropagator, PositionSample, Sgp4Propagator};
use crate::catalog::ElementSet;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use strum_macros::{Display, EnumString};

/// Mean motion (rev/day) assumed whenever an element set reports a
/// non-positive or unusable value. Roughly a low earth orbit.
pub const FALLBACK_MEAN_MOTION: f64 = 15.0;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Reasons a single propagation can fail. Callers treat every variant as
/// "skip this object for this instant".
#[derive(Debug, Display, Clone, PartialEq, Eq)]
pub enum PropagationError {
    /// Element lines could not be parsed.
    MalformedElements,
    /// Elements parsed but the propagator produced no usable state.
    Degenerate,
    /// The requested instant could not be represented.
    Time,
}

impl std::error::Error for PropagationError {}

/// Turns orbital elements plus a time offset into a position.
///
/// Implementations must be pure: the same element set, baseline and offset
/// always produce the same sample, and no state is carried between calls.
pub trait PositionPropagator: Send + Sync {
    /// Propagates `elements` to `baseline + offset_seconds`.
    ///
    /// # Errors
    /// Returns a [`PropagationError`] for malformed or numerically degenerate
    /// elements.
    fn propagate(
        &self,
        elements: &ElementSet,
        baseline: DateTime<Utc>,
        offset_seconds: f64,
    ) -> Result<PositionSample, PropagationError>;

    /// Mean motion in revolutions per day, as reported by the elements.
    ///
    /// # Errors
    /// Returns a [`PropagationError`] if the elements cannot be read.
    fn mean_motion(&self, elements: &ElementSet) -> Result<f64, PropagationError>;
}

/// Mean motion with the [`FALLBACK_MEAN_MOTION`] substituted for anything
/// non-positive, non-finite or unreadable. Always strictly positive.
pub fn effective_mean_motion(propagator: &dyn PositionPropagator, elements: &ElementSet) -> f64 {
    match propagator.mean_motion(elements) {
        Ok(n) if n.is_finite() && n > 0.0 => n,
        _ => FALLBACK_MEAN_MOTION,
    }
}

/// The absolute instant `baseline + offset_seconds`, at millisecond resolution.
///
/// # Errors
/// [`PropagationError::Time`] if the offset is not finite or overflows.
#[allow(clippy::cast_possible_truncation)]
pub fn offset_instant(
    baseline: DateTime<Utc>,
    offset_seconds: f64,
) -> Result<DateTime<Utc>, PropagationError> {
    if !offset_seconds.is_finite() {
        return Err(PropagationError::Time);
    }
    chrono::TimeDelta::try_milliseconds((offset_seconds * 1000.0).round() as i64)
        .and_then(|delta| baseline.checked_add_signed(delta))
        .ok_or(PropagationError::Time)
}

/// Orbital period in seconds for a mean motion in rev/day.
pub fn orbital_period_seconds(mean_motion: f64) -> f64 { SECONDS_PER_DAY / mean_motion }

/// Selects which propagator the service runs with.
#[derive(Debug, Display, EnumString, Clone, Copy, PartialEq, Eq)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum PropagatorKind {
    Sgp4,
    Circular,
}

impl PropagatorKind {
    pub fn build(self) -> Arc<dyn PositionPropagator> {
        match self {
            PropagatorKind::Sgp4 => Arc::new(Sgp4Propagator::new()),
            PropagatorKind::Circular => Arc::new(CircularOrbitPropagator::new()),
        }
    }
}
