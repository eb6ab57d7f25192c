//! SGP4 propagation using satkit

use super::propagator::offset_instant;
use super::{PositionPropagator, PositionSample, PropagationError, TleFields, Vec3D, geodesy};
use crate::catalog::ElementSet;
use chrono::{DateTime, Datelike, Timelike, Utc};
use satkit::sgp4::{SGP4Error, sgp4};

/// Standard SGP4/SDP4 propagator. Positions are TEME, converted to km.
///
/// Element sets are parsed on every call, so the propagator holds no state
/// and can be shared freely between screening workers.
#[derive(Debug, Default, Clone, Copy)]
pub struct Sgp4Propagator;

impl Sgp4Propagator {
    pub fn new() -> Self { Self }
}

impl PositionPropagator for Sgp4Propagator {
    fn propagate(
        &self,
        elements: &ElementSet,
        baseline: DateTime<Utc>,
        offset_seconds: f64,
    ) -> Result<PositionSample, PropagationError> {
        let mut tle = parse_tle(elements)?;
        let at = offset_instant(baseline, offset_seconds)?;

        let (pos, _, errs) = sgp4(&mut tle, &[to_instant(at)]);
        if errs.first() != Some(&SGP4Error::SGP4Success) {
            return Err(PropagationError::Degenerate);
        }
        // satkit reports TEME in metres
        let position = Vec3D::new(pos[(0, 0)] / 1000.0, pos[(1, 0)] / 1000.0, pos[(2, 0)] / 1000.0);
        // decayed or diverged
        if !position.is_finite() || position.abs() < geodesy::WGS84_A_KM * 0.5 {
            return Err(PropagationError::Degenerate);
        }
        Ok(PositionSample::new(at, position, geodesy::inertial_to_geodetic(position, at)))
    }

    fn mean_motion(&self, elements: &ElementSet) -> Result<f64, PropagationError> {
        Ok(parse_tle(elements)?.mean_motion)
    }
}

/// Full width of a TLE line, checksum included.
const TLE_LINE_WIDTH: usize = 69;

fn parse_tle(elements: &ElementSet) -> Result<satkit::TLE, PropagationError> {
    // satkit slices fixed columns, screen out short or mislabelled lines first
    TleFields::parse(elements)?;
    if elements.line1().trim_end().len() < TLE_LINE_WIDTH
        || elements.line2().trim_end().len() < TLE_LINE_WIDTH
    {
        return Err(PropagationError::MalformedElements);
    }
    satkit::TLE::load_2line(elements.line1(), elements.line2())
        .map_err(|_| PropagationError::MalformedElements)
}

#[allow(clippy::cast_possible_wrap)]
fn to_instant(at: DateTime<Utc>) -> satkit::Instant {
    let seconds = f64::from(at.second()) + f64::from(at.nanosecond()) * 1e-9;
    satkit::Instant::from_datetime(
        at.year(),
        at.month() as i32,
        at.day() as i32,
        at.hour() as i32,
        at.minute() as i32,
        seconds,
    )
}
