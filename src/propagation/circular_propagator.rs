use super::propagator::offset_instant;
use super::{PositionPropagator, PositionSample, PropagationError, TleFields, Vec3D, geodesy};
use crate::catalog::ElementSet;
use chrono::{DateTime, Utc};
use std::f64::consts::TAU;

/// Propagates a circular, unperturbed Kepler orbit.
///
/// Inclination, node, argument of perigee, mean anomaly and mean motion are
/// read from the TLE columns; eccentricity and all perturbations are
/// ignored. Positions are only accurate to a few hundred km after a day, but
/// the model is fully deterministic and needs no external data.
#[derive(Debug, Default, Clone, Copy)]
pub struct CircularOrbitPropagator;

impl CircularOrbitPropagator {
    pub fn new() -> Self { Self }

    /// Inertial position at `at` for already parsed elements.
    #[allow(clippy::cast_precision_loss)]
    pub fn position_at(fields: &TleFields, at: DateTime<Utc>) -> Result<Vec3D, PropagationError> {
        if !fields.mean_motion().is_finite() || fields.mean_motion() <= 0.0 {
            return Err(PropagationError::Degenerate);
        }
        let n_rad_s = fields.mean_motion() * TAU / 86_400.0;
        let semi_major_km = (geodesy::MU_EARTH_KM3_S2 / (n_rad_s * n_rad_s)).cbrt();
        let dt = (at - fields.epoch())
            .num_microseconds()
            .ok_or(PropagationError::Time)? as f64
            * 1e-6;

        let u = (fields.arg_perigee() + fields.mean_anomaly()).to_radians() + n_rad_s * dt;
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_o, cos_o) = fields.raan().to_radians().sin_cos();
        let (sin_i, cos_i) = fields.inclination().to_radians().sin_cos();

        let position = Vec3D::new(
            cos_o * cos_u - sin_o * sin_u * cos_i,
            sin_o * cos_u + cos_o * sin_u * cos_i,
            sin_u * sin_i,
        ) * semi_major_km;
        if position.is_finite() { Ok(position) } else { Err(PropagationError::Degenerate) }
    }
}

impl PositionPropagator for CircularOrbitPropagator {
    fn propagate(
        &self,
        elements: &ElementSet,
        baseline: DateTime<Utc>,
        offset_seconds: f64,
    ) -> Result<PositionSample, PropagationError> {
        let fields = TleFields::parse(elements)?;
        let at = offset_instant(baseline, offset_seconds)?;
        let position = Self::position_at(&fields, at)?;
        Ok(PositionSample::new(at, position, geodesy::inertial_to_geodetic(position, at)))
    }

    fn mean_motion(&self, elements: &ElementSet) -> Result<f64, PropagationError> {
        Ok(TleFields::parse(elements)?.mean_motion())
    }
}
