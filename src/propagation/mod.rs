//! Position propagation.
//!
//! The rest of the crate only talks to [`PositionPropagator`]. Two
//! implementations ship with it:
//!
//! - [`Sgp4Propagator`]: SGP4 through `satkit`, the default for live data.
//! - [`CircularOrbitPropagator`]: flies a circular Kepler orbit built from the
//!   raw TLE columns. Cheap, dependency free and good enough for offline runs.

mod circular_propagator;
pub(crate) mod geodesy;
mod position_sample;
mod propagator;
mod sgp4_propagator;
mod tle_fields;
mod vec3d;

pub use circular_propagator::CircularOrbitPropagator;
pub use position_sample::{GeodeticPoint, PositionSample};
pub use propagator::{
    FALLBACK_MEAN_MOTION, PositionPropagator, PropagationError, PropagatorKind,
    effective_mean_motion, offset_instant, orbital_period_seconds,
};
pub use sgp4_propagator::Sgp4Propagator;
pub use tle_fields::TleFields;
pub use vec3d::Vec3D;
