//! Ground track sampling and live position snapshots.

mod live_positions;
mod path_sampler;

pub use live_positions::{LivePosition, live_positions};
pub use path_sampler::{OrbitPathSampler, PATH_POINTS, PathPoint};
