//! Conjunction screening of one protected asset against the catalog.

mod conjunction_warning;
mod report;
mod screener;
mod screening_params;

pub use conjunction_warning::{ConjunctionWarning, closest_per_object};
pub use report::ScreeningReport;
pub use screener::{ConjunctionScreener, select_asset};
pub use screening_params::{ScreeningParams, ScreeningParamsError};
