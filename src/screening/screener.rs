use super::{ConjunctionWarning, ScreeningParams};
use crate::catalog::TrackedObject;
use crate::propagation::{PositionPropagator, PositionSample, PropagationError};
use crate::{error, event, info, warn};
use chrono::{DateTime, Utc};
use futures::future::join_all;
use std::ops::Range;
use std::sync::Arc;

/// Approaches at or below this distance are never reported.
const MIN_SEPARATION_KM: f64 = 0.1;

/// First object whose name contains `selector`, ignoring case.
pub fn select_asset<'a>(catalog: &'a [TrackedObject], selector: &str) -> Option<&'a TrackedObject> {
    let needle = selector.to_lowercase();
    catalog.iter().find(|obj| obj.name().to_lowercase().contains(&needle))
}

/// Rounds half away from zero to `decimals` places.
fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10_f64.powi(decimals);
    (value * scale).round() / scale
}

/// Counters of one screening pass, logged once at the end.
#[derive(Debug, Default, Clone, Copy)]
struct ScreeningStats {
    skipped_steps: usize,
    skipped_pairs: usize,
}

impl ScreeningStats {
    fn merge(self, other: Self) -> Self {
        Self {
            skipped_steps: self.skipped_steps + other.skipped_steps,
            skipped_pairs: self.skipped_pairs + other.skipped_pairs,
        }
    }
}

/// Grid search for close approaches between a protected asset and every
/// other catalog member.
///
/// Every step propagates the asset once and each other object once at the
/// same offset, so a run costs `steps * catalog.len()` propagations. No
/// warnings are merged: an object close for three consecutive steps yields
/// three warnings.
#[derive(Clone)]
pub struct ConjunctionScreener {
    propagator: Arc<dyn PositionPropagator>,
}

impl ConjunctionScreener {
    pub fn new(propagator: Arc<dyn PositionPropagator>) -> Self { Self { propagator } }

    pub fn propagator(&self) -> Arc<dyn PositionPropagator> { Arc::clone(&self.propagator) }

    /// Screens the whole window sequentially, warnings ordered by step and
    /// then by catalog order.
    ///
    /// # Arguments
    /// - `catalog`: snapshot to screen, including the asset itself.
    /// - `selector`: case-insensitive substring of the asset's name.
    /// - `params`: time grid and threshold.
    /// - `now`: baseline of the grid.
    ///
    /// # Returns
    /// The warnings, or an empty list if no object matches `selector`.
    pub fn screen(
        &self,
        catalog: &[TrackedObject],
        selector: &str,
        params: &ScreeningParams,
        now: DateTime<Utc>,
    ) -> Vec<ConjunctionWarning> {
        let Some(asset) = select_asset(catalog, selector) else {
            warn!("No catalog entry matches asset '{selector}', nothing to screen");
            return Vec::new();
        };
        let (warnings, stats) = self.screen_steps(catalog, asset, params, now, 0..params.steps());
        Self::log_summary(asset, warnings.len(), stats);
        warnings
    }

    /// Screens the current instant only. Warnings carry step 0 and zero
    /// hours from now.
    pub fn screen_now(
        &self,
        catalog: &[TrackedObject],
        selector: &str,
        threshold_km: f64,
        now: DateTime<Utc>,
    ) -> Vec<ConjunctionWarning> {
        let Some(asset) = select_asset(catalog, selector) else {
            warn!("No catalog entry matches asset '{selector}', nothing to screen");
            return Vec::new();
        };
        let mut stats = ScreeningStats::default();
        let warnings = match self.screen_step(catalog, asset, threshold_km, now, 0, 0.0, &mut stats)
        {
            Ok(warnings) => warnings,
            Err(err) => {
                warn!("Asset {} could not be propagated: {err}", asset.name());
                Vec::new()
            }
        };
        Self::log_summary(asset, warnings.len(), stats);
        warnings
    }

    /// Same result set as [`Self::screen`], with the step range split into
    /// contiguous chunks that run on blocking worker threads.
    ///
    /// The order of the returned warnings is unspecified.
    pub async fn screen_parallel(
        &self,
        catalog: Arc<[TrackedObject]>,
        selector: &str,
        params: ScreeningParams,
        now: DateTime<Utc>,
        workers: usize,
    ) -> Vec<ConjunctionWarning> {
        let Some(asset) = select_asset(&catalog, selector).cloned() else {
            warn!("No catalog entry matches asset '{selector}', nothing to screen");
            return Vec::new();
        };
        let steps = params.steps();
        let chunks = Self::chunk_steps(steps, workers);
        info!("Screening {} over {steps} steps on {} workers", asset.name(), chunks.len());

        let handles = chunks.into_iter().map(|range| {
            let screener = self.clone();
            let catalog_clone = Arc::clone(&catalog);
            let asset_clone = asset.clone();
            tokio::task::spawn_blocking(move || {
                screener.screen_steps(&catalog_clone, &asset_clone, &params, now, range)
            })
        });

        let mut warnings = Vec::new();
        let mut stats = ScreeningStats::default();
        for joined in join_all(handles).await {
            match joined {
                Ok((mut chunk_warnings, chunk_stats)) => {
                    warnings.append(&mut chunk_warnings);
                    stats = stats.merge(chunk_stats);
                }
                Err(err) => error!("Screening worker failed: {err}"),
            }
        }
        Self::log_summary(&asset, warnings.len(), stats);
        warnings
    }

    /// Splits `0..steps` into at most `workers` contiguous, non-empty ranges.
    fn chunk_steps(steps: u32, workers: usize) -> Vec<Range<u32>> {
        if steps == 0 {
            return Vec::new();
        }
        let workers = u32::try_from(workers).unwrap_or(u32::MAX).clamp(1, steps);
        let chunk = steps.div_ceil(workers);
        (0..steps).step_by(chunk as usize).map(|start| start..(start + chunk).min(steps)).collect()
    }

    fn screen_steps(
        &self,
        catalog: &[TrackedObject],
        asset: &TrackedObject,
        params: &ScreeningParams,
        now: DateTime<Utc>,
        steps: Range<u32>,
    ) -> (Vec<ConjunctionWarning>, ScreeningStats) {
        let mut warnings = Vec::new();
        let mut stats = ScreeningStats::default();
        for step in steps {
            let offset = params.offset_seconds(step);
            let threshold = params.threshold_km();
            match self.screen_step(catalog, asset, threshold, now, step, offset, &mut stats) {
                Ok(mut step_warnings) => warnings.append(&mut step_warnings),
                Err(err) => {
                    event!("Skipping step {step}: asset {} failed with {err}", asset.name());
                    stats.skipped_steps += 1;
                }
            }
        }
        (warnings, stats)
    }

    /// Compares every catalog member against the asset at one offset.
    ///
    /// # Errors
    /// The asset's own [`PropagationError`]; the caller skips the step.
    #[allow(clippy::too_many_arguments)]
    fn screen_step(
        &self,
        catalog: &[TrackedObject],
        asset: &TrackedObject,
        threshold_km: f64,
        now: DateTime<Utc>,
        step: u32,
        offset_seconds: f64,
        stats: &mut ScreeningStats,
    ) -> Result<Vec<ConjunctionWarning>, PropagationError> {
        let asset_pos = self.propagator.propagate(asset.elements(), now, offset_seconds)?;
        let hours_from_now = round_to(offset_seconds / 3600.0, 1);

        let mut warnings = Vec::new();
        for obj in catalog.iter().filter(|obj| obj.id() != asset.id()) {
            let obj_pos = match self.propagator.propagate(obj.elements(), now, offset_seconds) {
                Ok(sample) => sample,
                Err(err) => {
                    event!("Skipping {} at step {step}: {err}", obj.name());
                    stats.skipped_pairs += 1;
                    continue;
                }
            };
            let checked =
                Self::check_pair(&asset_pos, obj, &obj_pos, threshold_km, step, hours_from_now);
            if let Some(warning) = checked {
                warnings.push(warning);
            }
        }
        Ok(warnings)
    }

    fn check_pair(
        asset_pos: &PositionSample,
        obj: &TrackedObject,
        obj_pos: &PositionSample,
        threshold_km: f64,
        step: u32,
        hours_from_now: f64,
    ) -> Option<ConjunctionWarning> {
        let distance = asset_pos.distance_to(obj_pos);
        if distance > MIN_SEPARATION_KM && distance <= threshold_km {
            Some(ConjunctionWarning::new(
                obj.id(),
                obj.name(),
                obj.classification(),
                round_to(distance, 2),
                obj_pos.epoch(),
                hours_from_now,
                step,
            ))
        } else {
            None
        }
    }

    fn log_summary(asset: &TrackedObject, warnings: usize, stats: ScreeningStats) {
        info!("Screening of {} finished with {warnings} warnings", asset.name());
        if stats.skipped_steps > 0 || stats.skipped_pairs > 0 {
            warn!(
                "Screening skipped {} steps (asset failed) and {} object samples",
                stats.skipped_steps, stats.skipped_pairs
            );
        }
    }
}
