#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod catalog;
mod config;
mod http_handler;
mod keychain;
mod logger;
mod orbit_path;
mod propagation;
mod screening;
mod sync;
#[cfg(test)]
mod test_support;

use crate::catalog::TrackedObject;
use crate::config::SentinelConfig;
use crate::keychain::Keychain;
use crate::orbit_path::live_positions;
use crate::screening::{ScreeningReport, select_asset};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::time::{Instant, MissedTickBehavior, interval, interval_at};

#[tokio::main(flavor = "multi_thread", worker_threads = 4)]
async fn main() {
    let config = SentinelConfig::from_env()
        .unwrap_or_else(|e| fatal!("Invalid configuration: {e} ({e:?})"));
    let keychain = Keychain::new(&config)
        .await
        .unwrap_or_else(|e| fatal!("Initialisation failed: {e} ({e:?})"));
    info!(
        "Sentinel guarding '{}': {}h window, {} min steps, {} km threshold",
        config.asset(),
        config.params().window_hours(),
        config.params().step_minutes(),
        config.params().threshold_km()
    );

    let sync = keychain.catalog_sync();
    let result = sync.ingest(config.feeds()).await;
    if result.total_upserted() == 0 {
        warn!("Initial sync left the catalog without fresh elements");
    }

    let mut screen_ticker = interval(config.screen_interval());
    screen_ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    let mut sync_ticker =
        interval_at(Instant::now() + config.sync_interval(), config.sync_interval());
    sync_ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        tokio::select! {
            _ = screen_ticker.tick() => screen_catalog(&keychain, &config).await,
            _ = sync_ticker.tick() => {
                let resync = sync.ingest(config.feeds()).await;
                log!(
                    "Resync upserted {} objects, {} feeds failed, catalog holds {}",
                    resync.total_upserted(),
                    resync.failed_feeds(),
                    keychain.store().len().await
                );
            }
        }
    }
}

/// One screening pass over the current catalog snapshot, with the report
/// written to the configured path.
async fn screen_catalog(keychain: &Keychain, config: &SentinelConfig) {
    let snapshot: Arc<[TrackedObject]> = keychain.store().snapshot().await.into();
    if snapshot.is_empty() {
        warn!("Catalog is empty, skipping screening");
        return;
    }
    let now = Utc::now();
    let Some(asset) = select_asset(&snapshot, config.asset()).cloned() else {
        warn!("Asset '{}' not in catalog of {} objects", config.asset(), snapshot.len());
        return;
    };
    log_asset_state(keychain, &asset, now);

    let warnings = keychain
        .screener()
        .screen_parallel(
            Arc::clone(&snapshot),
            config.asset(),
            config.params(),
            now,
            config.screen_workers(),
        )
        .await;
    let report = ScreeningReport::new(asset.name(), now, config.params(), warnings);
    info!(
        "{} objects screened against {}: {} warnings",
        snapshot.len(),
        report.asset(),
        report.count()
    );
    for warning in report.warnings() {
        alert!(
            report.asset() => "{} ({}) within {:.2} km at {} (+{:.1}h)",
            warning.object_name(),
            warning.classification(),
            warning.distance_km(),
            warning.time_of_approach().format("%Y-%m-%d %H:%M:%S"),
            warning.hours_from_now()
        );
    }
    if let Err(e) = report.write_json(config.report_path()).await {
        error!("Writing report to {} failed: {e}", config.report_path().display());
    }
}

fn log_asset_state(keychain: &Keychain, asset: &TrackedObject, now: DateTime<Utc>) {
    let propagator = keychain.propagator();
    match live_positions(propagator.as_ref(), std::slice::from_ref(asset), now).first() {
        Some(pos) => log!(
            "{} at {:.2}, {:.2}, {:.1} km",
            pos.name(),
            pos.latitude(),
            pos.longitude(),
            pos.altitude()
        ),
        None => warn!("{} could not be positioned right now", asset.name()),
    }
    let sampler = keychain.path_sampler();
    let path = sampler.sample_path(asset, now);
    event!(
        "{} ground track: {} points over {:.0} s",
        asset.name(),
        path.len(),
        sampler.period_seconds(asset)
    );
}
