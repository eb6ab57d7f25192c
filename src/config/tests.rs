use super::{ConfigError, SentinelConfig};
use crate::catalog::Classification;
use crate::propagation::PropagatorKind;
use crate::screening::{ScreeningParams, ScreeningParamsError};
use crate::sync::default_feeds;
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;

fn config_from(pairs: &[(&str, &str)]) -> Result<SentinelConfig, ConfigError> {
    let env: HashMap<String, String> =
        pairs.iter().map(|(k, v)| ((*k).to_string(), (*v).to_string())).collect();
    SentinelConfig::from_lookup(|key| env.get(key).cloned())
}

#[test]
fn test_defaults() {
    let config = config_from(&[]).unwrap();
    assert_eq!(config.feed_base_url(), "https://celestrak.org/NORAD/elements/gp.php");
    assert_eq!(config.feeds(), default_feeds().as_slice());
    assert_eq!(config.asset(), "ISS");
    assert_eq!(config.params(), ScreeningParams::default());
    assert!(config.catalog_path().is_none());
    assert_eq!(config.report_path(), &PathBuf::from("conjunctions.json"));
    assert_eq!(config.propagator(), PropagatorKind::Sgp4);
    assert_eq!(config.screen_interval(), Duration::from_secs(600));
    assert_eq!(config.sync_interval(), Duration::from_secs(21_600));
    assert_eq!(config.http_timeout(), Duration::from_secs(30));
    assert!(config.screen_workers() >= 1);
}

#[test]
fn test_overrides() {
    let config = config_from(&[
        ("SENTINEL_FEED_BASE_URL", "http://localhost:8080/gp"),
        ("SENTINEL_FEEDS", " active:unknown , cosmos-2251-debris:DEBRIS,,"),
        ("SENTINEL_ASSET", "TIANGONG"),
        ("SENTINEL_WINDOW_HOURS", "12"),
        ("SENTINEL_STEP_MINUTES", "5"),
        ("SENTINEL_THRESHOLD_KM", "12.5"),
        ("SENTINEL_CATALOG_PATH", "/var/lib/sentinel/catalog.bin"),
        ("SENTINEL_REPORT_PATH", "/tmp/report.json"),
        ("SENTINEL_PROPAGATOR", "Circular"),
        ("SENTINEL_SCREEN_INTERVAL_SECS", "60"),
        ("SENTINEL_SYNC_INTERVAL_SECS", "3600"),
        ("SENTINEL_HTTP_TIMEOUT_SECS", "5"),
        ("SENTINEL_SCREEN_WORKERS", "3"),
    ])
    .unwrap();

    assert_eq!(config.feed_base_url(), "http://localhost:8080/gp");
    let feeds: Vec<(&str, Classification)> =
        config.feeds().iter().map(|f| (f.source(), f.classification())).collect();
    assert_eq!(
        feeds,
        [("active", Classification::Unknown), ("cosmos-2251-debris", Classification::Debris)]
    );
    assert_eq!(config.asset(), "TIANGONG");
    assert_eq!(config.params(), ScreeningParams::new(12, 5, 12.5).unwrap());
    assert_eq!(config.params().steps(), 144);
    assert_eq!(config.catalog_path(), Some(&PathBuf::from("/var/lib/sentinel/catalog.bin")));
    assert_eq!(config.report_path(), &PathBuf::from("/tmp/report.json"));
    assert_eq!(config.propagator(), PropagatorKind::Circular);
    assert_eq!(config.screen_interval(), Duration::from_secs(60));
    assert_eq!(config.sync_interval(), Duration::from_secs(3600));
    assert_eq!(config.http_timeout(), Duration::from_secs(5));
    assert_eq!(config.screen_workers(), 3);
}

#[test]
fn test_blank_values_fall_back_to_defaults() {
    let config = config_from(&[("SENTINEL_ASSET", "   "), ("SENTINEL_CATALOG_PATH", "")]).unwrap();
    assert_eq!(config.asset(), "ISS");
    assert!(config.catalog_path().is_none());
}

#[test]
fn test_invalid_numbers() {
    assert_eq!(
        config_from(&[("SENTINEL_WINDOW_HOURS", "a day")]),
        Err(ConfigError::InvalidNumber("SENTINEL_WINDOW_HOURS"))
    );
    assert_eq!(
        config_from(&[("SENTINEL_STEP_MINUTES", "-10")]),
        Err(ConfigError::InvalidNumber("SENTINEL_STEP_MINUTES"))
    );
    assert_eq!(
        config_from(&[("SENTINEL_SCREEN_INTERVAL_SECS", "0")]),
        Err(ConfigError::InvalidNumber("SENTINEL_SCREEN_INTERVAL_SECS"))
    );
    assert_eq!(
        config_from(&[("SENTINEL_SCREEN_WORKERS", "0")]),
        Err(ConfigError::InvalidNumber("SENTINEL_SCREEN_WORKERS"))
    );
}

#[test]
fn test_invalid_screening_params() {
    assert_eq!(
        config_from(&[("SENTINEL_STEP_MINUTES", "0")]),
        Err(ConfigError::InvalidParams(ScreeningParamsError::ZeroStep))
    );
    assert_eq!(
        config_from(&[("SENTINEL_THRESHOLD_KM", "-5")]),
        Err(ConfigError::InvalidParams(ScreeningParamsError::InvalidThreshold))
    );
    // an empty window is allowed, it just never warns
    assert_eq!(config_from(&[("SENTINEL_WINDOW_HOURS", "0")]).unwrap().params().steps(), 0);
}

#[test]
fn test_invalid_feeds_and_propagator() {
    assert_eq!(
        config_from(&[("SENTINEL_FEEDS", "stations")]),
        Err(ConfigError::InvalidFeed("stations".to_string()))
    );
    assert_eq!(
        config_from(&[("SENTINEL_FEEDS", ":debris")]),
        Err(ConfigError::InvalidFeed(":debris".to_string()))
    );
    assert_eq!(
        config_from(&[("SENTINEL_FEEDS", " , ,")]),
        Err(ConfigError::InvalidFeed(", ,".to_string()))
    );
    assert_eq!(
        config_from(&[("SENTINEL_PROPAGATOR", "orekit")]),
        Err(ConfigError::InvalidPropagator("orekit".to_string()))
    );
}
