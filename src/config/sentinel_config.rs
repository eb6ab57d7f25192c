use crate::catalog::Classification;
use crate::propagation::PropagatorKind;
use crate::screening::{ScreeningParams, ScreeningParamsError};
use crate::sync::{FeedSpec, default_feeds};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use strum_macros::Display;

const DEFAULT_FEED_BASE_URL: &str = "https://celestrak.org/NORAD/elements/gp.php";
const DEFAULT_ASSET: &str = "ISS";
const DEFAULT_REPORT_PATH: &str = "conjunctions.json";
const DEFAULT_SCREEN_INTERVAL_SECS: u64 = 600;
const DEFAULT_SYNC_INTERVAL_SECS: u64 = 6 * 60 * 60;
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
const FALLBACK_WORKERS: usize = 4;

/// Malformed configuration values. Each variant carries the offending key
/// or value.
#[derive(Debug, Display, Clone, PartialEq)]
pub enum ConfigError {
    /// Value of the named key is not a valid (positive) number.
    InvalidNumber(&'static str),
    /// A `SENTINEL_FEEDS` entry is not of the form `group:classification`.
    InvalidFeed(String),
    /// Unknown `SENTINEL_PROPAGATOR` value.
    InvalidPropagator(String),
    /// Window, step and threshold do not form valid screening parameters.
    InvalidParams(ScreeningParamsError),
}

impl std::error::Error for ConfigError {}

impl From<ScreeningParamsError> for ConfigError {
    fn from(err: ScreeningParamsError) -> Self { ConfigError::InvalidParams(err) }
}

/// Everything the sentinel service needs to run.
#[derive(Debug, Clone, PartialEq)]
pub struct SentinelConfig {
    feed_base_url: String,
    feeds: Vec<FeedSpec>,
    asset: String,
    params: ScreeningParams,
    /// `None` keeps the catalog in memory only.
    catalog_path: Option<PathBuf>,
    report_path: PathBuf,
    propagator: PropagatorKind,
    screen_interval: Duration,
    sync_interval: Duration,
    http_timeout: Duration,
    screen_workers: usize,
}

impl SentinelConfig {
    /// Reads the configuration from the process environment.
    ///
    /// # Errors
    /// [`ConfigError`] if a set variable cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup. Unset or blank
    /// keys fall back to their defaults.
    ///
    /// # Errors
    /// [`ConfigError`] if a set value cannot be parsed.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let feeds = match get("SENTINEL_FEEDS") {
            Some(raw) => parse_feed_list(&raw)?,
            None => default_feeds(),
        };
        let propagator = match get("SENTINEL_PROPAGATOR") {
            Some(raw) => {
                PropagatorKind::from_str(&raw).map_err(|_| ConfigError::InvalidPropagator(raw))?
            }
            None => PropagatorKind::Sgp4,
        };
        let params = ScreeningParams::new(
            number(&get, "SENTINEL_WINDOW_HOURS", ScreeningParams::DEFAULT_WINDOW_HOURS)?,
            number(&get, "SENTINEL_STEP_MINUTES", ScreeningParams::DEFAULT_STEP_MINUTES)?,
            number(&get, "SENTINEL_THRESHOLD_KM", ScreeningParams::DEFAULT_THRESHOLD_KM)?,
        )?;
        let default_workers =
            std::thread::available_parallelism().map_or(FALLBACK_WORKERS, std::num::NonZeroUsize::get);

        Ok(Self {
            feed_base_url: get("SENTINEL_FEED_BASE_URL")
                .unwrap_or_else(|| DEFAULT_FEED_BASE_URL.to_string()),
            feeds,
            asset: get("SENTINEL_ASSET").unwrap_or_else(|| DEFAULT_ASSET.to_string()),
            params,
            catalog_path: get("SENTINEL_CATALOG_PATH").map(PathBuf::from),
            report_path: PathBuf::from(
                get("SENTINEL_REPORT_PATH").unwrap_or_else(|| DEFAULT_REPORT_PATH.to_string()),
            ),
            propagator,
            screen_interval: seconds(
                &get,
                "SENTINEL_SCREEN_INTERVAL_SECS",
                DEFAULT_SCREEN_INTERVAL_SECS,
            )?,
            sync_interval: seconds(&get, "SENTINEL_SYNC_INTERVAL_SECS", DEFAULT_SYNC_INTERVAL_SECS)?,
            http_timeout: seconds(&get, "SENTINEL_HTTP_TIMEOUT_SECS", DEFAULT_HTTP_TIMEOUT_SECS)?,
            screen_workers: positive(&get, "SENTINEL_SCREEN_WORKERS", default_workers)?,
        })
    }

    pub fn feed_base_url(&self) -> &str { &self.feed_base_url }
    pub fn feeds(&self) -> &[FeedSpec] { &self.feeds }
    pub fn asset(&self) -> &str { &self.asset }
    pub fn params(&self) -> ScreeningParams { self.params }
    pub fn catalog_path(&self) -> Option<&PathBuf> { self.catalog_path.as_ref() }
    pub fn report_path(&self) -> &PathBuf { &self.report_path }
    pub fn propagator(&self) -> PropagatorKind { self.propagator }
    pub fn screen_interval(&self) -> Duration { self.screen_interval }
    pub fn sync_interval(&self) -> Duration { self.sync_interval }
    pub fn http_timeout(&self) -> Duration { self.http_timeout }
    pub fn screen_workers(&self) -> usize { self.screen_workers }
}

/// Parses `group:classification` pairs separated by commas.
fn parse_feed_list(raw: &str) -> Result<Vec<FeedSpec>, ConfigError> {
    let feeds = raw
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| match entry.split_once(':') {
            Some((group, class)) if !group.trim().is_empty() => {
                Ok(FeedSpec::new(group.trim(), Classification::from_label(class)))
            }
            _ => Err(ConfigError::InvalidFeed(entry.to_string())),
        })
        .collect::<Result<Vec<_>, _>>()?;
    if feeds.is_empty() {
        return Err(ConfigError::InvalidFeed(raw.to_string()));
    }
    Ok(feeds)
}

fn number<T: FromStr>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    get(key).map_or(Ok(default), |raw| raw.parse().map_err(|_| ConfigError::InvalidNumber(key)))
}

/// Like [`number`] but rejects zero.
fn positive<T: FromStr + PartialOrd + Default>(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    let value = number(get, key, default)?;
    if value > T::default() { Ok(value) } else { Err(ConfigError::InvalidNumber(key)) }
}

fn seconds(
    get: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: u64,
) -> Result<Duration, ConfigError> {
    positive(get, key, default).map(Duration::from_secs)
}
