//! Service configuration read from `SENTINEL_*` environment variables.

mod sentinel_config;
#[cfg(test)]
mod tests;

pub use sentinel_config::{ConfigError, SentinelConfig};
