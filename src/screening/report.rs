use super::{ConjunctionWarning, ScreeningParams};
use chrono::{DateTime, Utc};
use std::path::Path;

/// Serializable summary of one screening run.
#[derive(serde::Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningReport {
    asset: String,
    generated_at: DateTime<Utc>,
    params: ScreeningParams,
    count: usize,
    /// `true` whenever at least one warning was raised.
    alert: bool,
    warnings: Vec<ConjunctionWarning>,
}

impl ScreeningReport {
    pub fn new(
        asset: impl Into<String>,
        generated_at: DateTime<Utc>,
        params: ScreeningParams,
        warnings: Vec<ConjunctionWarning>,
    ) -> Self {
        Self {
            asset: asset.into(),
            generated_at,
            params,
            count: warnings.len(),
            alert: !warnings.is_empty(),
            warnings,
        }
    }

    pub fn asset(&self) -> &str { &self.asset }
    pub fn generated_at(&self) -> DateTime<Utc> { self.generated_at }
    pub fn params(&self) -> &ScreeningParams { &self.params }
    pub fn count(&self) -> usize { self.count }
    pub fn alert(&self) -> bool { self.alert }
    pub fn warnings(&self) -> &[ConjunctionWarning] { &self.warnings }

    /// Writes the report as pretty printed JSON, replacing `path`.
    pub async fn write_json(&self, path: &Path) -> std::io::Result<()> {
        let json = serde_json::to_vec_pretty(self).map_err(std::io::Error::other)?;
        tokio::fs::write(path, json).await
    }
}
