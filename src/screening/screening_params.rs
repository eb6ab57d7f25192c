use strum_macros::Display;

/// Rejected screening parameters.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
pub enum ScreeningParamsError {
    /// A zero step would never advance through the window.
    ZeroStep,
    /// Threshold must be a finite, strictly positive number of km.
    InvalidThreshold,
}

impl std::error::Error for ScreeningParamsError {}

/// Time grid and distance threshold of a screening run.
#[derive(serde::Serialize, Debug, Clone, Copy, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ScreeningParams {
    window_hours: u32,
    step_minutes: u32,
    threshold_km: f64,
}

impl ScreeningParams {
    pub const DEFAULT_WINDOW_HOURS: u32 = 24;
    pub const DEFAULT_STEP_MINUTES: u32 = 10;
    pub const DEFAULT_THRESHOLD_KM: f64 = 50.0;

    /// Validated parameters.
    ///
    /// # Errors
    /// [`ScreeningParamsError`] for a zero step or an unusable threshold.
    /// A zero window is allowed and simply yields no steps.
    pub fn new(
        window_hours: u32,
        step_minutes: u32,
        threshold_km: f64,
    ) -> Result<Self, ScreeningParamsError> {
        if step_minutes == 0 {
            return Err(ScreeningParamsError::ZeroStep);
        }
        if !threshold_km.is_finite() || threshold_km <= 0.0 {
            return Err(ScreeningParamsError::InvalidThreshold);
        }
        Ok(Self { window_hours, step_minutes, threshold_km })
    }

    pub fn window_hours(&self) -> u32 { self.window_hours }
    pub fn step_minutes(&self) -> u32 { self.step_minutes }
    pub fn threshold_km(&self) -> f64 { self.threshold_km }

    /// Number of grid steps, `window_hours * 60 / step_minutes` (integer division).
    pub fn steps(&self) -> u32 { self.window_hours.saturating_mul(60) / self.step_minutes }

    /// Offset of `step` from the baseline in seconds.
    pub fn offset_seconds(&self, step: u32) -> f64 {
        f64::from(step) * f64::from(self.step_minutes) * 60.0
    }
}

impl Default for ScreeningParams {
    fn default() -> Self {
        Self {
            window_hours: Self::DEFAULT_WINDOW_HOURS,
            step_minutes: Self::DEFAULT_STEP_MINUTES,
            threshold_km: Self::DEFAULT_THRESHOLD_KM,
        }
    }
}
