use super::PropagationError;
use crate::catalog::ElementSet;
use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use std::ops::Range;

const EPOCH_YEAR: Range<usize> = 18..20;
const EPOCH_DAY: Range<usize> = 20..32;
const INCLINATION: Range<usize> = 8..16;
const RAAN: Range<usize> = 17..25;
const ECCENTRICITY: Range<usize> = 26..33;
const ARG_PERIGEE: Range<usize> = 34..42;
const MEAN_ANOMALY: Range<usize> = 43..51;
const MEAN_MOTION: Range<usize> = 52..63;

/// The handful of classical elements that can be read straight from the
/// fixed TLE columns without running a propagator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TleFields {
    epoch: DateTime<Utc>,
    /// Degrees.
    inclination: f64,
    /// Right ascension of the ascending node, degrees.
    raan: f64,
    eccentricity: f64,
    /// Degrees.
    arg_perigee: f64,
    /// Degrees.
    mean_anomaly: f64,
    /// Revolutions per day.
    mean_motion: f64,
}

impl TleFields {
    /// Reads the fixed-width columns of both element lines.
    ///
    /// # Errors
    /// [`PropagationError::MalformedElements`] if a line has the wrong line
    /// number, is too short, or a column is not numeric.
    pub fn parse(elements: &ElementSet) -> Result<Self, PropagationError> {
        let line1 = elements.line1().trim_end();
        let line2 = elements.line2().trim_end();
        if !line1.starts_with('1') || !line2.starts_with('2') {
            return Err(PropagationError::MalformedElements);
        }
        let year = column::<i32>(line1, EPOCH_YEAR)?;
        let day = column::<f64>(line1, EPOCH_DAY)?;
        let eccentricity = line2
            .get(ECCENTRICITY)
            .and_then(|digits| format!("0.{}", digits.trim()).parse::<f64>().ok())
            .ok_or(PropagationError::MalformedElements)?;
        Ok(Self {
            epoch: epoch_from_tle(year, day)?,
            inclination: column(line2, INCLINATION)?,
            raan: column(line2, RAAN)?,
            eccentricity,
            arg_perigee: column(line2, ARG_PERIGEE)?,
            mean_anomaly: column(line2, MEAN_ANOMALY)?,
            mean_motion: column(line2, MEAN_MOTION)?,
        })
    }

    pub fn epoch(&self) -> DateTime<Utc> { self.epoch }
    pub fn inclination(&self) -> f64 { self.inclination }
    pub fn raan(&self) -> f64 { self.raan }
    pub fn eccentricity(&self) -> f64 { self.eccentricity }
    pub fn arg_perigee(&self) -> f64 { self.arg_perigee }
    pub fn mean_anomaly(&self) -> f64 { self.mean_anomaly }
    pub fn mean_motion(&self) -> f64 { self.mean_motion }
}

fn column<T: std::str::FromStr>(line: &str, range: Range<usize>) -> Result<T, PropagationError> {
    line.get(range)
        .and_then(|field| field.trim().parse::<T>().ok())
        .ok_or(PropagationError::MalformedElements)
}

/// Two digit years follow the NORAD convention: 57..=99 is the 1900s.
#[allow(clippy::cast_possible_truncation)]
fn epoch_from_tle(two_digit_year: i32, day_of_year: f64) -> Result<DateTime<Utc>, PropagationError> {
    let year = if two_digit_year < 57 { 2000 + two_digit_year } else { 1900 + two_digit_year };
    if !(1.0..367.0).contains(&day_of_year) {
        return Err(PropagationError::MalformedElements);
    }
    let jan_first = NaiveDate::from_ymd_opt(year, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .ok_or(PropagationError::MalformedElements)?
        .and_utc();
    let micros = ((day_of_year - 1.0) * 86_400.0 * 1e6).round() as i64;
    Ok(jan_first + TimeDelta::microseconds(micros))
}
