use anyhow::Context;
use chrono_tz::Tz;
use serde::Deserialize;

/// One weather record: current conditions or a single day of the forecast.
///
/// Missing fields deserialize to zero, and zero means "not reported". The
/// renderer relies on that convention, so fields are deliberately not
/// `Option`s.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Weather {
    /// Epoch seconds.
    pub time: i64,
    pub summary: String,
    /// Condition key such as "clear-day" or "partly-cloudy-night".
    pub icon: String,

    pub temperature: f64,
    pub apparent_temperature: f64,
    pub temperature_max: f64,
    pub temperature_max_time: i64,
    pub temperature_min: f64,
    pub temperature_min_time: i64,
    pub apparent_temperature_max: f64,
    pub apparent_temperature_min: f64,

    /// Fraction in 0..=1.
    pub humidity: f64,
    pub precip_intensity: f64,
    /// Fraction in 0..=1.
    pub precip_probability: f64,
    pub precip_type: String,
    pub nearest_storm_distance: f64,
    pub nearest_storm_bearing: f64,
    pub wind_speed: f64,
    pub wind_bearing: f64,
    /// Fraction in 0..=1.
    pub cloud_cover: f64,
    /// Capped at 10 by the provider; 10 means unlimited.
    pub visibility: f64,
    pub pressure: f64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub title: String,
    pub description: String,
    /// Creation time, epoch seconds.
    pub time: i64,
    /// Expiry time, epoch seconds.
    pub expires: i64,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Flags {
    /// Region code selecting the unit profile, e.g. "us" or "si".
    pub units: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DataBlock {
    pub data: Vec<Weather>,
}

/// A parsed forecast document.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Forecast {
    /// IANA zone name of the forecast location.
    pub timezone: String,
    pub flags: Flags,
    pub currently: Weather,
    /// Index 0 is today, which duplicates `currently`.
    pub daily: DataBlock,
    pub alerts: Vec<Alert>,
}

impl Forecast {
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("Forecast JSON parsing failed")
    }

    /// Time zone for formatting timestamps, UTC when missing or unrecognized.
    pub fn time_zone(&self) -> Tz {
        if self.timezone.is_empty() {
            return Tz::UTC;
        }
        self.timezone.parse().unwrap_or_else(|_| {
            tracing::warn!(timezone = %self.timezone, "unknown time zone, using UTC");
            Tz::UTC
        })
    }
}
