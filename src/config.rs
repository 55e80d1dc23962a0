//! Runtime configuration: provider credentials, forecast horizon, hourly window
//! and the policy for out-of-order responses.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";
pub const DEFAULT_FORECAST_DAYS: u8 = 3;
/// WeatherAPI.com serves at most 14 forecast days.
pub const MAX_FORECAST_DAYS: u8 = 14;
pub const HOURS_PER_DAY: usize = 24;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing WeatherAPI key (pass --api-key or set WEATHERAPI_KEY)")]
    MissingApiKey,
    #[error("forecast days must be between 1 and {MAX_FORECAST_DAYS}, got {0}")]
    InvalidForecastDays(u8),
    #[error("hour window {start}+{len} does not fit in a 24 hour day")]
    InvalidHourWindow { start: usize, len: usize },
}

/// Connection settings for the weather provider
#[derive(Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    pub api_key: String,

    #[serde(default = "default_forecast_days")]
    pub forecast_days: u8,

    /// Transport-level timeout; `None` lets a hung request hang.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

const fn default_forecast_days() -> u8 {
    DEFAULT_FORECAST_DAYS
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            base_url: default_base_url(),
            api_key: api_key.into(),
            forecast_days: default_forecast_days(),
            timeout_secs: None,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::MissingApiKey);
        }
        if !(1..=MAX_FORECAST_DAYS).contains(&self.forecast_days) {
            return Err(ConfigError::InvalidForecastDays(self.forecast_days));
        }
        Ok(())
    }
}

// Keep the key out of logs and debug dumps.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("forecast_days", &self.forecast_days)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

/// Range of hourly slots shown for the selected forecast day
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct HourWindow {
    pub start: usize,
    pub len: usize,
}

impl Default for HourWindow {
    fn default() -> Self {
        Self { start: 15, len: 5 }
    }
}

impl HourWindow {
    pub fn new(start: usize, len: usize) -> Result<Self, ConfigError> {
        let window = Self { start, len };
        window.validate()?;
        Ok(window)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let fits = self
            .start
            .checked_add(self.len)
            .is_some_and(|end| end <= HOURS_PER_DAY);
        if self.len == 0 || !fits {
            return Err(ConfigError::InvalidHourWindow {
                start: self.start,
                len: self.len,
            });
        }
        Ok(())
    }

    /// Slot indices covered by the window, in order. A window that was never
    /// validated (e.g. replayed state) is clipped to the day.
    pub fn indices(&self) -> std::ops::Range<usize> {
        let start = self.start.min(HOURS_PER_DAY);
        start..start.saturating_add(self.len).min(HOURS_PER_DAY)
    }
}

/// Which completed request is allowed to update the display
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ResponseOrdering {
    /// Only the result of the most recent submission is applied; older
    /// results are dropped when they arrive.
    #[default]
    LatestRequest,
    /// Every result is applied as it arrives, so the last response to land
    /// wins even when it answers an older submission.
    LastResponse,
}

impl ResponseOrdering {
    /// Whether a result tagged `seq` may replace the display, given the
    /// latest issued sequence number
    pub fn accepts(self, seq: u64, latest_seq: u64) -> bool {
        match self {
            ResponseOrdering::LatestRequest => seq == latest_seq,
            ResponseOrdering::LastResponse => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_config_defaults() {
        let config = ProviderConfig::new("KEY");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.forecast_days, 3);
        assert_eq!(config.timeout_secs, None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_api_key_is_rejected() {
        let config = ProviderConfig::new("   ");
        assert_eq!(config.validate(), Err(ConfigError::MissingApiKey));
    }

    #[test]
    fn forecast_days_out_of_range() {
        let mut config = ProviderConfig::new("KEY");
        config.forecast_days = 0;
        assert_eq!(config.validate(), Err(ConfigError::InvalidForecastDays(0)));
        config.forecast_days = 15;
        assert_eq!(config.validate(), Err(ConfigError::InvalidForecastDays(15)));
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = ProviderConfig::new("super-secret");
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn deserialize_fills_defaults() {
        let config: ProviderConfig = serde_json::from_str(r#"{"api_key":"KEY"}"#).unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.forecast_days, DEFAULT_FORECAST_DAYS);
    }

    #[test]
    fn hour_window_default_covers_afternoon() {
        let window = HourWindow::default();
        assert_eq!(window.indices().collect::<Vec<_>>(), vec![15, 16, 17, 18, 19]);
    }

    #[test]
    fn hour_window_bounds() {
        assert!(HourWindow::new(0, 24).is_ok());
        assert!(HourWindow::new(20, 4).is_ok());
        assert_eq!(
            HourWindow::new(20, 5),
            Err(ConfigError::InvalidHourWindow { start: 20, len: 5 })
        );
        assert!(HourWindow::new(3, 0).is_err());
    }

    #[test]
    fn hour_window_huge_values_are_rejected() {
        assert_eq!(
            HourWindow::new(usize::MAX, 2),
            Err(ConfigError::InvalidHourWindow {
                start: usize::MAX,
                len: 2
            })
        );
        assert!(HourWindow::new(2, usize::MAX).is_err());
        assert!(HourWindow::new(24, 1).is_err());
    }

    #[test]
    fn unvalidated_window_indices_are_clipped() {
        let replayed = HourWindow {
            start: usize::MAX,
            len: 5,
        };
        assert!(replayed.indices().is_empty());

        let overlong = HourWindow { start: 20, len: 10 };
        assert_eq!(overlong.indices(), 20..24);
    }

    #[test]
    fn ordering_policies() {
        assert!(ResponseOrdering::LatestRequest.accepts(2, 2));
        assert!(!ResponseOrdering::LatestRequest.accepts(1, 2));
        assert!(ResponseOrdering::LastResponse.accepts(1, 2));
    }
}
