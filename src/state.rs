//! Application state - single source of truth

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tui_dispatch::DataResource;

use crate::config::{HourWindow, ResponseOrdering};

/// Condition descriptor attached to current, daily and hourly readings
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Condition {
    pub text: String,
    /// Protocol-relative icon path, e.g. `//cdn.weatherapi.com/weather/64x64/day/113.png`
    pub icon: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Place {
    pub name: String,
    pub country: String,
    pub localtime: String,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct CurrentWeather {
    pub temp_c: f64,
    pub humidity: f64,
    pub wind_mph: f64,
    pub pressure_mb: f64,
    pub vis_km: f64,
    pub condition: Condition,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct DaySummary {
    pub maxtemp_c: f64,
    pub mintemp_c: f64,
    pub totalprecip_mm: f64,
    pub condition: Condition,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HourReading {
    /// Local time, `YYYY-MM-DD HH:MM`
    pub time: String,
    pub temp_c: f64,
    pub condition: Condition,
}

impl HourReading {
    /// The `HH:MM` part of the timestamp
    pub fn clock(&self) -> &str {
        self.time
            .rsplit_once(' ')
            .map(|(_, clock)| clock)
            .unwrap_or(&self.time)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ForecastDay {
    pub date: String,
    pub day: DaySummary,
    #[serde(default)]
    pub hour: Vec<HourReading>,
}

impl ForecastDay {
    /// Readings for each slot of `window`; a slot past the provider's hourly
    /// data yields `None`.
    pub fn hour_slots(&self, window: HourWindow) -> Vec<(usize, Option<&HourReading>)> {
        window
            .indices()
            .map(|slot| (slot, self.hour.get(slot)))
            .collect()
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct Forecast {
    pub forecastday: Vec<ForecastDay>,
}

/// One successful forecast response, kept exactly as the provider sent it
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WeatherSnapshot {
    pub location: Place,
    pub current: CurrentWeather,
    pub forecast: Forecast,
}

impl WeatherSnapshot {
    pub fn days(&self) -> &[ForecastDay] {
        &self.forecast.forecastday
    }
}

/// Query lifecycle: Empty (idle) → Loading → Loaded/Failed
pub type QueryState = DataResource<WeatherSnapshot>;

/// Spinner frames for the loading line.
pub const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];
pub const SPINNER_TICK_MS: u64 = 80;

/// Application state - everything the UI needs to render
#[derive(Clone, Debug, tui_dispatch::DebugState, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppState {
    // --- Query lifecycle ---
    #[debug(section = "Query", label = "Weather", debug_fmt)]
    pub weather: QueryState,

    /// City of the most recent submission
    #[debug(section = "Query", label = "City", debug_fmt)]
    pub active_city: Option<String>,

    /// Sequence number handed to the most recent submission (0 = none yet)
    #[debug(section = "Query", label = "Latest request")]
    pub latest_seq: u64,

    #[debug(section = "Query", label = "Ordering", debug_fmt)]
    pub ordering: ResponseOrdering,

    // --- Search input ---
    /// Uncommitted text in the search field
    #[debug(section = "Search", label = "Input", debug_fmt)]
    pub search_input: String,

    #[debug(section = "Search", label = "Focused")]
    pub search_focused: bool,

    // --- Forecast view ---
    #[debug(section = "Forecast", label = "Selected day")]
    pub selected_day: usize,

    #[debug(section = "Forecast", label = "Hours", debug_fmt)]
    pub hour_window: HourWindow,

    /// Spinner frame counter, advanced only while loading
    #[debug(skip)]
    pub tick_count: u32,
}

impl AppState {
    pub fn new(hour_window: HourWindow, ordering: ResponseOrdering) -> Self {
        Self {
            weather: DataResource::Empty,
            active_city: None,
            latest_seq: 0,
            ordering,
            search_input: String::new(),
            search_focused: true,
            selected_day: 0,
            hour_window,
            tick_count: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.weather.is_loading()
    }

    pub fn snapshot(&self) -> Option<&WeatherSnapshot> {
        self.weather.data()
    }

    pub fn forecast_len(&self) -> usize {
        self.snapshot().map_or(0, |snapshot| snapshot.days().len())
    }

    pub fn selected_forecast_day(&self) -> Option<&ForecastDay> {
        self.snapshot()
            .and_then(|snapshot| snapshot.days().get(self.selected_day))
    }

    /// Whether a result for request `seq` may update the display
    pub fn accepts(&self, seq: u64) -> bool {
        self.ordering.accepts(seq, self.latest_seq)
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.tick_count as usize % SPINNER_FRAMES.len()]
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(HourWindow::default(), ResponseOrdering::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reading(time: &str, temp_c: f64) -> HourReading {
        HourReading {
            time: time.into(),
            temp_c,
            condition: Condition::default(),
        }
    }

    #[test]
    fn test_hour_slots_past_data_are_empty() {
        let day = ForecastDay {
            date: "2026-10-16".into(),
            day: DaySummary::default(),
            hour: (0..17)
                .map(|h| reading(&format!("2026-10-16 {h:02}:00"), h as f64))
                .collect(),
        };

        let slots = day.hour_slots(HourWindow::default());

        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0].0, 15);
        assert_eq!(slots[0].1.map(|r| r.temp_c), Some(15.0));
        assert_eq!(slots[1].1.map(|r| r.temp_c), Some(16.0));
        assert!(slots[2].1.is_none());
        assert!(slots[4].1.is_none());
    }

    #[test]
    fn test_hour_clock() {
        assert_eq!(reading("2026-10-16 15:00", 0.0).clock(), "15:00");
        assert_eq!(reading("15:00", 0.0).clock(), "15:00");
    }

    #[test]
    fn test_default_state_is_idle() {
        let state = AppState::default();
        assert!(state.weather.is_empty());
        assert!(state.search_focused);
        assert_eq!(state.latest_seq, 0);
        assert_eq!(state.forecast_len(), 0);
        assert!(state.selected_forecast_day().is_none());
    }

    #[test]
    fn test_spinner_cycles() {
        let mut state = AppState::default();
        let first = state.spinner();
        state.tick_count = SPINNER_FRAMES.len() as u32;
        assert_eq!(state.spinner(), first);
        state.tick_count = 1;
        assert_ne!(state.spinner(), first);
    }
}
