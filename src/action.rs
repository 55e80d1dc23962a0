//! Actions: user intents and async results

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::WeatherSnapshot;

/// Application actions with automatic category inference
#[derive(tui_dispatch::Action, Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[action(infer_categories)]
pub enum Action {
    // ===== Search category =====
    /// Search field text changed
    SearchInputChange(String),

    /// Submit the current search field contents
    SearchSubmit,

    /// Move keyboard focus to the search field
    SearchFocus,

    /// Move keyboard focus back to the dashboard
    SearchBlur,

    // ===== City category =====
    /// Submit an explicit city (startup `--city`)
    CitySubmit(String),

    // ===== Weather category =====
    /// Resubmit the most recently submitted city
    WeatherRefresh,

    // ===== Forecast category =====
    /// Result: provider returned a forecast for request `seq`
    ForecastDidLoad {
        seq: u64,
        snapshot: WeatherSnapshot,
    },

    /// Result: request `seq` ended in an error to display
    ForecastDidError { seq: u64, message: String },

    /// Show the hourly strip of the next forecast day
    ForecastDayNext,

    /// Show the hourly strip of the previous forecast day
    ForecastDayPrev,

    // ===== UI category =====
    /// Force a re-render (cursor movement in the search field)
    Render,

    // ===== Uncategorized (global) =====
    /// Periodic tick for the loading spinner
    Tick,

    /// Exit the application
    Quit,
}
