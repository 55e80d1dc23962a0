pub mod current_conditions;
pub mod forecast_days;
pub mod hourly_strip;
pub mod location_header;
pub mod search_bar;
pub mod weather_body;
pub mod weather_display;

// Re-export core Component trait
pub use tui_dispatch::Component;

pub use current_conditions::{CurrentConditions, CurrentConditionsProps};
pub use forecast_days::{ForecastDays, ForecastDaysProps};
pub use hourly_strip::{HourlyStrip, HourlyStripProps};
pub use location_header::{LocationHeader, LocationHeaderProps};
pub use search_bar::{SEARCH_BAR_HEIGHT, SearchBar, SearchBarProps};
pub use weather_body::{WeatherBody, WeatherBodyProps};
pub use weather_display::{ERROR_ICON, WeatherDisplay, WeatherDisplayProps};

/// Temperature as the provider reports it, e.g. `22.5°C`
pub fn celsius(value: f64) -> String {
    format!("{value}°C")
}
