//! Shared fixtures for integration tests

#![allow(dead_code)]

use serde_json::{Value, json};
use weatherdash::state::{
    Condition, CurrentWeather, DaySummary, Forecast, ForecastDay, HourReading, Place,
    WeatherSnapshot,
};

pub const SUNNY_ICON: &str = "//cdn.weatherapi.com/weather/64x64/day/113.png";
pub const RAIN_ICON: &str = "//cdn.weatherapi.com/weather/64x64/day/302.png";

fn condition(text: &str, icon: &str) -> Condition {
    Condition {
        text: text.into(),
        icon: icon.into(),
    }
}

/// Forecast day with a full 24-hour strip (temperature = 10 + hour)
pub fn forecast_day(date: &str, max: f64, min: f64) -> ForecastDay {
    ForecastDay {
        date: date.into(),
        day: DaySummary {
            maxtemp_c: max,
            mintemp_c: min,
            totalprecip_mm: 0.4,
            condition: condition("Patchy rain nearby", RAIN_ICON),
        },
        hour: (0..24)
            .map(|h| HourReading {
                time: format!("{date} {h:02}:00"),
                temp_c: 10.0 + h as f64,
                condition: condition("Sunny", SUNNY_ICON),
            })
            .collect(),
    }
}

/// Snapshot for `name` with one forecast day per entry in `dates`
pub fn snapshot(name: &str, country: &str, dates: &[&str]) -> WeatherSnapshot {
    WeatherSnapshot {
        location: Place {
            name: name.into(),
            country: country.into(),
            localtime: "2026-10-16 14:05".into(),
        },
        current: CurrentWeather {
            temp_c: 18.0,
            humidity: 64.0,
            wind_mph: 9.4,
            pressure_mb: 1016.0,
            vis_km: 10.0,
            condition: condition("Partly cloudy", "//cdn.weatherapi.com/weather/64x64/day/116.png"),
        },
        forecast: Forecast {
            forecastday: dates
                .iter()
                .enumerate()
                .map(|(i, date)| forecast_day(date, 20.0 + i as f64, 10.0 + i as f64))
                .collect(),
        },
    }
}

/// Provider body for a successful forecast, including fields the client ignores
pub fn forecast_body(name: &str, country: &str, dates: &[&str]) -> Value {
    let days: Vec<Value> = dates
        .iter()
        .enumerate()
        .map(|(i, date)| {
            json!({
                "date": date,
                "date_epoch": 1_760_000_000 + i * 86_400,
                "day": {
                    "maxtemp_c": 20.0 + i as f64,
                    "mintemp_c": 10.0 + i as f64,
                    "totalprecip_mm": 0.4,
                    "condition": { "text": "Patchy rain nearby", "icon": RAIN_ICON, "code": 1063 }
                },
                "hour": (0..24).map(|h| json!({
                    "time": format!("{date} {h:02}:00"),
                    "temp_c": 10.0 + h as f64,
                    "condition": { "text": "Sunny", "icon": SUNNY_ICON, "code": 1000 }
                })).collect::<Vec<_>>()
            })
        })
        .collect();

    json!({
        "location": {
            "name": name,
            "region": "",
            "country": country,
            "lat": 35.69,
            "lon": 139.69,
            "localtime": "2026-10-16 14:05"
        },
        "current": {
            "temp_c": 18.0,
            "temp_f": 64.4,
            "humidity": 64,
            "wind_mph": 9.4,
            "pressure_mb": 1016.0,
            "vis_km": 10.0,
            "condition": {
                "text": "Partly cloudy",
                "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png",
                "code": 1003
            }
        },
        "forecast": { "forecastday": days }
    })
}

/// Provider body for a rejected query
pub fn error_body(code: u32, message: &str) -> Value {
    json!({ "error": { "code": code, "message": message } })
}
