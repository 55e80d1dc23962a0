//! Terminal stand-ins for the provider's condition icons
//!
//! WeatherAPI icon paths end in a numeric icon id (`.../day/113.png`); the id
//! picks a condition family, and the `day`/`night` path segment picks between
//! sun and moon for clear skies. References are resolved to absolute URLs
//! before they are read.

use ratatui::style::Color;
use reqwest::Url;

use crate::api::icon_url;
use crate::state::Condition;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConditionKind {
    Clear,
    PartlyCloudy,
    Cloudy,
    Fog,
    Drizzle,
    Rain,
    Sleet,
    Snow,
    Thunderstorm,
    Unknown,
}

impl ConditionKind {
    pub fn from_icon_id(id: u16) -> Self {
        match id {
            113 => ConditionKind::Clear,
            116 => ConditionKind::PartlyCloudy,
            119 | 122 => ConditionKind::Cloudy,
            143 | 248 | 260 => ConditionKind::Fog,
            263 | 266 | 281 | 284 => ConditionKind::Drizzle,
            176 | 293..=308 | 353..=359 => ConditionKind::Rain,
            182 | 185 | 311..=320 | 350 | 362 | 365 | 374 | 377 => ConditionKind::Sleet,
            179 | 227 | 230 | 323..=338 | 368 | 371 => ConditionKind::Snow,
            200 | 386..=395 => ConditionKind::Thunderstorm,
            _ => ConditionKind::Unknown,
        }
    }

    pub fn from_condition(condition: &Condition) -> Self {
        icon_path(&condition.icon)
            .and_then(|path| icon_id(&path))
            .map_or(ConditionKind::Unknown, Self::from_icon_id)
    }

    pub fn emoji(self, night: bool) -> &'static str {
        match self {
            ConditionKind::Clear if night => "\u{1f319}",
            ConditionKind::Clear => "\u{2600}\u{fe0f}",
            ConditionKind::PartlyCloudy => "\u{26c5}",
            ConditionKind::Cloudy | ConditionKind::Unknown => "\u{2601}\u{fe0f}",
            ConditionKind::Fog => "\u{1f32b}\u{fe0f}",
            ConditionKind::Drizzle => "\u{1f326}\u{fe0f}",
            ConditionKind::Rain => "\u{1f327}\u{fe0f}",
            ConditionKind::Sleet => "\u{1f328}\u{fe0f}",
            ConditionKind::Snow => "\u{2744}\u{fe0f}",
            ConditionKind::Thunderstorm => "\u{26c8}\u{fe0f}",
        }
    }

    pub fn color(self) -> Color {
        match self {
            ConditionKind::Clear => Color::Yellow,
            ConditionKind::PartlyCloudy => Color::LightYellow,
            ConditionKind::Cloudy | ConditionKind::Fog | ConditionKind::Unknown => Color::Gray,
            ConditionKind::Drizzle | ConditionKind::Rain => Color::LightBlue,
            ConditionKind::Sleet | ConditionKind::Snow => Color::White,
            ConditionKind::Thunderstorm => Color::Magenta,
        }
    }
}

/// Path of the icon asset, or `None` when the reference is not a usable URL
pub fn icon_path(icon: &str) -> Option<String> {
    let url = Url::parse(&icon_url(icon)).ok()?;
    Some(url.path().to_string())
}

/// Numeric id at the end of an icon path
pub fn icon_id(icon: &str) -> Option<u16> {
    let file = icon.rsplit('/').next()?;
    let stem = file.split('.').next()?;
    stem.parse().ok()
}

pub fn is_night(icon: &str) -> bool {
    icon.split('/').any(|segment| segment == "night")
}

/// Emoji for a condition descriptor
pub fn condition_emoji(condition: &Condition) -> &'static str {
    let night = icon_path(&condition.icon).is_some_and(|path| is_night(&path));
    ConditionKind::from_condition(condition).emoji(night)
}
