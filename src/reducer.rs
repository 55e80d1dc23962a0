//! Reducer - pure function: (state, action) -> DispatchResult

use tui_dispatch::{DataResource, DispatchResult};

use crate::action::Action;
use crate::effect::Effect;
use crate::state::AppState;

/// The reducer handles all state transitions
pub fn reducer(state: &mut AppState, action: Action) -> DispatchResult<Effect> {
    match action {
        // ===== Search actions =====
        Action::SearchInputChange(text) => {
            if text == state.search_input {
                return DispatchResult::unchanged();
            }
            state.search_input = text;
            DispatchResult::changed()
        }

        Action::SearchSubmit => {
            let raw = state.search_input.clone();
            match begin_query(state, &raw) {
                Some(effect) => {
                    // Cleared on submission, not on resolution.
                    state.search_input.clear();
                    DispatchResult::changed_with(effect)
                }
                None => DispatchResult::unchanged(),
            }
        }

        Action::SearchFocus => {
            if state.search_focused {
                return DispatchResult::unchanged();
            }
            state.search_focused = true;
            DispatchResult::changed()
        }

        Action::SearchBlur => {
            if !state.search_focused {
                return DispatchResult::unchanged();
            }
            state.search_focused = false;
            DispatchResult::changed()
        }

        // ===== City / weather actions =====
        Action::CitySubmit(city) => match begin_query(state, &city) {
            Some(effect) => DispatchResult::changed_with(effect),
            None => DispatchResult::unchanged(),
        },

        Action::WeatherRefresh => {
            let Some(city) = state.active_city.clone() else {
                return DispatchResult::unchanged();
            };
            match begin_query(state, &city) {
                Some(effect) => DispatchResult::changed_with(effect),
                None => DispatchResult::unchanged(),
            }
        }

        // ===== Forecast actions =====
        Action::ForecastDidLoad { seq, snapshot } => {
            if !state.accepts(seq) {
                tracing::debug!(seq, latest = state.latest_seq, "dropping stale forecast");
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Loaded(snapshot);
            state.selected_day = 0;
            DispatchResult::changed()
        }

        Action::ForecastDidError { seq, message } => {
            if !state.accepts(seq) {
                tracing::debug!(seq, latest = state.latest_seq, "dropping stale error");
                return DispatchResult::unchanged();
            }
            state.weather = DataResource::Failed(message);
            state.selected_day = 0;
            DispatchResult::changed()
        }

        Action::ForecastDayNext => {
            if state.selected_day + 1 < state.forecast_len() {
                state.selected_day += 1;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::ForecastDayPrev => {
            if state.selected_day > 0 && state.forecast_len() > 0 {
                state.selected_day -= 1;
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        // ===== UI actions =====
        Action::Render => DispatchResult::changed(),

        // ===== Global actions =====
        Action::Tick => {
            if state.is_loading() {
                state.tick_count = state.tick_count.wrapping_add(1);
                DispatchResult::changed()
            } else {
                DispatchResult::unchanged()
            }
        }

        Action::Quit => DispatchResult::unchanged(),
    }
}

/// Start a new query for `raw`, or `None` when it trims to nothing.
///
/// Any previous snapshot or error is discarded immediately; the returned
/// effect carries the freshly issued sequence number.
fn begin_query(state: &mut AppState, raw: &str) -> Option<Effect> {
    let city = raw.trim();
    if city.is_empty() {
        return None;
    }

    state.latest_seq += 1;
    state.active_city = Some(city.to_string());
    state.weather = DataResource::Loading;
    state.selected_day = 0;
    state.tick_count = 0;

    Some(Effect::FetchForecast {
        seq: state.latest_seq,
        city: city.to_string(),
    })
}
