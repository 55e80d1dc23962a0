use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use tui_dispatch::DataResource;

use super::location_header::HEADER_OVERHEAD;
use super::{
    Component, CurrentConditions, CurrentConditionsProps, ERROR_ICON, ForecastDays,
    ForecastDaysProps, HourlyStrip, HourlyStripProps, LocationHeader, LocationHeaderProps,
};
use crate::action::Action;
use crate::state::{AppState, WeatherSnapshot};

pub struct WeatherBody;

pub struct WeatherBodyProps<'a> {
    pub state: &'a AppState,
}

/// FIGlet name (terminus is 6 rows) plus the place line.
const HEADER_MAX: u16 = 6 + HEADER_OVERHEAD;
const CURRENT_HEIGHT: u16 = 6;
const FORECAST_HEIGHT: u16 = 5;
const HOURLY_HEIGHT: u16 = 3;

// ============================================================================
// Component
// ============================================================================

impl Component<Action> for WeatherBody {
    type Props<'a> = WeatherBodyProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        match WeatherView::from_state(props.state) {
            WeatherView::Error(error) => render_error(frame, area, error),
            WeatherView::Ready(snapshot) => render_ready(frame, area, props.state, snapshot),
            WeatherView::Loading => render_loading(frame, area, props.state),
            WeatherView::Empty => render_idle(frame, area),
        }
    }
}

fn render_ready(frame: &mut Frame, area: Rect, state: &AppState, snapshot: &WeatherSnapshot) {
    let chunks = Layout::vertical([
        Constraint::Max(HEADER_MAX),
        Constraint::Length(1),
        Constraint::Length(CURRENT_HEIGHT),
        Constraint::Length(1),
        Constraint::Length(FORECAST_HEIGHT),
        Constraint::Length(HOURLY_HEIGHT),
    ])
    .split(area);

    LocationHeader.render(
        frame,
        chunks[0],
        LocationHeaderProps {
            place: &snapshot.location,
            temperature: snapshot.current.temp_c,
        },
    );

    CurrentConditions.render(
        frame,
        chunks[2],
        CurrentConditionsProps {
            current: &snapshot.current,
        },
    );

    ForecastDays.render(
        frame,
        chunks[4],
        ForecastDaysProps {
            days: snapshot.days(),
            selected: state.selected_day,
        },
    );

    if let Some(day) = state.selected_forecast_day() {
        HourlyStrip.render(
            frame,
            chunks[5],
            HourlyStripProps {
                day,
                window: state.hour_window,
            },
        );
    }
}

fn centered_lines(area: Rect, rows: u16) -> Rect {
    Layout::vertical([Constraint::Length(rows)])
        .flex(Flex::Center)
        .split(area)[0]
}

fn render_loading(frame: &mut Frame, area: Rect, state: &AppState) {
    let city = state.active_city.as_deref().unwrap_or_default();
    let msg = Line::from(vec![
        Span::styled(state.spinner(), Style::default().fg(Color::Cyan)),
        Span::styled(" Loading...", Style::default().fg(Color::Cyan).bold()),
        Span::styled(format!(" {city}"), Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(msg), centered_lines(area, 1));
}

fn render_idle(frame: &mut Frame, area: Rect) {
    let hint = Line::from(vec![
        Span::styled("Type a city and press ", Style::default().fg(Color::DarkGray)),
        Span::styled("Enter", Style::default().fg(Color::Cyan).bold()),
        Span::styled(" to fetch weather", Style::default().fg(Color::DarkGray)),
    ])
    .centered();
    frame.render_widget(Paragraph::new(hint), centered_lines(area, 1));
}

fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let chunks = Layout::vertical([
        Constraint::Length(1), // blank
        Constraint::Length(1), // icon
        Constraint::Length(1), // "Error"
        Constraint::Length(1), // message
        Constraint::Length(1), // blank
        Constraint::Length(1), // hint
    ])
    .flex(Flex::Center)
    .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(ERROR_ICON).centered()),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                "Error",
                Style::default().fg(Color::Red).bold(),
            )])
            .centered(),
        ),
        chunks[2],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![Span::styled(
                error.to_string(),
                Style::default().fg(Color::Rgb(200, 100, 100)),
            )])
            .centered(),
        ),
        chunks[3],
    );
    frame.render_widget(
        Paragraph::new(
            Line::from(vec![
                Span::styled("Search another city, or press ", Style::default().fg(Color::DarkGray)),
                Span::styled("r", Style::default().fg(Color::Cyan).bold()),
                Span::styled(" to resubmit", Style::default().fg(Color::DarkGray)),
            ])
            .centered(),
        ),
        chunks[5],
    );
}

// ============================================================================
// Helpers
// ============================================================================

enum WeatherView<'a> {
    Error(&'a str),
    Ready(&'a WeatherSnapshot),
    Loading,
    Empty,
}

impl<'a> WeatherView<'a> {
    fn from_state(state: &'a AppState) -> Self {
        match &state.weather {
            DataResource::Failed(error) => WeatherView::Error(error),
            DataResource::Loaded(snapshot) => WeatherView::Ready(snapshot),
            DataResource::Loading => WeatherView::Loading,
            DataResource::Empty => WeatherView::Empty,
        }
    }
}
