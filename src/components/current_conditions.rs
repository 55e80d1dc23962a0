use artbox::{Alignment as ArtAlignment, Renderer, fonts, integrations::ratatui::ArtBox};
use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::location_header::temperature_fill;
use super::{Component, celsius};
use crate::action::Action;
use crate::glyphs::{self, ConditionKind};
use crate::state::CurrentWeather;

/// Current temperature, condition and the four headline readings
pub struct CurrentConditions;

pub struct CurrentConditionsProps<'a> {
    pub current: &'a CurrentWeather,
}

impl Component<Action> for CurrentConditions {
    type Props<'a> = CurrentConditionsProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let current = props.current;
        let columns =
            Layout::horizontal([Constraint::Percentage(55), Constraint::Percentage(45)]).split(area);

        let left = Layout::vertical([
            Constraint::Length(1), // icon + condition
            Constraint::Fill(1),   // temperature
        ])
        .split(columns[0]);

        let kind = ConditionKind::from_condition(&current.condition);
        let condition = Line::from(vec![
            Span::raw(glyphs::condition_emoji(&current.condition)),
            Span::raw(" "),
            Span::styled(
                current.condition.text.clone(),
                Style::default().fg(kind.color()),
            ),
        ])
        .centered();
        frame.render_widget(Paragraph::new(condition), left[0]);

        let temp_text = celsius(current.temp_c);
        let renderer = Renderer::new(fonts::stack(&["terminus", "miniwi"]))
            .with_plain_fallback()
            .with_alignment(ArtAlignment::Center)
            .with_fill(temperature_fill(current.temp_c));
        frame.render_widget(ArtBox::new(&renderer, &temp_text), left[1]);

        let stats = vec![
            stat_line("Humidity", format!("{}%", current.humidity)),
            stat_line("Wind Speed", format!("{} mph", current.wind_mph)),
            stat_line("Pressure", format!("{} mb", current.pressure_mb)),
            stat_line("Visibility", format!("{} km", current.vis_km)),
        ];
        let stats_area = Layout::vertical([Constraint::Length(stats.len() as u16)])
            .flex(Flex::Center)
            .split(columns[1]);
        frame.render_widget(Paragraph::new(stats), stats_area[0]);
    }
}

fn stat_line(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(Color::Gray)),
        Span::styled(value, Style::default().fg(Color::LightBlue).bold()),
    ])
}
