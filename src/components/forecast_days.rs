use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, celsius};
use crate::action::Action;
use crate::glyphs::{self, ConditionKind};
use crate::state::ForecastDay;

/// One column per forecast day, in the order the provider returned them
pub struct ForecastDays;

pub struct ForecastDaysProps<'a> {
    pub days: &'a [ForecastDay],
    pub selected: usize,
}

impl Component<Action> for ForecastDays {
    type Props<'a> = ForecastDaysProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        if props.days.is_empty() {
            let empty = Line::from(Span::styled(
                "No forecast days returned",
                Style::default().fg(Color::DarkGray),
            ))
            .centered();
            frame.render_widget(Paragraph::new(empty), area);
            return;
        }

        let count = props.days.len() as u32;
        let columns = Layout::horizontal(
            props
                .days
                .iter()
                .map(|_| Constraint::Ratio(1, count))
                .collect::<Vec<_>>(),
        )
        .split(area);

        for (index, (day, column)) in props.days.iter().zip(columns.iter()).enumerate() {
            render_day(frame, *column, day, index == props.selected);
        }
    }
}

fn render_day(frame: &mut Frame, area: Rect, day: &ForecastDay, selected: bool) {
    let border = if selected {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", day.date));

    let kind = ConditionKind::from_condition(&day.day.condition);
    let lines = vec![
        Line::from(vec![
            Span::raw(glyphs::condition_emoji(&day.day.condition)),
            Span::raw(" "),
            Span::styled(
                day.day.condition.text.clone(),
                Style::default().fg(kind.color()),
            ),
        ])
        .centered(),
        Line::from(Span::styled(
            format!("{}° / {}", day.day.maxtemp_c, celsius(day.day.mintemp_c)),
            Style::default().fg(Color::LightBlue).bold(),
        ))
        .centered(),
        Line::from(Span::styled(
            format!("Rain: {} mm", day.day.totalprecip_mm),
            Style::default().fg(Color::Blue),
        ))
        .centered(),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
