use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, celsius};
use crate::action::Action;
use crate::config::HourWindow;
use crate::glyphs;
use crate::state::{ForecastDay, HourReading};

/// Placeholder for a slot the provider sent no reading for.
pub const NO_DATA: &str = "--";

/// Hourly readings of one forecast day, limited to the configured window
pub struct HourlyStrip;

pub struct HourlyStripProps<'a> {
    pub day: &'a ForecastDay,
    pub window: HourWindow,
}

impl Component<Action> for HourlyStrip {
    type Props<'a> = HourlyStripProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(Color::DarkGray))
            .title(format!(" Hourly · {}  (←/→ change day) ", props.day.date));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let slots = props.day.hour_slots(props.window);
        let count = slots.len().max(1) as u32;
        let columns = Layout::horizontal(
            slots
                .iter()
                .map(|_| Constraint::Ratio(1, count))
                .collect::<Vec<_>>(),
        )
        .split(inner);

        for ((slot, reading), column) in slots.iter().zip(columns.iter()) {
            frame.render_widget(Paragraph::new(slot_lines(*slot, *reading)), *column);
        }
    }
}

fn slot_lines(slot: usize, reading: Option<&HourReading>) -> Vec<Line<'static>> {
    match reading {
        Some(reading) => vec![
            Line::from(Span::styled(
                reading.clock().to_string(),
                Style::default().fg(Color::Gray),
            ))
            .centered(),
            Line::from(vec![
                Span::raw(glyphs::condition_emoji(&reading.condition)),
                Span::raw(" "),
                Span::styled(celsius(reading.temp_c), Style::default().fg(Color::White)),
            ])
            .centered(),
        ],
        None => vec![
            Line::from(Span::styled(
                format!("{slot:02}:00"),
                Style::default().fg(Color::DarkGray),
            ))
            .centered(),
            Line::from(Span::styled(NO_DATA, Style::default().fg(Color::DarkGray))).centered(),
        ],
    }
}
