use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};

use crate::geometry::stat_bar;

/// One labelled stat row: short tag, proportional bar, numeric value.
pub fn stat_line(tag: &str, value: f64, bar_width: u16, color: Color) -> TextLine<'static> {
    TextLine::from(vec![
        Span::styled(format!("{tag:<4}"), Style::default().fg(Color::Gray)),
        Span::styled(stat_bar(value, bar_width), Style::default().fg(color)),
        Span::styled(format!(" {value:>3.0}"), Style::default().fg(Color::White)),
    ])
}

/// Compact bar-plus-value cell used inside the gallery table.
pub fn stat_cell(value: f64, bar_width: u16) -> String {
    format!("{} {value:>3.0}", stat_bar(value, bar_width))
}
