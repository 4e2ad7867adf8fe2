use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::Frame;
use throbber_widgets_tui::{Throbber, ThrobberState, WhichUse, BRAILLE_SIX};

/// In-flight query indicator. There is no timeout anywhere in the data
/// layer, so this stays up for as long as the call hangs.
pub fn render_spinner(f: &mut Frame<'_>, area: Rect, state: &mut ThrobberState, label: &str) {
    let throbber = Throbber::default()
        .label(label.to_string())
        .style(Style::default().fg(Color::Cyan))
        .throbber_style(Style::default().fg(Color::Cyan))
        .throbber_set(BRAILLE_SIX)
        .use_type(WhichUse::Spin);

    f.render_stateful_widget(throbber, area, state);
}
