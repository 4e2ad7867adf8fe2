use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_help(f: &mut Frame<'_>, area: Rect) {
    // Centered overlay
    let help_area = Rect {
        x: area.width.saturating_sub(68) / 2,
        y: area.height.saturating_sub(28) / 2,
        width: 68.min(area.width),
        height: 28.min(area.height),
    };

    let help_block = Block::default()
        .title("== Help & Keyboard Shortcuts ==")
        .title_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let key = |text: &'static str| {
        Span::styled(
            format!("  {text}"),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
    };
    let desc = |text: &'static str| Span::styled(format!(" - {text}"), Style::default());

    let help_text = vec![
        TextLine::from(Span::styled(
            "Xenodex Explorer",
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )),
        TextLine::from(""),
        TextLine::from(
            "Browse the alien catalog, inspect subjects, and explore similarity, \
             clustering and 2D projections. Without a reachable catalog service \
             every screen falls back to the bundled dataset.",
        ),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Everywhere:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(vec![key("F1"), desc("Toggle this help screen")]),
        TextLine::from(vec![key("Space"), desc("Pause/resume animations")]),
        TextLine::from(vec![key("Esc"), desc("Back / cancel")]),
        TextLine::from(vec![key("q"), desc("Quit")]),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Gallery:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(vec![key("Enter"), desc("Open the subject's flip-card")]),
        TextLine::from(vec![key("s"), desc("Find similar and opposite subjects")]),
        TextLine::from(vec![key("c"), desc("Open the clustering lab")]),
        TextLine::from(vec![key("p"), desc("Open the 2D projection view")]),
        TextLine::from(vec![key("/"), desc("Fuzzy-search by name")]),
        TextLine::from(vec![key("r"), desc("Refresh the subject list")]),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Analyses:",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        TextLine::from(vec![key("m"), desc("Cycle metric / toggle method")]),
        TextLine::from(vec![key("a"), desc("Toggle clustering algorithm")]),
        TextLine::from(vec![key("1-4"), desc("Toggle features")]),
        TextLine::from(vec![key("Enter"), desc("Run the analysis")]),
        TextLine::from(""),
        TextLine::from(Span::styled(
            "Press Esc to close this help screen",
            Style::default().fg(Color::Yellow),
        )),
    ];

    f.render_widget(Clear, help_area);
    let help_paragraph = Paragraph::new(Text::from(help_text))
        .block(help_block)
        .wrap(Wrap { trim: true });
    f.render_widget(help_paragraph, help_area);
}
