use crate::app::App;
use crate::data::models::SimilarityResult;
use crate::ui::widgets::spinner::render_spinner;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_similarity(app: &mut App, f: &mut Frame<'_>) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(5),    // Results
            Constraint::Length(1), // Shortcuts
        ])
        .split(area);

    render_header(app, f, chunks[0]);
    render_results(app, f, chunks[1]);
    render_shortcuts(f, chunks[2]);
}

fn render_header(app: &App, f: &mut Frame<'_>, area: Rect) {
    let source_name = app
        .selected_alien()
        .map_or_else(|| "(none)".to_string(), |alien| alien.name.clone());

    let block = Block::default()
        .title("== Similarity Finder ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let line = TextLine::from(vec![
        Span::styled("Source: ", Style::default().fg(Color::Gray)),
        Span::styled(
            source_name,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Metric: ", Style::default().fg(Color::Gray)),
        Span::styled(app.metric.label(), Style::default().fg(Color::Yellow)),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    f.render_widget(paragraph, area);
}

fn render_results(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Ranked subjects")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.similarity_loading {
        let spinner_area = Rect {
            x: inner.x,
            y: inner.y + inner.height / 2,
            width: inner.width,
            height: 1,
        };
        render_spinner(
            f,
            spinner_area,
            &mut app.throbber_state,
            "Ranking subjects...",
        );
        return;
    }

    let Some(data) = &app.similarity else {
        let paragraph = Paragraph::new("No similarity data")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    };

    let mut lines = vec![TextLine::from(Span::styled(
        "Most similar",
        Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
    ))];

    for (row, result) in data.similar.iter().enumerate() {
        lines.push(result_line(result, row == app.similarity_selection));
    }

    if let Some(opposite) = &data.opposite {
        lines.push(TextLine::from(""));
        lines.push(TextLine::from(Span::styled(
            "Opposite",
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )));
        lines.push(result_line(
            opposite,
            app.similarity_selection == data.similar.len(),
        ));
    }

    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true });
    f.render_widget(paragraph, inner);
}

/// One ranked row: selection marker, name, species, score badge.
fn result_line(result: &SimilarityResult, is_selected: bool) -> TextLine<'static> {
    let style = if is_selected {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };
    let prefix = if is_selected { ">" } else { " " };

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let percent = (result.similarity * 100.0).round() as u32;

    let species = result
        .alien
        .species
        .clone()
        .map_or_else(String::new, |species| format!("  {species}"));

    TextLine::from(vec![
        Span::styled(format!("{prefix} "), style),
        Span::styled(result.alien.name.clone(), style),
        Span::styled(species, Style::default().fg(Color::Gray)),
        Span::styled(
            format!("  {percent}%"),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(Color::Gray);

    let shortcuts = TextLine::from(vec![
        Span::styled("↑/↓", key_style),
        Span::styled(": Select | ", text_style),
        Span::styled("Enter", key_style),
        Span::styled(": Open subject | ", text_style),
        Span::styled("m", key_style),
        Span::styled(": Cycle metric | ", text_style),
        Span::styled("r", key_style),
        Span::styled(": Re-run | ", text_style),
        Span::styled("Esc", key_style),
        Span::styled(": Gallery", text_style),
    ]);

    let paragraph = Paragraph::new(shortcuts).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
