use crate::app::App;
use crate::ui::screens::cluster::feature_toggle_line;
use crate::ui::widgets::scatter::{cluster_color, render_scatter};
use crate::ui::widgets::spinner::render_spinner;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

pub fn render_projection(app: &mut App, f: &mut Frame<'_>) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Controls
            Constraint::Min(8),    // Scatter
            Constraint::Length(1), // Legend
            Constraint::Length(1), // Shortcuts
        ])
        .split(area);

    render_controls(app, f, chunks[0]);

    if app.projection_loading {
        let block = Block::default()
            .title("Embedding")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));
        let inner = block.inner(chunks[1]);
        f.render_widget(block, chunks[1]);

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
            "Projecting subjects...",
        );
    } else {
        let points = app.projection.clone().unwrap_or_default();
        render_scatter(&points, app.projection_selection, f, chunks[1]);
    }

    render_legend(app, f, chunks[2]);
    render_shortcuts(f, chunks[3]);
}

fn render_controls(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("== 2D Projection ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let highlighted = app
        .projection
        .as_ref()
        .and_then(|points| points.get(app.projection_selection))
        .map_or_else(|| "(none)".to_string(), |point| point.name.clone());

    let controls = TextLine::from(vec![
        Span::styled("Method: ", Style::default().fg(Color::Gray)),
        Span::styled(
            app.method.label(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Highlighted: ", Style::default().fg(Color::Gray)),
        Span::styled(highlighted, Style::default().fg(Color::White)),
    ]);

    let features = feature_toggle_line(&app.reduce_features);

    let paragraph = Paragraph::new(Text::from(vec![controls, features])).block(block);
    f.render_widget(paragraph, area);
}

fn render_legend(app: &App, f: &mut Frame<'_>, area: Rect) {
    let Some(points) = &app.projection else {
        return;
    };

    let mut clusters: Vec<usize> = points.iter().filter_map(|point| point.cluster).collect();
    clusters.sort_unstable();
    clusters.dedup();

    let mut spans = Vec::new();
    for cluster in clusters {
        spans.push(Span::styled(
            "● ",
            Style::default().fg(cluster_color(Some(cluster))),
        ));
        spans.push(Span::styled(
            format!("Cluster {}  ", cluster + 1),
            Style::default().fg(Color::Gray),
        ));
    }

    let paragraph = Paragraph::new(TextLine::from(spans)).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(Color::Gray);

    let shortcuts = TextLine::from(vec![
        Span::styled("m", key_style),
        Span::styled(": Method | ", text_style),
        Span::styled("1-4", key_style),
        Span::styled(": Features | ", text_style),
        Span::styled("Enter", key_style),
        Span::styled(": Run | ", text_style),
        Span::styled("↑/↓", key_style),
        Span::styled(": Walk points | ", text_style),
        Span::styled("Esc", key_style),
        Span::styled(": Gallery", text_style),
    ]);

    let paragraph = Paragraph::new(shortcuts).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
