use crate::app::App;
use crate::domain::Feature;
use crate::ui::widgets::scatter::cluster_color;
use crate::ui::widgets::spinner::render_spinner;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

pub fn render_cluster(app: &mut App, f: &mut Frame<'_>) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Controls
            Constraint::Min(5),    // Groups
            Constraint::Length(1), // Shortcuts
        ])
        .split(area);

    render_controls(app, f, chunks[0]);
    render_groups(app, f, chunks[1]);
    render_shortcuts(f, chunks[2]);
}

fn render_controls(app: &App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("== Clustering Lab ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let controls = TextLine::from(vec![
        Span::styled("Algorithm: ", Style::default().fg(Color::Gray)),
        Span::styled(
            app.algorithm.label(),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("   Clusters: ", Style::default().fg(Color::Gray)),
        Span::styled(
            format!("◄ {} ►", app.cluster_k),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ]);

    let features = feature_toggle_line(&app.cluster_features);

    let paragraph = Paragraph::new(Text::from(vec![controls, features])).block(block);
    f.render_widget(paragraph, area);
}

/// Checkbox row for the four core features, toggled by keys 1-4.
pub fn feature_toggle_line(toggles: &[bool; 4]) -> TextLine<'static> {
    let mut spans = vec![Span::styled(
        "Features: ",
        Style::default().fg(Color::Gray),
    )];

    for (index, feature) in Feature::ALL.into_iter().enumerate() {
        let enabled = toggles[index];
        let marker = if enabled { "[x]" } else { "[ ]" };
        let style = if enabled {
            Style::default().fg(Color::Green)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(
            format!("{marker} {} ({}) ", feature.label(), index + 1),
            style,
        ));
    }

    TextLine::from(spans)
}

fn render_groups(app: &mut App, f: &mut Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Partition")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if app.cluster_loading {
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
            "Partitioning subjects...",
        );
        return;
    }

    let Some(groups) = &app.clusters else {
        let paragraph = Paragraph::new("Configure parameters and press Enter to run clustering")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    };

    let mut lines = Vec::new();
    for group in groups {
        let color = cluster_color(Some(group.cluster));
        lines.push(TextLine::from(vec![
            Span::styled("● ", Style::default().fg(color)),
            Span::styled(
                format!("Cluster {}", group.cluster + 1),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} subjects)", group.aliens.len()),
                Style::default().fg(Color::Gray),
            ),
        ]));

        for alien in &group.aliens {
            let species = alien
                .species
                .clone()
                .map_or_else(String::new, |species| format!("  {species}"));
            lines.push(TextLine::from(vec![
                Span::styled(format!("    {}", alien.name), Style::default().fg(Color::White)),
                Span::styled(species, Style::default().fg(Color::Gray)),
            ]));
        }
        lines.push(TextLine::from(""));
    }

    let paragraph = Paragraph::new(Text::from(lines)).wrap(Wrap { trim: true });
    f.render_widget(paragraph, inner);
}

fn render_shortcuts(f: &mut Frame<'_>, area: Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(Color::Gray);

    let shortcuts = TextLine::from(vec![
        Span::styled("a", key_style),
        Span::styled(": Algorithm | ", text_style),
        Span::styled("←/→", key_style),
        Span::styled(": Cluster count | ", text_style),
        Span::styled("1-4", key_style),
        Span::styled(": Features | ", text_style),
        Span::styled("Enter", key_style),
        Span::styled(": Run | ", text_style),
        Span::styled("Esc", key_style),
        Span::styled(": Gallery", text_style),
    ]);

    let paragraph = Paragraph::new(shortcuts).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}
