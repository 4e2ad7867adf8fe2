use crate::app::App;
use crate::ui::widgets::stat_bars::stat_cell;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap};
use ratatui::Frame;

const BAR_WIDTH: u16 = 8;

pub fn render_gallery(app: &mut App, f: &mut Frame<'_>) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title / search
            Constraint::Min(5),    // Table
            Constraint::Length(3), // Status
            Constraint::Length(1), // Shortcuts
        ])
        .split(area);

    render_header(app, f, chunks[0]);
    render_table(app, f, chunks[1]);
    render_status(app, f, chunks[2]);
    render_shortcuts(f, chunks[3]);
}

fn render_header(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let title_block = Block::default()
        .title("== Xenodex Gallery ==")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let header_line = if app.search_active {
        let blink = (app.animation_counter * 2.0).sin() > 0.0;
        let cursor = if blink { "█" } else { " " };
        TextLine::from(vec![
            Span::styled("Search: ", Style::default().fg(Color::Gray)),
            Span::styled(
                format!("{}{cursor}", app.search_input),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
        ])
    } else if app.search_input.is_empty() {
        TextLine::from(Span::styled(
            "Select a subject to inspect, compare, cluster or project",
            Style::default().fg(Color::Gray),
        ))
    } else {
        TextLine::from(vec![
            Span::styled("Filter: ", Style::default().fg(Color::Gray)),
            Span::styled(
                app.search_input.clone(),
                Style::default().fg(Color::Yellow),
            ),
            Span::styled("  (Esc clears)", Style::default().fg(Color::Gray)),
        ])
    };

    let paragraph = Paragraph::new(header_line)
        .block(title_block)
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

fn render_table(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    if app.filtered_indices.is_empty() {
        let block = Block::default()
            .title("Subjects")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow));
        let message = if app.aliens.is_empty() {
            "No subjects loaded."
        } else {
            "No subjects match the search."
        };
        let paragraph = Paragraph::new(message)
            .block(block)
            .alignment(Alignment::Center);
        f.render_widget(paragraph, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Name"),
        Cell::from("Species"),
        Cell::from("STR"),
        Cell::from("SPD"),
        Cell::from("INT"),
        Cell::from("DUR"),
    ])
    .style(
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    );

    let total_rows = app.filtered_indices.len();
    let max_visible_rows = area.height.saturating_sub(4) as usize;

    let mut scroll_offset = 0;
    if total_rows > max_visible_rows {
        if app.selected_index >= max_visible_rows + scroll_offset {
            scroll_offset = app.selected_index.saturating_sub(max_visible_rows) + 1;
        } else if app.selected_index < scroll_offset {
            scroll_offset = app.selected_index;
        }
    }

    let rows = app
        .filtered_indices
        .iter()
        .skip(scroll_offset)
        .take(max_visible_rows)
        .enumerate()
        .filter_map(|(row, &alien_index)| {
            let alien = app.aliens.get(alien_index)?;
            let is_selected = row + scroll_offset == app.selected_index;
            let style = if is_selected {
                Style::default()
                    .bg(Color::Rgb(0, 0, 238))
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };

            Some(
                Row::new(vec![
                    Cell::from(alien.name.clone()),
                    Cell::from(alien.species.clone().unwrap_or_default()),
                    Cell::from(stat_cell(alien.strength, BAR_WIDTH)),
                    Cell::from(stat_cell(alien.speed, BAR_WIDTH)),
                    Cell::from(stat_cell(alien.intelligence, BAR_WIDTH)),
                    Cell::from(stat_cell(alien.durability, BAR_WIDTH)),
                ])
                .style(style),
            )
        });

    let widths = [
        Constraint::Length(16),
        Constraint::Length(16),
        Constraint::Length(13),
        Constraint::Length(13),
        Constraint::Length(13),
        Constraint::Length(13),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .title(format!(
                    "Subjects ({} of {})",
                    app.selected_index + 1,
                    total_rows
                ))
                .borders(Borders::ALL),
        )
        .column_spacing(1);

    f.render_widget(table, area);
}

fn render_status(app: &App, f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let status_block = Block::default()
        .title(" Status ")
        .title_style(Style::default().fg(Color::Yellow))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    let style = if app.status_message.starts_with("Error") {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let paragraph = Paragraph::new(Span::styled(app.status_message.clone(), style))
        .block(status_block)
        .wrap(Wrap { trim: true });
    f.render_widget(paragraph, area);
}

fn render_shortcuts(f: &mut Frame<'_>, area: ratatui::layout::Rect) {
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(Color::Gray);

    let shortcuts = TextLine::from(vec![
        Span::styled("Enter", key_style),
        Span::styled(": Details | ", text_style),
        Span::styled("s", key_style),
        Span::styled(": Similarity | ", text_style),
        Span::styled("c", key_style),
        Span::styled(": Cluster | ", text_style),
        Span::styled("p", key_style),
        Span::styled(": Projection | ", text_style),
        Span::styled("/", key_style),
        Span::styled(": Search | ", text_style),
        Span::styled("r", key_style),
        Span::styled(": Refresh | ", text_style),
        Span::styled("F1", key_style),
        Span::styled(": Help | ", text_style),
        Span::styled("q", key_style),
        Span::styled(": Quit", text_style),
    ]);

    let paragraph = Paragraph::new(shortcuts).alignment(Alignment::Center);
    f.render_widget(paragraph, area);
}

// Keep the header labels honest if the feature order ever changes.
#[cfg(test)]
mod tests {
    use crate::domain::Feature;

    #[test]
    fn table_columns_follow_the_feature_order() {
        let tags: Vec<&str> = Feature::ALL.iter().map(|feature| feature.tag()).collect();
        assert_eq!(tags, ["STR", "SPD", "INT", "DUR"]);
    }
}
