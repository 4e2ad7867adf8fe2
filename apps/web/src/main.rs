mod projection;

use std::cell::RefCell;
use std::io;
use std::rc::Rc;

use ratzilla::ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Margin, Rect},
    style::{Color, Modifier, Style},
    text::{Line as TextLine, Span, Text},
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Cell, Paragraph, Row, Scrollbar,
        ScrollbarOrientation, ScrollbarState, Table, Wrap,
    },
    Terminal,
};
use ratzilla::{DomBackend, WebRenderer};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Request, RequestInit, RequestMode, Response};

use projection::{advance_sweep, circle_layout, fit_to_canvas};

/// List-level subject record as served by the catalog export.
#[derive(serde::Deserialize, Clone)]
struct WebAlien {
    #[allow(dead_code)]
    id: String,
    name: String,
    #[serde(default)]
    species: Option<String>,
    strength: f64,
    speed: f64,
    intelligence: f64,
    durability: f64,
}

const CANVAS_PADDING: f64 = 3.0;

fn main() -> io::Result<()> {
    let data = Rc::new(RefCell::new(None::<Vec<WebAlien>>));
    let tab_index = Rc::new(RefCell::new(0_usize));
    let row_offset = Rc::new(RefCell::new(0_usize));
    let sweep = Rc::new(RefCell::new(0.0_f64));
    let sweep_clock = Rc::new(RefCell::new(None::<f64>));

    spawn_local(fetch_aliens(data.clone()));

    let backend = DomBackend::new()?;
    let mut terminal = Terminal::new(backend)?;

    terminal.on_key_event({
        let tab_index = tab_index.clone();
        let row_offset = row_offset.clone();
        move |event| match event.code {
            ratzilla::event::KeyCode::Left => {
                let mut index = tab_index.borrow_mut();
                *index = if *index == 0 { 2 } else { *index - 1 };
                *row_offset.borrow_mut() = 0;
            }
            ratzilla::event::KeyCode::Right => {
                let mut index = tab_index.borrow_mut();
                *index = (*index + 1) % 3;
                *row_offset.borrow_mut() = 0;
            }
            ratzilla::event::KeyCode::Up => {
                let mut offset = row_offset.borrow_mut();
                *offset = offset.saturating_sub(1);
            }
            ratzilla::event::KeyCode::Down => {
                let mut offset = row_offset.borrow_mut();
                *offset = (*offset + 1).min(2000);
            }
            ratzilla::event::KeyCode::Char('1') => {
                *tab_index.borrow_mut() = 0;
                *row_offset.borrow_mut() = 0;
            }
            ratzilla::event::KeyCode::Char('2') => {
                *tab_index.borrow_mut() = 1;
                *row_offset.borrow_mut() = 0;
            }
            ratzilla::event::KeyCode::Char('3') => {
                *tab_index.borrow_mut() = 2;
                *row_offset.borrow_mut() = 0;
            }
            _ => {}
        }
    });

    terminal.draw_web(move |f| {
        let area = f.area();
        let block = Block::default()
            .title("Xenodex")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Gray));
        let inner = block.inner(area).inner(Margin::new(1, 1));
        f.render_widget(block, area);

        {
            let mut counter = sweep.borrow_mut();
            let mut clock = sweep_clock.borrow_mut();
            let (next, stamped) = advance_sweep(*counter, *clock, js_sys::Date::now());
            *counter = next;
            *clock = stamped;
        }

        let data = data.borrow();
        if let Some(aliens) = data.as_ref() {
            let index = *tab_index.borrow();
            let row_offset = *row_offset.borrow();
            render_dashboard(aliens, index, row_offset, *sweep.borrow(), f, inner);
        } else {
            let paragraph = Paragraph::new(Text::from(TextLine::from("Loading aliens.json...")))
                .alignment(Alignment::Center);
            f.render_widget(paragraph, inner);
        }
    });

    Ok(())
}

fn render_dashboard(
    aliens: &[WebAlien],
    tab_index: usize,
    row_offset: usize,
    sweep: f64,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(2),
            Constraint::Min(12),
        ])
        .split(area);

    render_header(aliens, f, main_layout[0]);
    render_tabs(aliens, tab_index, f, main_layout[1]);

    match tab_index {
        0 => render_gallery(aliens, row_offset, f, main_layout[2]),
        1 => render_projection(aliens, sweep, f, main_layout[2]),
        2 => render_stats(aliens, f, main_layout[2]),
        _ => {}
    }
}

fn render_header(aliens: &[WebAlien], f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let total = aliens.len();
    let means = stat_means(aliens);

    let line = TextLine::from(vec![Span::styled(
        format!(
            "Subjects: {total}  Mean STR {:.0}  SPD {:.0}  INT {:.0}  DUR {:.0}",
            means[0], means[1], means[2], means[3]
        ),
        Style::default().fg(Color::White),
    )]);

    let block = Block::default()
        .title("Overview")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let paragraph = Paragraph::new(Text::from(line))
        .block(block)
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, area);
}

fn render_tabs(
    aliens: &[WebAlien],
    tab_index: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let titles = ["Gallery", "Projection", "Stats"]
        .iter()
        .map(|title| TextLine::from(*title))
        .collect::<Vec<_>>();

    let tabs = ratzilla::ratatui::widgets::Tabs::new(titles)
        .select(tab_index)
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::White)
                .bg(Color::Rgb(0, 0, 238))
                .add_modifier(Modifier::BOLD),
        )
        .divider(Span::raw("|"));

    let info = TextLine::from(vec![
        Span::raw(format!("{} subjects", aliens.len())),
        Span::raw("  "),
        Span::styled("Tab/1-3", Style::default().fg(Color::Gray)),
        Span::raw("  "),
        Span::styled("Arrows", Style::default().fg(Color::Gray)),
    ]);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    f.render_widget(tabs, layout[0]);
    let info_paragraph = Paragraph::new(Text::from(info)).alignment(Alignment::Center);
    f.render_widget(info_paragraph, layout[1]);
}

fn render_gallery(
    aliens: &[WebAlien],
    row_offset: usize,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    if aliens.is_empty() {
        let paragraph = Paragraph::new("No subjects available")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, area);
        return;
    }

    let max_rows = area.height.saturating_sub(2) as usize;

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
            .fg(Color::Rgb(0, 0, 238))
            .bg(Color::Rgb(200, 200, 200))
            .add_modifier(Modifier::BOLD),
    );

    let rows = aliens.iter().skip(row_offset).take(max_rows).map(|alien| {
        Row::new(vec![
            Cell::from(alien.name.clone()),
            Cell::from(
                alien
                    .species
                    .clone()
                    .unwrap_or_else(|| "(none)".to_string()),
            ),
            Cell::from(stat_cell(alien.strength)),
            Cell::from(stat_cell(alien.speed)),
            Cell::from(stat_cell(alien.intelligence)),
            Cell::from(stat_cell(alien.durability)),
        ])
        .style(Style::default().fg(Color::White))
    });

    let table = Table::new(
        rows,
        [
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(13),
            Constraint::Length(13),
            Constraint::Length(13),
            Constraint::Length(13),
        ],
    )
    .header(header)
    .column_spacing(1);

    f.render_widget(table, area);

    let mut scrollbar_state = ScrollbarState::new(aliens.len())
        .position(row_offset)
        .viewport_content_length(max_rows.min(area.height.saturating_sub(1) as usize));
    let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
        .thumb_style(Style::default().fg(Color::Rgb(0, 0, 238)));
    let scroll_area = Rect {
        x: area.x,
        y: area.y.saturating_add(1),
        width: area.width,
        height: area.height.saturating_sub(1),
    };
    f.render_stateful_widget(scrollbar, scroll_area, &mut scrollbar_state);
}

fn render_projection(
    aliens: &[WebAlien],
    sweep: f64,
    f: &mut ratzilla::ratatui::Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .title("Embedding (bundled circle layout)")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if aliens.is_empty() {
        let paragraph = Paragraph::new("No subjects available")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let names: Vec<String> = aliens.iter().map(|alien| alien.name.clone()).collect();
    let layout = circle_layout(&names);

    let width = f64::from(inner.width);
    let height = f64::from(inner.height);
    let raw: Vec<(f64, f64)> = layout.iter().map(|point| (point.x, point.y)).collect();
    let fitted = fit_to_canvas(&raw, width, height, CANVAS_PADDING);

    let marker_radius = (width.min(height) * 0.03).max(0.4);

    f.render_widget(
        ratzilla::ratatui::widgets::canvas::Canvas::default()
            .paint(|ctx| {
                let center_x = width / 2.0;
                let center_y = height / 2.0;
                let sweep_radius = width.min(height) / 2.0 * 0.9;

                let sweep_x = sweep.cos().mul_add(sweep_radius, center_x);
                let sweep_y = sweep.sin().mul_add(sweep_radius, center_y);
                ctx.draw(&ratzilla::ratatui::widgets::canvas::Line {
                    x1: center_x,
                    y1: center_y,
                    x2: sweep_x,
                    y2: sweep_y,
                    color: Color::DarkGray,
                });

                for ((point, &(px, py)), alien) in
                    layout.iter().zip(fitted.iter()).zip(aliens.iter())
                {
                    ctx.draw(&ratzilla::ratatui::widgets::canvas::Circle {
                        x: px,
                        y: py,
                        radius: marker_radius,
                        color: cluster_color(point.cluster),
                    });
                    ctx.print(
                        px + marker_radius * 1.5,
                        py,
                        TextLine::from(Span::styled(
                            alien.name.clone(),
                            Style::default().fg(Color::Gray),
                        )),
                    );
                }
            })
            .x_bounds([0.0, width])
            .y_bounds([0.0, height]),
        inner,
    );
}

fn render_stats(aliens: &[WebAlien], f: &mut ratzilla::ratatui::Frame<'_>, area: Rect) {
    let block = Block::default()
        .title("Stat Averages")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Gray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if aliens.is_empty() {
        let paragraph = Paragraph::new("No subjects available")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    let chart_split = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    let means = stat_means(aliens);
    let labels = ["STR", "SPD", "INT", "DUR"];
    let colors = [Color::Cyan, Color::Yellow, Color::Magenta, Color::Green];

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let bars: Vec<Bar<'_>> = means
        .iter()
        .enumerate()
        .map(|(index, value)| {
            Bar::default()
                .value(value.round() as u64)
                .label(TextLine::from(labels[index]))
                .style(Style::default().fg(colors[index]))
                .value_style(Style::default().fg(Color::White))
        })
        .collect();

    let chart = BarChart::default()
        .block(Block::default())
        .data(BarGroup::default().bars(&bars))
        .max(100)
        .bar_gap(1)
        .bar_width(6);

    f.render_widget(chart, chart_split[0]);

    let mut species: Vec<(String, usize)> = Vec::new();
    for alien in aliens {
        let name = alien
            .species
            .clone()
            .unwrap_or_else(|| "(unknown)".to_string());
        if let Some(entry) = species.iter_mut().find(|(label, _)| *label == name) {
            entry.1 += 1;
        } else {
            species.push((name, 1));
        }
    }

    let mut legend_lines = vec![
        TextLine::from(Span::styled("Species", Style::default().fg(Color::Gray))),
        TextLine::from(""),
    ];
    for (name, count) in species {
        legend_lines.push(TextLine::from(vec![
            Span::styled("■ ", Style::default().fg(Color::Cyan).add_modifier(Modifier::DIM)),
            Span::styled(name, Style::default().fg(Color::White).add_modifier(Modifier::DIM)),
            Span::styled(
                format!("  {count}"),
                Style::default().fg(Color::White).add_modifier(Modifier::DIM),
            ),
        ]));
    }

    let legend = Paragraph::new(Text::from(legend_lines))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });
    f.render_widget(legend, chart_split[1]);
}

fn stat_means(aliens: &[WebAlien]) -> [f64; 4] {
    if aliens.is_empty() {
        return [0.0; 4];
    }

    let mut sums = [0.0; 4];
    for alien in aliens {
        sums[0] += alien.strength;
        sums[1] += alien.speed;
        sums[2] += alien.intelligence;
        sums[3] += alien.durability;
    }

    #[allow(clippy::cast_precision_loss)]
    let total = aliens.len() as f64;
    sums.map(|sum| sum / total)
}

/// Compact bar-plus-value cell for a 0-100 stat.
fn stat_cell(value: f64) -> String {
    const WIDTH: usize = 8;

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let fill = ((value / 100.0 * WIDTH as f64).round()).clamp(0.0, WIDTH as f64) as usize;

    format!("{}{} {value:>3.0}", "█".repeat(fill), "░".repeat(WIDTH - fill))
}

fn cluster_color(cluster: usize) -> Color {
    match cluster % 3 {
        0 => Color::Cyan,
        1 => Color::Yellow,
        _ => Color::Magenta,
    }
}

/// Fetch the exported subject list, or fall back to the bundled catalog
/// when the export is missing or malformed.
async fn fetch_aliens(store: Rc<RefCell<Option<Vec<WebAlien>>>>) {
    let aliens = match fetch_remote().await {
        Some(aliens) if !aliens.is_empty() => aliens,
        _ => {
            web_sys::console::warn_1(&"aliens.json unavailable, using bundled catalog".into());
            bundled_catalog()
        }
    };

    *store.borrow_mut() = Some(aliens);
}

async fn fetch_remote() -> Option<Vec<WebAlien>> {
    let window = web_sys::window()?;

    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::SameOrigin);

    let request = Request::new_with_str_and_init("aliens.json", &opts).ok()?;
    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .ok()?;

    let response = response_value.dyn_into::<Response>().ok()?;
    if !response.ok() {
        return None;
    }

    let json = wasm_bindgen_futures::JsFuture::from(response.json().ok()?)
        .await
        .ok()?;

    serde_wasm_bindgen::from_value::<Vec<WebAlien>>(json).ok()
}

/// The same eight subjects the TUI bundles, trimmed to what the
/// dashboard renders.
fn bundled_catalog() -> Vec<WebAlien> {
    let entries: [(&str, &str, &str, f64, f64, f64, f64); 8] = [
        ("1", "Rath", "Appoplexian", 95.0, 70.0, 40.0, 85.0),
        ("2", "Astrodactyl", "Pturbosaurian", 55.0, 95.0, 65.0, 50.0),
        ("3", "Squidstrictor", "Cephalod-ae", 80.0, 45.0, 90.0, 70.0),
        ("4", "Fasttrack", "Citrakayah", 65.0, 98.0, 60.0, 55.0),
        ("5", "Blitzwolfer", "Loboan", 75.0, 80.0, 70.0, 75.0),
        ("6", "Terroranchula", "Terroranchula", 70.0, 65.0, 55.0, 90.0),
        ("7", "Ssserpent", "Unknown", 50.0, 75.0, 85.0, 45.0),
        ("8", "Ripjaws", "Piscciss Volann", 85.0, 90.0, 50.0, 80.0),
    ];

    entries
        .iter()
        .map(
            |&(id, name, species, strength, speed, intelligence, durability)| WebAlien {
                id: id.to_string(),
                name: name.to_string(),
                species: Some(species.to_string()),
                strength,
                speed,
                intelligence,
                durability,
            },
        )
        .collect()
}
