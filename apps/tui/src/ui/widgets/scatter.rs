use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::{Line as TextLine, Span};
use ratatui::widgets::canvas::{Canvas, Circle, Line as CanvasLine};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::data::models::ProjectionPoint;
use crate::geometry::{normalize_points, Viewport};

const SCATTER_PADDING: f64 = 4.0;

/// Cycle of marker colors keyed by cluster index; uncolored points are
/// not cluster-assigned.
pub fn cluster_color(cluster: Option<usize>) -> Color {
    match cluster.map(|index| index % 5) {
        Some(0) => Color::Cyan,
        Some(1) => Color::Yellow,
        Some(2) => Color::Magenta,
        Some(3) => Color::Green,
        Some(_) => Color::Rgb(0, 0, 238),
        None => Color::Gray,
    }
}

/// Embedding scatter: grid, axes, one marker per subject, and a printed
/// name label for the highlighted point.
pub fn render_scatter(
    points: &[ProjectionPoint],
    highlighted: usize,
    f: &mut Frame<'_>,
    area: Rect,
) {
    let block = Block::default()
        .title("Embedding")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    f.render_widget(block, area);

    if points.is_empty() {
        let paragraph = Paragraph::new("Run a projection to see the embedding")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        f.render_widget(paragraph, inner);
        return;
    }

    if inner.width < 10 || inner.height < 6 {
        return;
    }

    let width = f64::from(inner.width);
    let height = f64::from(inner.height);
    let viewport = Viewport::new(width, height, SCATTER_PADDING);

    let raw: Vec<(f64, f64)> = points.iter().map(|point| (point.x, point.y)).collect();
    let normalized = normalize_points(&raw, viewport);

    let marker_radius = (width.min(height) * 0.03).max(0.4);
    let plot_width = width - SCATTER_PADDING * 2.0;
    let plot_height = height - SCATTER_PADDING * 2.0;

    f.render_widget(
        Canvas::default()
            .paint(|ctx| {
                for step in 1..4 {
                    let t = f64::from(step) / 4.0;
                    let grid_y = t.mul_add(plot_height, SCATTER_PADDING);
                    let grid_x = t.mul_add(plot_width, SCATTER_PADDING);
                    ctx.draw(&CanvasLine {
                        x1: SCATTER_PADDING,
                        y1: grid_y,
                        x2: width - SCATTER_PADDING,
                        y2: grid_y,
                        color: Color::DarkGray,
                    });
                    ctx.draw(&CanvasLine {
                        x1: grid_x,
                        y1: SCATTER_PADDING,
                        x2: grid_x,
                        y2: height - SCATTER_PADDING,
                        color: Color::DarkGray,
                    });
                }

                // Axes along the left and bottom interior edges
                ctx.draw(&CanvasLine {
                    x1: SCATTER_PADDING,
                    y1: SCATTER_PADDING,
                    x2: width - SCATTER_PADDING,
                    y2: SCATTER_PADDING,
                    color: Color::Gray,
                });
                ctx.draw(&CanvasLine {
                    x1: SCATTER_PADDING,
                    y1: SCATTER_PADDING,
                    x2: SCATTER_PADDING,
                    y2: height - SCATTER_PADDING,
                    color: Color::Gray,
                });

                for (index, (point, &(px, py))) in
                    points.iter().zip(normalized.iter()).enumerate()
                {
                    // Normalized y grows downward; the canvas grows upward
                    let canvas_y = height - py;
                    let color = cluster_color(point.cluster);

                    ctx.draw(&Circle {
                        x: px,
                        y: canvas_y,
                        radius: marker_radius,
                        color,
                    });

                    if index == highlighted {
                        ctx.draw(&Circle {
                            x: px,
                            y: canvas_y,
                            radius: marker_radius * 2.0,
                            color,
                        });
                        ctx.print(
                            px + marker_radius * 2.5,
                            canvas_y,
                            TextLine::from(Span::styled(
                                point.name.clone(),
                                Style::default().fg(Color::White),
                            )),
                        );
                    }
                }
            })
            .x_bounds([0.0, width])
            .y_bounds([0.0, height]),
        inner,
    );
}
