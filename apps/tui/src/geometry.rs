//! Pure mapping from abstract attribute space to drawing coordinates:
//! min–max normalization of 2D point sets into a padded viewport, and the
//! proportional fill used by the stat bars.

/// Target drawing region. `padding` is reserved on every side; points
/// land inside the interior rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub padding: f64,
}

impl Viewport {
    pub const fn new(width: f64, height: f64, padding: f64) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    fn plot_width(&self) -> f64 {
        self.width - self.padding * 2.0
    }

    fn plot_height(&self) -> f64 {
        self.height - self.padding * 2.0
    }
}

/// Linearly maps each axis's min–max range onto the viewport interior.
/// The vertical axis is inverted: larger data y renders nearer the top.
/// An axis with zero range maps to the viewport midline.
pub fn normalize_points(points: &[(f64, f64)], viewport: Viewport) -> Vec<(f64, f64)> {
    if points.is_empty() {
        return Vec::new();
    }

    let (x_min, x_max) = axis_bounds(points.iter().map(|point| point.0));
    let (y_min, y_max) = axis_bounds(points.iter().map(|point| point.1));
    let x_range = x_max - x_min;
    let y_range = y_max - y_min;

    points
        .iter()
        .map(|&(x, y)| {
            let px = if x_range > 0.0 {
                viewport.padding + (x - x_min) / x_range * viewport.plot_width()
            } else {
                viewport.padding + viewport.plot_width() / 2.0
            };
            let py = if y_range > 0.0 {
                viewport.padding + (y_max - y) / y_range * viewport.plot_height()
            } else {
                viewport.padding + viewport.plot_height() / 2.0
            };

            (px, py)
        })
        .collect()
}

/// How many of `width` cells a 0–100 stat fills. Values are assumed
/// pre-clamped upstream; the fill is clamped to the bar regardless.
pub fn stat_fill(value: f64, width: u16) -> u16 {
    let cells = (value / 100.0 * f64::from(width)).round();

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let fill = cells.clamp(0.0, f64::from(width)) as u16;
    fill
}

/// A 0–100 stat rendered as a left-filled bar of block glyphs.
pub fn stat_bar(value: f64, width: u16) -> String {
    let fill = usize::from(stat_fill(value, width));
    let empty = usize::from(width) - fill;

    format!("{}{}", "█".repeat(fill), "░".repeat(empty))
}

fn axis_bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: Viewport = Viewport::new(600.0, 400.0, 40.0);

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn normalized_points_stay_inside_the_padded_interior() {
        let points = [(-3.2, 7.5), (0.0, 0.0), (10.1, -4.4), (2.2, 2.2)];
        let normalized = normalize_points(&points, VIEWPORT);

        for &(px, py) in &normalized {
            assert!((VIEWPORT.padding..=VIEWPORT.width - VIEWPORT.padding).contains(&px));
            assert!((VIEWPORT.padding..=VIEWPORT.height - VIEWPORT.padding).contains(&py));
        }
    }

    #[test]
    fn extremes_land_on_the_interior_edges_with_y_inverted() {
        let points = [(0.0, 0.0), (1.0, 1.0)];
        let normalized = normalize_points(&points, VIEWPORT);

        // Smallest x at the left edge; largest y at the top edge.
        assert_close(normalized[0].0, 40.0);
        assert_close(normalized[0].1, 360.0);
        assert_close(normalized[1].0, 560.0);
        assert_close(normalized[1].1, 40.0);
    }

    #[test]
    fn single_point_maps_to_the_midlines() {
        let normalized = normalize_points(&[(42.0, -17.0)], VIEWPORT);

        assert_close(normalized[0].0, 300.0);
        assert_close(normalized[0].1, 200.0);
    }

    #[test]
    fn constant_axis_maps_to_that_axis_midline_only() {
        let points = [(5.0, 1.0), (5.0, 2.0), (5.0, 3.0)];
        let normalized = normalize_points(&points, VIEWPORT);

        for &(px, _) in &normalized {
            assert_close(px, 300.0);
        }
        // The varying axis still spans the interior.
        assert_close(normalized[2].1, 40.0);
        assert_close(normalized[0].1, 360.0);
    }

    #[test]
    fn empty_input_yields_no_points() {
        assert!(normalize_points(&[], VIEWPORT).is_empty());
    }

    #[test]
    fn stat_fill_is_proportional_and_clamped() {
        assert_eq!(stat_fill(0.0, 10), 0);
        assert_eq!(stat_fill(50.0, 10), 5);
        assert_eq!(stat_fill(100.0, 10), 10);
        assert_eq!(stat_fill(250.0, 10), 10);
        assert_eq!(stat_fill(-5.0, 10), 0);
    }

    #[test]
    fn stat_bar_fills_from_the_left() {
        assert_eq!(stat_bar(75.0, 4), "███░");
        assert_eq!(stat_bar(0.0, 3), "░░░");
    }
}
