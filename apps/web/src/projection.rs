//! Pure layout math for the projection tab: the circle placement used
//! when no embedding service is available, canvas fitting, and the sweep
//! animation clock.

pub const LAYOUT_RADIUS: f64 = 0.8;
pub const LAYOUT_JITTER: f64 = 0.1;
pub const LAYOUT_CLUSTERS: usize = 3;

const SWEEP_SPEED: f64 = 1.4;
const MAX_FRAME_DELTA_MS: f64 = 250.0;
const FULL_ROTATION: f64 = 2.0 * std::f64::consts::PI;

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
    pub cluster: usize,
}

/// Evenly spaced placement around a circle of radius 0.8, with a small
/// deterministic per-name jitter and a rotating cluster index.
pub fn circle_layout(names: &[String]) -> Vec<LayoutPoint> {
    let total = names.len();

    names
        .iter()
        .enumerate()
        .map(|(index, name)| {
            #[allow(clippy::cast_precision_loss)]
            let angle = (index as f64 / total as f64) * FULL_ROTATION;
            let (jitter_x, jitter_y) = name_jitter(name);

            LayoutPoint {
                x: angle.cos().mul_add(LAYOUT_RADIUS, jitter_x),
                y: angle.sin().mul_add(LAYOUT_RADIUS, jitter_y),
                cluster: index % LAYOUT_CLUSTERS,
            }
        })
        .collect()
}

/// Min-max fits points into a padded canvas rectangle. Canvas y grows
/// upward, so no axis inversion is needed here; a zero-range axis lands
/// on the canvas midline.
pub fn fit_to_canvas(
    points: &[(f64, f64)],
    width: f64,
    height: f64,
    padding: f64,
) -> Vec<(f64, f64)> {
    if points.is_empty() {
        return Vec::new();
    }

    let (x_min, x_max) = bounds(points.iter().map(|point| point.0));
    let (y_min, y_max) = bounds(points.iter().map(|point| point.1));
    let x_range = x_max - x_min;
    let y_range = y_max - y_min;
    let plot_width = width - padding * 2.0;
    let plot_height = height - padding * 2.0;

    points
        .iter()
        .map(|&(x, y)| {
            let px = if x_range > 0.0 {
                padding + (x - x_min) / x_range * plot_width
            } else {
                padding + plot_width / 2.0
            };
            let py = if y_range > 0.0 {
                padding + (y - y_min) / y_range * plot_height
            } else {
                padding + plot_height / 2.0
            };

            (px, py)
        })
        .collect()
}

/// Advances the sweep angle from wall-clock milliseconds, clamping frame
/// gaps so a background tab does not fast-forward the animation.
pub fn advance_sweep(counter: f64, last_ms: Option<f64>, now_ms: f64) -> (f64, Option<f64>) {
    let delta_ms = last_ms.map_or(0.0, |last| (now_ms - last).clamp(0.0, MAX_FRAME_DELTA_MS));
    let next = (counter + delta_ms / 1000.0 * SWEEP_SPEED).rem_euclid(FULL_ROTATION);

    (next, Some(now_ms))
}

fn name_jitter(name: &str) -> (f64, f64) {
    let hash = name
        .bytes()
        .fold(0_u64, |acc, b| acc.wrapping_mul(31) + u64::from(b));

    #[allow(clippy::cast_precision_loss)]
    let unit = |value: u64| (value % 100) as f64 / 100.0;

    (
        unit(hash).mul_add(2.0 * LAYOUT_JITTER, -LAYOUT_JITTER),
        unit(hash / 100).mul_add(2.0 * LAYOUT_JITTER, -LAYOUT_JITTER),
    )
}

fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    values.fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), value| {
        (min.min(value), max.max(value))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        let diff = (actual - expected).abs();
        assert!(diff < 1e-9, "expected {expected}, got {actual}, diff {diff}");
    }

    #[test]
    fn layout_points_ride_the_jittered_circle() {
        let names: Vec<String> = ["Rath", "Astrodactyl", "Squidstrictor", "Fasttrack"]
            .iter()
            .map(ToString::to_string)
            .collect();

        let points = circle_layout(&names);
        assert_eq!(points.len(), 4);

        for (index, point) in points.iter().enumerate() {
            #[allow(clippy::cast_precision_loss)]
            let angle = (index as f64 / 4.0) * 2.0 * std::f64::consts::PI;
            assert!((point.x - angle.cos() * LAYOUT_RADIUS).abs() <= LAYOUT_JITTER + 1e-9);
            assert!((point.y - angle.sin() * LAYOUT_RADIUS).abs() <= LAYOUT_JITTER + 1e-9);
            assert_eq!(point.cluster, index % 3);
        }
    }

    #[test]
    fn layout_is_deterministic() {
        let names = vec!["Blitzwolfer".to_string(), "Ripjaws".to_string()];
        assert_eq!(circle_layout(&names), circle_layout(&names));
    }

    #[test]
    fn fitted_points_stay_inside_the_padding() {
        let points = [(-1.0, -1.0), (0.3, 0.1), (1.0, 1.0)];
        let fitted = fit_to_canvas(&points, 80.0, 40.0, 3.0);

        for &(px, py) in &fitted {
            assert!((3.0..=77.0).contains(&px));
            assert!((3.0..=37.0).contains(&py));
        }
    }

    #[test]
    fn single_point_sits_on_the_canvas_midlines() {
        let fitted = fit_to_canvas(&[(0.5, 0.5)], 80.0, 40.0, 3.0);
        assert_close(fitted[0].0, 40.0);
        assert_close(fitted[0].1, 20.0);
    }

    #[test]
    fn sweep_first_tick_only_initializes_the_clock() {
        let (counter, last) = advance_sweep(1.5, None, 10_000.0);
        assert_close(counter, 1.5);
        assert_eq!(last, Some(10_000.0));
    }

    #[test]
    fn sweep_advances_and_wraps() {
        let start = FULL_ROTATION - 0.1;
        let (counter, _) = advance_sweep(start, Some(0.0), 200.0);
        assert_close(counter, (start + 0.2 * SWEEP_SPEED).rem_euclid(FULL_ROTATION));
    }

    #[test]
    fn sweep_clamps_long_frame_gaps() {
        let (counter, _) = advance_sweep(0.0, Some(0.0), 60_000.0);
        assert_close(counter, 0.25 * SWEEP_SPEED);
    }

    #[test]
    fn sweep_ignores_backwards_clocks() {
        let (counter, last) = advance_sweep(2.0, Some(5_000.0), 4_000.0);
        assert_close(counter, 2.0);
        assert_eq!(last, Some(4_000.0));
    }
}
