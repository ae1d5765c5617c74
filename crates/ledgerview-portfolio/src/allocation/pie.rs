//! Pie chart geometry for allocation groups.
//!
//! Angles are in degrees, measured clockwise from 12 o'clock.

use super::aggregate::AllocationGroup;
use crate::types::RenderColor;
use serde::{Deserialize, Serialize};

/// Sweeps at or below this many degrees are treated as zero-width.
pub const ZERO_WIDTH_EPSILON: f64 = 1e-9;

/// Full circle in degrees.
pub const FULL_CIRCLE: f64 = 360.0;

/// One slice of the allocation pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieSlice {
    /// Key of the group this slice draws.
    pub group_key: String,

    /// Start angle in degrees.
    pub start_angle_degrees: f64,

    /// End angle in degrees.
    pub end_angle_degrees: f64,

    /// Fill colour, carried over from the group.
    pub render_color: RenderColor,
}

impl PieSlice {
    /// Returns the angular width of the slice.
    #[must_use]
    pub fn sweep_degrees(&self) -> f64 {
        self.end_angle_degrees - self.start_angle_degrees
    }

    /// Returns true if the slice has no visible width.
    ///
    /// Renderers skip these slices.
    #[must_use]
    pub fn is_zero_width(&self) -> bool {
        self.sweep_degrees() <= ZERO_WIDTH_EPSILON
    }

    /// Builds an SVG path (`d` attribute) for the slice.
    ///
    /// Returns `None` for zero-width slices. A slice spanning the full circle
    /// is drawn as two half arcs since a single SVG arc cannot close on itself.
    #[must_use]
    pub fn svg_arc_path(&self, cx: f64, cy: f64, radius: f64) -> Option<String> {
        if self.is_zero_width() {
            return None;
        }

        if self.sweep_degrees() >= FULL_CIRCLE - ZERO_WIDTH_EPSILON {
            let top = cy - radius;
            let bottom = cy + radius;
            return Some(format!(
                "M {cx:.3} {top:.3} A {radius:.3} {radius:.3} 0 1 1 {cx:.3} {bottom:.3} \
                 A {radius:.3} {radius:.3} 0 1 1 {cx:.3} {top:.3} Z"
            ));
        }

        let (x1, y1) = polar_to_cartesian(cx, cy, radius, self.start_angle_degrees);
        let (x2, y2) = polar_to_cartesian(cx, cy, radius, self.end_angle_degrees);
        let large_arc = u8::from(self.sweep_degrees() > 180.0);
        Some(format!(
            "M {cx:.3} {cy:.3} L {x1:.3} {y1:.3} A {radius:.3} {radius:.3} 0 {large_arc} 1 {x2:.3} {y2:.3} Z"
        ))
    }
}

/// Lays out allocation groups as contiguous pie slices.
///
/// Expects groups in the order produced by [`super::aggregate`]. Slices start
/// at 0° and each spans `percentage_of_total / 100 × 360` degrees, so the last
/// slice ends at 360° whenever the percentages sum to 100. Groups with a zero
/// weight produce zero-width slices.
#[must_use]
pub fn compute_pie_slices(groups: &[AllocationGroup]) -> Vec<PieSlice> {
    let mut running = 0.0_f64;
    groups
        .iter()
        .map(|g| {
            let sweep = g.percentage_of_total / 100.0 * FULL_CIRCLE;
            let slice = PieSlice {
                group_key: g.key.clone(),
                start_angle_degrees: running,
                end_angle_degrees: running + sweep,
                render_color: g.render_color,
            };
            running += sweep;
            slice
        })
        .collect()
}

/// Returns the slices a renderer should draw.
pub fn drawable_slices(slices: &[PieSlice]) -> impl Iterator<Item = &PieSlice> {
    slices.iter().filter(|s| !s.is_zero_width())
}

fn polar_to_cartesian(cx: f64, cy: f64, radius: f64, angle_degrees: f64) -> (f64, f64) {
    let radians = (angle_degrees - 90.0).to_radians();
    (cx + radius * radians.cos(), cy + radius * radians.sin())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rust_decimal::Decimal;

    fn group(key: &str, pct: f64, rank: usize) -> AllocationGroup {
        AllocationGroup {
            key: key.to_string(),
            total_value: Decimal::ONE,
            percentage_of_total: pct,
            holding_count: 1,
            render_color: RenderColor::for_rank(rank),
        }
    }

    #[test]
    fn test_empty() {
        assert!(compute_pie_slices(&[]).is_empty());
    }

    #[test]
    fn test_contiguous_slices() {
        let groups = vec![group("A", 50.0, 0), group("B", 30.0, 1), group("C", 20.0, 2)];
        let slices = compute_pie_slices(&groups);

        assert_eq!(slices.len(), 3);
        assert_relative_eq!(slices[0].start_angle_degrees, 0.0, epsilon = 1e-9);
        assert_relative_eq!(slices[0].end_angle_degrees, 180.0, epsilon = 1e-9);
        assert_relative_eq!(slices[1].start_angle_degrees, 180.0, epsilon = 1e-9);
        assert_relative_eq!(slices[1].end_angle_degrees, 288.0, epsilon = 1e-9);
        assert_relative_eq!(slices[2].end_angle_degrees, 360.0, epsilon = 1e-9);
        assert_eq!(slices[1].render_color, RenderColor::Green);

        for pair in slices.windows(2) {
            assert_eq!(pair[0].end_angle_degrees, pair[1].start_angle_degrees);
        }
    }

    #[test]
    fn test_zero_width_slice() {
        let groups = vec![group("A", 100.0, 0), group("B", 0.0, 1)];
        let slices = compute_pie_slices(&groups);

        assert!(slices[1].is_zero_width());
        assert_eq!(slices[1].start_angle_degrees, slices[1].end_angle_degrees);
        assert!(slices[1].svg_arc_path(100.0, 100.0, 80.0).is_none());
        assert_eq!(drawable_slices(&slices).count(), 1);
    }

    #[test]
    fn test_full_circle_path() {
        let slices = compute_pie_slices(&[group("A", 100.0, 0)]);
        let d = slices[0].svg_arc_path(100.0, 100.0, 80.0).unwrap();

        assert!(d.starts_with("M 100.000 20.000"));
        assert_eq!(d.matches(" A ").count(), 2);
        assert!(d.ends_with('Z'));
    }

    #[test]
    fn test_quarter_path() {
        let slices = compute_pie_slices(&[group("A", 25.0, 0), group("B", 75.0, 1)]);

        let d = slices[0].svg_arc_path(0.0, 0.0, 10.0).unwrap();
        assert_eq!(d, "M 0.000 0.000 L 0.000 -10.000 A 10.000 10.000 0 0 1 10.000 0.000 Z");

        // Second slice spans 270 degrees and needs the large-arc flag
        let d = slices[1].svg_arc_path(0.0, 0.0, 10.0).unwrap();
        assert!(d.contains(" 0 1 1 "));
    }
}
