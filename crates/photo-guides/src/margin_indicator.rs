//! Margin indicator wedges
//!
//! Each image edge carries two stepped wedges, one growing in from each end
//! toward the middle of the edge. Step `i` of a wedge is a band reaching
//! `(i + 1) * step` pixels into the image, labeled with that depth, so the
//! printed result shows how much of the image a lab's cutting margin eats.

use crate::types::{
    GuideError, HorizontalAnchor, Label, LabelAnchor, MarginRange, Point, Rect, Result, Size,
    VerticalAnchor,
};

/// Image edge a wedge is attached to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// Which end of the edge a wedge starts from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgeHalf {
    /// Starts at coordinate 0 and runs to the middle of the edge
    Leading,
    /// Starts at the far end and runs back to the middle
    Trailing,
}

/// One step of a wedge
#[derive(Debug, Clone, PartialEq)]
pub struct Band {
    /// Corner on the image edge where the step starts
    pub from: Point,
    /// Opposite corner, `value` pixels into the image
    pub to: Point,
    /// Cumulative margin value this step represents
    pub value: i32,
    pub label: Label,
}

impl Band {
    /// The band's area. The inner edge is exclusive.
    pub fn rect(&self) -> Rect {
        Rect::from_corners(self.from, self.to)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarginWedge {
    pub edge: Edge,
    pub half: EdgeHalf,
    /// Steps in order of increasing depth
    pub bands: Vec<Band>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    X,
    Y,
}

/// Lay out the wedges for every edge of an image of `size`.
///
/// Returns eight wedges: for the x axis (top and bottom edges) and then the
/// y axis (left and right edges), the far edge before the near one, each
/// with a leading and a trailing half.
pub fn margin_indicators(size: Size, range: MarginRange) -> Result<Vec<MarginWedge>> {
    size.ensure_positive("image")?;
    range.validate()?;
    let count = range.count();
    if count == 0 {
        return Err(GuideError::InvalidGeometry(format!(
            "margin step {} does not fit in range {}..{}",
            range.step, range.start, range.stop
        )));
    }

    let mut wedges = Vec::with_capacity(8);
    for axis in [Axis::X, Axis::Y] {
        let (length, depth_base) = match axis {
            Axis::X => (size.width, size.height),
            Axis::Y => (size.height, size.width),
        };
        for direction in [-1, 1] {
            let edge = match (axis, direction) {
                (Axis::X, 1) => Edge::Top,
                (Axis::X, _) => Edge::Bottom,
                (Axis::Y, 1) => Edge::Left,
                (Axis::Y, _) => Edge::Right,
            };
            let offset = if direction == 1 { 0 } else { depth_base };
            let anchor = label_anchor(axis, direction);
            let middle = (length / 2) as f64;

            for (half, start_pixel) in [(EdgeHalf::Leading, 0.0), (EdgeHalf::Trailing, length as f64)] {
                let bands = wedge(
                    axis,
                    direction,
                    offset as f64,
                    anchor,
                    start_pixel,
                    middle,
                    count,
                    range.step,
                );
                wedges.push(MarginWedge { edge, half, bands });
            }
        }
    }

    log::debug!(
        "margin indicators for {} with range {}: {} wedges of {} steps",
        size,
        range,
        wedges.len(),
        count
    );
    Ok(wedges)
}

/// Labels read outward from the image, never across its edge
fn label_anchor(axis: Axis, direction: i32) -> LabelAnchor {
    match (axis, direction) {
        (Axis::X, 1) => LabelAnchor::new(HorizontalAnchor::Center, VerticalAnchor::Top),
        (Axis::X, _) => LabelAnchor::new(HorizontalAnchor::Center, VerticalAnchor::Bottom),
        (Axis::Y, 1) => LabelAnchor::new(HorizontalAnchor::Left, VerticalAnchor::Middle),
        (Axis::Y, _) => LabelAnchor::new(HorizontalAnchor::Right, VerticalAnchor::Middle),
    }
}

#[allow(clippy::too_many_arguments)]
fn wedge(
    axis: Axis,
    direction: i32,
    offset: f64,
    anchor: LabelAnchor,
    start_pixel: f64,
    stop_pixel: f64,
    count: usize,
    step: i32,
) -> Vec<Band> {
    // Negative when the wedge runs back from the far end
    let step_width = (stop_pixel - start_pixel) / count as f64;
    let dir = direction as f64;
    let place = |along: f64, across: f64| match axis {
        Axis::X => Point::new(along, across),
        Axis::Y => Point::new(across, along),
    };

    (0..count)
        .map(|i| {
            let i = i as f64;
            let value = (i as i32 + 1) * step;
            let label_at = place(
                (i + 0.5) * step_width + start_pixel,
                (i + 0.5) * step as f64 * dir + offset,
            );
            Band {
                from: place(i * step_width + start_pixel, offset),
                to: place((i + 1.0) * step_width + start_pixel, offset + dir * value as f64),
                value,
                label: Label::new(value.to_string(), label_at, anchor),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wedges(w: u32, h: u32, range: &str) -> Vec<MarginWedge> {
        margin_indicators(Size::new(w, h), range.parse().unwrap()).unwrap()
    }

    #[test]
    fn test_every_wedge_has_one_band_per_step() {
        let all = wedges(800, 600, "0,100,25");
        assert_eq!(all.len(), 8);
        for w in &all {
            let labels: Vec<&str> = w.bands.iter().map(|b| b.label.text.as_str()).collect();
            assert_eq!(labels, vec!["25", "50", "75", "100"]);
        }
    }

    #[test]
    fn test_top_leading_wedge_geometry() {
        let all = wedges(800, 600, "0,100,25");
        let top = all
            .iter()
            .find(|w| w.edge == Edge::Top && w.half == EdgeHalf::Leading)
            .unwrap();
        // Half of 800 split into 4 steps of 100px
        let first = top.bands[0].rect();
        assert_eq!(first, Rect::new(0.0, 0.0, 100.0, 25.0));
        let last = top.bands[3].rect();
        assert_eq!(last, Rect::new(300.0, 0.0, 100.0, 100.0));
        assert_eq!(top.bands[0].label.at, Point::new(50.0, 12.5));
        assert_eq!(
            top.bands[0].label.anchor,
            LabelAnchor::new(HorizontalAnchor::Center, VerticalAnchor::Top)
        );
    }

    #[test]
    fn test_bottom_trailing_wedge_grows_upward_from_far_corner() {
        let all = wedges(800, 600, "0,100,25");
        let bottom = all
            .iter()
            .find(|w| w.edge == Edge::Bottom && w.half == EdgeHalf::Trailing)
            .unwrap();
        assert_eq!(bottom.bands[0].from, Point::new(800.0, 600.0));
        assert_eq!(bottom.bands[0].rect(), Rect::new(700.0, 575.0, 100.0, 25.0));
        assert_eq!(bottom.bands[3].rect(), Rect::new(400.0, 500.0, 100.0, 100.0));
    }

    #[test]
    fn test_side_wedges_are_transposed() {
        let all = wedges(800, 600, "0,100,25");
        let right = all
            .iter()
            .find(|w| w.edge == Edge::Right && w.half == EdgeHalf::Leading)
            .unwrap();
        // Half of 600 split into 4 steps of 75px, growing in from x = 800
        assert_eq!(right.bands[1].rect(), Rect::new(750.0, 75.0, 50.0, 75.0));
        assert_eq!(
            right.bands[1].label.anchor,
            LabelAnchor::new(HorizontalAnchor::Right, VerticalAnchor::Middle)
        );
        let left = all
            .iter()
            .find(|w| w.edge == Edge::Left && w.half == EdgeHalf::Leading)
            .unwrap();
        assert_eq!(left.bands[0].rect(), Rect::new(0.0, 0.0, 25.0, 75.0));
    }

    #[test]
    fn test_invalid_ranges() {
        let size = Size::new(800, 600);
        assert!(margin_indicators(size, MarginRange::new(0, 100, 0)).is_err());
        assert!(margin_indicators(size, MarginRange::new(0, 100, -5)).is_err());
        assert!(margin_indicators(size, MarginRange::new(100, 100, 5)).is_err());
        assert!(margin_indicators(size, MarginRange::new(0, 10, 25)).is_err());
    }
}
