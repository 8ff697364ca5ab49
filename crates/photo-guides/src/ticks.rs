//! Measurement ruler tick layout
//!
//! A ruler runs along one axis from 0 to `end` at a fixed orthogonal
//! `position`. Ticks fall on every multiple of `interval`; every
//! `bigger_ticks`-th tick is major, drawn heavier and labeled with its
//! coordinate.

use crate::constants::{AXIS_MAJOR_EVERY, AXIS_TICK_INTERVAL, AXIS_TICK_LENGTH};
use crate::types::{GuideError, Label, LabelAnchor, Line, Point, Result};

/// Direction a ruler runs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisOrientation {
    /// Along x, at a fixed y
    Horizontal,
    /// Along y, at a fixed x
    Vertical,
}

/// Where a major tick's label sits relative to the axis line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelSide {
    /// Above a horizontal axis
    Above,
    /// Below a horizontal axis
    Below,
    /// To the right of a vertical axis
    Beside,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TickLabel {
    pub label: Label,
    pub side: LabelSide,
}

/// One ruler tick
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    /// Index along the axis, starting at 0
    pub index: usize,
    /// Coordinate along the axis
    pub value: i32,
    /// Where the tick crosses the axis line
    pub at: Point,
    pub major: bool,
    /// The tick mark, `tick_length` to either side of the axis
    pub mark: Line,
    /// Present on major ticks only
    pub label: Option<TickLabel>,
}

impl Tick {
    /// Stroke width of the mark: major ticks are twice the base width
    pub fn stroke_width(&self, base: u32) -> u32 {
        if self.major { base * 2 } else { base }
    }
}

/// Parameters of one ruler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisTickLayout {
    pub orientation: AxisOrientation,
    /// The fixed coordinate orthogonal to the axis
    pub position: i32,
    /// Last coordinate the ruler may reach
    pub end: i32,
    /// Distance between ticks
    pub interval: i32,
    /// A major tick every this many ticks
    pub bigger_ticks: i32,
    /// Half-length of each tick mark
    pub tick_length: i32,
}

impl AxisTickLayout {
    /// A ruler with the chart's default spacing
    pub fn new(orientation: AxisOrientation, position: i32, end: i32) -> Self {
        Self {
            orientation,
            position,
            end,
            interval: AXIS_TICK_INTERVAL,
            bigger_ticks: AXIS_MAJOR_EVERY,
            tick_length: AXIS_TICK_LENGTH,
        }
    }

    pub fn interval(mut self, interval: i32) -> Self {
        self.interval = interval;
        self
    }

    pub fn bigger_ticks(mut self, bigger_ticks: i32) -> Self {
        self.bigger_ticks = bigger_ticks;
        self
    }

    pub fn tick_length(mut self, tick_length: i32) -> Self {
        self.tick_length = tick_length;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.interval <= 0 {
            return Err(GuideError::InvalidGeometry(format!(
                "tick interval must be positive, got {}",
                self.interval
            )));
        }
        if self.bigger_ticks <= 0 {
            return Err(GuideError::InvalidGeometry(format!(
                "major tick spacing must be positive, got {}",
                self.bigger_ticks
            )));
        }
        Ok(())
    }

    /// Number of ticks covering `0..=end`
    pub fn tick_count(&self) -> usize {
        if self.end < 0 || self.interval <= 0 {
            0
        } else {
            (self.end / self.interval) as usize + 1
        }
    }

    /// The ticks in axis order.
    ///
    /// The returned iterator computes each tick on demand; calling this again
    /// starts a fresh pass over the same ticks.
    pub fn ticks(&self) -> Result<AxisTicks> {
        self.validate()?;
        Ok(AxisTicks {
            layout: *self,
            next: 0,
            count: self.tick_count(),
        })
    }

    /// The ruler's base line from 0 to `end`
    pub fn axis_line(&self) -> Line {
        Line::segment(self.along(0.0, 0.0), self.along(self.end as f64, 0.0))
    }

    /// Map (distance along the axis, distance across it) to image coordinates
    fn along(&self, along: f64, across: f64) -> Point {
        let p = Point::new(along, self.position as f64 + across);
        match self.orientation {
            AxisOrientation::Horizontal => p,
            AxisOrientation::Vertical => p.transposed(),
        }
    }

    fn tick(&self, index: usize) -> Tick {
        let value = index as i32 * self.interval;
        let v = value as f64;
        let len = self.tick_length as f64;
        let major = index as i32 % self.bigger_ticks == 0;

        let label = major.then(|| {
            let (side, at) = match self.orientation {
                AxisOrientation::Horizontal => {
                    if (index as i32 / self.bigger_ticks) % 2 == 0 {
                        (LabelSide::Above, self.along(v, -2.0 * len))
                    } else {
                        (LabelSide::Below, self.along(v, len))
                    }
                }
                AxisOrientation::Vertical => (LabelSide::Beside, self.along(v, len)),
            };
            TickLabel {
                label: Label::new(value.to_string(), at, LabelAnchor::TOP_LEFT),
                side,
            }
        });

        Tick {
            index,
            value,
            at: self.along(v, 0.0),
            major,
            mark: Line::segment(self.along(v, -len), self.along(v, len)),
            label,
        }
    }
}

/// Lazy iterator over a ruler's ticks
#[derive(Debug, Clone)]
pub struct AxisTicks {
    layout: AxisTickLayout,
    next: usize,
    count: usize,
}

impl Iterator for AxisTicks {
    type Item = Tick;

    fn next(&mut self) -> Option<Tick> {
        if self.next >= self.count {
            return None;
        }
        let tick = self.layout.tick(self.next);
        self.next += 1;
        Some(tick)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.count - self.next;
        (left, Some(left))
    }
}

impl ExactSizeIterator for AxisTicks {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticks_cover_end_inclusive() {
        let layout = AxisTickLayout::new(AxisOrientation::Horizontal, 50, 100)
            .interval(25)
            .bigger_ticks(5);
        let ticks: Vec<Tick> = layout.ticks().unwrap().collect();
        let values: Vec<i32> = ticks.iter().map(|t| t.value).collect();
        assert_eq!(values, vec![0, 25, 50, 75, 100]);
        assert!(ticks[0].major);
        assert_eq!(ticks[0].label.as_ref().unwrap().label.text, "0");
        for t in &ticks[1..] {
            assert!(!t.major);
            assert!(t.label.is_none());
        }
    }

    #[test]
    fn test_end_not_on_multiple() {
        let layout = AxisTickLayout::new(AxisOrientation::Vertical, 0, 99).interval(25);
        let values: Vec<i32> = layout.ticks().unwrap().map(|t| t.value).collect();
        assert_eq!(values, vec![0, 25, 50, 75]);
    }

    #[test]
    fn test_horizontal_labels_alternate() {
        let layout = AxisTickLayout::new(AxisOrientation::Horizontal, 500, 1000)
            .interval(25)
            .bigger_ticks(5)
            .tick_length(50);
        let labels: Vec<TickLabel> = layout.ticks().unwrap().filter_map(|t| t.label).collect();
        assert_eq!(labels[0].side, LabelSide::Above);
        assert_eq!(labels[0].label.at, Point::new(0.0, 400.0));
        assert_eq!(labels[1].side, LabelSide::Below);
        assert_eq!(labels[1].label.at, Point::new(125.0, 550.0));
        assert_eq!(labels[2].side, LabelSide::Above);
        assert_eq!(labels[2].label.text, "250");
    }

    #[test]
    fn test_vertical_axis_geometry() {
        let layout = AxisTickLayout::new(AxisOrientation::Vertical, 300, 200)
            .interval(50)
            .bigger_ticks(2)
            .tick_length(10);
        let ticks: Vec<Tick> = layout.ticks().unwrap().collect();
        assert_eq!(ticks[1].at, Point::new(300.0, 50.0));
        assert_eq!(
            ticks[1].mark.points(),
            &[Point::new(290.0, 50.0), Point::new(310.0, 50.0)]
        );
        let label = ticks[2].label.as_ref().unwrap();
        assert_eq!(label.side, LabelSide::Beside);
        assert_eq!(label.label.at, Point::new(310.0, 100.0));
        assert_eq!(
            layout.axis_line().points(),
            &[Point::new(300.0, 0.0), Point::new(300.0, 200.0)]
        );
    }

    #[test]
    fn test_major_ticks_are_wider() {
        let layout = AxisTickLayout::new(AxisOrientation::Horizontal, 0, 50).bigger_ticks(2);
        let widths: Vec<u32> = layout.ticks().unwrap().map(|t| t.stroke_width(2)).collect();
        assert_eq!(widths, vec![4, 2, 4]);
    }

    #[test]
    fn test_restartable() {
        let layout = AxisTickLayout::new(AxisOrientation::Horizontal, 0, 300);
        let first: Vec<Tick> = layout.ticks().unwrap().collect();
        let second: Vec<Tick> = layout.ticks().unwrap().collect();
        assert_eq!(first, second);
        assert_eq!(layout.ticks().unwrap().len(), 13);
    }

    #[test]
    fn test_invalid_parameters() {
        let layout = AxisTickLayout::new(AxisOrientation::Horizontal, 0, 100);
        assert!(layout.interval(0).ticks().is_err());
        assert!(layout.interval(-5).ticks().is_err());
        assert!(layout.bigger_ticks(0).ticks().is_err());
    }

    #[test]
    fn test_negative_end_is_empty() {
        let layout = AxisTickLayout::new(AxisOrientation::Horizontal, 0, -1);
        assert_eq!(layout.ticks().unwrap().count(), 0);
    }
}
