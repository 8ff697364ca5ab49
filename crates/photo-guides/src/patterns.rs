//! Test patterns for the measurement chart
//!
//! Line-width fans, black/white double-stroke samples and checkerboards.
//! They show how fine a printer resolves strokes and whether the lab's
//! scaling blurs or aliases them.

use crate::constants::{
    BW_LINE_ORIGIN, BW_LINE_RUN, BW_LINE_SPACING, BW_LINE_WIDTHS, TEST_LINE_RUN, TEST_LINE_SPACING,
    TEST_LINE_WIDTHS,
};
use crate::types::{Color, GuideError, Label, LabelAnchor, Line, PixelRect, Point, Result};

/// A line with its stroke
#[derive(Debug, Clone, PartialEq)]
pub struct StrokedLine {
    pub line: Line,
    pub width: u32,
    pub color: Color,
}

impl StrokedLine {
    pub fn new(line: Line, width: u32, color: Color) -> Self {
        Self { line, width, color }
    }
}

/// A fan of parallel lines of increasing width, each labeled with its width
#[derive(Debug, Clone, PartialEq)]
pub struct TestLineFan {
    pub lines: Vec<StrokedLine>,
    /// Labels are always drawn in black
    pub labels: Vec<Label>,
}

/// Lay out one fan. Line `i` starts `i * 25` px right of and below `origin`
/// and runs by `run`.
pub fn test_line_fan(origin: Point, run: (f64, f64), color: Color) -> TestLineFan {
    let mut lines = Vec::with_capacity(TEST_LINE_WIDTHS.len());
    let mut labels = Vec::with_capacity(TEST_LINE_WIDTHS.len());
    for (i, &width) in TEST_LINE_WIDTHS.iter().enumerate() {
        let shift = i as f64 * TEST_LINE_SPACING;
        let start = origin.translate(shift, shift);
        lines.push(StrokedLine::new(
            Line::segment(start, start.translate(run.0, run.1)),
            width,
            color,
        ));
        labels.push(Label::new(
            width.to_string(),
            start.translate(0.0, (width / 2) as f64),
            LabelAnchor::TOP_LEFT,
        ));
    }
    TestLineFan { lines, labels }
}

/// The chart's four fans: black, green, red and blue
pub fn color_test_fans() -> Vec<TestLineFan> {
    [
        (100.0, Color::BLACK),
        (500.0, Color::GREEN),
        (900.0, Color::RED),
        (1300.0, Color::BLUE),
    ]
    .into_iter()
    .map(|(x, color)| test_line_fan(Point::new(x, 1000.0), TEST_LINE_RUN, color))
    .collect()
}

/// A wide stroke overlaid with a narrower one along the same segment
#[derive(Debug, Clone, PartialEq)]
pub struct DoubleStroke {
    pub outer: StrokedLine,
    pub inner: StrokedLine,
}

impl DoubleStroke {
    pub fn new(line: Line, inner: (u32, Color), outer: (u32, Color)) -> Self {
        Self {
            outer: StrokedLine::new(line.clone(), outer.0, outer.1),
            inner: StrokedLine::new(line, inner.0, inner.1),
        }
    }

    /// Strokes in paint order
    pub fn strokes(&self) -> [&StrokedLine; 2] {
        [&self.outer, &self.inner]
    }
}

/// Black/white double-stroke samples at the hexagon angle.
///
/// For every (inner, outer) width pair there is a white-on-black sample and,
/// half a spacing to the right, a black-on-white one.
pub fn bw_test_lines() -> Vec<DoubleStroke> {
    let origin = Point::new(BW_LINE_ORIGIN.0, BW_LINE_ORIGIN.1);
    let sample = |shift: f64| {
        let start = origin.translate(shift * BW_LINE_SPACING, 0.0);
        Line::segment(start, start.translate(BW_LINE_RUN.0, BW_LINE_RUN.1))
    };

    BW_LINE_WIDTHS
        .iter()
        .enumerate()
        .flat_map(|(i, &(inner, outer))| {
            let i = i as f64;
            [
                DoubleStroke::new(sample(i), (inner, Color::WHITE), (outer, Color::BLACK)),
                DoubleStroke::new(sample(i + 0.5), (inner, Color::BLACK), (outer, Color::WHITE)),
            ]
        })
        .collect()
}

/// A checkerboard filling `area`, tiled on the global `tile_size` grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Checkerboard {
    pub area: PixelRect,
    pub tile_size: u32,
    pub color_a: Color,
    pub color_b: Color,
}

/// One filled tile of a checkerboard, clipped to the board
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckerTile {
    pub rect: PixelRect,
    pub color: Color,
}

impl Checkerboard {
    pub fn new(area: PixelRect, tile_size: u32) -> Result<Self> {
        if tile_size == 0 {
            return Err(GuideError::InvalidGeometry(
                "checkerboard tile size must be positive".to_string(),
            ));
        }
        Ok(Self {
            area,
            tile_size,
            color_a: Color::WHITE,
            color_b: Color::BLACK,
        })
    }

    /// Color of the pixel at (x, y): `color_a` where exactly one of the
    /// tile column and tile row is odd
    pub fn color_at(&self, x: u32, y: u32) -> Color {
        let t = self.tile_size;
        if (x / t % 2 == 0) != (y / t % 2 == 0) {
            self.color_a
        } else {
            self.color_b
        }
    }

    /// All tiles covering the board, row by row
    pub fn tiles(&self) -> Vec<CheckerTile> {
        let t = self.tile_size;
        let edges = |start: u32, end: u32| {
            let mut cuts = vec![start];
            let mut next = (start / t + 1) * t;
            while next < end {
                cuts.push(next);
                next += t;
            }
            cuts.push(end);
            cuts
        };
        let xs = edges(self.area.x, self.area.right());
        let ys = edges(self.area.y, self.area.bottom());

        let mut tiles = Vec::with_capacity((xs.len() - 1) * (ys.len() - 1));
        for row in ys.windows(2) {
            for col in xs.windows(2) {
                if col[1] > col[0] && row[1] > row[0] {
                    tiles.push(CheckerTile {
                        rect: PixelRect::new(col[0], row[0], col[1] - col[0], row[1] - row[0]),
                        color: self.color_at(col[0], row[0]),
                    });
                }
            }
        }
        tiles
    }
}

/// The chart's four 400x400 boards with tile sizes 1, 8, 2 and 4
pub fn default_checkerboards() -> Result<Vec<Checkerboard>> {
    [(200, 1500, 1), (200, 1900, 8), (600, 1500, 2), (600, 1900, 4)]
        .into_iter()
        .map(|(x, y, tile)| Checkerboard::new(PixelRect::new(x, y, 400, 400), tile))
        .collect()
}
