//! Measurement chart layout
//!
//! Turns [`ChartOptions`] into the full list of primitives of a test
//! picture. The renderer paints the parts in field order.

use crate::constants::{ARGS_POSITION, COMMENT_POSITION};
use crate::margin_indicator::{MarginWedge, margin_indicators};
use crate::options::ChartOptions;
use crate::patterns::{
    Checkerboard, DoubleStroke, TestLineFan, bw_test_lines, color_test_fans, default_checkerboards,
};
use crate::ticks::{AxisOrientation, AxisTickLayout};
use crate::types::*;

/// Block of option text, wrapped by the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct ArgsBlock {
    pub at: Point,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub size: Size,
    pub background: Color,
    pub axes: Vec<AxisTickLayout>,
    /// Base stroke width of axis lines and minor ticks
    pub axis_width: u32,
    pub color_fans: Vec<TestLineFan>,
    pub bw_lines: Vec<DoubleStroke>,
    pub checkerboards: Vec<Checkerboard>,
    pub margin_wedges: Vec<MarginWedge>,
    pub comment: Option<Label>,
    pub args: Option<ArgsBlock>,
}

/// Lay out a chart. Fails before producing anything if any part is invalid.
pub fn layout_chart(options: &ChartOptions) -> Result<ChartLayout> {
    options.validate()?;
    let size = options.geometry;

    let axes = if options.axis {
        let horizontal = AxisTickLayout::new(
            AxisOrientation::Horizontal,
            (size.height / 2) as i32,
            size.width as i32,
        );
        let vertical = AxisTickLayout::new(
            AxisOrientation::Vertical,
            (size.width / 2) as i32,
            size.height as i32,
        );
        horizontal.validate()?;
        vertical.validate()?;
        vec![horizontal, vertical]
    } else {
        Vec::new()
    };

    let color_fans = if options.test_lines_color {
        color_test_fans()
    } else {
        Vec::new()
    };

    let bw_lines = if options.test_lines_bw {
        bw_test_lines()
    } else {
        Vec::new()
    };

    let checkerboards = if options.checkerboard {
        default_checkerboards()?
    } else {
        Vec::new()
    };

    let margin_wedges = match options.margin {
        Some(range) => margin_indicators(size, range)?,
        None => Vec::new(),
    };

    let comment = options.comment.as_ref().map(|text| {
        Label::new(
            text.clone(),
            Point::new(COMMENT_POSITION.0, COMMENT_POSITION.1),
            LabelAnchor::TOP_LEFT,
        )
    });

    let args = options.print_args.then(|| ArgsBlock {
        at: Point::new(ARGS_POSITION.0, ARGS_POSITION.1),
        items: options.describe(),
    });

    log::debug!(
        "chart {}: {} axes, {} fans, {} bw lines, {} boards, {} wedges",
        size,
        axes.len(),
        color_fans.len(),
        bw_lines.len(),
        checkerboards.len(),
        margin_wedges.len()
    );

    Ok(ChartLayout {
        size,
        background: options.background,
        axes,
        axis_width: options.base_width,
        color_fans,
        bw_lines,
        checkerboards,
        margin_wedges,
        comment,
        args,
    })
}
