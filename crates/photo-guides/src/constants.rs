//! Shared constants for guide and chart geometry
//!
//! This module centralizes the fixed numbers of the calibration output.
//! Changing any of them changes what labs measure against.

use crate::types::Color;

// =============================================================================
// Hexagon Guides
// =============================================================================

/// Half-angle of the cutting die's angled sides, in degrees
pub const HEXAGON_HALF_ANGLE_DEG: f64 = 30.0;

/// Width of the white outer stroke of a guide line
pub const GUIDE_OUTER_WIDTH: u32 = 6;

/// Width of the black inner stroke of a guide line
pub const GUIDE_INNER_WIDTH: u32 = 2;

/// Suffix appended to the full input file name for guide output
pub const GUIDE_OUTPUT_SUFFIX: &str = "_guides.png";

/// Canvas color used when a narrow source is padded to the target width
pub const PAD_BACKGROUND: Color = Color::WHITE;

// =============================================================================
// Measurement Axis
// =============================================================================

/// A tick every this many pixels
pub const AXIS_TICK_INTERVAL: i32 = 25;

/// A major (labeled) tick every this many ticks
pub const AXIS_MAJOR_EVERY: i32 = 5;

/// Half-length of a tick mark, perpendicular to the axis
pub const AXIS_TICK_LENGTH: i32 = 50;

/// Stroke width of the axis line and minor ticks; major ticks are twice this
pub const AXIS_BASE_WIDTH: u32 = 2;

// =============================================================================
// Test Lines
// =============================================================================

/// Stroke widths of one fan of color test lines
pub const TEST_LINE_WIDTHS: [u32; 6] = [1, 2, 3, 4, 8, 16];

/// Diagonal spacing between consecutive lines of a fan
pub const TEST_LINE_SPACING: f64 = 25.0;

/// Run of every color test line, relative to its start
pub const TEST_LINE_RUN: (f64, f64) = (300.0, -800.0);

/// Run of every black/white test line. An integer vector whose angle to the
/// vertical is within 6e-6 degrees of 30.
pub const BW_LINE_RUN: (f64, f64) = (780.0, 1351.0);

/// Start of the first black/white test line
pub const BW_LINE_ORIGIN: (f64, f64) = (400.0, 500.0);

/// Horizontal distance between black/white line pairs
pub const BW_LINE_SPACING: f64 = 100.0;

/// (inner, outer) stroke widths of the black/white line pairs
pub const BW_LINE_WIDTHS: [(u32, u32); 10] = [
    (1, 2),
    (1, 3),
    (2, 3),
    (3, 3),
    (3, 4),
    (3, 5),
    (3, 6),
    (3, 9),
    (4, 6),
    (4, 8),
];

// =============================================================================
// Text
// =============================================================================

/// Label font size in pixels
pub const LABEL_FONT_SIZE: f32 = 50.0;

/// Position of the free-form chart comment
pub const COMMENT_POSITION: (f64, f64) = (150.0, 100.0);

/// Position of the argument dump
pub const ARGS_POSITION: (f64, f64) = (200.0, 200.0);

/// Rendered width after which the argument dump wraps
pub const ARGS_WRAP_WIDTH: u32 = 1500;

// =============================================================================
// Interactive Preview
// =============================================================================

/// Longest preview edge in pixels
pub const PREVIEW_MAX_EDGE: u32 = 1000;
