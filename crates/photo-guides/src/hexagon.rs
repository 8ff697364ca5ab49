//! Hexagon cutting guides
//!
//! A hexagonal cutting die leaves a silhouette whose left and right halves
//! are chevrons: top edge, out to an apex at mid-height, back to the bottom
//! edge. The guides are those two chevrons, fitted so the hexagon spans the
//! full drawable height.

use crate::constants::HEXAGON_HALF_ANGLE_DEG;
use crate::types::{DrawableArea, GuideError, Line, Point, Result};

/// Compute the two guide chevrons for `area`, shifted horizontally by `offset`.
///
/// Returns `[left, right]`, each a 3-point path from the top edge through the
/// apex to the bottom edge, in outer-image coordinates. Lines are not clamped
/// to the area; a large offset moves them past its border.
pub fn hexagon_guides(area: &DrawableArea, offset: f64) -> Result<[Line; 2]> {
    let (width, height) = (area.width(), area.height());
    if width == 0 || height == 0 {
        return Err(GuideError::InvalidGeometry(format!(
            "drawable area {}x{} is empty",
            width, height
        )));
    }
    if !offset.is_finite() {
        return Err(GuideError::InvalidGeometry(format!(
            "guide offset must be finite, got {}",
            offset
        )));
    }

    let height = height as f64;
    let mid_x = width as f64 / 2.0 + offset;
    let mid_y = height / 2.0;
    let angle = HEXAGON_HALF_ANGLE_DEG.to_radians();
    let r = mid_y / angle.cos();
    let s = r * angle.sin();

    let origin = area.origin();
    let side = |d: f64| {
        Line {
            points: vec![
                Point::new(mid_x + d * s, 0.0),
                Point::new(mid_x + d * r, mid_y),
                Point::new(mid_x + d * s, height),
            ],
        }
        .translate(origin.x, origin.y)
    };

    Ok([side(-1.0), side(1.0)])
}
