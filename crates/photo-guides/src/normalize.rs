//! Resolution normalization
//!
//! Maps a source image onto a target resolution in two steps: scale so the
//! heights match, then resolve the remaining width difference by cropping
//! (source wider than target) or padding (source narrower or equal).
//! The plan is pure geometry; pixels are touched by the renderer.

use crate::types::{GuideError, PixelRect, Result, Size};

/// How the width mismatch after height-matching is resolved
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeAction {
    /// The scaled source is wider than the target: cut columns off both sides
    Crop,
    /// The scaled source is narrower or equal: center it on a blank canvas
    Pad,
}

/// The complete resize/crop/pad plan for one source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    pub source: Size,
    pub target: Size,
    /// Source after uniform scaling to the target height
    pub scaled: Size,
    pub action: ResizeAction,
    /// `|scaled.width - target.width|`
    pub width_diff: u32,
    /// Columns removed (crop) or added (pad) on the left: `width_diff / 2`
    pub leading: u32,
    /// Columns removed or added on the right: the rest of `width_diff`
    pub trailing: u32,
    /// For `Crop`, the kept region in scaled-image coordinates.
    /// For `Pad`, where the scaled image is pasted on the target canvas.
    pub region: PixelRect,
}

impl ResizePlan {
    /// Compute the plan for mapping `source` onto `target`
    pub fn compute(source: Size, target: Size) -> Result<Self> {
        target.ensure_positive("target resolution")?;
        if source.height == 0 {
            return Err(GuideError::InvalidGeometry(
                "source image has zero height".to_string(),
            ));
        }

        let scale = target.height as f64 / source.height as f64;
        let exact_width = source.width as f64 * target.height as f64 / source.height as f64;
        if exact_width > u32::MAX as f64 {
            return Err(GuideError::InvalidGeometry(format!(
                "source {} is too wide to scale by {:.4}",
                source, scale
            )));
        }
        let scaled_width = exact_width as u32;
        if scaled_width == 0 {
            return Err(GuideError::InvalidGeometry(format!(
                "source {} collapses to zero width when scaled by {:.4}",
                source, scale
            )));
        }
        let scaled = Size::new(scaled_width, target.height);

        let width_diff = scaled.width.abs_diff(target.width);
        let leading = width_diff / 2;
        let trailing = width_diff - leading;

        let (action, region) = if scaled.width > target.width {
            (
                ResizeAction::Crop,
                PixelRect::new(leading, 0, target.width, target.height),
            )
        } else {
            (
                ResizeAction::Pad,
                PixelRect::new(leading, 0, scaled.width, target.height),
            )
        };

        log::debug!(
            "resize plan {} -> {}: scaled to {}, {:?} by {} ({} left, {} right)",
            source,
            target,
            scaled,
            action,
            width_diff,
            leading,
            trailing
        );

        Ok(Self {
            source,
            target,
            scaled,
            action,
            width_diff,
            leading,
            trailing,
            region,
        })
    }

    /// True when the plan changes nothing (same size, no border)
    pub fn is_identity(&self) -> bool {
        self.source == self.target && self.width_diff == 0
    }
}
