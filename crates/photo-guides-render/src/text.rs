//! Label text
//!
//! Labels are optional decoration: when no usable font exists the caller
//! logs once and skips them.

use crate::{RenderError, Result};
use ab_glyph::{Font, FontVec, PxScale, ScaleFont};
use image::{Rgba, RgbaImage};
use imageproc::drawing::draw_text_mut;
use photo_guides::constants::LABEL_FONT_SIZE;
use photo_guides::{HorizontalAnchor, Label, Point, VerticalAnchor};
use std::path::{Path, PathBuf};

/// Fonts tried, in order, when none is given
const FONT_CANDIDATES: &[&str] = &[
    "/usr/share/fonts/TTF/Verdana.TTF",
    "/usr/share/fonts/truetype/msttcorefonts/Verdana.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/liberation/LiberationSans-Regular.ttf",
    "/usr/share/fonts/liberation/LiberationSans-Regular.ttf",
    "/Library/Fonts/Arial.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\verdana.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

/// Extra space between lines of a multi-line block
const LINE_SPACING: i32 = 4;

/// A loaded font at a fixed pixel size
pub struct LabelFont {
    font: FontVec,
    scale: PxScale,
}

impl LabelFont {
    pub fn from_bytes(bytes: Vec<u8>, size: f32) -> Result<Self> {
        let font = FontVec::try_from_vec(bytes)
            .map_err(|e| RenderError::Font(format!("Invalid font data: {}", e)))?;
        Ok(Self {
            font,
            scale: PxScale::from(size),
        })
    }

    /// Pixel width of `text`
    pub fn measure(&self, text: &str) -> u32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0f32;
        let mut prev: Option<ab_glyph::GlyphId> = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width.ceil() as u32
    }

    /// Height of one line of glyphs, without line gap
    pub fn text_height(&self) -> u32 {
        let scaled = self.font.as_scaled(self.scale);
        (scaled.ascent() - scaled.descent()).ceil() as u32
    }

    /// Baseline-to-baseline distance
    pub fn line_height(&self) -> u32 {
        let scaled = self.font.as_scaled(self.scale);
        (scaled.ascent() - scaled.descent() + scaled.line_gap()).ceil() as u32
    }

    /// Top-left corner of `text` placed at `at` with the given anchor
    pub fn place(&self, text: &str, at: Point, h: HorizontalAnchor, v: VerticalAnchor) -> (i32, i32) {
        let width = self.measure(text) as f64;
        let height = self.text_height() as f64;
        let x = match h {
            HorizontalAnchor::Left => at.x,
            HorizontalAnchor::Center => at.x - width / 2.0,
            HorizontalAnchor::Right => at.x - width,
        };
        let y = match v {
            VerticalAnchor::Top => at.y,
            VerticalAnchor::Middle => at.y - height / 2.0,
            VerticalAnchor::Bottom => at.y - height,
        };
        (x.round() as i32, y.round() as i32)
    }
}

impl std::fmt::Debug for LabelFont {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LabelFont")
            .field("size", &self.scale.y)
            .finish_non_exhaustive()
    }
}

/// First candidate font that exists on this system
pub fn find_system_font() -> Option<PathBuf> {
    FONT_CANDIDATES
        .iter()
        .map(PathBuf::from)
        .find(|p| p.is_file())
}

/// Load the label font.
///
/// An explicit path must load. Without one the system candidates are
/// searched and `None` is returned if none is found.
pub async fn load_font(explicit: Option<&Path>) -> Result<Option<LabelFont>> {
    let path = match explicit {
        Some(path) => path.to_path_buf(),
        None => match find_system_font() {
            Some(path) => path,
            None => {
                log::warn!("No label font found; labels will be skipped");
                return Ok(None);
            }
        },
    };

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| RenderError::Font(format!("Cannot read font {}: {}", path.display(), e)))?;
    let font = LabelFont::from_bytes(bytes, LABEL_FONT_SIZE)?;
    log::debug!("using font {}", path.display());
    Ok(Some(font))
}

/// Draw one label
pub fn draw_label(image: &mut RgbaImage, font: &LabelFont, label: &Label, color: Rgba<u8>) {
    let (x, y) = font.place(
        &label.text,
        label.at,
        label.anchor.horizontal,
        label.anchor.vertical,
    );
    draw_text_mut(image, color, x, y, font.scale, &font.font, &label.text);
}

/// Draw lines top to bottom starting at `at`
pub fn draw_lines(image: &mut RgbaImage, font: &LabelFont, at: Point, lines: &[String], color: Rgba<u8>) {
    let step = font.line_height() as i32 + LINE_SPACING;
    let x = at.x.round() as i32;
    let mut y = at.y.round() as i32;
    for line in lines {
        draw_text_mut(image, color, x, y, font.scale, &font.font, line);
        y += step;
    }
}

/// Join `items` with spaces into lines.
///
/// A line is closed as soon as it grows past `max_width`, so the item that
/// overflows stays on the line it overflowed.
pub fn wrap_items(items: &[String], max_width: u32, measure: impl Fn(&str) -> u32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for item in items {
        current.push_str(item);
        current.push(' ');
        if measure(current.trim_end()) > max_width {
            lines.push(current.trim_end().to_string());
            current.clear();
        }
    }
    if !current.trim().is_empty() {
        lines.push(current.trim_end().to_string());
    }
    lines
}
