use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuideError {
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, GuideError>;

fn invalid(msg: impl Into<String>) -> GuideError {
    GuideError::InvalidGeometry(msg.into())
}

/// Image dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: u32,
    pub height: u32,
}

impl Size {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width divided by height
    pub fn aspect_ratio(&self) -> f64 {
        self.width as f64 / self.height as f64
    }

    /// Fail with `InvalidGeometry` unless both dimensions are non-zero
    pub fn ensure_positive(&self, what: &str) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(invalid(format!(
                "{} must have a positive width and height, got {}",
                what, self
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl FromStr for Size {
    type Err = GuideError;

    /// Parse a `WIDTHxHEIGHT` string such as `2700x1905`
    fn from_str(s: &str) -> Result<Self> {
        let fields = parse_fields::<u32>(s, 'x', 2, "WIDTHxHEIGHT")?;
        let size = Size::new(fields[0], fields[1]);
        size.ensure_positive("resolution")?;
        Ok(size)
    }
}

/// Cutting margin in pixels, inset from each edge of an image.
///
/// Field order follows the command line form `top,right,bottom,left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Margin {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margin {
    pub fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Create uniform margins on all sides
    pub fn uniform(margin: u32) -> Self {
        Self::new(margin, margin, margin, margin)
    }

    /// `left + right`; fails when the sum does not fit in a pixel count
    pub fn horizontal(&self) -> Result<u32> {
        self.left
            .checked_add(self.right)
            .ok_or_else(|| invalid(format!("horizontal margin {} overflows", self)))
    }

    /// `top + bottom`; fails when the sum does not fit in a pixel count
    pub fn vertical(&self) -> Result<u32> {
        self.top
            .checked_add(self.bottom)
            .ok_or_else(|| invalid(format!("vertical margin {} overflows", self)))
    }

    /// Divide every side by `factor`, rounding to the nearest pixel.
    /// Used to carry a full-resolution margin into a downsized preview.
    pub fn scaled_down(&self, factor: f64) -> Self {
        let s = |v: u32| (v as f64 / factor).round().max(0.0) as u32;
        Self::new(s(self.top), s(self.right), s(self.bottom), s(self.left))
    }
}

impl fmt::Display for Margin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.top, self.right, self.bottom, self.left)
    }
}

impl FromStr for Margin {
    type Err = GuideError;

    /// Parse a `top,right,bottom,left` string such as `12,30,15,45`
    fn from_str(s: &str) -> Result<Self> {
        let f = parse_fields::<u32>(s, ',', 4, "top,right,bottom,left")?;
        Ok(Margin::new(f[0], f[1], f[2], f[3]))
    }
}

/// The region of an image left after subtracting the cutting margin.
///
/// Only the outer size and margin are stored; the inner dimensions are
/// derived on demand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawableArea {
    outer: Size,
    margin: Margin,
}

impl DrawableArea {
    /// Inset `outer` by `margin`.
    ///
    /// Requires `top + bottom < height` and `left + right < width`.
    pub fn new(outer: Size, margin: Margin) -> Result<Self> {
        outer.ensure_positive("image")?;
        if margin.horizontal()? >= outer.width || margin.vertical()? >= outer.height {
            return Err(invalid(format!(
                "margin {} leaves no drawable area inside {}",
                margin, outer
            )));
        }
        Ok(Self { outer, margin })
    }

    pub fn outer(&self) -> Size {
        self.outer
    }

    pub fn margin(&self) -> Margin {
        self.margin
    }

    pub fn width(&self) -> u32 {
        self.outer.width - self.margin.left - self.margin.right
    }

    pub fn height(&self) -> u32 {
        self.outer.height - self.margin.top - self.margin.bottom
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    /// Top-left corner of the area in outer-image coordinates
    pub fn origin(&self) -> Point {
        Point::new(self.margin.left as f64, self.margin.top as f64)
    }
}

/// A position in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn translate(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Exchange the coordinates, mapping an x-axis layout onto the y axis
    pub fn transposed(self) -> Self {
        Self::new(self.y, self.x)
    }
}

/// An ordered path of at least two points
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Line {
    pub(crate) points: Vec<Point>,
}

impl Line {
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(invalid(format!(
                "a line needs at least two points, got {}",
                points.len()
            )));
        }
        Ok(Self { points })
    }

    pub fn segment(from: Point, to: Point) -> Self {
        Self {
            points: vec![from, to],
        }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        Self {
            points: self.points.iter().map(|p| p.translate(dx, dy)).collect(),
        }
    }
}

/// A rectangle in pixel space
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// X position (left edge)
    pub x: f64,
    /// Y position (top edge)
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Build a rectangle from any two opposite corners
    pub fn from_corners(a: Point, b: Point) -> Self {
        let x = a.x.min(b.x);
        let y = a.y.min(b.y);
        Self::new(x, y, (a.x - b.x).abs(), (a.y - b.y).abs())
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }
}

/// An integer pixel rectangle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }
}

/// Horizontal part of a label anchor: which side of the text box sits on the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

/// Vertical part of a label anchor: which edge of the text box sits on the anchor point
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAnchor {
    Top,
    Middle,
    Bottom,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LabelAnchor {
    pub horizontal: HorizontalAnchor,
    pub vertical: VerticalAnchor,
}

impl LabelAnchor {
    pub const TOP_LEFT: LabelAnchor = LabelAnchor::new(HorizontalAnchor::Left, VerticalAnchor::Top);

    pub const fn new(horizontal: HorizontalAnchor, vertical: VerticalAnchor) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

impl Default for LabelAnchor {
    fn default() -> Self {
        Self::TOP_LEFT
    }
}

/// Text to be rasterized at a point
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    pub text: String,
    pub at: Point,
    pub anchor: LabelAnchor,
}

impl Label {
    pub fn new(text: impl Into<String>, at: Point, anchor: LabelAnchor) -> Self {
        Self {
            text: text.into(),
            at,
            anchor,
        }
    }
}

/// An 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    fn named(name: &str) -> Option<Self> {
        let c = match name.to_ascii_lowercase().as_str() {
            "white" => Self::WHITE,
            "black" => Self::BLACK,
            "red" => Self::RED,
            "green" => Self::GREEN,
            "blue" => Self::BLUE,
            "lime" => Self::rgb(0, 255, 0),
            "gray" | "grey" => Self::rgb(128, 128, 128),
            "lightgray" | "lightgrey" => Self::rgb(211, 211, 211),
            "yellow" => Self::rgb(255, 255, 0),
            "cyan" => Self::rgb(0, 255, 255),
            "magenta" => Self::rgb(255, 0, 255),
            "orange" => Self::rgb(255, 165, 0),
            _ => return None,
        };
        Some(c)
    }

    fn hex(hex: &str) -> Option<Self> {
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
        let nibble = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|n| n << 4 | n);
        match hex.len() {
            3 => Some(Self::rgb(nibble(0)?, nibble(1)?, nibble(2)?)),
            6 => Some(Self::rgb(byte(0)?, byte(2)?, byte(4)?)),
            8 => Some(Self {
                r: byte(0)?,
                g: byte(2)?,
                b: byte(4)?,
                a: byte(6)?,
            }),
            _ => None,
        }
    }
}

impl FromStr for Color {
    type Err = GuideError;

    /// Parse `#rgb`, `#rrggbb`, `#rrggbbaa` or a common color name
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let parsed = match s.strip_prefix('#') {
            Some(hex) => Self::hex(hex),
            None => Self::named(s).or_else(|| Self::hex(s)),
        };
        parsed.ok_or_else(|| GuideError::Config(format!("Unknown color: {:?}", s)))
    }
}

/// A numeric margin range `[start, stop)` walked in `step` increments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarginRange {
    pub start: i32,
    pub stop: i32,
    pub step: i32,
}

impl MarginRange {
    pub fn new(start: i32, stop: i32, step: i32) -> Self {
        Self { start, stop, step }
    }

    pub fn validate(&self) -> Result<()> {
        if self.step <= 0 {
            return Err(invalid(format!("margin step must be positive, got {}", self.step)));
        }
        if self.stop <= self.start {
            return Err(invalid(format!(
                "margin range is empty: start {} >= stop {}",
                self.start, self.stop
            )));
        }
        // The deepest band is count * step pixels
        if self.count() as i64 * self.step as i64 > i32::MAX as i64 {
            return Err(invalid(format!("margin range {} is too deep", self)));
        }
        Ok(())
    }

    /// Number of whole steps that fit in the range
    pub fn count(&self) -> usize {
        if self.step <= 0 {
            return 0;
        }
        ((self.stop as i64 - self.start as i64) / self.step as i64).max(0) as usize
    }
}

impl fmt::Display for MarginRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{}", self.start, self.stop, self.step)
    }
}

impl FromStr for MarginRange {
    type Err = GuideError;

    /// Parse a `start,stop,step` string such as `0,100,25`
    fn from_str(s: &str) -> Result<Self> {
        let f = parse_fields::<i32>(s, ',', 3, "start,stop,step")?;
        Ok(MarginRange::new(f[0], f[1], f[2]))
    }
}

fn parse_fields<T: FromStr>(s: &str, sep: char, count: usize, form: &str) -> Result<Vec<T>> {
    let fields: Vec<&str> = s.split(sep).map(str::trim).collect();
    if fields.len() != count {
        return Err(invalid(format!(
            "expected {} fields in the form {}, got {:?}",
            count, form, s
        )));
    }
    fields
        .iter()
        .map(|f| {
            f.parse::<T>()
                .map_err(|_| invalid(format!("{:?} is not a valid number in {:?}", f, s)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drawable_area_dimensions() {
        let area = DrawableArea::new(Size::new(300, 200), Margin::new(10, 20, 30, 40)).unwrap();
        assert_eq!(area.width(), 240);
        assert_eq!(area.height(), 160);
        assert_eq!(area.origin(), Point::new(40.0, 10.0));
    }

    #[test]
    fn test_drawable_area_rejects_margin_covering_image() {
        assert!(DrawableArea::new(Size::new(100, 100), Margin::new(0, 50, 0, 50)).is_err());
        assert!(DrawableArea::new(Size::new(100, 100), Margin::new(60, 0, 40, 0)).is_err());
        assert!(DrawableArea::new(Size::new(100, 100), Margin::new(49, 49, 49, 49)).is_ok());
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!("white".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("#f00".parse::<Color>().unwrap(), Color::RED);
        assert_eq!("#0000ff".parse::<Color>().unwrap(), Color::BLUE);
        assert_eq!(
            "#11223344".parse::<Color>().unwrap(),
            Color {
                r: 0x11,
                g: 0x22,
                b: 0x33,
                a: 0x44
            }
        );
        assert!("chartreuse-ish".parse::<Color>().is_err());
    }

    #[test]
    fn test_rect_from_corners_normalizes() {
        let r = Rect::from_corners(Point::new(10.0, 50.0), Point::new(0.0, 20.0));
        assert_eq!(r, Rect::new(0.0, 20.0, 10.0, 30.0));
    }
}
