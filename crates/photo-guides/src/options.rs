use crate::constants::{AXIS_BASE_WIDTH, GUIDE_INNER_WIDTH, GUIDE_OUTER_WIDTH};
use crate::patterns::DoubleStroke;
use crate::presets::find_preset;
use crate::types::*;
use std::path::PathBuf;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stroke used for guide lines: a wide outer stroke under a narrow inner one
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GuideStroke {
    pub outer_width: u32,
    pub outer_color: Color,
    pub inner_width: u32,
    pub inner_color: Color,
}

impl Default for GuideStroke {
    fn default() -> Self {
        Self {
            outer_width: GUIDE_OUTER_WIDTH,
            outer_color: Color::WHITE,
            inner_width: GUIDE_INNER_WIDTH,
            inner_color: Color::BLACK,
        }
    }
}

impl GuideStroke {
    pub fn apply(&self, line: Line) -> DoubleStroke {
        DoubleStroke::new(
            line,
            (self.inner_width, self.inner_color),
            (self.outer_width, self.outer_color),
        )
    }
}

/// Configuration for adding hexagon guides to a photo
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GuideOptions {
    /// Scale, crop or pad the photo to this resolution first
    pub target: Option<Size>,
    /// Cutting margin; when unset the preset's margin (or none) is used
    pub margin: Option<Margin>,
    /// Named lab preset supplying resolution and margin
    pub preset: Option<String>,
    /// Horizontal guide offset in output pixels
    pub offset: f64,
    pub stroke: GuideStroke,
}

/// Resolution and margin chosen for one source image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedGuide {
    pub target: Option<Size>,
    pub margin: Margin,
}

impl GuideOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| GuideError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GuideError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        if let Some(target) = self.target {
            target.ensure_positive("target resolution")?;
        }
        if let Some(name) = &self.preset {
            find_preset(name)?;
        }
        if !self.offset.is_finite() {
            return Err(GuideError::Config(format!(
                "Guide offset must be finite, got {}",
                self.offset
            )));
        }
        if self.stroke.inner_width == 0 || self.stroke.outer_width == 0 {
            return Err(GuideError::Config(
                "Guide stroke widths must be positive".to_string(),
            ));
        }
        Ok(())
    }

    /// Pick the target resolution and margin for a source of `source` size.
    ///
    /// Explicit `target` and `margin` win over the preset's entry.
    pub fn resolve(&self, source: Size) -> Result<ResolvedGuide> {
        let entry = match &self.preset {
            Some(name) => Some(find_preset(name)?.select(source)?),
            None => None,
        };
        Ok(ResolvedGuide {
            target: self.target.or(entry.map(|e| e.resolution)),
            margin: self
                .margin
                .or(entry.map(|e| e.margin))
                .unwrap_or_default(),
        })
    }
}

/// Configuration for a generated measurement chart
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChartOptions {
    /// Canvas size
    pub geometry: Size,
    /// Base stroke width of the measurement axes
    pub base_width: u32,
    /// Free text printed near the top-left corner
    pub comment: Option<String>,
    /// Margin indicator range
    pub margin: Option<MarginRange>,
    pub axis: bool,
    pub checkerboard: bool,
    pub test_lines_color: bool,
    pub test_lines_bw: bool,
    pub background: Color,
    /// Print these options onto the chart
    pub print_args: bool,
    /// Font for labels; system fonts are searched when unset
    pub font_path: Option<PathBuf>,
    /// File the chart is written to; only used for the printed record
    pub output: Option<PathBuf>,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            geometry: Size::new(2700, 1905),
            base_width: AXIS_BASE_WIDTH,
            comment: None,
            margin: None,
            axis: false,
            checkerboard: false,
            test_lines_color: false,
            test_lines_bw: false,
            background: Color::WHITE,
            print_args: false,
            font_path: None,
            output: None,
        }
    }
}

impl ChartOptions {
    /// Load options from JSON file
    #[cfg(feature = "serde")]
    pub async fn load(path: impl AsRef<std::path::Path>) -> Result<Self> {
        let bytes = tokio::fs::read(path).await?;
        let options = serde_json::from_slice(&bytes)
            .map_err(|e| GuideError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(options)
    }

    /// Save options to JSON file
    #[cfg(feature = "serde")]
    pub async fn save(&self, path: impl AsRef<std::path::Path>) -> Result<()> {
        let json = serde_json::to_string_pretty(self)
            .map_err(|e| GuideError::Config(format!("Failed to serialize config: {}", e)))?;
        tokio::fs::write(path, json).await?;
        Ok(())
    }

    /// Validate the options
    pub fn validate(&self) -> Result<()> {
        self.geometry.ensure_positive("chart geometry")?;
        if self.base_width == 0 {
            return Err(GuideError::Config(
                "Axis base width must be positive".to_string(),
            ));
        }
        if let Some(range) = self.margin {
            range.validate()?;
        }
        Ok(())
    }

    /// `key=value` pairs describing the options, in declaration order
    pub fn describe(&self) -> Vec<String> {
        let opt = |v: Option<String>| v.unwrap_or_else(|| "None".to_string());
        let path = |p: &Option<PathBuf>| p.as_ref().map(|p| p.display().to_string());
        vec![
            format!("geometry={}", self.geometry),
            format!("width={}", self.base_width),
            format!("comment={}", opt(self.comment.clone())),
            format!("margin={}", opt(self.margin.map(|m| m.to_string()))),
            format!("axis={}", self.axis),
            format!("checkerboard={}", self.checkerboard),
            format!("test_lines_color={}", self.test_lines_color),
            format!("test_lines_bw={}", self.test_lines_bw),
            format!(
                "background=#{:02x}{:02x}{:02x}",
                self.background.r, self.background.g, self.background.b
            ),
            format!("print_args={}", self.print_args),
            format!("font={}", opt(path(&self.font_path))),
            format!("file={}", opt(path(&self.output))),
        ]
    }
}
