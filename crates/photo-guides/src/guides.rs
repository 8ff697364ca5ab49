use crate::constants::GUIDE_OUTPUT_SUFFIX;
use crate::hexagon::hexagon_guides;
use crate::normalize::ResizePlan;
use crate::options::GuideOptions;
use crate::patterns::DoubleStroke;
use crate::types::*;
use std::path::{Path, PathBuf};

/// Everything needed to turn a source photo into a guide image
#[derive(Debug, Clone, PartialEq)]
pub struct GuidePlan {
    /// Present when a target resolution was requested
    pub resize: Option<ResizePlan>,
    /// Size of the image the guides are drawn on
    pub output_size: Size,
    pub area: DrawableArea,
    pub offset: f64,
    /// Left and right guide, in paint order
    pub strokes: [DoubleStroke; 2],
}

/// Plan the guide image for a source of `source` size.
///
/// Every input is validated before anything is computed; on error nothing
/// is returned.
pub fn plan_guides(source: Size, options: &GuideOptions) -> Result<GuidePlan> {
    options.validate()?;
    source.ensure_positive("source image")?;
    let resolved = options.resolve(source)?;

    let resize = resolved
        .target
        .map(|target| ResizePlan::compute(source, target))
        .transpose()?;
    let output_size = resize.map(|r| r.target).unwrap_or(source);

    let area = DrawableArea::new(output_size, resolved.margin)?;
    let [left, right] = hexagon_guides(&area, options.offset)?;

    Ok(GuidePlan {
        resize,
        output_size,
        area,
        offset: options.offset,
        strokes: [options.stroke.apply(left), options.stroke.apply(right)],
    })
}

/// Where the guide image for `input` is written: the full input file name
/// with `_guides.png` appended, next to the input or inside `target_folder`
pub fn guide_output_path(input: &Path, target_folder: Option<&Path>) -> Result<PathBuf> {
    let name = input.file_name().ok_or_else(|| {
        GuideError::Config(format!("{} does not name a file", input.display()))
    })?;
    let mut out_name = name.to_os_string();
    out_name.push(GUIDE_OUTPUT_SUFFIX);

    Ok(match target_folder {
        Some(folder) if !folder.as_os_str().is_empty() => folder.join(out_name),
        _ => input.with_file_name(out_name),
    })
}
