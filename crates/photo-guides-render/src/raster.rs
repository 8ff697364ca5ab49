use crate::{RenderError, Result, image_size, pixel};
use image::imageops::{self, FilterType};
use image::RgbaImage;
use photo_guides::constants::PAD_BACKGROUND;
use photo_guides::{ResizeAction, ResizePlan};

/// Scale `image` to the plan's height, then crop or pad it to the target.
///
/// Padding fills with white; the scaled photo keeps its aspect ratio.
pub fn apply_resize_plan(image: &RgbaImage, plan: &ResizePlan) -> Result<RgbaImage> {
    let actual = image_size(image);
    if actual != plan.source {
        return Err(RenderError::SizeMismatch {
            expected: plan.source,
            actual,
        });
    }

    let scaled = if plan.scaled == plan.source {
        image.clone()
    } else {
        imageops::resize(
            image,
            plan.scaled.width,
            plan.scaled.height,
            FilterType::CatmullRom,
        )
    };

    let region = plan.region;
    let out = match plan.action {
        ResizeAction::Crop => {
            log::info!(
                "input image is wider: cropping {} to {} ({} px left, {} px right)",
                plan.scaled,
                plan.target,
                plan.leading,
                plan.trailing
            );
            imageops::crop_imm(&scaled, region.x, region.y, region.width, region.height).to_image()
        }
        ResizeAction::Pad => {
            log::info!(
                "input image is taller: padding {} to {} ({} px left, {} px right)",
                plan.scaled,
                plan.target,
                plan.leading,
                plan.trailing
            );
            let mut canvas = RgbaImage::from_pixel(
                plan.target.width,
                plan.target.height,
                pixel(PAD_BACKGROUND),
            );
            imageops::replace(&mut canvas, &scaled, region.x as i64, region.y as i64);
            canvas
        }
    };
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use photo_guides::Size;

    fn solid(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([10, 20, 30, 255]))
    }

    #[test]
    fn test_pad_fills_sides_white() {
        let plan = ResizePlan::compute(Size::new(40, 30), Size::new(60, 30)).unwrap();
        let out = apply_resize_plan(&solid(40, 30), &plan).unwrap();
        assert_eq!(out.dimensions(), (60, 30));
        assert_eq!(out.get_pixel(0, 15), &Rgba([255, 255, 255, 255]));
        assert_eq!(out.get_pixel(59, 15), &Rgba([255, 255, 255, 255]));
        assert_eq!(out.get_pixel(30, 15), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_crop_keeps_target_size() {
        let plan = ResizePlan::compute(Size::new(120, 20), Size::new(30, 20)).unwrap();
        let out = apply_resize_plan(&solid(120, 20), &plan).unwrap();
        assert_eq!(out.dimensions(), (30, 20));
        assert_eq!(out.get_pixel(0, 0), &Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn test_rejects_wrong_source() {
        let plan = ResizePlan::compute(Size::new(40, 30), Size::new(60, 30)).unwrap();
        assert!(matches!(
            apply_resize_plan(&solid(10, 10), &plan),
            Err(RenderError::SizeMismatch { .. })
        ));
    }
}
