//! Raster collaborator for photo guides
//!
//! Applies resize plans to pixels, paints the primitives computed by
//! `photo-guides`, and reads and writes image files.

mod compose;
mod draw;
mod io;
mod raster;
mod text;

use thiserror::Error;

pub use compose::{render_chart, render_guides};
pub use draw::{fill_rect, stroke_double, stroke_line};
pub use io::{load_image, save_png};
pub use raster::apply_resize_plan;
pub use text::{LabelFont, draw_label, draw_lines, find_system_font, load_font, wrap_items};

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Geometry(#[from] photo_guides::GuideError),
    #[error("Task join error: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),
    #[error("Font error: {0}")]
    Font(String),
    #[error("Image is {actual}, expected {expected}")]
    SizeMismatch {
        expected: photo_guides::Size,
        actual: photo_guides::Size,
    },
}

pub type Result<T> = std::result::Result<T, RenderError>;

/// Size of an image as a geometry `Size`
pub fn image_size(image: &image::RgbaImage) -> photo_guides::Size {
    photo_guides::Size::new(image.width(), image.height())
}

pub(crate) fn pixel(color: photo_guides::Color) -> image::Rgba<u8> {
    image::Rgba(color.to_array())
}
