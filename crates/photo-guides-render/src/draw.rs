//! Stroke and fill primitives on RGBA images
//!
//! Lines wider than one pixel are painted as one quad per segment with a
//! round cap at every vertex, so polylines join without gaps.

use crate::pixel;
use image::{Rgba, RgbaImage};
use imageproc::drawing::{
    draw_filled_circle_mut, draw_filled_rect_mut, draw_line_segment_mut, draw_polygon_mut,
};
use imageproc::point::Point as IPoint;
use imageproc::rect::Rect as IRect;
use photo_guides::{DoubleStroke, Point, Rect, StrokedLine};

/// Paint one stroked polyline
pub fn stroke_line(image: &mut RgbaImage, stroke: &StrokedLine) {
    let color = pixel(stroke.color);
    let points = stroke.line.points();

    if stroke.width <= 1 {
        for pair in points.windows(2) {
            draw_line_segment_mut(image, to_f32(pair[0]), to_f32(pair[1]), color);
        }
        return;
    }

    let half = stroke.width as f64 / 2.0;
    for pair in points.windows(2) {
        thick_segment(image, pair[0], pair[1], half, color);
    }
    if stroke.width > 2 {
        let radius = (half - 0.5).round().max(1.0) as i32;
        for p in points {
            draw_filled_circle_mut(image, (p.x.round() as i32, p.y.round() as i32), radius, color);
        }
    }
}

/// Paint the outer stroke, then the inner one on top
pub fn stroke_double(image: &mut RgbaImage, stroke: &DoubleStroke) {
    for part in stroke.strokes() {
        stroke_line(image, part);
    }
}

/// Fill a rectangle; pixel edges are rounded and empty rects are skipped
pub fn fill_rect(image: &mut RgbaImage, rect: Rect, color: Rgba<u8>) {
    let x0 = rect.x.round() as i32;
    let y0 = rect.y.round() as i32;
    let x1 = rect.right().round() as i32;
    let y1 = rect.bottom().round() as i32;
    if x1 <= x0 || y1 <= y0 {
        return;
    }
    draw_filled_rect_mut(
        image,
        IRect::at(x0, y0).of_size((x1 - x0) as u32, (y1 - y0) as u32),
        color,
    );
}

fn thick_segment(image: &mut RgbaImage, from: Point, to: Point, half: f64, color: Rgba<u8>) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = dx.hypot(dy);
    if len == 0.0 {
        return;
    }
    let nx = -dy / len * half;
    let ny = dx / len * half;

    let corner = |p: Point, sx: f64, sy: f64| IPoint::new((p.x + sx).round() as i32, (p.y + sy).round() as i32);
    let quad = [
        corner(from, nx, ny),
        corner(to, nx, ny),
        corner(to, -nx, -ny),
        corner(from, -nx, -ny),
    ];
    // draw_polygon_mut rejects closed outlines
    if quad[0] == quad[3] {
        return;
    }
    draw_polygon_mut(image, &quad, color);
}

fn to_f32(p: Point) -> (f32, f32) {
    (p.x as f32, p.y as f32)
}

#[cfg(test)]
mod tests {
    use super::*;
    use photo_guides::{Color, Line};

    fn white(w: u32, h: u32) -> RgbaImage {
        RgbaImage::from_pixel(w, h, Rgba([255, 255, 255, 255]))
    }

    #[test]
    fn test_thick_stroke_covers_width() {
        let mut img = white(50, 50);
        let line = Line::segment(Point::new(25.0, 5.0), Point::new(25.0, 45.0));
        stroke_line(&mut img, &StrokedLine::new(line, 6, Color::BLACK));
        assert_eq!(img.get_pixel(23, 25), &Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(26, 25), &Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(10, 25), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_double_stroke_inner_on_top() {
        let mut img = white(50, 50);
        let line = Line::segment(Point::new(5.0, 25.0), Point::new(45.0, 25.0));
        let stroke = DoubleStroke::new(line, (2, Color::BLACK), (6, Color::RED));
        stroke_double(&mut img, &stroke);
        assert_eq!(img.get_pixel(25, 25), &Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(25, 22), &Rgba([255, 0, 0, 255]));
    }

    #[test]
    fn test_fill_rect_skips_empty() {
        let mut img = white(10, 10);
        fill_rect(&mut img, Rect::new(2.0, 2.0, 0.0, 5.0), Rgba([0, 0, 0, 255]));
        assert!(img.pixels().all(|p| *p == Rgba([255, 255, 255, 255])));
        fill_rect(&mut img, Rect::new(2.0, 2.0, 3.0, 3.0), Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(4, 4), &Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(5, 5), &Rgba([255, 255, 255, 255]));
    }
}
