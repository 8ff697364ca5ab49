use crate::draw::{fill_rect, stroke_double, stroke_line};
use crate::raster::apply_resize_plan;
use crate::text::{LabelFont, draw_label, draw_lines, wrap_items};
use crate::{RenderError, Result, image_size, pixel};
use image::RgbaImage;
use photo_guides::constants::ARGS_WRAP_WIDTH;
use photo_guides::{
    ArgsBlock, ChartLayout, Color, DoubleStroke, GuidePlan, Label, Rect, StrokedLine,
};

/// Normalize `image` per the plan and draw both guides onto it
pub fn render_guides(image: RgbaImage, plan: &GuidePlan) -> Result<RgbaImage> {
    let mut out = match &plan.resize {
        Some(resize) => apply_resize_plan(&image, resize)?,
        None => image,
    };

    let actual = image_size(&out);
    if actual != plan.output_size {
        return Err(RenderError::SizeMismatch {
            expected: plan.output_size,
            actual,
        });
    }

    for stroke in &plan.strokes {
        stroke_double(&mut out, stroke);
    }
    log::debug!("drew guides at offset {:.1}", plan.offset);
    Ok(out)
}

/// One paint operation of a chart
#[derive(Debug, Clone, PartialEq)]
enum Layer<'a> {
    Stroke(StrokedLine),
    Line(&'a StrokedLine),
    Double(&'a DoubleStroke),
    Fill(Rect, Color),
    Text(Label),
    Args(&'a ArgsBlock),
}

/// Flatten a chart layout into paint order.
///
/// Every part's labels directly follow its own shapes, so later parts
/// paint over earlier labels.
fn chart_layers(layout: &ChartLayout) -> Result<Vec<Layer<'_>>> {
    let mut layers = Vec::new();

    for axis in &layout.axes {
        layers.push(Layer::Stroke(StrokedLine::new(
            axis.axis_line(),
            layout.axis_width,
            Color::BLACK,
        )));
        for tick in axis.ticks()? {
            let width = tick.stroke_width(layout.axis_width);
            layers.push(Layer::Stroke(StrokedLine::new(tick.mark, width, Color::BLACK)));
            if let Some(tick_label) = tick.label {
                layers.push(Layer::Text(tick_label.label));
            }
        }
    }

    for fan in &layout.color_fans {
        layers.extend(fan.lines.iter().map(Layer::Line));
        layers.extend(fan.labels.iter().cloned().map(Layer::Text));
    }

    layers.extend(layout.bw_lines.iter().map(Layer::Double));

    for board in &layout.checkerboards {
        for tile in board.tiles() {
            let r = tile.rect;
            let rect = Rect::new(r.x as f64, r.y as f64, r.width as f64, r.height as f64);
            layers.push(Layer::Fill(rect, tile.color));
        }
    }

    for wedge in &layout.margin_wedges {
        for band in &wedge.bands {
            layers.push(Layer::Fill(band.rect(), Color::BLACK));
            layers.push(Layer::Text(band.label.clone()));
        }
    }

    if let Some(comment) = &layout.comment {
        layers.push(Layer::Text(comment.clone()));
    }
    if let Some(args) = &layout.args {
        layers.push(Layer::Args(args));
    }
    Ok(layers)
}

/// Paint a chart layout onto a fresh canvas.
///
/// Labels need `font`; without one they are skipped.
pub fn render_chart(layout: &ChartLayout, font: Option<&LabelFont>) -> Result<RgbaImage> {
    let mut canvas = RgbaImage::from_pixel(
        layout.size.width,
        layout.size.height,
        pixel(layout.background),
    );
    let mut skipped = 0usize;

    for layer in chart_layers(layout)? {
        match (layer, font) {
            (Layer::Stroke(stroke), _) => stroke_line(&mut canvas, &stroke),
            (Layer::Line(stroke), _) => stroke_line(&mut canvas, stroke),
            (Layer::Double(stroke), _) => stroke_double(&mut canvas, stroke),
            (Layer::Fill(rect, color), _) => fill_rect(&mut canvas, rect, pixel(color)),
            (Layer::Text(label), Some(font)) => {
                draw_label(&mut canvas, font, &label, pixel(Color::BLACK))
            }
            (Layer::Args(args), Some(font)) => {
                let lines = wrap_items(&args.items, ARGS_WRAP_WIDTH, |s| font.measure(s));
                draw_lines(&mut canvas, font, args.at, &lines, pixel(Color::BLACK));
            }
            (Layer::Text(_) | Layer::Args(_), None) => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("Skipping {} chart labels: no font available", skipped);
    }

    log::info!("rendered chart {}", layout.size);
    Ok(canvas)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;
    use photo_guides::{ChartOptions, GuideOptions, Margin, MarginRange, Size, layout_chart, plan_guides};

    #[test]
    fn test_guides_drawn_on_source() {
        let options = GuideOptions {
            margin: Some(Margin::uniform(10)),
            ..Default::default()
        };
        let plan = plan_guides(Size::new(300, 200), &options).unwrap();
        let img = RgbaImage::from_pixel(300, 200, Rgba([128, 128, 128, 255]));
        let out = render_guides(img, &plan).unwrap();
        assert_eq!(out.dimensions(), (300, 200));

        // Middle of the left guide's upper segment carries the black inner stroke
        let pts = plan.strokes[0].inner.line.points();
        let (x, y) = ((pts[0].x + pts[1].x) / 2.0, (pts[0].y + pts[1].y) / 2.0);
        let px = out.get_pixel(x.round() as u32, y.round() as u32);
        assert_eq!(px, &Rgba([0, 0, 0, 255]));
        assert_eq!(out.get_pixel(150, 100), &Rgba([128, 128, 128, 255]));
    }

    #[test]
    fn test_guides_with_target_resolution() {
        let options = GuideOptions {
            target: Some(Size::new(400, 200)),
            ..Default::default()
        };
        let plan = plan_guides(Size::new(100, 100), &options).unwrap();
        let img = RgbaImage::from_pixel(100, 100, Rgba([0, 0, 255, 255]));
        let out = render_guides(img, &plan).unwrap();
        assert_eq!(out.dimensions(), (400, 200));
        assert_eq!(out.get_pixel(1, 1), &Rgba([255, 255, 255, 255]));
    }

    #[test]
    fn test_fan_labels_follow_their_lines() {
        let options = ChartOptions {
            test_lines_color: true,
            test_lines_bw: true,
            ..Default::default()
        };
        let layout = layout_chart(&options).unwrap();
        let layers = chart_layers(&layout).unwrap();

        let first_bw = layers
            .iter()
            .position(|l| matches!(l, Layer::Double(_)))
            .unwrap();
        let last_fan_label = layers
            .iter()
            .rposition(|l| matches!(l, Layer::Text(_)))
            .unwrap();
        assert!(last_fan_label < first_bw);

        // Each fan: its lines, then its labels, before the next fan
        let fan = &layout.color_fans[0];
        let n = fan.lines.len();
        assert!(layers[..n].iter().all(|l| matches!(l, Layer::Line(_))));
        assert_eq!(layers[n], Layer::Text(fan.labels[0].clone()));
        assert_eq!(layers[n + fan.labels.len()], Layer::Line(&layout.color_fans[1].lines[0]));
    }

    #[test]
    fn test_chart_without_font() {
        let options = ChartOptions {
            geometry: Size::new(600, 400),
            axis: true,
            margin: Some(MarginRange::new(0, 50, 10)),
            comment: Some("sample".to_string()),
            background: Color::rgb(200, 200, 200),
            ..Default::default()
        };
        let layout = layout_chart(&options).unwrap();
        let img = render_chart(&layout, None).unwrap();
        assert_eq!(img.dimensions(), (600, 400));
        // Axis crossing
        assert_eq!(img.get_pixel(300, 200), &Rgba([0, 0, 0, 255]));
        // Margin band in the top edge
        assert_eq!(img.get_pixel(150, 0), &Rgba([0, 0, 0, 255]));
        assert_eq!(img.get_pixel(450, 300), &Rgba([200, 200, 200, 255]));
    }
}
