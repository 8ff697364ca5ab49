use photo_guides::*;

#[test]
fn test_hexagon_shape_over_sizes_and_margins() {
    let sizes = [(300, 200), (2700, 1905), (1905, 2700), (64, 48), (5, 5)];
    let margins = [
        Margin::default(),
        Margin::new(1, 1, 1, 1),
        Margin::new(2, 0, 1, 3),
    ];
    for &(w, h) in &sizes {
        for &margin in &margins {
            let outer = Size::new(w, h);
            let area = DrawableArea::new(outer, margin).unwrap();
            for offset in [0.0, -40.0, 17.25] {
                let lines = hexagon_guides(&area, offset).unwrap();
                assert_eq!(lines.len(), 2);
                for line in &lines {
                    assert_eq!(line.len(), 3);
                    let p = line.points();
                    assert_eq!(p[0].y, margin.top as f64);
                    assert_eq!(p[2].y, (h - margin.bottom) as f64);
                    assert_eq!(p[0].x, p[2].x);
                }
                assert!(lines.iter().flat_map(|l| l.points()).all(|p| p.x.is_finite()));
            }
        }
    }
}

#[test]
fn test_hexagon_reference_values() {
    let area = DrawableArea::new(Size::new(300, 200), Margin::default()).unwrap();
    let [left, right] = hexagon_guides(&area, 0.0).unwrap();
    assert_eq!(left.points()[1].y, 100.0);
    assert_eq!(right.points()[1].y, 100.0);
    // r = 100 / cos 30 = 115.47.., s = r / 2
    assert!((right.points()[1].x - 265.470_053_837_925_15).abs() < 1e-9);
    assert!((right.points()[0].x - 207.735_026_918_962_58).abs() < 1e-9);
}

#[test]
fn test_normalize_reference_case() {
    let plan = ResizePlan::compute(Size::new(4000, 3000), Size::new(2700, 1905)).unwrap();
    assert_eq!(plan.scaled.width, 4000 * 1905 / 3000);
    assert!(plan.scaled.aspect_ratio() <= Size::new(2700, 1905).aspect_ratio());
    assert_eq!(plan.action, ResizeAction::Pad);
    assert_eq!(plan.width_diff, 2700 - 2540);
    assert_eq!(plan.leading, 80);
    assert_eq!(plan.trailing, 80);
}

#[test]
fn test_axis_reference_case() {
    let layout = AxisTickLayout::new(AxisOrientation::Horizontal, 0, 100)
        .interval(25)
        .bigger_ticks(5);
    let ticks: Vec<Tick> = layout.ticks().unwrap().collect();
    assert_eq!(ticks.len(), 5);
    assert_eq!(
        ticks.iter().map(|t| t.major).collect::<Vec<_>>(),
        vec![true, false, false, false, false]
    );
    assert_eq!(ticks[0].label.as_ref().unwrap().label.text, "0");
}

#[test]
fn test_margin_indicator_reference_case() {
    let wedges = margin_indicators(Size::new(1000, 800), MarginRange::new(0, 100, 25)).unwrap();
    for edge in [Edge::Top, Edge::Bottom, Edge::Left, Edge::Right] {
        for half in [EdgeHalf::Leading, EdgeHalf::Trailing] {
            let wedge = wedges
                .iter()
                .find(|w| w.edge == edge && w.half == half)
                .unwrap();
            let values: Vec<i32> = wedge.bands.iter().map(|b| b.value).collect();
            assert_eq!(values, vec![25, 50, 75, 100]);
        }
    }
}
