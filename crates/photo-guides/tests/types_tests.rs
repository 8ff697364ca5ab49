use photo_guides::*;

#[test]
fn test_margin_round_trip() {
    let margin: Margin = "12,30,15,45".parse().unwrap();
    assert_eq!(margin, Margin::new(12, 30, 15, 45));
    assert_eq!(margin.to_string(), "12,30,15,45");
}

#[test]
fn test_margin_parse_errors() {
    assert!(matches!(
        "12,30,15".parse::<Margin>(),
        Err(GuideError::InvalidGeometry(_))
    ));
    assert!("12,30,15,45,1".parse::<Margin>().is_err());
    assert!("a,b,c,d".parse::<Margin>().is_err());
    assert!("-1,0,0,0".parse::<Margin>().is_err());
}

#[test]
fn test_resolution_parsing() {
    let size: Size = "2700x1905".parse().unwrap();
    assert_eq!(size, Size::new(2700, 1905));
    assert_eq!(size.to_string(), "2700x1905");
    assert!("2700".parse::<Size>().is_err());
    assert!("2700x1905x3".parse::<Size>().is_err());
    assert!("0x1905".parse::<Size>().is_err());
    assert!("2700x".parse::<Size>().is_err());
}

#[test]
fn test_margin_range_parsing() {
    let range: MarginRange = "0,100,25".parse().unwrap();
    assert_eq!(range, MarginRange::new(0, 100, 25));
    assert_eq!(range.count(), 4);
    assert_eq!(range.to_string(), "0,100,25");
    assert!("0,100".parse::<MarginRange>().is_err());
}

#[test]
fn test_margin_scaled_down_rounds() {
    let margin = Margin::new(12, 30, 15, 45);
    assert_eq!(margin.scaled_down(4.0), Margin::new(3, 8, 4, 11));
}

#[test]
fn test_line_requires_two_points() {
    assert!(Line::new(vec![Point::new(0.0, 0.0)]).is_err());
    let line = Line::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 1.0)]).unwrap();
    assert_eq!(line.translate(2.0, 3.0).points()[1], Point::new(3.0, 4.0));
}

#[test]
fn test_overflowing_margin_is_invalid_geometry() {
    let margin: Margin = "0,4294967295,0,1".parse().unwrap();
    assert!(matches!(margin.horizontal(), Err(GuideError::InvalidGeometry(_))));
    assert!(matches!(
        DrawableArea::new(Size::new(300, 200), margin),
        Err(GuideError::InvalidGeometry(_))
    ));
    let tall = Margin::new(u32::MAX, 0, 1, 0);
    assert!(tall.vertical().is_err());
    assert_eq!(Margin::new(1, 2, 3, 4).horizontal().unwrap(), 6);
}

#[test]
fn test_extreme_margin_range_is_rejected() {
    let range: MarginRange = "-2147483648,2147483647,2147483647".parse().unwrap();
    assert_eq!(range.count(), 2);
    assert!(matches!(range.validate(), Err(GuideError::InvalidGeometry(_))));
    assert!(matches!(
        margin_indicators(Size::new(800, 600), range),
        Err(GuideError::InvalidGeometry(_))
    ));
}
