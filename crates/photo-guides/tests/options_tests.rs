use photo_guides::*;
use std::path::PathBuf;

#[test]
fn test_guide_options_default_validates() {
    assert!(GuideOptions::default().validate().is_ok());
}

#[test]
fn test_guide_options_unknown_preset() {
    let options = GuideOptions {
        preset: Some("kodak_1998".to_string()),
        ..Default::default()
    };
    match options.validate() {
        Err(GuideError::UnknownPreset(name)) => assert_eq!(name, "kodak_1998"),
        other => panic!("Expected UnknownPreset error, got {:?}", other),
    }
}

#[test]
fn test_guide_options_rejects_bad_stroke_and_offset() {
    let mut options = GuideOptions::default();
    options.stroke.inner_width = 0;
    assert!(options.validate().is_err());

    let options = GuideOptions {
        offset: f64::INFINITY,
        ..Default::default()
    };
    assert!(options.validate().is_err());
}

#[test]
fn test_chart_options_validation() {
    let mut options = ChartOptions::default();
    assert!(options.validate().is_ok());

    options.margin = Some(MarginRange::new(0, 100, 0));
    assert!(options.validate().is_err());

    options.margin = None;
    options.geometry = Size::new(0, 100);
    assert!(options.validate().is_err());
}

#[test]
fn test_chart_options_describe() {
    let options = ChartOptions {
        geometry: Size::new(800, 600),
        axis: true,
        comment: Some("lab A".to_string()),
        ..Default::default()
    };
    let items = options.describe();
    assert_eq!(items[0], "geometry=800x600");
    assert!(items.contains(&"axis=true".to_string()));
    assert!(items.contains(&"comment=lab A".to_string()));
    assert!(items.contains(&"background=#ffffff".to_string()));
    assert!(items.contains(&"font=None".to_string()));
    assert!(items.contains(&"file=None".to_string()));
}

#[test]
fn test_chart_options_describe_lists_font_and_file() {
    let options = ChartOptions {
        font_path: Some(PathBuf::from("fonts/DejaVuSans.ttf")),
        output: Some(PathBuf::from("charts/lab.png")),
        ..Default::default()
    };
    let items = options.describe();
    assert_eq!(items[items.len() - 2], "font=fonts/DejaVuSans.ttf");
    assert_eq!(items[items.len() - 1], "file=charts/lab.png");
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_save_and_load_guide_options() {
    use tempfile::NamedTempFile;

    let options = GuideOptions {
        target: Some(Size::new(2700, 1905)),
        margin: Some(Margin::new(12, 30, 15, 45)),
        preset: Some("borderless".to_string()),
        offset: -12.5,
        ..Default::default()
    };

    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    options.save(path).await.unwrap();
    let loaded = GuideOptions::load(path).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_partial_chart_options() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(
        temp_file.path(),
        r#"{ "geometry": { "width": 800, "height": 600 }, "axis": true }"#,
    )
    .await
    .unwrap();

    let loaded = ChartOptions::load(temp_file.path()).await.unwrap();
    assert_eq!(loaded.geometry, Size::new(800, 600));
    assert!(loaded.axis);
    assert_eq!(loaded.background, Color::WHITE);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_load_malformed_config() {
    use tempfile::NamedTempFile;

    let temp_file = NamedTempFile::new().unwrap();
    tokio::fs::write(temp_file.path(), "not json").await.unwrap();
    assert!(matches!(
        GuideOptions::load(temp_file.path()).await,
        Err(GuideError::Config(_))
    ));
}
