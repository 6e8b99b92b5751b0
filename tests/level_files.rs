//! Level file round trips through the public API.

use bouncy_levels::level::{LevelFilter, LevelSelector, LevelSet};
use bouncy_levels::plot::{plot_file_stem, save_level_plot};
use bouncy_levels::{Error, PlotConfig, Point};
use std::fs;
use std::path::PathBuf;

fn default_levels_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/default_levels.json")
}

#[test]
fn default_level_file_loads() {
    let levels = LevelSet::from_file(default_levels_path()).unwrap();
    assert_eq!(levels.len(), 5);
    for level in &levels {
        assert!(!level.id.is_empty());
        assert!(level.shape().lines.iter().all(|line| line.is_valid()));
    }
}

#[test]
fn cut_and_save_keeps_other_levels_and_fields() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("edited.json");

    let mut levels = LevelSet::from_file(default_levels_path()).unwrap();
    let original = levels.clone();

    let square = levels
        .select_mut(&LevelSelector::Name("Square".into()))
        .unwrap();
    let gap = square.shape_mut().cut_line(0, 0, 0.2).unwrap();
    assert!((gap.length() - 0.2).abs() < 1e-9);
    levels.save(&output).unwrap();

    let reloaded = LevelSet::from_file(&output).unwrap();
    assert_eq!(reloaded, levels);
    assert_eq!(reloaded.len(), original.len());

    let square = reloaded
        .select(&LevelSelector::Name("Square".into()))
        .unwrap();
    assert_eq!(square.shape().line_count(), 2);
    assert!(square.extra.contains_key("initial_ball"));
    assert!(square.body.extra.contains_key("center_of_rotation"));

    // Untouched levels are byte-for-byte the same model.
    for (before, after) in original.iter().zip(reloaded.iter()) {
        if before.name != "Square" {
            assert_eq!(before, after);
        }
    }

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("[\n    {"));
}

#[test]
fn failed_cut_changes_nothing() {
    let mut levels = LevelSet::from_file(default_levels_path()).unwrap();
    let before = levels.clone();

    let triangle = levels.select_mut(&LevelSelector::Id("level-01".into())).unwrap();
    let err = triangle.shape_mut().cut_line(0, 0, 100.0).unwrap_err();
    assert!(matches!(err, Error::SegmentTooShort { .. }));
    assert_eq!(levels, before);
}

#[test]
fn missing_level_and_missing_file_are_errors() {
    let levels = LevelSet::from_file(default_levels_path()).unwrap();
    assert!(matches!(
        levels.select(&LevelSelector::Id("nope".into())),
        Err(Error::LevelNotFound(_))
    ));

    let dir = tempfile::tempdir().unwrap();
    assert!(matches!(
        LevelSet::from_file(dir.path().join("missing.json")),
        Err(Error::Io(_))
    ));

    let bad = dir.path().join("bad.json");
    fs::write(&bad, "{\"not\": \"an array\"}").unwrap();
    assert!(matches!(LevelSet::from_file(&bad), Err(Error::Json(_))));
}

#[test]
fn plot_every_level() {
    let dir = tempfile::tempdir().unwrap();
    let levels = LevelSet::from_file(default_levels_path()).unwrap();
    let config = PlotConfig::default();

    for level in levels.filter(&LevelFilter::all()) {
        let path = dir.path().join(format!("{}.svg", plot_file_stem(&level.id)));
        save_level_plot(level, &config, &path).unwrap();
        let svg = fs::read_to_string(&path).unwrap();
        assert_eq!(svg.matches("<path").count(), level.shape().line_count());
    }
}

#[test]
fn plot_config_file_overrides_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("plot.json");
    fs::write(&path, r#"{"width": 400, "height": 300, "show_legend": false}"#).unwrap();

    let config = PlotConfig::from_file(&path).unwrap();
    assert_eq!(config.width, 400.0);
    assert_eq!(config.height, 300.0);
    assert!(!config.show_legend);
    assert!(config.show_grid);

    fs::write(&path, r#"{"palette": []}"#).unwrap();
    assert!(matches!(PlotConfig::from_file(&path), Err(Error::Config(_))));
}

#[test]
fn cut_example_from_level_json() {
    let json = r#"[{"id": "x", "name": "Line", "body": {"shape": {"lines": [[{"x": 0, "y": 0}, {"x": 10, "y": 0}]]}}}]"#;
    let mut levels = LevelSet::from_json_str(json).unwrap();
    let level = levels.select_mut(&LevelSelector::Name("Line".into())).unwrap();
    level.shape_mut().cut_line(0, 0, 2.0).unwrap();

    let lines = &level.shape().lines;
    assert_eq!(lines[0].points(), [Point::new(0.0, 0.0), Point::new(4.0, 0.0)]);
    assert_eq!(lines[1].points(), [Point::new(6.0, 0.0), Point::new(10.0, 0.0)]);
}
