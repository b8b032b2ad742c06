use crate::conf::{ConfigError, RenderConfig, load_render_config, parse_render_config};
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;

#[test]
fn missing_path_yields_defaults() {
    let cfg = load_render_config(None).unwrap();

    assert_eq!(cfg, RenderConfig::default());
    assert_eq!(cfg.svg_width(), 260 + 1400 + 32);
}

#[test]
fn partial_file_overrides_only_given_fields() {
    // Arrange
    let dir = tempdir().unwrap();
    let path = dir.path().join("loggantt.hcl");
    fs::write(
        &path,
        r##"
chart_width = 900
row_height  = 30

colors {
  error = "#ff0000"
}
"##,
    )
    .unwrap();

    // Act
    let cfg = load_render_config(Some(&path)).unwrap();

    // Assert
    assert_eq!(cfg.chart_width, 900);
    assert_eq!(cfg.row_height, 30);
    assert_eq!(cfg.bar_height, 14);
    assert_eq!(cfg.colors.error, "#ff0000");
    assert_eq!(cfg.colors.complete, "#16a34a");
}

#[test]
fn explicit_missing_file_is_an_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nope.hcl");

    let err = load_render_config(Some(&path)).unwrap_err();

    assert!(matches!(err, ConfigError::ReadFile { .. }));
}

#[test]
fn parse_errors_carry_the_file_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("broken.hcl");
    fs::write(&path, "chart_width = = 3").unwrap();

    let err = load_render_config(Some(&path)).unwrap_err();

    match err {
        ConfigError::Parse { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected parse error, got {other:?}"),
    }
}

#[test]
fn unknown_fields_are_rejected() {
    let err = parse_render_config("chart_widht = 10").unwrap_err();

    assert!(matches!(err, ConfigError::Parse { .. }));
}

#[test]
fn zero_tick_step_is_invalid() {
    let err = parse_render_config("tick_step_secs = 0").unwrap_err();

    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            field: "tick_step_secs",
            ..
        }
    ));
}

#[test]
fn bar_taller_than_row_is_invalid() {
    let err = parse_render_config("row_height = 10\nbar_height = 12").unwrap_err();

    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            field: "bar_height",
            ..
        }
    ));
}

#[test]
fn opacity_outside_unit_range_is_invalid() {
    let err = parse_render_config("detail_opacity = 1.5").unwrap_err();

    assert!(err.to_string().contains("detail_opacity"));
}
