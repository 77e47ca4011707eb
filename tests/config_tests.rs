use std::path::PathBuf;
use std::time::Duration;

use rust_photo_carousel::config::Configuration;

#[test]
fn minimal_config_fills_defaults() {
    let cfg: Configuration = serde_yaml::from_str(
        r#"
images:
  - /pics/a.jpg
"#,
    )
    .unwrap();
    assert_eq!(cfg.images, vec![PathBuf::from("/pics/a.jpg")]);
    assert_eq!(cfg.interval, Duration::from_secs(3));
    assert!(cfg.drag.enabled);
    assert_eq!(cfg.drag.threshold_px, 50.0);
    assert_eq!(cfg.window_title, "Photo Carousel");
}

#[test]
fn kebab_case_keys_and_humantime_intervals_parse() {
    let cfg: Configuration = serde_yaml::from_str(
        r#"
images:
  - /pics/a.jpg
  - /pics/b.png
interval: 1500ms
window-title: Vacation
drag:
  enabled: false
  threshold-px: 80
"#,
    )
    .unwrap();
    assert_eq!(cfg.images.len(), 2);
    assert_eq!(cfg.interval, Duration::from_millis(1500));
    assert_eq!(cfg.window_title, "Vacation");
    assert!(!cfg.drag.enabled);
    assert_eq!(cfg.drag.threshold_px, 80.0);
}

#[test]
fn unknown_keys_are_rejected() {
    let parsed = serde_yaml::from_str::<Configuration>(
        r#"
images:
  - /pics/a.jpg
transition-style: fade
"#,
    );
    assert!(parsed.is_err());
}

#[test]
fn validation_rejects_empty_image_list() {
    let cfg = Configuration::default();
    let err = cfg.validated().unwrap_err();
    assert!(err.to_string().contains("at least one slide"));
}

#[test]
fn validation_rejects_zero_interval() {
    let cfg = Configuration {
        images: vec![PathBuf::from("/pics/a.jpg")],
        interval: Duration::ZERO,
        ..Configuration::default()
    };
    assert!(cfg.validated().is_err());
}

#[test]
fn validation_rejects_nonpositive_drag_threshold() {
    let mut cfg = Configuration {
        images: vec![PathBuf::from("/pics/a.jpg")],
        ..Configuration::default()
    };
    cfg.drag.threshold_px = 0.0;
    assert!(cfg.validated().is_err());
}

#[test]
fn from_yaml_file_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.yaml");
    std::fs::write(
        &path,
        "images:\n  - /pics/a.jpg\ninterval: 2s\n",
    )
    .unwrap();

    let cfg = Configuration::from_yaml_file(&path).unwrap().validated().unwrap();
    assert_eq!(cfg.interval, Duration::from_secs(2));
}

#[test]
fn from_yaml_file_reports_missing_file_path() {
    let err = Configuration::from_yaml_file(std::path::Path::new("/nope/config.yaml")).unwrap_err();
    assert!(format!("{err:#}").contains("/nope/config.yaml"));
}
