use super::*;

#[test]
fn empty_object_gives_defaults() {
    let cfg = StampConfig::from_reader("{}".as_bytes()).unwrap();
    assert_eq!(cfg, StampConfig::default());
    assert_eq!(cfg.img_size, 750);
    assert_eq!(cfg.alpha, 0.5);
    assert!(cfg.need_watermark);
    assert!(!cfg.clean_before_add);
    assert!(cfg.random_naming);
    assert_eq!(cfg.watermark_text, "Desung");
    cfg.validate().unwrap();
}

#[test]
fn camel_case_keys_are_read() {
    let json = r#"{
        "alpha": 0.25,
        "imgSize": 512,
        "needWatermark": false,
        "cleanBeforeAdd": true,
        "replaceOldFile": true,
        "randomNaming": false,
        "watermarkText": "Hello",
        "suffixLen": 5,
        "seed": 42
    }"#;
    let cfg = StampConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.alpha, 0.25);
    assert_eq!(cfg.img_size, 512);
    assert!(!cfg.need_watermark);
    assert!(cfg.clean_before_add);
    assert!(cfg.replace_old_file);
    assert!(!cfg.random_naming);
    assert_eq!(cfg.watermark_text, "Hello");
    assert_eq!(cfg.suffix_len, 5);
    assert_eq!(cfg.seed, Some(42));
}

#[test]
fn unknown_keys_are_rejected() {
    let err = StampConfig::from_reader(r#"{"img_size": 10}"#.as_bytes()).unwrap_err();
    assert!(matches!(err, StampError::InvalidInput(_)), "{err}");
}

#[test]
fn missing_file_is_invalid_input() {
    let dir = tempfile::tempdir().unwrap();
    let err = StampConfig::from_path(dir.path().join("none.json")).unwrap_err();
    assert!(err.to_string().contains("open config JSON"), "{err}");
}

#[test]
fn from_path_reads_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("cfg.json");
    std::fs::write(&path, r#"{"imgSize": 64}"#).unwrap();
    assert_eq!(StampConfig::from_path(&path).unwrap().img_size, 64);
}

#[test]
fn validate_rejects_bad_values() {
    let bad = [
        StampConfig { alpha: 1.5, ..StampConfig::default() },
        StampConfig { alpha: f32::NAN, ..StampConfig::default() },
        StampConfig { img_size: 0, ..StampConfig::default() },
        StampConfig { img_size: 70_000, ..StampConfig::default() },
        StampConfig { watermark_text: "  ".into(), ..StampConfig::default() },
        StampConfig { suffix_len: 0, ..StampConfig::default() },
    ];
    for cfg in bad {
        assert!(cfg.validate().is_err(), "{cfg:?}");
    }

    let no_text_needed = StampConfig {
        need_watermark: false,
        watermark_text: String::new(),
        ..StampConfig::default()
    };
    no_text_needed.validate().unwrap();
}

#[test]
fn random_naming_never_replaces() {
    let cfg = StampConfig {
        replace_old_file: true,
        ..StampConfig::default()
    };
    assert!(!cfg.batch_opts().replace_old_file);

    let cfg = StampConfig {
        replace_old_file: true,
        random_naming: false,
        ..StampConfig::default()
    };
    assert!(cfg.batch_opts().replace_old_file);
}

#[test]
fn pipeline_opts_follow_config() {
    let cfg = StampConfig {
        img_size: 300,
        alpha: 0.8,
        need_watermark: false,
        ..StampConfig::default()
    };
    let opts = cfg.pipeline_opts();
    assert_eq!(opts.canvas_size, 300);
    assert_eq!(opts.alpha, 0.8);
    assert!(!opts.watermark);
    assert_eq!(opts.text, "Desung");
}
