use std::fs;

use star_catcher::GameConfig;

const SHIPPED: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/assets/config/game.ron");

#[test]
fn shipped_config_matches_defaults() {
    let cfg = GameConfig::load_from_file(SHIPPED).expect("shipped config parses");
    assert_eq!(cfg, GameConfig::default());
    assert!(cfg.validate().is_empty(), "warnings: {:?}", cfg.validate());
}

#[test]
fn local_layer_overrides_nested_fields_only() {
    let dir = tempfile::tempdir().expect("tempdir");
    let local = dir.path().join("game.local.ron");
    fs::write(
        &local,
        r#"(
            window: (autoClose: 3.0),
            asteroid: (interval_ms: 400),
            scoring: (target: 50),
            seed: Some(9),
        )"#,
    )
    .expect("write local layer");

    let (cfg, used, errors) = GameConfig::load_layered([SHIPPED.into(), local.clone()]);
    assert!(errors.is_empty(), "errors: {errors:?}");
    assert_eq!(used.len(), 2);
    assert_eq!(cfg.window.auto_close, 3.0);
    assert_eq!(cfg.window.title, "Star Catcher");
    assert_eq!(cfg.asteroid.interval_ms, 400);
    assert_eq!(cfg.asteroid.speed_range.max, 250.0);
    assert_eq!(cfg.scoring.target, 50);
    assert_eq!(cfg.scoring.per_star, 10);
    assert_eq!(cfg.seed, Some(9));
}
