// Host-side tests for page configuration and frame scheduling.

use lumen_core::{tick, ConfigError, SceneConfig, SceneKind, StopSignal};

#[test]
fn defaults_enable_both_scenes() {
    let cfg = SceneConfig::from_query("").unwrap();
    assert_eq!(cfg, SceneConfig::default());
    let kinds: Vec<_> = cfg.enabled_scenes().collect();
    assert_eq!(kinds, vec![SceneKind::Knot, SceneKind::Terrain]);
    assert_eq!(cfg.threshold(SceneKind::Knot), 7);
    assert_eq!(cfg.threshold(SceneKind::Terrain), 70);
    assert!(!cfg.debug_panel);
}

#[test]
fn query_overrides_defaults() {
    let cfg = SceneConfig::from_query("?debug=1&seed=7&knot=0&terrain=1&utm_source=x").unwrap();
    assert!(cfg.debug_panel);
    assert_eq!(cfg.heightmap_seed, 7);
    let kinds: Vec<_> = cfg.enabled_scenes().collect();
    assert_eq!(kinds, vec![SceneKind::Terrain]);
}

#[test]
fn bare_flag_means_on() {
    let cfg = SceneConfig::from_query("debug").unwrap();
    assert!(cfg.debug_panel);
}

#[test]
fn malformed_values_are_rejected() {
    assert_eq!(
        SceneConfig::from_query("knot=maybe"),
        Err(ConfigError::BadFlag {
            key: "knot".into(),
            value: "maybe".into()
        })
    );
    assert!(matches!(
        SceneConfig::from_query("knot_threshold=0"),
        Err(ConfigError::BadNumber { .. })
    ));
    assert!(matches!(
        SceneConfig::from_query("seed=-3"),
        Err(ConfigError::BadNumber { .. })
    ));
}

#[test]
fn canvases_are_distinct() {
    assert_ne!(
        SceneKind::Knot.canvas_selector(),
        SceneKind::Terrain.canvas_selector()
    );
}

#[test]
fn loop_runs_until_pagehide() {
    let stop = StopSignal::new();
    let pagehide = stop.clone();
    let mut frames = 0;
    while tick(&stop, || {
        frames += 1;
        if frames == 10 {
            pagehide.stop();
        }
    }) {}
    assert_eq!(frames, 10);
    assert!(!tick(&stop, || frames += 1));
    assert_eq!(frames, 10);
}
