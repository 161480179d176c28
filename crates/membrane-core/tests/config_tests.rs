// Configuration validation and construction failures.

mod common;

use common::*;
use membrane_core::*;

#[test]
fn default_config_is_valid() {
    assert_eq!(SimulationConfig::default().validate(), Ok(()));
    assert_eq!(SimulationConfig::default().grid_points(), (201, 201));
}

#[test]
fn random_seed_keeps_other_defaults() {
    let cfg = SimulationConfig::with_random_seed();
    let baseline = SimulationConfig {
        seed: cfg.seed,
        ..SimulationConfig::default()
    };
    assert_eq!(cfg, baseline);
}

#[test]
fn rejects_each_invalid_field() {
    let base = SimulationConfig::default();
    let cases: Vec<(SimulationConfig, fn(&ConfigError) -> bool)> = vec![
        (
            SimulationConfig {
                segments: [0, 10],
                ..base.clone()
            },
            |e| matches!(e, ConfigError::GridTooSmall(0, 10)),
        ),
        (
            SimulationConfig {
                wave_front_width: 0.0,
                ..base.clone()
            },
            |e| matches!(e, ConfigError::ZeroWaveWidth(_)),
        ),
        (
            SimulationConfig {
                wave_front_width: -1.0,
                ..base.clone()
            },
            |e| matches!(e, ConfigError::ZeroWaveWidth(_)),
        ),
        (
            SimulationConfig {
                boundary_margin: 1.0,
                ..base.clone()
            },
            |e| matches!(e, ConfigError::BoundaryMargin(_)),
        ),
        (
            SimulationConfig {
                boundary_margin: 0.0,
                ..base.clone()
            },
            |e| matches!(e, ConfigError::BoundaryMargin(_)),
        ),
        (
            SimulationConfig {
                wave_lifetime: 0.0,
                ..base.clone()
            },
            |e| matches!(e, ConfigError::NotPositive { name: "wave_lifetime", .. }),
        ),
        (
            SimulationConfig {
                wave_min_spacing: -0.1,
                ..base.clone()
            },
            |e| matches!(e, ConfigError::NotPositive { name: "wave_min_spacing", .. }),
        ),
        (
            SimulationConfig {
                damping: 1.5,
                ..base.clone()
            },
            |e| matches!(e, ConfigError::OutOfUnitRange { name: "damping", .. }),
        ),
        (
            SimulationConfig {
                wave_amplitude: f32::NAN,
                ..base.clone()
            },
            |e| matches!(e, ConfigError::NotFinite("wave_amplitude")),
        ),
    ];
    for (cfg, check) in cases {
        let err = cfg.validate().unwrap_err();
        assert!(check(&err), "unexpected error {err}");
    }
}

#[test]
fn membrane_rejects_bad_config_and_extent() {
    let bad = SimulationConfig {
        wave_front_width: 0.0,
        ..SimulationConfig::default()
    };
    assert!(matches!(
        Membrane::new(bad, test_viewport()),
        Err(ConfigError::ZeroWaveWidth(_))
    ));
    let flat = Viewport::new(200.0, 200.0, 0.0, 20.0);
    assert!(matches!(
        Membrane::new(quiet_config(4), flat),
        Err(ConfigError::BadExtent(..))
    ));
}

#[test]
fn membrane_mesh_covers_scaled_viewport() {
    let m = quiet_membrane(10);
    let size = m.mesh().size();
    assert!((size.x - 20.0 * MESH_VIEWPORT_SCALE).abs() < 1e-5);
    assert!((size.y - 20.0 * MESH_VIEWPORT_SCALE).abs() < 1e-5);
    assert_eq!(m.mesh().vertex_count(), 11 * 11);
    assert_eq!(m.field().vertices().len(), 11 * 11);
}

#[test]
fn rejects_non_finite_rates_and_speeds() {
    let base = SimulationConfig::default();
    let cases = [
        (
            SimulationConfig {
                ease_speed_sensitivity: f32::NAN,
                ..base.clone()
            },
            "ease_speed_sensitivity",
        ),
        (
            SimulationConfig {
                wave_speed_scale: f32::INFINITY,
                ..base.clone()
            },
            "wave_speed_scale",
        ),
        (
            SimulationConfig {
                wave_speed_cap: f32::NAN,
                ..base.clone()
            },
            "wave_speed_cap",
        ),
        (
            SimulationConfig {
                click_decay_rate: f32::NEG_INFINITY,
                ..base.clone()
            },
            "click_decay_rate",
        ),
        (
            SimulationConfig {
                pulse_noise: NoiseLayer {
                    speed: [f32::NAN, 0.0],
                    ..NoiseLayer::pulse()
                },
                ..base.clone()
            },
            "pulse_noise_speed",
        ),
        (
            SimulationConfig {
                organic_noise: NoiseLayer {
                    speed: [0.0, f32::INFINITY],
                    ..NoiseLayer::organic()
                },
                ..base.clone()
            },
            "organic_noise_speed",
        ),
    ];
    for (cfg, name) in cases {
        assert_eq!(cfg.validate(), Err(ConfigError::NotFinite(name)));
    }
}
