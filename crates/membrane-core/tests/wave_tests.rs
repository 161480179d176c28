// Wave emission along drag paths and age-based pruning.

mod common;

use common::*;
use glam::Vec2;
use membrane_core::*;

#[test]
fn no_origins_without_drag() {
    let mut emitter = WaveEmitter::new(&SimulationConfig::default());
    for k in 0..50 {
        let p = Vec2::new(k as f32 * 0.5, 0.0);
        assert!(emitter.update(k as f32 * FRAME, p, false, 0.5).is_none());
    }
    assert!(emitter.origins().is_empty());
}

#[test]
fn moving_after_release_spawns_nothing() {
    let mut m = quiet_membrane(8);
    m.pointer_down(px(Vec2::new(-4.0, 0.0)));
    for k in 0..20 {
        m.pointer_move(px(Vec2::new(-4.0 + k as f32 * 0.4, 0.0)));
        m.update(FRAME);
    }
    m.pointer_up();
    let count = m.waves().len();
    assert!(count > 0);
    for k in 0..60 {
        m.pointer_move(px(Vec2::new(4.0, -4.0 + k as f32 * 0.2)));
        m.update(FRAME);
        assert!(m.waves().len() <= count);
    }
}

#[test]
fn spacing_gates_spawns() {
    let config = SimulationConfig::default();
    let mut emitter = WaveEmitter::new(&config);
    assert!(emitter.update(0.0, Vec2::ZERO, true, 0.1).is_some());
    assert!(emitter.update(0.1, Vec2::new(0.2, 0.0), true, 0.1).is_none());
    assert!(emitter
        .update(0.2, Vec2::new(config.wave_min_spacing + 0.01, 0.0), true, 0.1)
        .is_some());
    assert_eq!(emitter.origins().len(), 2);
}

#[test]
fn strength_grows_with_speed_and_caps() {
    let emitter = WaveEmitter::new(&SimulationConfig::default());
    let slow = emitter.strength_for(0.0);
    let mid = emitter.strength_for(0.4);
    let fast = emitter.strength_for(10.0);
    assert!((slow - 0.6).abs() < 1e-6);
    assert!(mid > slow && fast > mid);
    assert!((fast - (0.6 + 0.9 * 2.0)).abs() < 1e-5);
    assert_eq!(fast, emitter.strength_for(100.0));
}

#[test]
fn origins_expire_after_lifetime() {
    let config = SimulationConfig::default();
    let mut emitter = WaveEmitter::new(&config);
    for k in 0..5 {
        emitter.update(k as f32 * 0.1, Vec2::new(k as f32, 0.0), true, 0.5);
    }
    assert_eq!(emitter.origins().len(), 5);

    // the first origin is exactly one lifetime old; later ones survive
    emitter.prune(config.wave_lifetime);
    assert_eq!(emitter.origins().len(), 4);
    assert!(emitter
        .origins()
        .iter()
        .all(|o| o.age(config.wave_lifetime) < config.wave_lifetime));

    let mut last = emitter.origins().len();
    let mut t = config.wave_lifetime;
    while t < config.wave_lifetime + 1.0 {
        emitter.update(t, Vec2::ZERO, false, 0.0);
        assert!(emitter.origins().len() <= last);
        last = emitter.origins().len();
        t += FRAME;
    }
    assert!(emitter.origins().is_empty());
}

#[test]
fn spawned_wave_fires_shader_pulse() {
    let mut m = quiet_membrane(8);
    m.pointer_move(px(Vec2::new(-2.0, 0.0)));
    run_frames(&mut m, 30);
    assert!(!m.pulse().is_active());

    m.pointer_down(px(Vec2::new(-2.0, 0.0)));
    m.update(FRAME);
    // a press in the same frame as a spawn keeps the click strength
    assert!(m.pulse().is_active());
    assert!((m.pulse().strength - CLICK_SHADER_PULSE_STRENGTH).abs() < 1e-6);

    let before = m.pulse().start;
    m.pointer_move(px(Vec2::new(0.0, 0.0)));
    run_frames(&mut m, 20);
    let latest = *m.waves().last().unwrap();
    assert!(m.pulse().start > before);
    assert_eq!(m.pulse().start, latest.birth_time);
    assert_eq!(m.pulse().strength, latest.strength);
    assert_eq!(m.pulse().origin, latest.position);
}
