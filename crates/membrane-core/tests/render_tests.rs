// Camera settling, uniform layout and the shader pulse slot.

mod common;

use common::*;
use glam::{Vec2, Vec3};
use membrane_core::*;

#[test]
fn uniform_block_is_16_byte_aligned() {
    assert_eq!(std::mem::size_of::<ShaderUniforms>() % 16, 0);
    assert_eq!(std::mem::size_of::<ShaderUniforms>(), 208);
    assert_eq!(std::mem::size_of::<MeshVertex>(), 40);
}

#[test]
fn shader_declares_entry_points() {
    assert!(MEMBRANE_WGSL.contains("fn vs_main"));
    assert!(MEMBRANE_WGSL.contains("fn fs_main"));
    assert!(MEMBRANE_WGSL.contains("struct MembraneUniforms"));
}

#[test]
fn shader_scales_noise_by_uniform_amplitudes() {
    assert!(MEMBRANE_WGSL.contains("U.pulse_noise.w"));
    assert!(MEMBRANE_WGSL.contains("U.organic_noise.w"));
}

#[test]
fn camera_rests_above_origin() {
    let cam = Camera::default();
    assert_eq!(cam.eye, Vec3::new(0.0, CAMERA_HEIGHT, CAMERA_DISTANCE));
    let clip = cam.view_projection().project_point3(Vec3::ZERO);
    assert!(clip.x.abs() < 1e-5 && clip.y.abs() < 1e-5);
}

#[test]
fn camera_settles_toward_target() {
    let mut settler = CameraSettler::default();
    let vel = Vec2::new(300.0, 0.0);
    let t = 2.0;
    let target = CameraSettler::target(vel, t);
    assert_ne!(target, settler.eye());

    let start = settler.eye().distance(target);
    settler.step(vel, t, FRAME);
    let after_one = settler.eye().distance(target);
    assert!((after_one - start * 0.9).abs() < 1e-4);

    for _ in 0..300 {
        settler.step(vel, t, FRAME);
    }
    assert!(settler.eye().distance(target) < 1e-4);
}

#[test]
fn still_pointer_keeps_camera_at_rest() {
    let mut settler = CameraSettler::default();
    for k in 0..100 {
        settler.step(Vec2::ZERO, k as f32 * FRAME, FRAME);
    }
    assert!(settler.eye().distance(Vec3::new(0.0, 10.0, 6.0)) < 1e-5);
}

#[test]
fn pulse_slot_starts_empty_and_is_overwritten() {
    let mut pulse = PulseChannel::default();
    assert!(!pulse.is_active());
    assert_eq!(pulse.start, NO_PULSE);
    assert_eq!(pulse.radial(Vec2::ZERO, 1.0), 0.0);

    pulse.fire(
        PulseRequest {
            origin: Vec2::new(1.0, 1.0),
            strength: 1.6,
        },
        2.0,
    );
    pulse.fire(
        PulseRequest {
            origin: Vec2::new(-1.0, 0.0),
            strength: 0.8,
        },
        3.0,
    );
    assert!(pulse.is_active());
    assert_eq!(pulse.origin, Vec2::new(-1.0, 0.0));
    assert_eq!(pulse.start, 3.0);
    assert_eq!(pulse.strength, 0.8);
}

#[test]
fn pulse_front_expands() {
    let mut pulse = PulseChannel::default();
    pulse.fire(
        PulseRequest {
            origin: Vec2::ZERO,
            strength: 1.0,
        },
        0.0,
    );
    // front sits at 0.9 units after one second
    let on_front = pulse.radial(Vec2::new(0.9, 0.0), 1.0);
    let behind = pulse.radial(Vec2::new(0.1, 0.0), 1.0);
    assert!((on_front - 1.0).abs() < 1e-5);
    assert!(behind < 0.1 * on_front);
}

#[test]
fn uniforms_follow_frame() {
    let mut m = quiet_membrane(6);
    m.pointer_down(px(Vec2::new(2.0, 3.0)));
    m.update(FRAME);
    let u = m.uniforms();
    assert!((u.time() - FRAME).abs() < 1e-6);
    assert_eq!(u.pulse[0], m.pulse().start);
    assert!((u.pointer_pulse[2] - 2.0).abs() < 1e-5);
    assert!((u.pointer_pulse[3] - 3.0).abs() < 1e-5);
    assert_eq!(u.pulse_noise[3], 0.0);
    assert_eq!(u.organic_noise[0], ORGANIC_NOISE_FREQ);
}

#[test]
fn bad_frame_times_do_not_advance_clock() {
    let mut m = quiet_membrane(4);
    m.update(f32::NAN);
    m.update(-1.0);
    assert_eq!(m.time(), 0.0);
    m.update(5.0);
    assert!((m.time() - MAX_FRAME_DT_SEC).abs() < 1e-6);
}
