// Host-side tests for the knot scene updater.

use glam::{Vec2, Vec3};
use lumen_core::constants::KNOT_FRAME_THRESHOLD;
use lumen_core::{FrameInput, KnotScene, ParamOverrides};

fn pointer_at(x: f32, y: f32) -> FrameInput {
    FrameInput {
        pointer: Some(Vec2::new(x, y)),
        scroll: None,
    }
}

fn scrolled(offset_y: f32) -> FrameInput {
    FrameInput {
        pointer: None,
        scroll: Some(offset_y),
    }
}

const EPS: f32 = 1e-6;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPS
}

#[test]
fn one_second_with_centred_pointer() {
    let mut s = KnotScene::new(KNOT_FRAME_THRESHOLD);
    s.update(pointer_at(0.0, 0.0), 1.0, &ParamOverrides::default());

    assert!(approx(s.torus.rotation.y, 0.3));
    assert!(approx(s.torus.rotation.z, 0.3));
    assert!(approx(s.torus.rotation.x, 0.0));
    assert!(approx(s.sphere.rotation.y, -1.7));
    assert!(approx(s.sphere.rotation.x, 0.7));
}

#[test]
fn base_rotation_ignores_pointer() {
    let o = ParamOverrides::default();
    let mut a = KnotScene::new(KNOT_FRAME_THRESHOLD);
    let mut b = KnotScene::new(KNOT_FRAME_THRESHOLD);
    for (i, t) in [0.25_f32, 0.5, 2.0, 7.5].into_iter().enumerate() {
        a.update(pointer_at(0.0, 0.0), t, &o);
        b.update(pointer_at(300.0 + i as f32, -120.0), t, &o);
        assert!(approx(a.torus.rotation.y, 0.3 * t));
        assert_eq!(a.torus.rotation.y, b.torus.rotation.y);
        assert_eq!(a.torus.rotation.z, b.torus.rotation.z);
        assert_eq!(a.sphere.rotation.y, b.sphere.rotation.y);
    }
}

#[test]
fn counter_wraps_at_threshold() {
    let mut s = KnotScene::new(KNOT_FRAME_THRESHOLD);
    let o = ParamOverrides::default();
    for n in 1..KNOT_FRAME_THRESHOLD {
        s.update(FrameInput::default(), 0.0, &o);
        assert_eq!(s.frame_counter, n);
    }
    s.update(FrameInput::default(), 0.0, &o);
    assert_eq!(s.frame_counter, 0);
    s.update(FrameInput::default(), 0.0, &o);
    assert_eq!(s.frame_counter, 1);
}

#[test]
fn tilt_eases_monotonically_toward_pointer() {
    let mut s = KnotScene::new(KNOT_FRAME_THRESHOLD);
    let o = ParamOverrides::default();
    // target.x = 1000 * 0.0001 = 0.1, target.y = 0
    let mut last = s.torus.rotation.x;
    for _ in 0..KNOT_FRAME_THRESHOLD * 4 {
        s.update(pointer_at(1000.0, 0.0), 0.0, &o);
        let x = s.torus.rotation.x;
        assert!(x >= last, "tilt went backwards: {x} < {last}");
        assert!(x < 0.1);
        last = x;
    }
    assert!(last > 0.05);
}

#[test]
fn vertical_pointer_tilts_the_other_way() {
    let mut s = KnotScene::new(KNOT_FRAME_THRESHOLD);
    let o = ParamOverrides::default();
    s.update(pointer_at(0.0, 200.0), 0.0, &o);
    assert!(s.torus.rotation.x < 0.0);
    assert!(s.sphere.rotation.x < 0.0);
}

#[test]
fn easing_is_paused_on_the_wrap_frame() {
    let mut s = KnotScene::new(KNOT_FRAME_THRESHOLD);
    let o = ParamOverrides::default();
    for _ in 1..KNOT_FRAME_THRESHOLD {
        s.update(pointer_at(1000.0, 0.0), 0.0, &o);
    }
    let before = s.torus.rotation.x;
    s.update(FrameInput::default(), 0.0, &o);
    assert_eq!(s.frame_counter, 0);
    assert_eq!(s.torus.rotation.x, before);
}

#[test]
fn centred_pointer_is_a_fixed_point() {
    let mut s = KnotScene::new(KNOT_FRAME_THRESHOLD);
    let o = ParamOverrides::default();
    for _ in 0..20 {
        s.update(pointer_at(0.0, 0.0), 0.0, &o);
        assert_eq!(s.torus.rotation, Vec3::ZERO);
        assert_eq!(s.sphere.rotation, Vec3::ZERO);
    }
}

#[test]
fn scroll_moves_meshes_apart() {
    let mut s = KnotScene::new(KNOT_FRAME_THRESHOLD);
    let o = ParamOverrides::default();
    s.update(scrolled(200.0), 0.0, &o);
    assert!((s.torus.position - Vec3::new(-1.0, 0.4, -1.0)).length() < EPS);
    assert!((s.sphere.position - Vec3::new(1.0, -0.4, 1.0)).length() < EPS);
    assert_eq!(s.torus.position, -s.sphere.position);
}

#[test]
fn held_pointer_tilt_settles_instead_of_growing() {
    let mut s = KnotScene::new(KNOT_FRAME_THRESHOLD);
    let o = ParamOverrides::default();
    // goal = 0 * 0.0001 - 200 * 0.001 = -0.2
    for _ in 0..700 {
        s.update(pointer_at(0.0, 200.0), 0.0, &o);
        assert!(s.torus.rotation.x >= -0.2);
    }
    assert!((s.torus.rotation.x + 0.2).abs() < 1e-4);
    assert!((s.sphere.rotation.x + 0.2).abs() < 1e-4);
}
