// Host-side tests for input sampling and the debug parameter table.

use glam::Vec2;
use lumen_core::{
    pointer_offset, FrameInput, InputQueue, KnotScene, ParamError, ParamKey, ParamOverrides,
    PARAM_SPECS,
};

fn pointer_at(x: f32, y: f32) -> FrameInput {
    FrameInput {
        pointer: Some(Vec2::new(x, y)),
        scroll: None,
    }
}

#[test]
fn pointer_offset_at_corners() {
    let viewport = Vec2::new(1280.0, 720.0);
    assert_eq!(pointer_offset(Vec2::ZERO, viewport), Vec2::new(-640.0, -360.0));
    assert_eq!(pointer_offset(viewport, viewport), Vec2::new(640.0, 360.0));
    assert_eq!(pointer_offset(viewport * 0.5, viewport), Vec2::ZERO);
}

#[test]
fn burst_of_events_collapses_to_one_frame() {
    let mut q = InputQueue::default();
    for i in 0..20 {
        q.push_pointer(Vec2::new(i as f32, -(i as f32)));
    }
    let f = q.drain();
    assert_eq!(f.pointer, Some(Vec2::new(19.0, -19.0)));
    assert_eq!(f.scroll, None);
    assert_eq!(q.drain(), FrameInput::default());
}

#[test]
fn empty_frame_keeps_previous_pointer() {
    let mut s = KnotScene::new(7);
    let o = ParamOverrides::default();
    s.update(pointer_at(50.0, 25.0), 0.0, &o);
    s.update(FrameInput::default(), 0.0, &o);
    assert_eq!(s.pointer, Vec2::new(50.0, 25.0));
}

#[test]
fn slider_ranges_match_panel_layout() {
    for spec in PARAM_SPECS.iter() {
        assert_eq!(spec.step, 0.01);
        match spec.key {
            ParamKey::Light2Intensity | ParamKey::Light3Intensity => {
                assert_eq!((spec.min, spec.max), (0.0, 10.0));
            }
            ParamKey::PlaneRotationX => assert_eq!((spec.min, spec.max), (-3.15, 3.15)),
            _ => assert_eq!((spec.min, spec.max), (-7.0, 7.0)),
        }
    }
}

#[test]
fn slider_text_is_parsed_and_clamped() {
    let mut o = ParamOverrides::default();
    assert_eq!(o.set_from_str("light2.intensity", "12.5"), Ok(10.0));
    assert_eq!(o.get(ParamKey::Light2Intensity), 10.0);
    assert!(matches!(
        o.set_from_str("light2.intensity", "abc"),
        Err(ParamError::NotFinite { key: "light2.intensity", .. })
    ));
    assert_eq!(o.get(ParamKey::Light2Intensity), 10.0);
}
