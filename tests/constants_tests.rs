// Host-side tests for constants and their relationships.
// The main crate is wasm-only, so the web constants are included directly.

#![allow(dead_code)]
mod web_constants {
    include!("../src/constants.rs");
}

use lumen_core::constants::*;
use web_constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn easing_gains_are_fractions() {
    assert!(ROTATION_EASE_GAIN > 0.0 && ROTATION_EASE_GAIN < 1.0);
    assert!(POSITION_EASE_GAIN > 0.0 && POSITION_EASE_GAIN < 1.0);
    assert!(POSITION_EASE_GAIN < ROTATION_EASE_GAIN);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn displacement_range_contains_base() {
    assert!(DISPLACEMENT_MIN < DISPLACEMENT_BASE);
    assert!(DISPLACEMENT_BASE < DISPLACEMENT_MAX);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn thresholds_and_cameras() {
    assert_eq!(KNOT_FRAME_THRESHOLD, 7);
    assert_eq!(TERRAIN_FRAME_THRESHOLD, 70);
    assert!(CAMERA_NEAR > 0.0 && CAMERA_NEAR < KNOT_CAMERA_Z);
    assert!(CAMERA_FAR > TERRAIN_CAMERA_Z);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn web_constants_are_sane() {
    assert!(MAX_PIXEL_RATIO >= 1.0);
    assert!(AMBIENT_LIGHT >= 0.0 && AMBIENT_LIGHT < 1.0);
    assert_eq!(CLEAR_COLOR.a, 0.0);
    assert!(!DEBUG_PANEL_ID.is_empty());
    assert!(MAX_LIGHTS >= 3);
}
