// Host-side tests for surface format selection.
// The main crate is wasm-only, so the render helpers are included directly.

#![allow(dead_code)]
mod helpers {
    include!("../src/render/helpers.rs");
}

use helpers::pick_surface_formats;
use wgpu::TextureFormat;

#[test]
fn linear_canvas_renders_through_srgb_view() {
    let picked = pick_surface_formats(&[TextureFormat::Bgra8Unorm, TextureFormat::Rgba8Unorm]);
    assert_eq!(
        picked,
        Some((TextureFormat::Bgra8Unorm, TextureFormat::Bgra8UnormSrgb))
    );
}

#[test]
fn srgb_surface_is_preferred() {
    let picked = pick_surface_formats(&[TextureFormat::Rgba8Unorm, TextureFormat::Rgba8UnormSrgb]);
    assert_eq!(
        picked,
        Some((TextureFormat::Rgba8UnormSrgb, TextureFormat::Rgba8UnormSrgb))
    );
}

#[test]
fn no_formats_no_surface() {
    assert_eq!(pick_surface_formats(&[]), None);
}
