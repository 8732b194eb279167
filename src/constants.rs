// Web-front-end tuning constants. Scene tuning lives in `lumen_core::constants`.

// Canvas backing store never exceeds 2x CSS pixels
pub const MAX_PIXEL_RATIO: f64 = 2.0;

// Flat ambient term added to every lit surface
pub const AMBIENT_LIGHT: f32 = 0.03;

// Canvases are transparent; the page background shows through
pub const CLEAR_COLOR: wgpu::Color = wgpu::Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

// Debug panel
pub const DEBUG_PANEL_ID: &str = "debug-panel";
pub const DEBUG_PANEL_STYLE: &str = "position:fixed;top:8px;right:8px;z-index:10;\
    padding:8px 12px;border-radius:6px;background:rgba(10,14,24,0.85);\
    color:#cfe7ff;font:12px system-ui;border:1px solid rgba(80,110,150,0.35);";
