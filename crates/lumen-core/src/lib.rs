pub mod camera;
pub mod config;
pub mod constants;
pub mod easing;
pub mod geometry;
pub mod heightmap;
pub mod input;
pub mod params;
pub mod scene;
pub mod schedule;
pub mod updater;

pub static SCENE_WGSL: &str = include_str!("../shaders/scene.wgsl");

pub use camera::Camera;
pub use config::{ConfigError, SceneConfig};
pub use easing::{ease_toward, EasingTarget};
pub use geometry::{MeshData, Vertex};
pub use heightmap::HeightMap;
pub use input::{pointer_offset, FrameInput, InputQueue, PointerSample};
pub use params::{ParamError, ParamKey, ParamOverrides, ParamSpec, PARAM_SPECS};
pub use scene::{
    Geometry, Material, MeshDraw, MeshSpec, PointLight, SceneFrame, SceneKind, Transform,
};
pub use schedule::{tick, Clock, StopSignal};
pub use updater::{displacement_scale, KnotScene, Scene, TerrainScene};
