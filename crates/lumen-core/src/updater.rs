//! Per-frame updaters for the two scenes.
//!
//! Each scene owns an explicit state record. `update` is the only writer of
//! the mesh transforms: it folds in the drained input, advances the frame
//! counter, applies the time-linear base rotations and the pointer easing,
//! and returns what the renderer should draw.

use crate::constants::*;
use crate::easing::{ease_toward, EasingTarget};
use crate::input::{FrameInput, PointerSample};
use crate::params::{ParamKey, ParamOverrides};
use crate::scene::{
    rgb_hex, MeshDraw, MeshSpec, PointLight, SceneFrame, SceneKind, Transform, KNOT_MESHES,
    TERRAIN_MESHES,
};
use glam::{Vec2, Vec3};

/// Displacement scale for a pointer-Y offset, clamped on write.
#[inline]
pub fn displacement_scale(pointer_y: f32) -> f32 {
    (DISPLACEMENT_BASE + pointer_y * DISPLACEMENT_POINTER_GAIN)
        .clamp(DISPLACEMENT_MIN, DISPLACEMENT_MAX)
}

/// Torus knot + small sphere, three coloured point lights.
#[derive(Clone, Debug)]
pub struct KnotScene {
    pub pointer: PointerSample,
    pub scroll: f32,
    pub frame_counter: u32,
    pub threshold: u32,
    pub target: EasingTarget,
    pub torus: Transform,
    pub sphere: Transform,
    // Eased X tilt per mesh; added on top of the time-linear base rotation.
    torus_tilt: f32,
    sphere_tilt: f32,
}

impl KnotScene {
    pub fn new(threshold: u32) -> Self {
        Self {
            pointer: Vec2::ZERO,
            scroll: 0.0,
            frame_counter: 0,
            threshold,
            target: EasingTarget::ZERO,
            torus: Transform::default(),
            sphere: Transform::default(),
            torus_tilt: 0.0,
            sphere_tilt: 0.0,
        }
    }

    pub fn update(
        &mut self,
        input: FrameInput,
        elapsed: f32,
        overrides: &ParamOverrides,
    ) -> SceneFrame {
        if let Some(p) = input.pointer {
            self.pointer = p;
        }
        if let Some(s) = input.scroll {
            self.scroll = s;
        }

        self.target = EasingTarget::from_pointer(
            self.pointer,
            Vec2::new(KNOT_TARGET_SCALE_X, KNOT_TARGET_SCALE_Y),
        );
        self.frame_counter += 1;

        self.torus.rotation.y = TORUS_SPIN_Y * elapsed;
        self.torus.rotation.z = TORUS_SPIN_Z * elapsed;
        self.sphere.rotation.y = SPHERE_SPIN_Y * elapsed;

        if self.frame_counter < self.threshold {
            // Horizontal and vertical pointer motion pull the tilt in opposite directions.
            let goal = self.target.x - self.target.y;
            self.torus_tilt = ease_toward(self.torus_tilt, goal, ROTATION_EASE_GAIN);
            self.sphere_tilt = ease_toward(self.sphere_tilt, goal, ROTATION_EASE_GAIN);
        } else {
            self.frame_counter = 0;
        }

        self.torus.rotation.x = self.torus_tilt;
        self.sphere.rotation.x = SPHERE_SPIN_X * elapsed + self.sphere_tilt;

        let s = self.scroll;
        self.torus.position = Vec3::new(-s * SCROLL_SPREAD, s * SCROLL_LIFT, -s * SCROLL_SPREAD);
        self.sphere.position = Vec3::new(s * SCROLL_SPREAD, -s * SCROLL_LIFT, s * SCROLL_SPREAD);

        let mut frame = SceneFrame::default();
        frame.meshes.push(MeshDraw {
            transform: self.torus,
            material: KNOT_MESHES[0].material,
        });
        frame.meshes.push(MeshDraw {
            transform: self.sphere,
            material: KNOT_MESHES[1].material,
        });
        frame.lights.extend(knot_lights(overrides));
        frame
    }
}

pub fn knot_lights(overrides: &ParamOverrides) -> [PointLight; 3] {
    [
        PointLight {
            color: Vec3::ONE,
            intensity: 0.5,
            position: Vec3::new(2.0, 3.0, 4.0),
        },
        PointLight {
            color: rgb_hex(0xffff00),
            intensity: overrides.get(ParamKey::Light2Intensity),
            position: Vec3::new(
                overrides.get(ParamKey::Light2X),
                overrides.get(ParamKey::Light2Y),
                overrides.get(ParamKey::Light2Z),
            ),
        },
        PointLight {
            color: rgb_hex(0x4b0082),
            intensity: overrides.get(ParamKey::Light3Intensity),
            position: Vec3::new(
                overrides.get(ParamKey::Light3X),
                overrides.get(ParamKey::Light3Y),
                overrides.get(ParamKey::Light3Z),
            ),
        },
    ]
}

/// Height-displaced plane whose relief follows the pointer.
#[derive(Clone, Debug)]
pub struct TerrainScene {
    pub pointer: PointerSample,
    pub frame_counter: u32,
    pub threshold: u32,
    pub target: EasingTarget,
    pub plane: Transform,
    pub displacement: f32,
}

impl TerrainScene {
    pub fn new(threshold: u32) -> Self {
        Self {
            pointer: Vec2::ZERO,
            frame_counter: 0,
            threshold,
            target: EasingTarget::ZERO,
            plane: Transform {
                rotation: Vec3::new(PLANE_BASE_TILT, 0.0, 0.0),
                position: Vec3::ZERO,
            },
            displacement: DISPLACEMENT_BASE,
        }
    }

    pub fn update(
        &mut self,
        input: FrameInput,
        elapsed: f32,
        overrides: &ParamOverrides,
    ) -> SceneFrame {
        if let Some(p) = input.pointer {
            self.pointer = p;
        }

        self.target = EasingTarget::from_pointer(self.pointer, Vec2::splat(TERRAIN_TARGET_SCALE));
        self.frame_counter += 1;

        self.plane.rotation.z = PLANE_SPIN_Z * elapsed;
        self.plane.rotation.x = overrides.get(ParamKey::PlaneRotationX);

        if self.frame_counter < self.threshold {
            self.plane.rotation.y =
                ease_toward(self.plane.rotation.y, self.target.x, ROTATION_EASE_GAIN);
            self.plane.position.y =
                ease_toward(self.plane.position.y, -self.target.y, POSITION_EASE_GAIN);
        } else {
            self.frame_counter = 0;
            self.target = EasingTarget::ZERO;
            self.pointer.x = 0.0;
        }

        self.displacement = displacement_scale(self.pointer.y);

        let mut material = TERRAIN_MESHES[0].material;
        material.displacement_scale = self.displacement;
        let mut frame = SceneFrame::default();
        frame.meshes.push(MeshDraw {
            transform: self.plane,
            material,
        });
        frame.lights.extend(terrain_lights());
        frame
    }
}

pub fn terrain_lights() -> [PointLight; 2] {
    [
        PointLight {
            color: rgb_hex(0x00b3ff),
            intensity: 3.0,
            position: Vec3::new(2.0, 3.0, 4.0),
        },
        PointLight {
            color: rgb_hex(0xffb070),
            intensity: 1.2,
            position: Vec3::new(-3.0, -1.0, 2.5),
        },
    ]
}

/// Either scene behind one interface, for the frame loop.
#[derive(Clone, Debug)]
pub enum Scene {
    Knot(KnotScene),
    Terrain(TerrainScene),
}

impl Scene {
    pub fn new(kind: SceneKind, threshold: u32) -> Self {
        match kind {
            SceneKind::Knot => Scene::Knot(KnotScene::new(threshold)),
            SceneKind::Terrain => Scene::Terrain(TerrainScene::new(threshold)),
        }
    }

    pub fn kind(&self) -> SceneKind {
        match self {
            Scene::Knot(_) => SceneKind::Knot,
            Scene::Terrain(_) => SceneKind::Terrain,
        }
    }

    pub fn meshes(&self) -> &'static [MeshSpec] {
        match self {
            Scene::Knot(_) => &KNOT_MESHES,
            Scene::Terrain(_) => &TERRAIN_MESHES,
        }
    }

    pub fn update(
        &mut self,
        input: FrameInput,
        elapsed: f32,
        overrides: &ParamOverrides,
    ) -> SceneFrame {
        match self {
            Scene::Knot(s) => s.update(input, elapsed, overrides),
            Scene::Terrain(s) => s.update(input, elapsed, overrides),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

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

    #[test]
    fn knot_frame_lists_both_meshes_and_three_lights() {
        let mut s = KnotScene::new(KNOT_FRAME_THRESHOLD);
        let f = s.update(FrameInput::default(), 0.5, &ParamOverrides::default());
        assert_eq!(f.meshes.len(), KNOT_MESHES.len());
        assert_eq!(f.lights.len(), 3);
        assert_eq!(f.lights[1].position, Vec3::new(-3.08, -2.0, -4.6));
    }

    #[test]
    fn overrides_reach_the_lights_and_plane() {
        let mut o = ParamOverrides::default();
        o.set(ParamKey::Light3Intensity, 9.0);
        o.set(ParamKey::PlaneRotationX, 0.4);
        let mut knot = KnotScene::new(KNOT_FRAME_THRESHOLD);
        assert_eq!(knot.update(FrameInput::default(), 0.0, &o).lights[2].intensity, 9.0);
        let mut terrain = TerrainScene::new(TERRAIN_FRAME_THRESHOLD);
        terrain.update(FrameInput::default(), 0.0, &o);
        assert_eq!(terrain.plane.rotation.x, 0.4);
    }

    #[test]
    fn scroll_is_remembered_between_frames() {
        let mut s = KnotScene::new(KNOT_FRAME_THRESHOLD);
        let o = ParamOverrides::default();
        s.update(scrolled(100.0), 0.0, &o);
        s.update(FrameInput::default(), 0.1, &o);
        assert!((s.torus.position - Vec3::new(-0.5, 0.2, -0.5)).length() < 1e-6);
        assert!((s.sphere.position - Vec3::new(0.5, -0.2, 0.5)).length() < 1e-6);
    }

    #[test]
    fn terrain_material_carries_displacement() {
        let mut s = TerrainScene::new(TERRAIN_FRAME_THRESHOLD);
        let f = s.update(pointer_at(0.0, 100.0), 0.0, &ParamOverrides::default());
        let d = f.meshes[0].material.displacement_scale;
        assert!((d - 0.38).abs() < 1e-6);
    }
}
