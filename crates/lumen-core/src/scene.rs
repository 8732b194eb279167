//! Static scene content: meshes, materials and lights for both scenes.
//!
//! Nothing here changes after startup except through the frame updaters,
//! which own every [`Transform`].

use crate::constants::{KNOT_CAMERA_Z, TERRAIN_CAMERA_Z};
use glam::{EulerRot, Mat4, Vec3};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Knot,
    Terrain,
}

impl SceneKind {
    /// CSS selector of the canvas each scene renders into.
    pub fn canvas_selector(self) -> &'static str {
        match self {
            SceneKind::Knot => "canvas.webgl",
            SceneKind::Terrain => "canvas.terrain",
        }
    }

    pub fn camera_z(self) -> f32 {
        match self {
            SceneKind::Knot => KNOT_CAMERA_Z,
            SceneKind::Terrain => TERRAIN_CAMERA_Z,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            SceneKind::Knot => "knot",
            SceneKind::Terrain => "terrain",
        }
    }
}

/// Rotation (XYZ Euler, radians) and position of one mesh.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Transform {
    pub rotation: Vec3,
    pub position: Vec3,
}

impl Transform {
    pub fn matrix(&self) -> Mat4 {
        let r = self.rotation;
        Mat4::from_translation(self.position) * Mat4::from_euler(EulerRot::XYZ, r.x, r.y, r.z)
    }
}

/// `0xRRGGBB` sRGB colour to linear RGB.
pub fn rgb_hex(hex: u32) -> Vec3 {
    let channel = |shift: u32| {
        let c = ((hex >> shift) & 0xff) as f32 / 255.0;
        if c <= 0.04045 {
            c / 12.92
        } else {
            ((c + 0.055) / 1.055).powf(2.4)
        }
    };
    Vec3::new(channel(16), channel(8), channel(0))
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointLight {
    pub color: Vec3,
    pub intensity: f32,
    pub position: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Material {
    pub color: Vec3,
    pub metalness: f32,
    pub roughness: f32,
    /// How strongly the height map bends shading normals.
    pub normal_strength: f32,
    /// Vertex displacement along the normal, in world units per unit height.
    pub displacement_scale: f32,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Geometry {
    TorusKnot {
        radius: f32,
        tube: f32,
        tubular_segments: u32,
        radial_segments: u32,
        p: u32,
        q: u32,
    },
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Plane {
        width: f32,
        height: f32,
        width_segments: u32,
        height_segments: u32,
    },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshSpec {
    pub name: &'static str,
    pub geometry: Geometry,
    pub material: Material,
}

pub static KNOT_MESHES: [MeshSpec; 2] = [
    MeshSpec {
        name: "torus",
        geometry: Geometry::TorusKnot {
            radius: 0.65,
            tube: 0.22,
            tubular_segments: 3,
            radial_segments: 7,
            p: 1,
            q: 3,
        },
        material: KNOT_MATERIAL,
    },
    MeshSpec {
        name: "sphere",
        geometry: Geometry::Sphere {
            radius: 0.15,
            width_segments: 32,
            height_segments: 16,
        },
        material: KNOT_MATERIAL,
    },
];

pub static TERRAIN_MESHES: [MeshSpec; 1] = [MeshSpec {
    name: "plane",
    geometry: Geometry::Plane {
        width: 3.0,
        height: 3.0,
        width_segments: 64,
        height_segments: 64,
    },
    material: TERRAIN_MATERIAL,
}];

// Colours are the linear values of 0x191919 and 0x808080.
const KNOT_MATERIAL: Material = Material {
    color: Vec3::new(0.009_721_217, 0.009_721_217, 0.009_721_217),
    metalness: 0.6,
    roughness: 0.1,
    normal_strength: 0.05,
    displacement_scale: 0.0,
};

const TERRAIN_MATERIAL: Material = Material {
    color: Vec3::new(0.215_860_5, 0.215_860_5, 0.215_860_5),
    metalness: 0.0,
    roughness: 0.8,
    normal_strength: 0.0,
    displacement_scale: crate::constants::DISPLACEMENT_BASE,
};

/// Per-frame output of an updater, consumed by the renderer.
#[derive(Clone, Debug, Default)]
pub struct SceneFrame {
    /// One entry per mesh, in the same order as the scene's `MeshSpec`s.
    pub meshes: SmallVec<[MeshDraw; 2]>,
    pub lights: SmallVec<[PointLight; 4]>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MeshDraw {
    pub transform: Transform,
    pub material: Material,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colours_convert_to_linear() {
        assert_eq!(rgb_hex(0xffffff), Vec3::ONE);
        assert_eq!(rgb_hex(0x000000), Vec3::ZERO);
        let c = rgb_hex(0xffff00);
        assert_eq!(c.z, 0.0);
        assert!((c.x - 1.0).abs() < 1e-6);
    }

    #[test]
    fn material_colours_are_linearised() {
        let eps = 1e-6;
        assert!((KNOT_MATERIAL.color - rgb_hex(0x191919)).abs().max_element() < eps);
        assert!((TERRAIN_MATERIAL.color - rgb_hex(0x808080)).abs().max_element() < eps);
    }

    #[test]
    fn transform_matrix_applies_rotation_then_translation() {
        let t = Transform {
            rotation: Vec3::new(0.0, 0.0, std::f32::consts::FRAC_PI_2),
            position: Vec3::new(1.0, 0.0, 0.0),
        };
        let p = t.matrix().transform_point3(Vec3::X);
        assert!((p - Vec3::new(1.0, 1.0, 0.0)).length() < 1e-6);
    }
}
