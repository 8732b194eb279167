//! Procedural height map standing in for a loaded texture.
//!
//! Fractal value noise on a wrapping lattice, normalised to [0, 1]. The same
//! map drives terrain displacement and the knot's surface normal perturbation.

use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct HeightMap {
    size: u32,
    values: Vec<f32>,
}

#[inline]
fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

impl HeightMap {
    pub fn generate(size: u32, seed: u64, octaves: u32) -> Self {
        let size = size.max(2);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut values = vec![0.0_f32; (size * size) as usize];

        let mut amplitude = 1.0_f32;
        for octave in 0..octaves.max(1) {
            let cells = 4_u32 << octave;
            let lattice: Vec<f32> = (0..cells * cells).map(|_| rng.gen::<f32>()).collect();
            let at = |x: u32, y: u32| lattice[((y % cells) * cells + (x % cells)) as usize];

            for py in 0..size {
                for px in 0..size {
                    let fx = px as f32 / size as f32 * cells as f32;
                    let fy = py as f32 / size as f32 * cells as f32;
                    let (x0, y0) = (fx.floor() as u32, fy.floor() as u32);
                    let tx = smoothstep(fx - x0 as f32);
                    let ty = smoothstep(fy - y0 as f32);
                    let top = at(x0, y0) + (at(x0 + 1, y0) - at(x0, y0)) * tx;
                    let bottom = at(x0, y0 + 1) + (at(x0 + 1, y0 + 1) - at(x0, y0 + 1)) * tx;
                    values[(py * size + px) as usize] += (top + (bottom - top) * ty) * amplitude;
                }
            }
            amplitude *= 0.5;
        }

        let (lo, hi) = values
            .iter()
            .fold((f32::MAX, f32::MIN), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        let span = (hi - lo).max(f32::EPSILON);
        for v in &mut values {
            *v = (*v - lo) / span;
        }
        log::debug!("[heightmap] generated {size}x{size} seed={seed} octaves={octaves}");
        Self { size, values }
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    /// Texel bytes for an `R8Unorm` upload, row-major.
    pub fn to_r8(&self) -> Vec<u8> {
        self.values
            .iter()
            .map(|v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_map() {
        let a = HeightMap::generate(32, 7, 3);
        let b = HeightMap::generate(32, 7, 3);
        assert_eq!(a.to_r8(), b.to_r8());
        let c = HeightMap::generate(32, 8, 3);
        assert_ne!(a.to_r8(), c.to_r8());
    }

    #[test]
    fn values_are_normalised() {
        let m = HeightMap::generate(64, 42, 4);
        let bytes = m.to_r8();
        assert_eq!(bytes.len(), 64 * 64);
        assert_eq!(bytes.iter().copied().min(), Some(0));
        assert_eq!(bytes.iter().copied().max(), Some(255));
    }
}
