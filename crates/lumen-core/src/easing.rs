//! Exponential smoothing helpers used by the frame updaters.

use glam::Vec2;

/// One fixed-gain smoothing step of `current` toward `target`.
///
/// With `gain` in (0, 1) the result is strictly closer to `target` unless
/// `current == target`, in which case it is returned unchanged. The value never
/// reaches a moving target, which gives the damped "look at pointer" motion.
#[inline]
pub fn ease_toward(current: f32, target: f32, gain: f32) -> f32 {
    current + gain * (target - current)
}

/// Pointer offset scaled per axis into an easing target.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EasingTarget {
    pub x: f32,
    pub y: f32,
}

impl EasingTarget {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub fn from_pointer(pointer: Vec2, scale: Vec2) -> Self {
        Self {
            x: pointer.x * scale.x,
            y: pointer.y * scale.y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_moves_strictly_closer() {
        let mut v = 2.0_f32;
        let mut last = (v - 0.5).abs();
        for _ in 0..50 {
            v = ease_toward(v, 0.5, 0.07);
            let d = (v - 0.5).abs();
            assert!(d < last);
            last = d;
        }
    }

    #[test]
    fn target_is_a_fixed_point() {
        assert_eq!(ease_toward(0.25, 0.25, 0.03), 0.25);
        assert_eq!(ease_toward(0.0, 0.0, 0.07), 0.0);
    }

    #[test]
    fn target_scales_each_axis() {
        let t = EasingTarget::from_pointer(Vec2::new(100.0, -50.0), Vec2::new(0.0001, 0.001));
        assert!((t.x - 0.01).abs() < 1e-7);
        assert!((t.y + 0.05).abs() < 1e-7);
    }
}
