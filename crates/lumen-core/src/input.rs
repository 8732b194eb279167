//! Input samples collected between frames.
//!
//! DOM handlers only ever push into an [`InputQueue`]; the frame loop drains it
//! once at the start of each frame so every update sees a stable snapshot.

use glam::Vec2;
use smallvec::SmallVec;

/// Pointer position relative to the viewport centre, in CSS pixels.
pub type PointerSample = Vec2;

#[inline]
pub fn pointer_offset(client: Vec2, viewport: Vec2) -> PointerSample {
    client - viewport * 0.5
}

#[derive(Default, Debug)]
pub struct InputQueue {
    pointer: SmallVec<[PointerSample; 8]>,
    scroll: SmallVec<[f32; 4]>,
}

impl InputQueue {
    pub fn push_pointer(&mut self, sample: PointerSample) {
        self.pointer.push(sample);
    }

    pub fn push_scroll(&mut self, offset_y: f32) {
        self.scroll.push(offset_y);
    }

    /// Empty both queues, keeping only the newest sample of each kind.
    pub fn drain(&mut self) -> FrameInput {
        let input = FrameInput {
            pointer: self.pointer.last().copied(),
            scroll: self.scroll.last().copied(),
        };
        self.pointer.clear();
        self.scroll.clear();
        input
    }
}

/// What changed since the previous frame. `None` means "no new event".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameInput {
    pub pointer: Option<PointerSample>,
    pub scroll: Option<f32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_is_relative_to_centre() {
        let o = pointer_offset(Vec2::new(400.0, 100.0), Vec2::new(800.0, 600.0));
        assert_eq!(o, Vec2::new(0.0, -200.0));
    }

    #[test]
    fn drain_keeps_latest_and_clears() {
        let mut q = InputQueue::default();
        q.push_pointer(Vec2::new(1.0, 1.0));
        q.push_pointer(Vec2::new(5.0, -3.0));
        q.push_scroll(10.0);
        q.push_scroll(42.0);
        let f = q.drain();
        assert_eq!(f.pointer, Some(Vec2::new(5.0, -3.0)));
        assert_eq!(f.scroll, Some(42.0));
        assert_eq!(q.drain(), FrameInput::default());
    }
}
