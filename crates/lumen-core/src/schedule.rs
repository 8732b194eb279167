//! Frame scheduling: update and render once per display refresh until the
//! stop signal is raised.

use instant::Instant;
use std::cell::Cell;
use std::rc::Rc;

/// Shared stop flag. Clones observe the same flag.
#[derive(Clone, Debug, Default)]
pub struct StopSignal(Rc<Cell<bool>>);

impl StopSignal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stop(&self) {
        self.0.set(true);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.get()
    }
}

/// Monotonic clock started when the scene starts.
#[derive(Clone, Copy, Debug)]
pub struct Clock {
    start: Instant,
}

impl Clock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed_secs(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }
}

/// One scheduled display refresh. Runs `step` and returns `true` when another
/// frame should be requested, or returns `false` without running it once the
/// stop signal is raised.
pub fn tick(stop: &StopSignal, step: impl FnOnce()) -> bool {
    if stop.is_stopped() {
        return false;
    }
    step();
    true
}
