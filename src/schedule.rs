use std::time::Duration;

pub trait FrameScheduler {
    fn request_frame(&mut self);
}

// Fixed timestep. Frames are only handed out while one is requested.
pub struct FrameClock {
    step: f32,
    accumulator: f32,
    max_backlog: u32,
    pending: bool,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self {
            step: 1.0 / fps.max(1) as f32,
            accumulator: 0.0,
            max_backlog: 3,
            pending: false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn advance(&mut self, elapsed: Duration) {
        self.accumulator += elapsed.as_secs_f32();
        let cap = self.step * self.max_backlog as f32;
        if self.accumulator > cap {
            self.accumulator = cap;
        }
    }

    // Consumes the request.
    pub fn take_frame(&mut self) -> bool {
        if !self.pending || self.accumulator < self.step {
            return false;
        }
        self.accumulator -= self.step;
        self.pending = false;
        true
    }
}

impl FrameScheduler for FrameClock {
    fn request_frame(&mut self) {
        self.pending = true;
    }
}
