use instant::Instant;

/// Per-frame timing handed to the rig: seconds since the previous frame and
/// since the first frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameTime {
    pub delta: f32,
    pub elapsed: f32,
}

/// Turns host timestamps into [`FrameTime`]s. The first tick reports a zero
/// delta; later deltas are clamped to `max_delta` so a long stall (hidden
/// tab, debugger) does not fast-forward the animation.
#[derive(Clone, Debug)]
pub struct FrameClock {
    last: Option<Instant>,
    elapsed: f32,
    max_delta: f32,
}

impl FrameClock {
    pub fn new(max_delta: f32) -> Self {
        Self {
            last: None,
            elapsed: 0.0,
            max_delta: max_delta.max(0.0),
        }
    }

    pub fn tick(&mut self, now: Instant) -> FrameTime {
        let delta = match self.last {
            Some(prev) if now > prev => (now - prev).as_secs_f32().min(self.max_delta),
            Some(_) => 0.0,
            None => 0.0,
        };
        self.last = Some(now);
        self.elapsed += delta;
        FrameTime {
            delta,
            elapsed: self.elapsed,
        }
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }
}
