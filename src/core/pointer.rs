use glam::Vec2;

/// Latest normalized pointer position: x grows rightward, y grows upward,
/// both in \[-1, 1\]. `{0, 0}` means "centered / no active pointer".
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerSignal {
    pub x: f32,
    pub y: f32,
}

impl PointerSignal {
    pub const CENTER: Self = Self { x: 0.0, y: 0.0 };

    #[inline]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Map client coordinates within a `width` x `height` viewport to the
/// normalized signal space. A degenerate viewport maps to the center.
#[inline]
pub fn normalize_pointer(client_x: f32, client_y: f32, width: f32, height: f32) -> PointerSignal {
    if !(width > 0.0 && height > 0.0) || !client_x.is_finite() || !client_y.is_finite() {
        return PointerSignal::CENTER;
    }
    let x = (client_x / width) * 2.0 - 1.0;
    let y = -(client_y / height) * 2.0 + 1.0;
    PointerSignal {
        x: x.clamp(-1.0, 1.0),
        y: y.clamp(-1.0, 1.0),
    }
}

/// Single-writer holder of the pointer signal. Input handlers write on every
/// event; the frame loop reads once per frame, so bursts between frames
/// collapse to the last event.
#[derive(Clone, Debug, Default)]
pub struct PointerTracker {
    signal: PointerSignal,
    viewport: Vec2,
}

impl PointerTracker {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            signal: PointerSignal::CENTER,
            viewport: Vec2::new(viewport_width, viewport_height),
        }
    }

    pub fn set_viewport(&mut self, width: f32, height: f32) {
        self.viewport = Vec2::new(width, height);
    }

    pub fn viewport(&self) -> Vec2 {
        self.viewport
    }

    /// Pointer-move or touch-move at client coordinates.
    pub fn on_move(&mut self, client_x: f32, client_y: f32) {
        self.signal = normalize_pointer(client_x, client_y, self.viewport.x, self.viewport.y);
    }

    /// Touch ended: back to center, not to the last position.
    pub fn on_touch_end(&mut self) {
        self.signal = PointerSignal::CENTER;
    }

    #[inline]
    pub fn signal(&self) -> PointerSignal {
        self.signal
    }
}
