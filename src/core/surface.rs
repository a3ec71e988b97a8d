/// How bad a failed frame was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderFault {
    /// Worth retrying next frame (lost surface, timeout).
    Transient,
    /// The device cannot keep drawing (out of memory).
    Fatal,
}

/// Counts consecutive render failures and decides when to give up on the
/// live scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RenderHealth {
    consecutive: u32,
    limit: u32,
}

impl RenderHealth {
    pub fn new(limit: u32) -> Self {
        Self {
            consecutive: 0,
            limit: limit.max(1),
        }
    }

    pub fn record_ok(&mut self) {
        self.consecutive = 0;
    }

    /// Returns `true` when the scene should be abandoned.
    pub fn record_fault(&mut self, fault: RenderFault) -> bool {
        self.consecutive = self.consecutive.saturating_add(1);
        fault == RenderFault::Fatal || self.consecutive >= self.limit
    }

    pub fn consecutive_failures(&self) -> u32 {
        self.consecutive
    }
}

/// Canvas backing store in device pixels for a CSS box of `css_width` x
/// `css_height` at `device_pixel_ratio`. Never zero.
#[inline]
pub fn backing_size(css_width: f64, css_height: f64, device_pixel_ratio: f64) -> (u32, u32) {
    let dpr = if device_pixel_ratio.is_finite() && device_pixel_ratio > 0.0 {
        device_pixel_ratio
    } else {
        1.0
    };
    let px = |css: f64| {
        if css.is_finite() && css > 0.0 {
            ((css * dpr) as u32).max(1)
        } else {
            1
        }
    };
    (px(css_width), px(css_height))
}
