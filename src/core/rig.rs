use super::constants::*;
use super::error::ConfigError;
use super::pointer::PointerSignal;
use super::scene::Aabb;
use super::spring::{Follower, SpringConfig, Smoothing};
use glam::{Vec2, Vec3};

/// How a channel turns the pointer into a target rotation.
///
/// Component `x` is pitch (driven by pointer y) and `y` is yaw (driven by
/// pointer x), matching the rotation axes they end up on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelLimits {
    pub scale: Vec2,
    pub max: Vec2,
}

impl ChannelLimits {
    pub fn new(scale: [f32; 2], max: [f32; 2]) -> Self {
        Self {
            scale: Vec2::from_array(scale),
            max: Vec2::from_array(max),
        }
    }

    /// Target rotation for `pointer`, always inside `±max`.
    #[inline]
    pub fn target(&self, pointer: PointerSignal, pointer_y_limit: f32) -> Vec2 {
        let py = pointer.y.clamp(-pointer_y_limit, pointer_y_limit);
        Vec2::new(
            (py * self.scale.x).clamp(-self.max.x, self.max.x),
            (pointer.x * self.scale.y).clamp(-self.max.y, self.max.y),
        )
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for v in [self.max.x, self.max.y] {
            if !(v.is_finite() && v >= 0.0) {
                return Err(ConfigError::ChannelLimit(v));
            }
        }
        for v in [self.scale.x, self.scale.y] {
            if !v.is_finite() {
                return Err(ConfigError::ChannelLimit(v));
            }
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChannelConfig {
    pub limits: ChannelLimits,
    pub smoothing: Smoothing,
}

/// Full tuning of a character rig.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigConfig {
    pub pointer_y_limit: f32,
    pub head: ChannelConfig,
    pub eyes: ChannelConfig,
    pub pupil_from_eye: Vec2,
    pub pupil_smoothing: Smoothing,
    pub breath_rate: f32,
    pub breath_offset_amplitude: f32,
    pub breath_scale_amplitude: f32,
}

impl Default for RigConfig {
    fn default() -> Self {
        // Head springs with no velocity clamp; eyes and pupils lerp so they
        // never wobble past the target. `CharacterRig::new` validates all of it.
        let head_spring = SpringConfig::unchecked(HEAD_SPRING_FORCE, HEAD_DAMPING, None);
        Self {
            pointer_y_limit: POINTER_Y_LIMIT,
            head: ChannelConfig {
                limits: ChannelLimits::new(HEAD_SCALE, HEAD_MAX),
                smoothing: Smoothing::Spring(head_spring),
            },
            eyes: ChannelConfig {
                limits: ChannelLimits::new(EYE_SCALE, EYE_MAX),
                smoothing: Smoothing::Lerp(EYE_LERP),
            },
            pupil_from_eye: Vec2::from_array(PUPIL_FROM_EYE),
            pupil_smoothing: Smoothing::Lerp(PUPIL_LERP),
            breath_rate: BREATH_RATE,
            breath_offset_amplitude: BREATH_OFFSET_AMPLITUDE,
            breath_scale_amplitude: BREATH_SCALE_AMPLITUDE,
        }
    }
}

impl RigConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.pointer_y_limit.is_finite() && self.pointer_y_limit >= 0.0) {
            return Err(ConfigError::ChannelLimit(self.pointer_y_limit));
        }
        self.head.limits.validate()?;
        self.eyes.limits.validate()?;
        self.head.smoothing.validate()?;
        self.eyes.smoothing.validate()?;
        self.pupil_smoothing.validate()
    }
}

/// One aimed degree-of-freedom pair with its own follower state.
#[derive(Clone, Debug)]
pub struct AimChannel {
    limits: ChannelLimits,
    follower: Follower,
    target: Vec2,
}

impl AimChannel {
    pub fn new(config: ChannelConfig) -> Result<Self, ConfigError> {
        config.limits.validate()?;
        Ok(Self {
            limits: config.limits,
            follower: Follower::from_smoothing(config.smoothing)?,
            target: Vec2::ZERO,
        })
    }

    /// Retarget from the pointer and step the follower once.
    pub fn aim(&mut self, pointer: PointerSignal, pointer_y_limit: f32) -> Vec2 {
        self.target = self.limits.target(pointer, pointer_y_limit);
        self.follower.update(self.target)
    }

    pub fn target(&self) -> Vec2 {
        self.target
    }

    pub fn current(&self) -> Vec2 {
        self.follower.current()
    }

    pub fn reset(&mut self) {
        self.target = Vec2::ZERO;
        self.follower.reset();
    }
}

/// Phase accumulator for the idle breathing oscillation.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Breathing {
    pub phase: f32,
    pub rate: f32,
}

impl Breathing {
    pub fn new(rate: f32) -> Self {
        Self { phase: 0.0, rate }
    }

    /// Advance by `delta` seconds and return `sin(phase)`.
    #[inline]
    pub fn advance(&mut self, delta: f32) -> f32 {
        self.phase += delta.max(0.0) * self.rate;
        self.phase.sin()
    }
}

/// Output for one drawable channel for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RigTransform {
    pub rotation: Vec2,
    pub offset: Vec3,
    pub scale: f32,
}

impl Default for RigTransform {
    fn default() -> Self {
        Self {
            rotation: Vec2::ZERO,
            offset: Vec3::ZERO,
            scale: 1.0,
        }
    }
}

/// Everything the host needs to pose the character for one frame.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CharacterPose {
    pub body: RigTransform,
    pub head: RigTransform,
    pub pupils: RigTransform,
    pub head_target: Vec2,
    pub eye_target: Vec2,
    pub eye_rotation: Vec2,
}

/// One-time placement decided when the rig becomes active.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Placement {
    pub offset: Vec3,
    pub scale: f32,
}

impl Placement {
    pub fn fixed(offset: Vec3, scale: f32) -> Self {
        Self { offset, scale }
    }

    /// Scale `bounds` so its largest side is `extent`, re-center it on the
    /// origin, then shift by `y_bias`. Empty or flat bounds keep scale 1.
    pub fn fit(bounds: &Aabb, extent: f32, y_bias: f32) -> Self {
        let size = bounds.size();
        let max_dim = size.x.max(size.y).max(size.z);
        let scale = if max_dim > f32::EPSILON {
            extent / max_dim
        } else {
            1.0
        };
        let center = bounds.center();
        Self {
            offset: -center * scale + Vec3::new(0.0, y_bias, 0.0),
            scale,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Lifecycle {
    Uninitialized,
    Active,
}

/// Head / eyes / pupils / breathing rig for the procedural character.
#[derive(Clone, Debug)]
pub struct CharacterRig {
    config: RigConfig,
    head: AimChannel,
    eyes: AimChannel,
    pupils: Follower,
    breathing: Breathing,
    placement: Placement,
    lifecycle: Lifecycle,
}

impl CharacterRig {
    pub fn new(config: RigConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            head: AimChannel::new(config.head)?,
            eyes: AimChannel::new(config.eyes)?,
            pupils: Follower::from_smoothing(config.pupil_smoothing)?,
            breathing: Breathing::new(config.breath_rate),
            placement: Placement::fixed(Vec3::ZERO, 1.0),
            lifecycle: Lifecycle::Uninitialized,
            config,
        })
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle == Lifecycle::Active
    }

    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// One-time setup. Later calls are ignored.
    pub fn activate(&mut self, placement: Placement) {
        if self.is_active() {
            return;
        }
        self.placement = placement;
        self.lifecycle = Lifecycle::Active;
        log::debug!(
            "[rig] active: offset=({:.3},{:.3},{:.3}) scale={:.3}",
            placement.offset.x,
            placement.offset.y,
            placement.offset.z,
            placement.scale
        );
    }

    /// Zero every follower and the breathing phase. Placement and lifecycle
    /// are kept.
    pub fn reset(&mut self) {
        self.head.reset();
        self.eyes.reset();
        self.pupils.reset();
        self.breathing.phase = 0.0;
    }

    /// Step every channel once. Returns `None` until the rig is active.
    pub fn update(&mut self, pointer: PointerSignal, delta: f32) -> Option<CharacterPose> {
        if !self.is_active() {
            return None;
        }
        let y_limit = self.config.pointer_y_limit;

        let head = self.head.aim(pointer, y_limit);
        let eyes = self.eyes.aim(pointer, y_limit);

        // Pupils follow this frame's smoothed eye rotation, not its target.
        let k = self.config.pupil_from_eye;
        let pupil_target = Vec2::new(eyes.y * k.x, eyes.x * k.y);
        let pupil = self.pupils.update(pupil_target);

        let wave = self.breathing.advance(delta);
        let base = self.placement;
        let body = RigTransform {
            rotation: Vec2::ZERO,
            offset: base.offset + Vec3::new(0.0, wave * self.config.breath_offset_amplitude, 0.0),
            scale: base.scale * (1.0 + wave * self.config.breath_scale_amplitude),
        };

        Some(CharacterPose {
            body,
            head: RigTransform {
                rotation: head,
                ..Default::default()
            },
            pupils: RigTransform {
                offset: pupil.extend(0.0),
                ..Default::default()
            },
            head_target: self.head.target(),
            eye_target: self.eyes.target(),
            eye_rotation: eyes,
        })
    }

    pub fn breathing_phase(&self) -> f32 {
        self.breathing.phase
    }
}
