use super::constants::{DEFAULT_DAMPING, DEFAULT_MAX_VELOCITY, DEFAULT_SPRING_FORCE};
use super::error::ConfigError;
use glam::Vec2;

/// Tuning for a [`SpringFollower`]. Immutable once the follower is built.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    spring_force: f32,
    damping_factor: f32,
    max_velocity: Option<f32>,
}

impl SpringConfig {
    /// Validate and build a config. `damping_factor` must be in (0, 1) or
    /// the integration does not settle.
    pub fn new(
        spring_force: f32,
        damping_factor: f32,
        max_velocity: Option<f32>,
    ) -> Result<Self, ConfigError> {
        if !(spring_force.is_finite() && spring_force > 0.0) {
            return Err(ConfigError::SpringForce(spring_force));
        }
        if !(damping_factor > 0.0 && damping_factor < 1.0) {
            return Err(ConfigError::DampingFactor(damping_factor));
        }
        if let Some(mv) = max_velocity {
            if !(mv > 0.0) {
                return Err(ConfigError::MaxVelocity(mv));
            }
        }
        Ok(Self {
            spring_force,
            damping_factor,
            max_velocity,
        })
    }

    /// Build a config without checking it. Anything built this way is
    /// checked again by [`Smoothing::validate`] before a follower uses it.
    pub const fn unchecked(spring_force: f32, damping_factor: f32, max_velocity: Option<f32>) -> Self {
        Self {
            spring_force,
            damping_factor,
            max_velocity,
        }
    }

    pub fn spring_force(&self) -> f32 {
        self.spring_force
    }

    pub fn damping_factor(&self) -> f32 {
        self.damping_factor
    }

    pub fn max_velocity(&self) -> Option<f32> {
        self.max_velocity
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            spring_force: DEFAULT_SPRING_FORCE,
            damping_factor: DEFAULT_DAMPING,
            max_velocity: Some(DEFAULT_MAX_VELOCITY),
        }
    }
}

/// Current value and velocity of one sprung channel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SpringState {
    pub current: Vec2,
    pub velocity: Vec2,
}

/// Damped spring integrator chasing a 2D target, one step per frame.
#[derive(Clone, Debug)]
pub struct SpringFollower {
    config: SpringConfig,
    state: SpringState,
}

impl SpringFollower {
    pub fn new(config: SpringConfig) -> Self {
        Self {
            config,
            state: SpringState::default(),
        }
    }

    /// Advance one frame toward `target` and return the new current value.
    pub fn update(&mut self, target: Vec2) -> Vec2 {
        let c = &self.config;
        let s = &mut self.state;
        let delta = target - s.current;
        let mut v = (s.velocity + delta * c.spring_force) * c.damping_factor;
        if let Some(mv) = c.max_velocity {
            v = v.clamp(Vec2::splat(-mv), Vec2::splat(mv));
        }
        s.velocity = v;
        s.current += v;
        s.current
    }

    pub fn reset(&mut self) {
        self.state = SpringState::default();
    }

    pub fn state(&self) -> &SpringState {
        &self.state
    }

    pub fn config(&self) -> &SpringConfig {
        &self.config
    }
}

/// Exponential smoothing: `current = lerp(current, target, factor)` per frame.
/// Never overshoots.
#[derive(Clone, Debug)]
pub struct LerpFollower {
    factor: f32,
    current: Vec2,
}

impl LerpFollower {
    pub fn new(factor: f32) -> Result<Self, ConfigError> {
        if !(factor > 0.0 && factor <= 1.0) {
            return Err(ConfigError::LerpFactor(factor));
        }
        Ok(Self {
            factor,
            current: Vec2::ZERO,
        })
    }

    pub fn update(&mut self, target: Vec2) -> Vec2 {
        self.current = self.current.lerp(target, self.factor);
        self.current
    }

    pub fn reset(&mut self) {
        self.current = Vec2::ZERO;
    }

    pub fn current(&self) -> Vec2 {
        self.current
    }

    pub fn factor(&self) -> f32 {
        self.factor
    }
}

/// Per-channel choice of smoothing strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Smoothing {
    Spring(SpringConfig),
    Lerp(f32),
}

impl Smoothing {
    pub fn validate(&self) -> Result<(), ConfigError> {
        match *self {
            Smoothing::Spring(c) => {
                SpringConfig::new(c.spring_force, c.damping_factor, c.max_velocity).map(|_| ())
            }
            Smoothing::Lerp(f) => LerpFollower::new(f).map(|_| ()),
        }
    }
}

/// A follower built from a [`Smoothing`]; the two strategies are
/// interchangeable from the caller's point of view.
#[derive(Clone, Debug)]
pub enum Follower {
    Spring(SpringFollower),
    Lerp(LerpFollower),
}

impl Follower {
    pub fn from_smoothing(smoothing: Smoothing) -> Result<Self, ConfigError> {
        smoothing.validate()?;
        Ok(match smoothing {
            Smoothing::Spring(c) => Follower::Spring(SpringFollower::new(c)),
            Smoothing::Lerp(f) => Follower::Lerp(LerpFollower::new(f)?),
        })
    }

    #[inline]
    pub fn update(&mut self, target: Vec2) -> Vec2 {
        match self {
            Follower::Spring(s) => s.update(target),
            Follower::Lerp(l) => l.update(target),
        }
    }

    pub fn reset(&mut self) {
        match self {
            Follower::Spring(s) => s.reset(),
            Follower::Lerp(l) => l.reset(),
        }
    }

    pub fn current(&self) -> Vec2 {
        match self {
            Follower::Spring(s) => s.state().current,
            Follower::Lerp(l) => l.current(),
        }
    }
}
