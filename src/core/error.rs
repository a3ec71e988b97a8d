use thiserror::Error;

/// Rejected tuning values for a follower or rig.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ConfigError {
    #[error("spring force must be positive and finite, got {0}")]
    SpringForce(f32),
    #[error("damping factor must lie strictly between 0 and 1, got {0}")]
    DampingFactor(f32),
    #[error("max velocity must be positive when set, got {0}")]
    MaxVelocity(f32),
    #[error("lerp factor must lie in (0, 1], got {0}")]
    LerpFactor(f32),
    #[error("channel limit must be non-negative and finite, got {0}")]
    ChannelLimit(f32),
}
