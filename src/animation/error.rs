use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnimationError {
    #[error("visibility threshold {value} is outside (0, 1]")]
    InvalidThreshold { value: f64 },

    #[error("counter duration must be greater than zero")]
    DegenerateDuration,

    #[error("counter tick interval must be greater than zero")]
    DegenerateTick,
}
