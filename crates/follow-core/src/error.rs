use glam::Vec3;

/// Precondition and invariant failures reported by the follow controller.
///
/// Band values never produce an error; they are clamped instead. Everything
/// here is a contract violation by the caller, except `NonFinitePosition`
/// which signals a bug in the integrator.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FollowError {
    #[error("{regime} smooth time must be finite and positive, got {value}")]
    InvalidSmoothTime { regime: &'static str, value: f32 },

    #[error("idle time to recenter must be finite and non-negative, got {0}")]
    InvalidIdleTime(f32),

    #[error("band extents and vertical offset must be finite")]
    NonFiniteBands,

    #[error("step duration must be finite and positive, got {0}")]
    InvalidStepDuration(f32),

    #[error("subject position is not finite: {0}")]
    NonFiniteSubject(Vec3),

    #[error("controller stepped before initialize()")]
    NotInitialized,

    #[error("integration produced a non-finite camera position: {0}")]
    NonFinitePosition(Vec3),
}

pub type Result<T, E = FollowError> = std::result::Result<T, E>;
