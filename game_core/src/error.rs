use std::error::Error as StdError;

/// Startup misconfiguration. The simulation refuses to run on any of these.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("arena must have positive finite dimensions, got {width}x{height}")]
    NonPositiveArena { width: f32, height: f32 },

    #[error("ball velocity components must be non-zero and finite, got ({dx}, {dy})")]
    ZeroVelocity { dx: f32, dy: f32 },

    #[error("ball diameter {0} does not fit inside the arena")]
    InvalidBallDiameter(f32),

    #[error("invalid paddle geometry -> {0}")]
    InvalidPaddle(&'static str),

    #[error("paddle margin {0} places the paddles outside the arena")]
    PaddleOutsideArena(f32),

    #[error("config parse error -> {0}")]
    Parse(#[from] ron::error::SpannedError),
}

#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("misconfigured game -> {0}")]
    Config(#[from] ConfigError),

    #[error("frontend failure -> {0}")]
    Frontend(#[source] Box<dyn StdError + Send + Sync>),
}

impl GameError {
    pub fn frontend<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        GameError::Frontend(Box::new(err))
    }
}
