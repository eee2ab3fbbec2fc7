use glam::Vec2;
use log::debug;
use serde::Deserialize;

use crate::{Arena, ConfigError, Params, Side, WindowSpec};

/// Which of the two historical table rule sets to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum Variant {
    /// Paddles move without clamping and the loop never tests paddle hits
    Classic,
    /// Paddles stay inside the arena and bounce the ball
    #[default]
    Improved,
}

impl Variant {
    pub fn clamps_paddles(self) -> bool {
        matches!(self, Variant::Improved)
    }

    pub fn checks_paddle_hits(self) -> bool {
        matches!(self, Variant::Improved)
    }
}

/// Game configuration
///
/// Every field has a default, so a RON document only needs to name the
/// fields it overrides:
///
/// ```
/// let config = game_core::Config::from_ron_str("(arena_width: 1024.0, variant: Classic)").unwrap();
/// assert_eq!(config.arena_height, 600.0);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena_width: f32,
    pub arena_height: f32,
    pub paddle_margin: f32,
    pub paddle_width: f32,
    pub paddle_height: f32,
    pub paddle_step: f32,
    pub ball_diameter: f32,
    pub ball_dx: f32,
    pub ball_dy: f32,
    pub variant: Variant,
    pub title: String,
    pub background: String,
    pub foreground: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            arena_width: Params::ARENA_WIDTH,
            arena_height: Params::ARENA_HEIGHT,
            paddle_margin: Params::PADDLE_MARGIN,
            paddle_width: Params::PADDLE_WIDTH,
            paddle_height: Params::PADDLE_HEIGHT,
            paddle_step: Params::PADDLE_STEP,
            ball_diameter: Params::BALL_DIAMETER,
            ball_dx: Params::BALL_DX,
            ball_dy: Params::BALL_DY,
            variant: Variant::default(),
            title: Params::TITLE.to_string(),
            background: Params::BACKGROUND.to_string(),
            foreground: Params::FOREGROUND.to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// The unclamped, collision-free rule set
    pub fn classic() -> Self {
        Self {
            variant: Variant::Classic,
            ..Self::default()
        }
    }

    /// Parse a (possibly partial) RON document and validate the result
    pub fn from_ron_str(source: &str) -> Result<Self, ConfigError> {
        let config: Config = ron::from_str(source)?;
        config.validate()?;
        debug!("Loaded config: {:?}", config);
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let (width, height) = (self.arena_width, self.arena_height);
        if !(is_positive(width) && is_positive(height)) {
            return Err(ConfigError::NonPositiveArena { width, height });
        }

        let (dx, dy) = (self.ball_dx, self.ball_dy);
        if !(dx.is_finite() && dy.is_finite() && dx != 0.0 && dy != 0.0) {
            return Err(ConfigError::ZeroVelocity { dx, dy });
        }

        let diameter = self.ball_diameter;
        if !(is_positive(diameter) && diameter < width && diameter < height) {
            return Err(ConfigError::InvalidBallDiameter(diameter));
        }

        if !is_positive(self.paddle_step) {
            return Err(ConfigError::InvalidPaddle("step must be positive"));
        }
        if !(is_positive(self.paddle_width) && is_positive(self.paddle_height)) {
            return Err(ConfigError::InvalidPaddle("size must be positive"));
        }
        if self.paddle_height > height {
            return Err(ConfigError::InvalidPaddle("paddle is taller than the arena"));
        }

        // The whole paddle must sit inside its own half, with its face no
        // further out than the goal line
        let margin = self.paddle_margin;
        let half_paddle = self.paddle_width / 2.0;
        let face = width / 2.0 - margin - half_paddle;
        let inside_half = is_positive(margin) && margin > half_paddle && face > 0.0;
        if !(inside_half && face <= self.right_border()) {
            return Err(ConfigError::PaddleOutsideArena(margin));
        }

        Ok(())
    }

    pub fn arena(&self) -> Arena {
        Arena::new(self.arena_width, self.arena_height)
    }

    /// (width, height) of a paddle
    pub fn paddle_size(&self) -> Vec2 {
        Vec2::new(self.paddle_width, self.paddle_height)
    }

    pub fn ball_velocity(&self) -> Vec2 {
        Vec2::new(self.ball_dx, self.ball_dy)
    }

    /// Get X position for paddle based on side
    pub fn paddle_x(&self, side: Side) -> f32 {
        self.arena().paddle_x(side, self.paddle_margin)
    }

    /// Clamp paddle Y so the whole paddle stays inside the arena
    pub fn clamp_paddle_y(&self, y: f32) -> f32 {
        self.arena().clamp_y(y, self.paddle_height / 2.0)
    }

    /// Highest Y the ball center may reach before it bounces
    pub fn top_border(&self) -> f32 {
        self.arena().top_border(self.ball_diameter)
    }

    /// Largest X the ball center may reach before it is a goal
    pub fn right_border(&self) -> f32 {
        self.arena().right_border(self.ball_diameter)
    }

    pub fn window_spec(&self) -> WindowSpec {
        WindowSpec {
            title: self.title.clone(),
            width: self.arena_width,
            height: self.arena_height,
            background: self.background.clone(),
            foreground: self.foreground.clone(),
        }
    }
}

fn is_positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}
