use glam::Vec2;

use crate::Side;

/// The playing field: a `width` x `height` rectangle centered on the origin
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
}

impl Arena {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Ball serve spot
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::ZERO
    }

    /// Paddle spawn position, `margin` in from the side wall
    pub fn paddle_spawn(&self, side: Side, margin: f32) -> Vec2 {
        Vec2::new(self.paddle_x(side, margin), 0.0)
    }

    pub fn paddle_x(&self, side: Side, margin: f32) -> f32 {
        side.sign() * (self.width / 2.0 - margin)
    }

    /// Clamp a center Y so that `half_height` above and below stays inside
    pub fn clamp_y(&self, y: f32, half_height: f32) -> f32 {
        let limit = (self.height / 2.0 - half_height).max(0.0);
        y.clamp(-limit, limit)
    }

    pub fn top_border(&self, ball_diameter: f32) -> f32 {
        self.height / 2.0 - ball_diameter / 2.0
    }

    pub fn right_border(&self, ball_diameter: f32) -> f32 {
        self.width / 2.0 - ball_diameter / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_spawns_are_mirrored() {
        let arena = Arena::new(800.0, 600.0);
        assert_eq!(arena.paddle_spawn(Side::Left, 50.0), Vec2::new(-350.0, 0.0));
        assert_eq!(arena.paddle_spawn(Side::Right, 50.0), Vec2::new(350.0, 0.0));
        assert_eq!(arena.ball_spawn(), Vec2::ZERO);
    }

    #[test]
    fn test_clamp_y_keeps_extent_inside() {
        let arena = Arena::new(800.0, 600.0);
        assert_eq!(arena.clamp_y(290.0, 50.0), 250.0);
        assert_eq!(arena.clamp_y(-290.0, 50.0), -250.0);
        assert_eq!(arena.clamp_y(10.0, 50.0), 10.0);
        // An object as tall as the arena can only sit on the center line
        assert_eq!(arena.clamp_y(10.0, 300.0), 0.0);
    }

    #[test]
    fn test_borders_account_for_ball_size() {
        let arena = Arena::new(800.0, 600.0);
        assert_eq!(arena.top_border(20.0), 290.0);
        assert_eq!(arena.right_border(20.0), 390.0);
    }
}
