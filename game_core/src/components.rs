use std::fmt;

use glam::Vec2;

/// Which end of the table a paddle guards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// -1 for the left half of the arena, +1 for the right half
    pub fn sign(self) -> f32 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Paddle movement direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Paddle component - x never changes after spawn
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Paddle {
    pub side: Side,
    pub x: f32,
    pub y: f32,
}

impl Paddle {
    pub fn new(side: Side, x: f32, y: f32) -> Self {
        Self { side, x, y }
    }

    pub fn move_up(&mut self, step: f32) {
        self.y += step;
    }

    pub fn move_down(&mut self, step: f32) {
        self.y -= step;
    }

    /// Collision lines for a paddle of the given (width, height).
    ///
    /// `side` is the face turned toward the middle of the table, so it lies
    /// on the arena-center side of `center` for both paddles.
    pub fn borders(&self, size: Vec2) -> Borders {
        let half = size * 0.5;
        Borders {
            top: self.y + half.y,
            side: self.x - self.side.sign() * half.x,
            center: self.x,
            bottom: self.y - half.y,
        }
    }
}

/// Lines bounding the slab a ball center must enter to hit a paddle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Borders {
    pub top: f32,
    pub side: f32,
    pub center: f32,
    pub bottom: f32,
}

impl Borders {
    /// Strict point-in-slab test between the face and the center line.
    pub fn contains(&self, point: Vec2) -> bool {
        let (near, far) = if self.side < self.center {
            (self.side, self.center)
        } else {
            (self.center, self.side)
        };
        point.x > near && point.x < far && point.y > self.bottom && point.y < self.top
    }
}

/// Ball component - the pong ball
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// One fixed Euler step: the velocity is a per-iteration displacement
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }

    pub fn reverse_dx(&mut self) {
        self.vel.x = -self.vel.x;
    }

    pub fn reverse_dy(&mut self) {
        self.vel.y = -self.vel.y;
    }

    /// Put the ball back on the center spot and serve it the other way
    pub fn reset_reverse_position(&mut self) {
        self.pos = Vec2::ZERO;
        self.reverse_dx();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PADDLE_SIZE: Vec2 = Vec2::new(14.0, 100.0);

    #[test]
    fn test_left_paddle_borders_face_the_center() {
        let paddle = Paddle::new(Side::Left, -350.0, 0.0);
        let borders = paddle.borders(PADDLE_SIZE);
        assert_eq!(borders.top, 50.0);
        assert_eq!(borders.bottom, -50.0);
        assert_eq!(borders.center, -350.0);
        assert_eq!(borders.side, -343.0);
    }

    #[test]
    fn test_right_paddle_borders_face_the_center() {
        let paddle = Paddle::new(Side::Right, 350.0, 20.0);
        let borders = paddle.borders(PADDLE_SIZE);
        assert_eq!(borders.top, 70.0);
        assert_eq!(borders.bottom, -30.0);
        assert_eq!(borders.side, 343.0);
    }

    #[test]
    fn test_slab_contains_is_strict() {
        let borders = Paddle::new(Side::Right, 350.0, 0.0).borders(PADDLE_SIZE);
        assert!(borders.contains(Vec2::new(345.0, 0.0)));
        assert!(!borders.contains(Vec2::new(343.0, 0.0)), "Face line is outside");
        assert!(!borders.contains(Vec2::new(350.0, 0.0)), "Center line is outside");
        assert!(!borders.contains(Vec2::new(345.0, 50.0)), "Top line is outside");
        assert!(!borders.contains(Vec2::new(345.0, -50.0)), "Bottom line is outside");
        assert!(!borders.contains(Vec2::new(355.0, 0.0)), "Behind the paddle");
    }

    #[test]
    fn test_paddle_steps() {
        let mut paddle = Paddle::new(Side::Left, -350.0, 0.0);
        paddle.move_up(20.0);
        paddle.move_up(20.0);
        paddle.move_down(20.0);
        assert_eq!(paddle.y, 20.0);
    }

    #[test]
    fn test_ball_reset_alternates_serve() {
        let mut ball = Ball::new(Vec2::new(395.0, 12.0), Vec2::new(0.035, -0.035));
        ball.reset_reverse_position();
        assert_eq!(ball.pos, Vec2::ZERO);
        assert_eq!(ball.vel, Vec2::new(-0.035, -0.035));
        ball.reset_reverse_position();
        assert_eq!(ball.vel.x, 0.035);
    }

    #[test]
    fn test_side_display() {
        assert_eq!(Side::Left.to_string(), "left");
        assert_eq!(Side::Right.to_string(), "right");
    }
}
