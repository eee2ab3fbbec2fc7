/// Game tuning parameters for Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Arena (origin at the center)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 600.0;

    // Paddle: a 20 unit square stretched 0.7 wide and 5 tall
    pub const PADDLE_MARGIN: f32 = 50.0;
    pub const PADDLE_WIDTH: f32 = 14.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_STEP: f32 = 20.0;

    // Ball
    pub const BALL_DIAMETER: f32 = 20.0;
    pub const BALL_DX: f32 = 0.035; // per loop iteration, not per second
    pub const BALL_DY: f32 = 0.035;

    // Window
    pub const TITLE: &str = "PONG";
    pub const BACKGROUND: &str = "black";
    pub const FOREGROUND: &str = "white";
}
