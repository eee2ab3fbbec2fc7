use crate::{Ball, Config, Direction, Paddle, Side};
use hecs::World;
use log::trace;

/// Step one paddle, clamping it to the arena when the variant asks for it
pub fn move_paddle(world: &mut World, config: &Config, side: Side, dir: Direction) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side != side {
            continue;
        }

        match dir {
            Direction::Up => paddle.move_up(config.paddle_step),
            Direction::Down => paddle.move_down(config.paddle_step),
        }

        if config.variant.clamps_paddles() {
            paddle.y = config.clamp_paddle_y(paddle.y);
        }
    }
}

/// Move ball by one velocity step
pub fn move_ball(world: &mut World) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.advance();
        trace!("Ball at ({:.3}, {:.3})", ball.pos.x, ball.pos.y);
    }
}
