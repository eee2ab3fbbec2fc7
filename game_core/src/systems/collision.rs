use crate::{Ball, Borders, Config, Events, Paddle, Side};
use hecs::World;
use log::debug;

/// Bounce the ball off the top and bottom walls
pub fn reflect_walls(world: &mut World, config: &Config, events: &mut Events) {
    let top_border = config.top_border();
    let bottom_border = -top_border;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.y > top_border {
            ball.pos.y = top_border;
            ball.reverse_dy();
            events.ball_hit_wall = true;
            debug!("Ball bounced off top wall at x={:.2}", ball.pos.x);
        } else if ball.pos.y < bottom_border {
            ball.pos.y = bottom_border;
            ball.reverse_dy();
            events.ball_hit_wall = true;
            debug!("Ball bounced off bottom wall at x={:.2}", ball.pos.x);
        }
    }
}

/// Paddle borders keyed by side, collected up front so the ball can be
/// borrowed mutably afterwards
pub fn paddle_borders(world: &World, config: &Config) -> Vec<(Side, Borders)> {
    let size = config.paddle_size();
    world
        .query::<&Paddle>()
        .iter()
        .map(|(_e, paddle)| (paddle.side, paddle.borders(size)))
        .collect()
}

/// Slab test of the ball center against each paddle.
///
/// Only the center point is tested, and only at the post-move position, so a
/// ball faster than the paddle's half width can pass straight through.
pub fn check_paddle_hits(world: &mut World, config: &Config, events: &mut Events) {
    let paddles = paddle_borders(world, config);

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        for (side, borders) in &paddles {
            if borders.contains(ball.pos) {
                // Snap onto the face so the next tick starts outside the slab
                ball.pos.x = borders.side;
                ball.reverse_dx();
                events.ball_hit_paddle = true;
                debug!("Ball hit {} paddle at y={:.2}", side, ball.pos.y);
                break;
            }
        }
    }
}
