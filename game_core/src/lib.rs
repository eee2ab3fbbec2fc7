pub mod arena;
pub mod bindings;
pub mod components;
pub mod config;
pub mod error;
pub mod frontend;
pub mod game;
pub mod params;
pub mod resources;
pub mod systems;

pub use arena::*;
pub use bindings::*;
pub use components::*;
pub use config::*;
pub use error::*;
pub use frontend::*;
pub use game::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the Pong simulation.
///
/// There is no delta time: every call moves the ball by exactly one velocity
/// step, so game speed follows however often the caller ticks.
pub fn step(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    input: &mut InputQueue,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Apply key actions to the paddles
    ingest_inputs(world, input, config, events);

    // 2. Move ball, bouncing off top and bottom
    move_ball(world);
    reflect_walls(world, config, events);

    // 3. Ball vs paddles (the classic table never checks)
    if config.variant.checks_paddle_hits() {
        check_paddle_hits(world, config, events);
    }

    // 4. Check scoring (ball crossed a side border)
    check_goals(world, config, score, events);
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, x: f32, y: f32) -> hecs::Entity {
    world.spawn((Paddle::new(side, x, y),))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
