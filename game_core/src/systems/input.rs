use hecs::World;
use log::info;

use crate::systems::{move_paddle, paddle_borders};
use crate::{Action, Config, Direction, Events, InputQueue};

/// Apply queued key actions, oldest first
pub fn ingest_inputs(
    world: &mut World,
    input: &mut InputQueue,
    config: &Config,
    events: &mut Events,
) {
    for action in input.drain() {
        match action {
            Action::PaddleUp(side) => move_paddle(world, config, side, Direction::Up),
            Action::PaddleDown(side) => move_paddle(world, config, side, Direction::Down),
            Action::ReportBorders => {
                report_borders(world, config);
                events.borders_reported = true;
            }
        }
    }
}

/// Log each paddle's (top, side, bottom) collision lines
pub fn report_borders(world: &World, config: &Config) {
    for (side, borders) in paddle_borders(world, config) {
        info!(
            "{} paddle borders: top={:.1} side={:.1} bottom={:.1}",
            side, borders.top, borders.side, borders.bottom
        );
    }
}
