use crate::{Ball, Config, Events, Score};
use hecs::World;
use log::info;

/// Check if ball left the arena (scoring)
pub fn check_goals(world: &mut World, config: &Config, score: &mut Score, events: &mut Events) {
    let right_border = config.right_border();
    let left_border = -right_border;

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.pos.x > right_border {
            // Left player scores
            score.increment_left();
            events.left_scored = true;
            ball.reset_reverse_position();
            info!("Left player scores: {}", score);
        } else if ball.pos.x < left_border {
            // Right player scores
            score.increment_right();
            events.right_scored = true;
            ball.reset_reverse_position();
            info!("Right player scores: {}", score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::create_ball;
    use crate::systems::move_ball;
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events) {
        (World::new(), Config::new(), Score::new(), Events::new())
    }

    fn ball(world: &World) -> Ball {
        world.query::<&Ball>().iter().next().map(|(_e, b)| *b).unwrap()
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(395.0, 0.0), Vec2::new(0.035, 0.035));

        move_ball(&mut world);
        check_goals(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0, "Right player should not score");
        assert!(events.left_scored, "Should trigger left_scored event");

        let ball = ball(&world);
        assert_eq!(ball.pos, Vec2::ZERO, "Ball reset to center");
        assert_eq!(ball.vel.x, -0.035, "Serve reversed");
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(-390.5, 100.0), Vec2::new(-0.035, -0.035));

        check_goals(&mut world, &config, &mut score, &mut events);

        assert_eq!(score.right, 1);
        assert_eq!(score.left, 0);
        assert!(events.right_scored);

        let ball = ball(&world);
        assert_eq!(ball.pos, Vec2::ZERO);
        assert_eq!(ball.vel, Vec2::new(0.035, -0.035), "dy survives the reset");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(390.0, 0.0), Vec2::new(0.035, 0.035));

        check_goals(&mut world, &config, &mut score, &mut events);

        assert_eq!(score, Score::new(), "No score on the border itself");
        assert!(!events.score_changed());
        assert_eq!(ball(&world).pos.x, 390.0);
    }

    #[test]
    fn test_multiple_scores_accumulate() {
        let (mut world, config, mut score, mut events) = setup_world();
        create_ball(&mut world, Vec2::new(391.0, 0.0), Vec2::new(0.035, 0.0));

        check_goals(&mut world, &config, &mut score, &mut events);
        events.clear();

        // Reset ball is heading left; push it out on that side
        for (_e, ball) in world.query_mut::<&mut Ball>() {
            ball.pos.x = -391.0;
        }
        check_goals(&mut world, &config, &mut score, &mut events);

        assert_eq!(score, Score { left: 1, right: 1 });
        assert!(events.right_scored && !events.left_scored);
        assert_eq!(ball(&world).vel.x, 0.035, "Serve alternates back");
    }
}
