use glam::Vec2;
use hecs::{Entity, World};
use log::{debug, info, trace};

use crate::{
    create_ball, create_paddle, Action, Ball, Borders, Config, Events, FrameStatus, Frontend,
    GameError, InputQueue, Key, KeyBindings, Paddle, Score, Side,
};

/// One table: both paddles, the ball, the score and the key bindings
pub struct Game {
    world: World,
    config: Config,
    score: Score,
    events: Events,
    input: InputQueue,
    bindings: KeyBindings,
    left_paddle: Entity,
    right_paddle: Entity,
    ball: Entity,
    tick: u64,
}

impl Game {
    pub fn new(config: Config) -> Result<Self, GameError> {
        Self::with_bindings(config, KeyBindings::default())
    }

    pub fn with_bindings(config: Config, bindings: KeyBindings) -> Result<Self, GameError> {
        config.validate()?;

        let arena = config.arena();
        let mut world = World::new();
        let left = arena.paddle_spawn(Side::Left, config.paddle_margin);
        let right = arena.paddle_spawn(Side::Right, config.paddle_margin);
        let left_paddle = create_paddle(&mut world, Side::Left, left.x, left.y);
        let right_paddle = create_paddle(&mut world, Side::Right, right.x, right.y);
        let ball = create_ball(&mut world, arena.ball_spawn(), config.ball_velocity());

        debug!(
            "New {:?} game on a {}x{} arena",
            config.variant, config.arena_width, config.arena_height
        );

        Ok(Self {
            world,
            config,
            score: Score::new(),
            events: Events::new(),
            input: InputQueue::new(),
            bindings,
            left_paddle,
            right_paddle,
            ball,
            tick: 0,
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn score(&self) -> Score {
        self.score
    }

    /// Events from the most recent tick
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    pub fn ball(&self) -> Ball {
        *self.component::<Ball>(self.ball)
    }

    pub fn paddle(&self, side: Side) -> Paddle {
        *self.component::<Paddle>(self.paddle_entity(side))
    }

    pub fn borders(&self, side: Side) -> Borders {
        self.paddle(side).borders(self.config.paddle_size())
    }

    /// Teleport the ball, e.g. to set up a serve
    pub fn place_ball(&mut self, pos: Vec2, vel: Vec2) {
        let mut ball = self.component_mut::<Ball>(self.ball);
        ball.pos = pos;
        ball.vel = vel;
    }

    /// Set a paddle's Y directly, without clamping
    pub fn place_paddle(&mut self, side: Side, y: f32) {
        let entity = self.paddle_entity(side);
        self.component_mut::<Paddle>(entity).y = y;
    }

    /// Queue the action bound to `key`. Returns false for unbound keys.
    pub fn press(&mut self, key: Key) -> bool {
        match self.bindings.action(key) {
            Some(action) => {
                self.input.push(action);
                true
            }
            None => {
                trace!("Ignoring unbound key {:?}", key);
                false
            }
        }
    }

    pub fn queue(&mut self, action: Action) {
        self.input.push(action);
    }

    /// Advance the simulation by one loop iteration
    pub fn step(&mut self) -> &Events {
        crate::step(
            &mut self.world,
            &self.config,
            &mut self.score,
            &mut self.events,
            &mut self.input,
        );
        self.tick += 1;
        &self.events
    }

    /// Draw paddles and ball for the current state
    pub fn render<F: Frontend>(&self, frontend: &mut F) -> Result<(), F::Error> {
        let size = self.config.paddle_size();
        for side in Side::BOTH {
            let paddle = self.paddle(side);
            frontend.draw_paddle(side, Vec2::new(paddle.x, paddle.y), size)?;
        }
        frontend.draw_ball(self.ball().pos, self.config.ball_diameter)
    }

    /// Run until the frontend reports it was closed, returning the tick count.
    ///
    /// Frames are not paced: the ball moves one velocity step per flushed
    /// frame, however fast the frontend flushes.
    pub fn run<F: Frontend>(&mut self, frontend: &mut F) -> Result<u64, GameError> {
        frontend
            .open(&self.config.window_spec())
            .map_err(GameError::frontend)?;
        frontend
            .draw_score(&self.score)
            .map_err(GameError::frontend)?;

        loop {
            self.render(frontend).map_err(GameError::frontend)?;
            if frontend.flush().map_err(GameError::frontend)? == FrameStatus::Closed {
                info!("Frontend closed after {} ticks, final score {}", self.tick, self.score);
                return Ok(self.tick);
            }

            for key in frontend.poll_keys() {
                self.press(key);
            }

            if self.step().score_changed() {
                frontend
                    .draw_score(&self.score)
                    .map_err(GameError::frontend)?;
            }
        }
    }

    fn paddle_entity(&self, side: Side) -> Entity {
        match side {
            Side::Left => self.left_paddle,
            Side::Right => self.right_paddle,
        }
    }

    // Entities are spawned in `new` and never despawned
    fn component<T: hecs::Component>(&self, entity: Entity) -> hecs::Ref<'_, T> {
        self.world
            .get::<&T>(entity)
            .expect("game entities live as long as the game")
    }

    fn component_mut<T: hecs::Component>(&mut self, entity: Entity) -> hecs::RefMut<'_, T> {
        self.world
            .get::<&mut T>(entity)
            .expect("game entities live as long as the game")
    }
}
