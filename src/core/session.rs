//! Game session - the top-level state machine for one playthrough
//!
//! A session owns the snake, the food spawner, the obstacle field, the score
//! and the terminal flag, plus the injected high-score store. It has exactly
//! two states, RUNNING and GAME_OVER, and the transition is one-way: a
//! finished session only yields a brand-new one via `restart`.

use crate::core::config::{ConfigError, GameConfig};
use crate::core::food::FoodSpawner;
use crate::core::obstacles::ObstacleField;
use crate::core::rng::SimpleRng;
use crate::core::snake::Snake;
use crate::core::snapshot::SessionSnapshot;
use crate::store::HighScoreStore;
use crate::types::{Direction, Pos, BASE_TICK_RATE, INITIAL_DIFFICULTY, SPEEDUP_INTERVAL};

pub struct GameSession {
    config: GameConfig,
    snake: Snake,
    food: FoodSpawner,
    obstacles: ObstacleField,
    rng: SimpleRng,
    score: u32,
    high_score: u32,
    difficulty_level: u32,
    game_over: bool,
    /// Increments on restart
    episode: u32,
    store: Box<dyn HighScoreStore>,
    last_persist_error: Option<String>,
}

impl GameSession {
    /// Build a fresh RUNNING session.
    ///
    /// Validates the configuration, loads the persisted high score, lays the
    /// snake out from the board center and generates food and obstacles.
    /// Obstacles are re-rolled so they never overlap the initial snake or
    /// the food.
    pub fn new(
        config: GameConfig,
        mut store: Box<dyn HighScoreStore>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let high_score = store.load();
        let mut rng = SimpleRng::new(config.seed);

        let snake = Snake::new(
            config.center(),
            config.grid_size,
            config.initial_snake_length,
        );
        let food = FoodSpawner::new(
            &mut rng,
            config.grid_size,
            config.screen_width,
            config.screen_height,
        );

        let mut avoid: Vec<Pos> = snake.body().to_vec();
        avoid.push(food.position());
        let obstacles = ObstacleField::generate(
            &mut rng,
            config.obstacle_count,
            config.grid_size,
            config.screen_width,
            config.screen_height,
            &avoid,
        );

        Ok(Self {
            config,
            snake,
            food,
            obstacles,
            rng,
            score: 0,
            high_score,
            difficulty_level: INITIAL_DIFFICULTY,
            game_over: false,
            episode: 0,
            store,
            last_persist_error: None,
        })
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn difficulty_level(&self) -> u32 {
        self.difficulty_level
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food_position(&self) -> Pos {
        self.food.position()
    }

    pub fn obstacles(&self) -> &[Pos] {
        self.obstacles.positions()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Simulation rate in ticks per second; rate changes apply on the tick
    /// after a difficulty bump.
    pub fn tick_rate(&self) -> u32 {
        BASE_TICK_RATE + self.difficulty_level
    }

    /// Take the last high-score save failure, if any, for reporting.
    pub fn take_persist_error(&mut self) -> Option<String> {
        self.last_persist_error.take()
    }

    /// Request a direction change. Ignored once the session is terminal;
    /// reversal requests are dropped by the snake itself.
    pub fn steer(&mut self, direction: Direction) {
        if !self.game_over {
            self.snake.change_direction(direction.delta());
        }
    }

    /// Advance the simulation by one tick.
    ///
    /// In order: move the snake; on wall/self/obstacle collision transition
    /// to GAME_OVER (persisting the high score best-effort); otherwise, if
    /// the head reached the food, grow, respawn the food, bump the score and
    /// run the difficulty step. A terminal session ignores updates.
    ///
    /// The only error is `BoardFull` from a respawn with no free cell left,
    /// which configuration validation makes unreachable in normal play.
    pub fn update(&mut self) -> Result<(), ConfigError> {
        if self.game_over {
            return Ok(());
        }

        self.snake.advance();

        let head = self.snake.head();
        if self
            .snake
            .check_collision(self.config.screen_width, self.config.screen_height)
            || self.obstacles.contains(head)
        {
            self.game_over = true;
            if self.score > self.high_score {
                self.high_score = self.score;
                if let Err(err) = self.store.save(self.high_score) {
                    self.last_persist_error = Some(err.to_string());
                }
            }
            // No food logic on the tick that went terminal.
            return Ok(());
        }

        if head == self.food.position() {
            self.snake.grow();
            let mut occupied: Vec<Pos> = self.snake.body().to_vec();
            occupied.extend_from_slice(self.obstacles.positions());
            self.food.respawn(&mut self.rng, &occupied)?;
            self.score += 1;
            self.adjust_difficulty();
        }

        Ok(())
    }

    /// Difficulty step, run after each food consumption with the score
    /// already incremented.
    fn adjust_difficulty(&mut self) {
        if self.score % SPEEDUP_INTERVAL == 0 {
            self.difficulty_level += 1;
            self.snake.speed += 1;
        }
    }

    /// Consume this session and produce a fresh RUNNING one.
    ///
    /// Everything resets except the high score and the store; the new
    /// session is seeded from this session's RNG stream so consecutive
    /// episodes get different layouts.
    pub fn restart(self) -> Result<GameSession, ConfigError> {
        let config = GameConfig {
            seed: self.rng.state(),
            ..self.config
        };
        let mut next = GameSession::new(config, self.store)?;
        next.high_score = next.high_score.max(self.high_score);
        next.episode = self.episode + 1;
        Ok(next)
    }

    /// Read-only view for renderers; borrows, no copies.
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            body: self.snake.body(),
            food: self.food.position(),
            obstacles: self.obstacles.positions(),
            score: self.score,
            high_score: self.high_score,
            difficulty_level: self.difficulty_level,
            game_over: self.game_over,
            episode: self.episode,
            grid_size: self.config.grid_size,
            screen_width: self.config.screen_width,
            screen_height: self.config.screen_height,
        }
    }
}
