//! Session configuration and validation
//!
//! All simulation parameters are collected here and validated once, before a
//! session is constructed. A session that starts is guaranteed a coherent
//! board: grid-aligned bounds and at least one free cell for food.

use std::fmt;

use crate::types::{
    GRID_SIZE, INITIAL_SNAKE_LENGTH, OBSTACLE_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH,
};

/// Fatal configuration problems, detected at construction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Grid size must be a positive number of pixels
    ZeroGridSize,
    /// Screen dimensions must be positive multiples of the grid size
    GridMisaligned { width: i32, height: i32, grid_size: i32 },
    /// Initial snake length must be at least 1 and fit on the board
    BadSnakeLength { length: usize },
    /// Snake, obstacles and food would not leave a free cell on the board
    BoardFull,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ZeroGridSize => write!(f, "grid size must be positive"),
            ConfigError::GridMisaligned {
                width,
                height,
                grid_size,
            } => write!(
                f,
                "screen {}x{} is not a multiple of grid size {}",
                width, height, grid_size
            ),
            ConfigError::BadSnakeLength { length } => {
                write!(f, "initial snake length {} does not fit the board", length)
            }
            ConfigError::BoardFull => write!(f, "board has no free cell left for food"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Simulation parameters for one game session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Playfield width in pixels
    pub screen_width: i32,
    /// Playfield height in pixels
    pub screen_height: i32,
    /// Grid cell size in pixels
    pub grid_size: i32,
    /// Snake length at session start
    pub initial_snake_length: usize,
    /// Number of obstacles generated at session start
    pub obstacle_count: usize,
    /// RNG seed for food and obstacle placement
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            grid_size: GRID_SIZE,
            initial_snake_length: INITIAL_SNAKE_LENGTH,
            obstacle_count: OBSTACLE_COUNT,
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Board width in grid cells
    pub fn cols(&self) -> i32 {
        self.screen_width / self.grid_size
    }

    /// Board height in grid cells
    pub fn rows(&self) -> i32 {
        self.screen_height / self.grid_size
    }

    /// Grid-aligned board center, the initial head position
    pub fn center(&self) -> crate::types::Pos {
        crate::types::Pos::new(
            self.screen_width / 2 / self.grid_size * self.grid_size,
            self.screen_height / 2 / self.grid_size * self.grid_size,
        )
    }

    /// Check the configuration describes a playable board
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.grid_size <= 0 {
            return Err(ConfigError::ZeroGridSize);
        }
        if self.screen_width <= 0
            || self.screen_height <= 0
            || self.screen_width % self.grid_size != 0
            || self.screen_height % self.grid_size != 0
        {
            return Err(ConfigError::GridMisaligned {
                width: self.screen_width,
                height: self.screen_height,
                grid_size: self.grid_size,
            });
        }

        // The initial body is laid out leftward from the center.
        let center = self.center();
        let leftmost = center.x - (self.initial_snake_length as i32 - 1) * self.grid_size;
        if self.initial_snake_length == 0 || leftmost < 0 {
            return Err(ConfigError::BadSnakeLength {
                length: self.initial_snake_length,
            });
        }

        // Snake + obstacles + food must leave at least one cell free so the
        // food spawner can always succeed right after construction.
        let total_cells = (self.cols() * self.rows()) as usize;
        if self.initial_snake_length + self.obstacle_count + 1 >= total_cells {
            return Err(ConfigError::BoardFull);
        }

        Ok(())
    }
}
