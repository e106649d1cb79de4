//! Core types shared across the application
//! This module contains pure data types with no external dependencies

use std::ops::{Add, Neg};

/// Default playfield dimensions in pixels
pub const SCREEN_WIDTH: i32 = 600;
pub const SCREEN_HEIGHT: i32 = 400;

/// Size of one grid cell in pixels; all positions are multiples of this
pub const GRID_SIZE: i32 = 20;

/// Initial snake body length in segments
pub const INITIAL_SNAKE_LENGTH: usize = 3;

/// Snake speed stat at session start
pub const INITIAL_SNAKE_SPEED: u32 = 10;

/// Number of obstacles generated per session
pub const OBSTACLE_COUNT: usize = 5;

/// Tick rate is BASE_TICK_RATE + difficulty_level ticks per second
pub const BASE_TICK_RATE: u32 = 10;

/// Difficulty level at session start
pub const INITIAL_DIFFICULTY: u32 = 1;

/// Score interval between difficulty bumps
pub const SPEEDUP_INTERVAL: u32 = 5;

/// A grid-aligned pixel coordinate.
///
/// Both components are multiples of the configured grid size. Also used as a
/// movement delta (heading), where components are +/- one grid step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add for Pos {
    type Output = Pos;

    fn add(self, rhs: Pos) -> Pos {
        Pos::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Neg for Pos {
    type Output = Pos;

    fn neg(self) -> Pos {
        Pos::new(-self.x, -self.y)
    }
}

/// The four axis-aligned movement directions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta in grid cells (y grows downward)
    pub fn delta(self) -> Pos {
        match self {
            Direction::Up => Pos::new(0, -1),
            Direction::Down => Pos::new(0, 1),
            Direction::Left => Pos::new(-1, 0),
            Direction::Right => Pos::new(1, 0),
        }
    }
}

/// Discrete events produced by an input source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Turn(Direction),
    /// Restart request; honored only on the game-over screen
    Restart,
    /// Quit request; takes effect at the next tick boundary in any state
    Quit,
}
