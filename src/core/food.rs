//! Food module - rejection-sampled food placement
//!
//! Food is never removed, only relocated. Placement rejects cells in the
//! occupied set; a bounded attempt count followed by a deterministic full
//! scan turns the degenerate fully-occupied board into a reported error
//! instead of an infinite loop.

use crate::core::config::ConfigError;
use crate::core::rng::{random_cell, SimpleRng};
use crate::types::Pos;

/// Random attempts before falling back to scanning every cell in order
const MAX_SAMPLE_ATTEMPTS: u32 = 1024;

#[derive(Debug, Clone)]
pub struct FoodSpawner {
    position: Pos,
    grid_size: i32,
    width: i32,
    height: i32,
}

impl FoodSpawner {
    /// Place the first food anywhere on the board (no snake exists yet,
    /// so the occupied set is empty and the first sample always lands).
    pub fn new(rng: &mut SimpleRng, grid_size: i32, width: i32, height: i32) -> Self {
        let position = random_cell(rng, grid_size, width, height);
        Self {
            position,
            grid_size,
            width,
            height,
        }
    }

    pub fn position(&self) -> Pos {
        self.position
    }

    #[cfg(test)]
    pub(crate) fn set_position(&mut self, pos: Pos) {
        self.position = pos;
    }

    /// Move the food to a random free cell.
    ///
    /// Post-condition: the new position is grid-aligned, in bounds and not in
    /// `occupied`. Errors with `ConfigError::BoardFull` only when `occupied`
    /// covers the whole board.
    pub fn respawn(&mut self, rng: &mut SimpleRng, occupied: &[Pos]) -> Result<(), ConfigError> {
        for _ in 0..MAX_SAMPLE_ATTEMPTS {
            let candidate = random_cell(rng, self.grid_size, self.width, self.height);
            if !occupied.contains(&candidate) {
                self.position = candidate;
                return Ok(());
            }
        }

        // Either the board is (nearly) full or sampling was unlucky; settle
        // it deterministically by scanning every cell once.
        for row in 0..self.height / self.grid_size {
            for col in 0..self.width / self.grid_size {
                let candidate = Pos::new(col * self.grid_size, row * self.grid_size);
                if !occupied.contains(&candidate) {
                    self.position = candidate;
                    return Ok(());
                }
            }
        }

        Err(ConfigError::BoardFull)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_cells(grid: i32, width: i32, height: i32) -> Vec<Pos> {
        let mut cells = Vec::new();
        for row in 0..height / grid {
            for col in 0..width / grid {
                cells.push(Pos::new(col * grid, row * grid));
            }
        }
        cells
    }

    #[test]
    fn test_initial_position_is_aligned_and_in_bounds() {
        for seed in 1..50 {
            let mut rng = SimpleRng::new(seed);
            let food = FoodSpawner::new(&mut rng, 20, 600, 400);
            let p = food.position();
            assert_eq!(p.x % 20, 0);
            assert_eq!(p.y % 20, 0);
            assert!(p.x >= 0 && p.x < 600);
            assert!(p.y >= 0 && p.y < 400);
        }
    }

    #[test]
    fn test_respawn_avoids_occupied() {
        let mut rng = SimpleRng::new(42);
        let mut food = FoodSpawner::new(&mut rng, 20, 600, 400);

        let occupied = vec![Pos::new(100, 100), Pos::new(120, 100), Pos::new(140, 100)];
        for _ in 0..200 {
            food.respawn(&mut rng, &occupied).unwrap();
            assert!(!occupied.contains(&food.position()));
        }
    }

    #[test]
    fn test_respawn_on_nearly_full_board_finds_the_gap() {
        // 3x3 board with a single free cell.
        let mut rng = SimpleRng::new(5);
        let mut food = FoodSpawner::new(&mut rng, 20, 60, 60);

        let gap = Pos::new(40, 40);
        let occupied: Vec<Pos> = all_cells(20, 60, 60)
            .into_iter()
            .filter(|&p| p != gap)
            .collect();

        food.respawn(&mut rng, &occupied).unwrap();
        assert_eq!(food.position(), gap);
    }

    #[test]
    fn test_respawn_on_full_board_errors() {
        let mut rng = SimpleRng::new(5);
        let mut food = FoodSpawner::new(&mut rng, 20, 60, 60);

        let occupied = all_cells(20, 60, 60);
        assert_eq!(
            food.respawn(&mut rng, &occupied),
            Err(ConfigError::BoardFull)
        );
    }

    #[test]
    fn test_respawn_is_deterministic_per_seed() {
        let occupied = vec![Pos::new(0, 0)];

        let mut rng1 = SimpleRng::new(77);
        let mut food1 = FoodSpawner::new(&mut rng1, 20, 600, 400);
        food1.respawn(&mut rng1, &occupied).unwrap();

        let mut rng2 = SimpleRng::new(77);
        let mut food2 = FoodSpawner::new(&mut rng2, 20, 600, 400);
        food2.respawn(&mut rng2, &occupied).unwrap();

        assert_eq!(food1.position(), food2.position());
    }
}
