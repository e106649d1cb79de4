//! Obstacle module - fixed obstacle set for one session
//!
//! Obstacles are generated once when a session starts and never move.
//! Generation re-rolls any cell that would land on the initial snake or the
//! food, so a fresh session is always survivable.

use crate::core::rng::{random_cell, SimpleRng};
use crate::types::Pos;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ObstacleField {
    positions: Vec<Pos>,
}

impl ObstacleField {
    /// Generate `count` random grid-aligned obstacles, none of which land on
    /// a cell in `avoid`. Obstacles may stack on each other; only the set of
    /// occupied cells matters for collision.
    pub fn generate(
        rng: &mut SimpleRng,
        count: usize,
        grid_size: i32,
        width: i32,
        height: i32,
        avoid: &[Pos],
    ) -> Self {
        let mut positions = Vec::with_capacity(count);
        while positions.len() < count {
            let candidate = random_cell(rng, grid_size, width, height);
            if !avoid.contains(&candidate) {
                positions.push(candidate);
            }
        }
        Self { positions }
    }

    pub fn positions(&self) -> &[Pos] {
        &self.positions
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.positions.contains(&pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generates_exact_count() {
        let mut rng = SimpleRng::new(1);
        let field = ObstacleField::generate(&mut rng, 5, 20, 600, 400, &[]);
        assert_eq!(field.positions().len(), 5);
    }

    #[test]
    fn test_positions_are_aligned_and_in_bounds() {
        let mut rng = SimpleRng::new(23);
        let field = ObstacleField::generate(&mut rng, 50, 20, 600, 400, &[]);
        for &p in field.positions() {
            assert_eq!(p.x % 20, 0);
            assert_eq!(p.y % 20, 0);
            assert!(p.x >= 0 && p.x < 600);
            assert!(p.y >= 0 && p.y < 400);
        }
    }

    #[test]
    fn test_avoid_set_is_respected() {
        // A tiny 3x3 board with most cells blocked forces the re-roll path.
        let avoid = vec![
            Pos::new(0, 0),
            Pos::new(20, 0),
            Pos::new(40, 0),
            Pos::new(0, 20),
            Pos::new(20, 20),
            Pos::new(40, 20),
            Pos::new(0, 40),
            Pos::new(20, 40),
        ];
        let mut rng = SimpleRng::new(9);
        let field = ObstacleField::generate(&mut rng, 3, 20, 60, 60, &avoid);
        for &p in field.positions() {
            assert_eq!(p, Pos::new(40, 40));
        }
    }

    #[test]
    fn test_contains() {
        let mut rng = SimpleRng::new(4);
        let field = ObstacleField::generate(&mut rng, 5, 20, 600, 400, &[]);
        let first = field.positions()[0];
        assert!(field.contains(first));
        assert!(!field.contains(Pos::new(-20, -20)));
    }

    #[test]
    fn test_generation_is_deterministic_per_seed() {
        let mut rng1 = SimpleRng::new(31337);
        let mut rng2 = SimpleRng::new(31337);
        let a = ObstacleField::generate(&mut rng1, 5, 20, 600, 400, &[]);
        let b = ObstacleField::generate(&mut rng2, 5, 20, 600, 400, &[]);
        assert_eq!(a, b);
    }
}
