//! Snake module - body, heading and collision rules
//!
//! The snake is a plain data structure advanced once per simulation tick.
//! Index 0 of the body is always the head; the body is laid out leftward from
//! the head at construction and keeps head-first ordering forever.

use crate::types::{Pos, INITIAL_SNAKE_SPEED};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Pos>,
    heading: Pos,
    grid_size: i32,
    /// Speed stat; bumped together with the difficulty level
    pub speed: u32,
}

impl Snake {
    /// Create a snake with the given head position and length.
    ///
    /// The body extends leftward from the head at grid-size spacing and the
    /// initial heading is rightward, so the first move cannot self-collide.
    pub fn new(head: Pos, grid_size: i32, length: usize) -> Self {
        debug_assert!(length >= 1);
        let body = (0..length)
            .map(|i| Pos::new(head.x - i as i32 * grid_size, head.y))
            .collect();
        Self {
            body,
            heading: Pos::new(1, 0),
            grid_size,
            speed: INITIAL_SNAKE_SPEED,
        }
    }

    pub fn head(&self) -> Pos {
        self.body[0]
    }

    pub fn body(&self) -> &[Pos] {
        &self.body
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn heading(&self) -> Pos {
        self.heading
    }

    fn next_head(&self) -> Pos {
        let head = self.head();
        Pos::new(
            head.x + self.heading.x * self.grid_size,
            head.y + self.heading.y * self.grid_size,
        )
    }

    /// Advance one cell along the heading; length is unchanged
    pub fn advance(&mut self) {
        let new_head = self.next_head();
        self.body.insert(0, new_head);
        self.body.pop();
    }

    /// Advance one cell along the heading without dropping the tail;
    /// length grows by exactly one. Called once per food consumption.
    pub fn grow(&mut self) {
        let new_head = self.next_head();
        self.body.insert(0, new_head);
    }

    /// True when the head is outside the half-open pixel bounds
    /// `[0, width) x [0, height)` or coincides with another body segment.
    pub fn check_collision(&self, width: i32, height: i32) -> bool {
        let head = self.head();

        if head.x < 0 || head.x >= width || head.y < 0 || head.y >= height {
            return true;
        }

        self.body[1..].contains(&head)
    }

    /// Set a new heading unless it is the exact reverse of the current one.
    ///
    /// Reversal would walk the head into the neck in a single step, so the
    /// request is silently dropped. Nothing else is validated here; callers
    /// supply axis-aligned unit deltas.
    pub fn change_direction(&mut self, new_heading: Pos) {
        if new_heading != -self.heading {
            self.heading = new_heading;
        }
    }
}
