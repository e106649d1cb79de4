//! Read-only view of a session for renderers and observers.
//!
//! Borrows from the session instead of copying the body, so producing a
//! snapshot every frame allocates nothing.

use crate::types::Pos;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot<'a> {
    /// Snake body, head first
    pub body: &'a [Pos],
    pub food: Pos,
    pub obstacles: &'a [Pos],
    pub score: u32,
    pub high_score: u32,
    pub difficulty_level: u32,
    pub game_over: bool,
    /// Monotonic session counter within the process run
    pub episode: u32,
    pub grid_size: i32,
    pub screen_width: i32,
    pub screen_height: i32,
}

impl SessionSnapshot<'_> {
    pub fn head(&self) -> Pos {
        self.body[0]
    }
}
