//! Input sources for the tick loop.
//!
//! The runtime consumes a finite batch of events once per tick, pre-update.
//! `TerminalInput` drains whatever crossterm has pending without blocking;
//! pacing is the clock's job, not the input source's.

use anyhow::Result;
use arrayvec::ArrayVec;
use crossterm::event::{self, Event, KeyEventKind};
use std::time::Duration;

use crate::types::InputEvent;

pub mod map;

pub use map::map_key_event;

/// Up to this many events are consumed per tick; the rest stay queued.
pub const MAX_EVENTS_PER_TICK: usize = 16;

pub type EventBatch = ArrayVec<InputEvent, MAX_EVENTS_PER_TICK>;

/// Capability interface: produces a finite batch of input events per poll,
/// restartable across ticks.
pub trait InputSource {
    fn poll(&mut self) -> Result<EventBatch>;
}

/// Crossterm-backed input source.
pub struct TerminalInput;

impl TerminalInput {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for TerminalInput {
    fn poll(&mut self) -> Result<EventBatch> {
        let mut batch = EventBatch::new();

        while !batch.is_full() && event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                // Terminals with key-release reporting deliver both edges;
                // only presses (and auto-repeats) steer the snake.
                if key.kind == KeyEventKind::Release {
                    continue;
                }
                if let Some(ev) = map_key_event(key) {
                    batch.push(ev);
                }
            }
        }

        Ok(batch)
    }
}
