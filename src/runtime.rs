//! Tick loop wiring: input capture, one update step, render, sleep.
//!
//! The session is mutated exclusively here, on one thread, in tick order.
//! Collaborators are capability interfaces so the loop runs the same way
//! against a terminal or against test stubs.

use std::thread;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::core::{GameSession, SessionSnapshot};
use crate::input::InputSource;
use crate::types::InputEvent;

/// Consumes read-only frames; produces no value the core ever reads.
pub trait Renderer {
    fn draw(&mut self, snapshot: &SessionSnapshot<'_>) -> Result<()>;
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn draw(&mut self, snapshot: &SessionSnapshot<'_>) -> Result<()> {
        (**self).draw(snapshot)
    }
}

/// Paces the loop at a caller-specified rate, blocking until the next tick
/// boundary.
pub trait Clock {
    fn wait(&mut self, ticks_per_second: u32);
}

impl<T: Clock + ?Sized> Clock for &mut T {
    fn wait(&mut self, ticks_per_second: u32) {
        (**self).wait(ticks_per_second)
    }
}

/// Wall-clock based fixed-rate scheduler.
pub struct TickClock {
    last: Instant,
}

impl TickClock {
    pub fn new() -> Self {
        Self {
            last: Instant::now(),
        }
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TickClock {
    fn wait(&mut self, ticks_per_second: u32) {
        let period = Duration::from_secs_f64(1.0 / ticks_per_second.max(1) as f64);
        let next = self.last + period;
        match next.checked_duration_since(Instant::now()) {
            Some(remaining) => {
                thread::sleep(remaining);
                self.last = next;
            }
            // Behind schedule; restart pacing from now rather than
            // bursting to catch up.
            None => self.last = Instant::now(),
        }
    }
}

/// The frame-update loop around one or more consecutive sessions.
pub struct Runtime<R, I, C> {
    renderer: R,
    input: I,
    clock: C,
}

impl<R: Renderer, I: InputSource, C: Clock> Runtime<R, I, C> {
    pub fn new(renderer: R, input: I, clock: C) -> Self {
        Self {
            renderer,
            input,
            clock,
        }
    }

    /// Drive the session until a quit request.
    ///
    /// Each iteration: drain input, apply one update step (unless terminal),
    /// render, sleep until the next tick boundary. Restart requests on the
    /// game-over screen swap in a brand-new session; the finished one is
    /// discarded whole. Returns the final session so the caller can inspect
    /// deferred diagnostics.
    pub fn run(&mut self, mut session: GameSession) -> Result<GameSession> {
        loop {
            let mut restart = false;
            for event in self.input.poll()? {
                match event {
                    InputEvent::Turn(direction) => session.steer(direction),
                    InputEvent::Restart if session.game_over() => restart = true,
                    InputEvent::Restart => {}
                    InputEvent::Quit => return Ok(session),
                }
            }

            if restart {
                session = session.restart()?;
            } else {
                session.update()?;
            }

            self.renderer.draw(&session.snapshot())?;
            self.clock.wait(session.tick_rate());
        }
    }
}
