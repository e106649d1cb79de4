//! Terminal rendering layer.
//!
//! `game_view` is pure and unit-testable; `renderer` owns the raw-mode /
//! alternate-screen lifecycle and flushes framebuffers with crossterm.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
