//! Terminal snake.
//!
//! The simulation lives in [`core`] and is pure and deterministic; [`term`],
//! [`input`], [`store`] and [`runtime`] wrap it with the terminal front-end,
//! keyboard input, high-score persistence and the tick loop.

pub mod core;
pub mod input;
pub mod runtime;
pub mod store;
pub mod term;
pub mod types;
