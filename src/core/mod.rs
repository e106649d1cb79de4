//! Core module - pure game logic with no I/O dependencies
//!
//! Everything here is deterministic: the same configuration and seed produce
//! the same session. Rendering, input, pacing and persistence live behind
//! the capability interfaces wired up in `runtime`.

pub mod config;
pub mod food;
pub mod obstacles;
pub mod rng;
pub mod session;
pub mod snake;
pub mod snapshot;

// Re-export commonly used types
pub use config::{ConfigError, GameConfig};
pub use food::FoodSpawner;
pub use obstacles::ObstacleField;
pub use rng::SimpleRng;
pub use session::GameSession;
pub use snake::Snake;
pub use snapshot::SessionSnapshot;
