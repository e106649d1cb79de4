//! High score persistence.
//!
//! The record is a single plain-text integer. Loading is infallible by
//! contract: a missing or unreadable record means "no high score yet", which
//! is 0. Saving is best-effort; the session records failures and the runner
//! reports them once the terminal is restored.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Capability interface for persisting the high score across sessions.
pub trait HighScoreStore {
    /// Load the persisted high score; 0 when no record exists.
    fn load(&mut self) -> u32;

    /// Overwrite the persisted high score.
    fn save(&mut self, score: u32) -> io::Result<()>;
}

/// File-backed store: one integer in a text file.
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write never leaves a corrupt record.
pub struct FileHighScoreStore {
    path: PathBuf,
}

impl FileHighScoreStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl HighScoreStore for FileHighScoreStore {
    fn load(&mut self) -> u32 {
        match fs::read_to_string(&self.path) {
            Ok(contents) => contents.trim().parse().unwrap_or(0),
            Err(_) => 0,
        }
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, score.to_string())?;
        fs::rename(&tmp, &self.path)
    }
}

/// In-memory store for tests and headless runs.
#[derive(Debug, Default, Clone)]
pub struct MemoryHighScoreStore {
    score: u32,
}

impl MemoryHighScoreStore {
    pub fn with_score(score: u32) -> Self {
        Self { score }
    }
}

impl HighScoreStore for MemoryHighScoreStore {
    fn load(&mut self) -> u32 {
        self.score
    }

    fn save(&mut self, score: u32) -> io::Result<()> {
        self.score = score;
        Ok(())
    }
}
