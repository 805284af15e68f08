//! Host-facing configuration
//!
//! The typed, validated form of the knobs the host exposes (ball count and
//! tick rate). Zero for either would mean an empty simulation or a degenerate
//! timer interval, so both clamp to 1 instead of being trusted.

use std::fs;
use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_BALL_COUNT, DEFAULT_FPS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Number of balls spawned on the next reset
    pub ball_count: u32,
    /// Tick rate hint for the host's timer (ticks per second)
    pub fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_count: DEFAULT_BALL_COUNT,
            fps: DEFAULT_FPS,
        }
    }
}

impl Settings {
    pub fn new(ball_count: u32, fps: u32) -> Self {
        Self { ball_count, fps }.clamped()
    }

    /// Clamp both knobs to safe minimums.
    pub fn clamped(self) -> Self {
        Self {
            ball_count: self.ball_count.max(1),
            fps: self.fps.max(1),
        }
    }

    /// Interval for the host's one-shot tick timer.
    pub fn tick_interval_ms(&self) -> u32 {
        1000 / self.fps.max(1)
    }

    /// Load settings from a JSON file, falling back to defaults when the file
    /// is missing or unreadable. Loaded values are clamped.
    pub fn load_or_default(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str::<Self>(&json) {
                Ok(settings) => {
                    log::info!("loaded settings from {}", path.display());
                    settings.clamped()
                }
                Err(err) => {
                    log::warn!("ignoring malformed settings {}: {}", path.display(), err);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("no settings at {}, using defaults", path.display());
                Self::default()
            }
        }
    }

    /// Save settings as JSON.
    pub fn save(&self, path: &Path) -> io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(io::Error::other)?;
        fs::write(path, json)?;
        log::info!("settings saved to {}", path.display());
        Ok(())
    }
}
