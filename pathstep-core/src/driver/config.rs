//! Driver Configuration

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Pause between successive events when none is configured.
pub const DEFAULT_DELAY_MS: u64 = 300;

/// Pacing settings for [`AnimationDriver`](super::AnimationDriver).
///
/// Missing fields fall back to their defaults, so `{}` is a valid document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DriverConfig {
    /// Milliseconds to wait between delivering two events. Zero disables
    /// pacing entirely.
    pub delay_ms: u64,
}

impl DriverConfig {
    /// Parse a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// The pause between events.
    pub fn delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            delay_ms: DEFAULT_DELAY_MS,
        }
    }
}
