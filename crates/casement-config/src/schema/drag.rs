//! Drag session configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Drag loop pacing and limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DragConfig {
    /// Delay between loop iterations in milliseconds (valid range: 0-1000).
    /// `0` only yields to the scheduler between iterations.
    pub poll_interval_ms: u64,
    /// Upper bound on a single session in seconds (valid range: 0-86400).
    /// `0` means unbounded.
    pub max_session_secs: u64,
}

impl Default for DragConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 8,
            max_session_secs: 0,
        }
    }
}

impl DragConfig {
    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.poll_interval_ms)
    }

    pub fn session_limit(&self) -> Option<Duration> {
        (self.max_session_secs > 0).then(|| Duration::from_secs(self.max_session_secs))
    }
}
