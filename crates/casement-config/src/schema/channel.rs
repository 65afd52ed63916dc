//! Method channel configuration.

use serde::{Deserialize, Serialize};

/// Default name the window channel is registered under.
pub const DEFAULT_CHANNEL_NAME: &str = "casement/window";

/// Method channel settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelConfig {
    /// Name the shell uses to address the window channel.
    pub name: String,
}

impl Default for ChannelConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_CHANNEL_NAME.into(),
        }
    }
}
