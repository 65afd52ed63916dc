//! Configuration schema types for Casement.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod channel;
mod drag;
mod logging;
mod window;

pub use channel::*;
pub use drag::*;
pub use logging::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Casement.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CasementConfig {
    pub channel: ChannelConfig,
    pub drag: DragConfig,
    pub window: WindowConfig,
    pub logging: LoggingConfig,
}
