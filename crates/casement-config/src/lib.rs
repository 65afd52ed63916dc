//! Casement configuration system.
//!
//! TOML-based configuration for the method channel, the drag loop, the
//! host window, and logging. All sections use serde defaults so partial
//! configs work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use casement_config::{load_config, config_to_json};
//!
//! let config = load_config(None).expect("failed to load config");
//! let json = config_to_json(&config);
//! println!("{json}");
//! ```

pub mod schema;
pub mod toml_loader;
pub mod validation;

pub use schema::{
    CasementConfig, ChannelConfig, DragConfig, LogLevel, LoggingConfig, WindowConfig,
    CONFIG_SCHEMA_VERSION,
};

use std::path::Path;

use casement_common::ConfigError;

/// Load config from an explicit path, or from the platform default path.
///
/// The default path gets a commented config file written on first run.
pub fn load_config(path: Option<&Path>) -> Result<CasementConfig, ConfigError> {
    match path {
        Some(path) => toml_loader::load_from_path(path),
        None => toml_loader::load_default(),
    }
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &CasementConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
