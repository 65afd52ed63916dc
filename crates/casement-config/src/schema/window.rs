//! Host window configuration types.

use serde::{Deserialize, Serialize};

/// Initial appearance of the host window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window title.
    pub title: String,
    /// Initial inner width in logical pixels.
    pub width: u32,
    /// Initial inner height in logical pixels.
    pub height: u32,
    /// Native decorations. Off by default: the shell draws its own
    /// title bar and moves the window through the drag methods.
    pub decorations: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Casement".into(),
            width: 960,
            height: 640,
            decorations: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_borderless() {
        let config = WindowConfig::default();
        assert!(!config.decorations);
        assert_eq!(config.title, "Casement");
    }

    #[test]
    fn window_config_partial_toml() {
        let toml_str = r#"
title = "Editor"
decorations = true
"#;
        let config: WindowConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.title, "Editor");
        assert!(config.decorations);
        assert_eq!(config.width, 960);
        assert_eq!(config.height, 640);
    }
}
