//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Casement Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[channel]
# name = "casement/window"

[drag]
# poll_interval_ms = 8     # 0-1000, 0 = yield between iterations only
# max_session_secs = 0     # 0-86400, 0 = a drag runs until onDragEnd arrives

[window]
# title = "Casement"
# width = 960              # 1-16384
# height = 640             # 1-16384
# decorations = false

[logging]
# level = "info"           # trace, debug, info, warn, error
"##
}
