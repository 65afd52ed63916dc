//! Configuration validation.
//!
//! Checks numeric ranges and required strings, collecting every problem
//! into a single `ConfigError`.

mod helpers;


use crate::schema::CasementConfig;
use casement_common::ConfigError;

use helpers::{validate_non_empty, validate_range};

/// Longest edge accepted for the initial window size.
const MAX_WINDOW_EDGE: u32 = 16_384;

/// Longest drag session limit accepted: one day.
const MAX_SESSION_SECS: u64 = 86_400;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &CasementConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_non_empty(&mut errors, "channel.name", &config.channel.name);
    validate_range(
        &mut errors,
        "drag.poll_interval_ms",
        config.drag.poll_interval_ms,
        0,
        1000,
    );
    validate_range(
        &mut errors,
        "drag.max_session_secs",
        config.drag.max_session_secs,
        0,
        MAX_SESSION_SECS,
    );
    validate_range(
        &mut errors,
        "window.width",
        u64::from(config.window.width),
        1,
        u64::from(MAX_WINDOW_EDGE),
    );
    validate_range(
        &mut errors,
        "window.height",
        u64::from(config.window.height),
        1,
        u64::from(MAX_WINDOW_EDGE),
    );

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
