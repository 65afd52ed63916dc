use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failure reported by a windowing surface.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlatformError {
    #[error("window error: {0}")]
    Window(String),

    #[error("not supported: {0}")]
    NotSupported(String),
}

/// Failure of a single method-channel request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BridgeError {
    #[error("malformed method call: {0}")]
    MalformedCall(String),

    #[error("invalid arguments for {method}: {reason}")]
    InvalidArguments { method: String, reason: String },

    #[error("a drag session is already active")]
    DragInProgress,

    #[error(transparent)]
    Platform(#[from] PlatformError),
}

impl BridgeError {
    /// Error code carried in the reply envelope.
    pub fn code(&self) -> &'static str {
        match self {
            Self::MalformedCall(_) => "malformed_call",
            Self::InvalidArguments { .. } => "invalid_arguments",
            Self::DragInProgress => "drag_in_progress",
            Self::Platform(PlatformError::Window(_)) => "platform_error",
            Self::Platform(PlatformError::NotSupported(_)) => "not_supported",
        }
    }

    pub fn invalid_arguments(method: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidArguments {
            method: method.into(),
            reason: reason.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CasementError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("webview error: {0}")]
    WebView(String),

    #[error("{0}")]
    Other(String),
}
