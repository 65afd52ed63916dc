pub mod errors;
pub mod events;
pub mod types;

pub use errors::{BridgeError, CasementError, ConfigError, PlatformError};
pub use events::{DragEndReason, Event, EventBus};
pub use types::{CursorPosition, Point, PointerOffset, SessionId, Size};

pub type Result<T> = std::result::Result<T, CasementError>;
