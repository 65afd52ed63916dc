//! WebView shell for the casement window.
//!
//! Wraps the `wry` crate to provide:
//! - One WebView covering the native window
//! - The `window.casement` JS bridge for method-channel calls
//! - A `casement://` custom protocol for bundled pages
//! - Page load, title and IPC events for the host's poll loop

pub mod content;
pub mod events;
pub mod ipc;
pub mod manager;

pub use content::ContentProvider;
pub use events::{PageLoadState, WebViewEvent};
pub use manager::{WebViewConfig, WebViewHandle, WebViewManager};
