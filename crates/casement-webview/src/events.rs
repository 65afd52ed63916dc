//! WebView event types.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Events emitted by the WebView, drained by the host each poll.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    PageLoad { state: PageLoadState, url: String },
    /// A request frame posted by `window.casement.invokeMethod`.
    IpcMessage { body: String },
    NavigationRequested { url: String },
}
