use casement_common::Event;
use wry::WebView;

use crate::ipc::{js_dispatch_event, js_resolve_reply};

/// Handle to the casement WebView.
pub struct WebViewHandle {
    pub(super) webview: WebView,
}

impl WebViewHandle {
    /// Settle the page's pending `invokeMethod` Promise for this reply frame.
    pub fn send_reply(&self, frame_json: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&js_resolve_reply(frame_json))
    }

    /// Notify the page's `onEvent` listeners.
    pub fn send_event(&self, event: &Event) -> Result<(), wry::Error> {
        self.webview.evaluate_script(&js_dispatch_event(event))
    }

    /// Set the WebView bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }
}
