//! Bridge between the native window and its webview.
//!
//! Keeps the webview covering the window and routes IPC bodies either to
//! the method channel or into the surface's cursor cache.

mod bounds;
mod ipc_dispatch;

pub(super) use bounds::window_bounds;

use winit::dpi::PhysicalSize;

use super::core::CasementApp;

impl CasementApp {
    /// Resize the webview to the window's new inner size.
    pub(in crate::app_state) fn sync_webview_bounds(&self, size: PhysicalSize<u32>) {
        if let Some(ref webview) = self.webview {
            if let Err(e) = webview.set_bounds(window_bounds(size)) {
                tracing::warn!(error = %e, "Failed to resize webview");
            }
        }
    }
}
