//! Graceful shutdown: stop the drag loop, drop the webview, stop the runtime.

use super::core::CasementApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl CasementApp {
    /// Perform graceful shutdown of all subsystems.
    ///
    /// Order matters:
    /// 1. Cancel any drag and close inbound frames
    /// 2. Destroy the webview
    /// 3. Shut down the tokio runtime without waiting on its tasks
    /// 4. Release the window
    ///
    /// A drag step may be parked on a window call that the platform runs
    /// on this thread, so blocking here for in-flight tasks can stall.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        if let Some(channel) = self.channel.take() {
            channel.plugin().drag().shutdown();
        }
        self.frame_tx = None;
        self.reply_rx = None;
        self.event_rx = None;

        self.webview = None;

        if let Some(rt) = self.tokio_runtime.take() {
            rt.shutdown_background();
        }

        self.surface = None;
        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}

// =============================================================================
// TESTS
// =============================================================================
