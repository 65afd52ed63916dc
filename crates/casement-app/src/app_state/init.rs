//! Window creation, channel startup, and webview setup.

use std::sync::Arc;

use tokio::sync::mpsc;
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use casement_platform::WinitSurface;
use casement_webview::{ContentProvider, WebViewConfig};

use super::core::CasementApp;
use super::webview_bridge::window_bounds;

// =============================================================================
// CONSTANTS
// =============================================================================

/// The bundled demo shell, served as `casement://localhost/index.html`.
const DEMO_PAGE: &str = include_str!("../../assets/index.html");

// =============================================================================
// INITIALIZATION
// =============================================================================

impl CasementApp {
    /// Create the window, start the method channel, and build the webview.
    /// Returns `false` if initialization failed and the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let wc = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(wc.title.clone())
            .with_decorations(wc.decorations)
            .with_inner_size(winit::dpi::LogicalSize::new(
                f64::from(wc.width),
                f64::from(wc.height),
            ));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };
        let surface = Arc::new(WinitSurface::new(Arc::clone(&window), wc.title.clone()));

        if !self.start_channel(Arc::clone(&surface)) {
            return false;
        }

        self.initialize_webview(&window);
        if self.webview.is_none() {
            return false;
        }

        self.window = Some(window);
        self.surface = Some(surface);
        tracing::info!("Window created and method channel started");
        true
    }

    /// Spawn the method channel on a fresh runtime.
    fn start_channel(&mut self, surface: Arc<WinitSurface>) -> bool {
        let runtime = match tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .thread_name("casement-channel")
            .build()
        {
            Ok(rt) => rt,
            Err(e) => {
                tracing::error!("Failed to start tokio runtime: {e}");
                return false;
            }
        };

        self.event_rx = Some(self.events.subscribe());
        let channel = crate::build_channel(surface, &self.config, &self.events);
        let (frame_tx, frame_rx) = mpsc::unbounded_channel();
        let (reply_tx, reply_rx) = mpsc::unbounded_channel();
        runtime.spawn(Arc::clone(&channel).serve(frame_rx, reply_tx));

        self.channel = Some(channel);
        self.frame_tx = Some(frame_tx);
        self.reply_rx = Some(reply_rx);
        self.tokio_runtime = Some(runtime);
        true
    }

    /// Build the webview covering the whole window.
    fn initialize_webview(&mut self, window: &winit::window::Window) {
        let mut content = ContentProvider::new();
        content.add("index.html", DEMO_PAGE.as_bytes());
        self.webviews.set_content_provider(content);

        let bounds = window_bounds(window.inner_size());
        match self.webviews.create(window, bounds, WebViewConfig::default()) {
            Ok(handle) => {
                tracing::info!("WebView created");
                self.webview = Some(handle);
            }
            Err(e) => tracing::error!("Failed to create webview: {e}"),
        }
    }
}
