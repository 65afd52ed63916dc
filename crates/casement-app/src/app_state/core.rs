//! CasementApp struct definition and constructor.

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::{broadcast, mpsc};
use winit::window::Window;

use casement_bridge::MethodChannel;
use casement_common::{Event, EventBus};
use casement_config::CasementConfig;
use casement_platform::WinitSurface;
use casement_webview::{WebViewHandle, WebViewManager};

use crate::EVENT_CAPACITY;

/// Top-level application state.
pub struct CasementApp {
    pub(super) config: CasementConfig,
    pub(super) events: EventBus,

    // Windowing
    pub(super) window: Option<Arc<Window>>,
    pub(super) surface: Option<Arc<WinitSurface>>,

    // WebView
    pub(super) webviews: WebViewManager,
    pub(super) webview: Option<WebViewHandle>,

    // Method channel plumbing (served on the runtime)
    pub(super) tokio_runtime: Option<tokio::runtime::Runtime>,
    pub(super) channel: Option<Arc<MethodChannel>>,
    pub(super) frame_tx: Option<mpsc::UnboundedSender<String>>,
    pub(super) reply_rx: Option<mpsc::UnboundedReceiver<String>>,
    pub(super) event_rx: Option<broadcast::Receiver<Event>>,

    // Whether the app should exit
    pub(super) should_exit: bool,
    pub(super) last_poll: Instant,
}

impl CasementApp {
    pub fn new(config: CasementConfig) -> Self {
        Self {
            config,
            events: EventBus::new(EVENT_CAPACITY),
            window: None,
            surface: None,
            webviews: WebViewManager::new(),
            webview: None,
            tokio_runtime: None,
            channel: None,
            frame_tx: None,
            reply_rx: None,
            event_rx: None,
            should_exit: false,
            last_poll: Instant::now(),
        }
    }
}
