//! Routing of webview events to the method channel.

use winit::dpi::PhysicalPosition;

use casement_webview::ipc::parse_pointer_report;
use casement_webview::WebViewEvent;

use crate::app_state::core::CasementApp;

/// Where an IPC body goes.
#[derive(Debug, PartialEq)]
pub(super) enum IpcRoute {
    /// A cursor reading for the drag loop.
    Pointer(PhysicalPosition<f64>),
    /// A request frame for the method channel.
    Frame(String),
}

pub(super) fn route(body: String) -> IpcRoute {
    match parse_pointer_report(&body) {
        Some((x, y)) => IpcRoute::Pointer(PhysicalPosition::new(x, y)),
        None => IpcRoute::Frame(body),
    }
}

impl CasementApp {
    /// Drain webview events: forward frames, record pointer reports.
    pub(in crate::app_state) fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            match event {
                WebViewEvent::IpcMessage { body } => match route(body) {
                    IpcRoute::Pointer(position) => {
                        if let Some(ref surface) = self.surface {
                            surface.record_cursor(position);
                        }
                    }
                    IpcRoute::Frame(frame) => self.send_frame(frame),
                },
                WebViewEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, url = %url, "Page load");
                }
                WebViewEvent::NavigationRequested { url } => {
                    tracing::debug!(url = %url, "Navigation");
                }
            }
        }
    }

    fn send_frame(&self, frame: String) {
        let Some(ref tx) = self.frame_tx else {
            tracing::debug!("Frame dropped: channel closed");
            return;
        };
        if tx.send(frame).is_err() {
            tracing::warn!("Frame dropped: channel task gone");
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
