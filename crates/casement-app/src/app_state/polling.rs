//! Polling of channel replies and lifecycle events.

use std::time::Instant;

use tokio::sync::broadcast::error::TryRecvError;
use winit::event_loop::{ActiveEventLoop, ControlFlow};

use casement_common::Event;

use super::core::CasementApp;
use super::types::POLL_INTERVAL;

impl CasementApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_replies();
            self.poll_lifecycle_events();
            self.poll_close_request();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Evaluate finished replies back into the page.
    fn poll_replies(&mut self) {
        let Some(ref mut rx) = self.reply_rx else {
            return;
        };
        while let Ok(reply) = rx.try_recv() {
            if let Some(ref webview) = self.webview {
                if let Err(e) = webview.send_reply(&reply) {
                    tracing::warn!(error = %e, "Failed to deliver reply to webview");
                }
            }
        }
    }

    /// Forward lifecycle events to the page; exit on `CloseRequested`.
    fn poll_lifecycle_events(&mut self) {
        let Some(ref mut rx) = self.event_rx else {
            return;
        };
        loop {
            let event = match rx.try_recv() {
                Ok(event) => event,
                Err(TryRecvError::Lagged(n)) => {
                    tracing::debug!(skipped = n, "Lifecycle events lagged");
                    continue;
                }
                Err(TryRecvError::Empty | TryRecvError::Closed) => break,
            };
            if matches!(event, Event::CloseRequested) {
                self.should_exit = true;
            }
            if let Some(ref webview) = self.webview {
                if let Err(e) = webview.send_event(&event) {
                    tracing::warn!(error = %e, "Failed to deliver event to webview");
                }
            }
        }
    }

    fn poll_close_request(&mut self) {
        if self.surface.as_ref().is_some_and(|s| s.take_close_request()) {
            tracing::info!("Close requested over the channel");
            self.should_exit = true;
        }
    }
}
