//! Frame-level transport for the window plugin.

use std::sync::Arc;

use tokio::sync::mpsc;

use casement_common::BridgeError;

use crate::codec::{decode_request, MethodReply, ReplyFrame};
use crate::dispatch::WindowPlugin;

/// A named channel carrying request frames to one [`WindowPlugin`].
pub struct MethodChannel {
    name: String,
    plugin: Arc<WindowPlugin>,
}

impl MethodChannel {
    pub fn new(name: impl Into<String>, plugin: Arc<WindowPlugin>) -> Self {
        Self {
            name: name.into(),
            plugin,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plugin(&self) -> &Arc<WindowPlugin> {
        &self.plugin
    }

    /// Decode one raw frame, run it, and encode the reply.
    ///
    /// Returns `None` for a frame that cannot be answered because no
    /// request id could be recovered from it.
    pub async fn handle_frame(&self, raw: &str) -> Option<String> {
        let frame = match decode_request(raw) {
            Ok(frame) => frame,
            Err(e) => {
                let Some(id) = e.id else {
                    tracing::warn!(channel = %self.name, error = %e.error, "dropping malformed frame");
                    return None;
                };
                tracing::warn!(channel = %self.name, id, error = %e.error, "malformed call");
                return Some(error_reply(id, &e.error));
            }
        };

        tracing::trace!(channel = %self.name, id = frame.id, method = %frame.call.method, "call");
        let reply = self.plugin.handle(&frame.call).await;
        Some(ReplyFrame::new(frame.id, &reply).to_json())
    }

    /// Service frames until `frames` closes.
    ///
    /// Each frame runs on its own task, so replies may go out in a
    /// different order than their calls arrived. When the inbound side
    /// closes the drag controller is shut down, so a pending or late
    /// `onDragStart` still gets its reply.
    pub async fn serve(
        self: Arc<Self>,
        mut frames: mpsc::UnboundedReceiver<String>,
        replies: mpsc::UnboundedSender<String>,
    ) {
        tracing::info!(channel = %self.name, "method channel serving");

        while let Some(raw) = frames.recv().await {
            let channel = Arc::clone(&self);
            let replies = replies.clone();
            tokio::spawn(async move {
                if let Some(reply) = channel.handle_frame(&raw).await {
                    if replies.send(reply).is_err() {
                        tracing::debug!(channel = %channel.name, "reply receiver gone");
                    }
                }
            });
        }

        self.plugin.drag().shutdown();
        tracing::info!(channel = %self.name, "method channel closed");
    }
}

fn error_reply(id: u64, error: &BridgeError) -> String {
    ReplyFrame::new(id, &MethodReply::from_error(error)).to_json()
}
