use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use crate::types::{PointerOffset, SessionId};

/// Why a drag session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragEndReason {
    /// `onDragEnd` was received.
    Released,
    /// The configured session limit elapsed first.
    TimedOut,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum Event {
    DragStarted {
        session: SessionId,
        anchor: PointerOffset,
    },
    DragEnded {
        session: SessionId,
        steps: u64,
        reason: DragEndReason,
    },
    CloseRequested,
}

#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: Event) -> usize {
        self.sender.send(event).unwrap_or(0)
    }
}
