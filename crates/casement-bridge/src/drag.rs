//! Interactive window drag sessions.
//!
//! A session follows the pointer: every iteration reads the client-area
//! cursor, compares it with the offset captured at drag start, and shifts
//! the window by the difference. The window position is re-read each time,
//! so once the window catches up the delta drops to zero and nothing is
//! written until the pointer moves again.
//!
//! At most one session is active. `end` cancels it through a
//! [`CancellationToken`] and never waits, so it is safe to call at any
//! time, including when nothing is being dragged. The slot stays taken
//! until the cancelled loop has exited, so two loops never overlap.
//! Session tokens are
//! children of a controller-wide token, so `shutdown` also ends sessions
//! whose start raced with it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::time::Instant;
use tokio_util::sync::CancellationToken;

use casement_common::{
    BridgeError, DragEndReason, Event, EventBus, PointerOffset, SessionId,
};
use casement_config::DragConfig;
use casement_platform::{PlatformResult, WindowSurface};

// =============================================================================
// TYPES
// =============================================================================

/// How a finished session went.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragOutcome {
    pub session: SessionId,
    /// Loop iterations executed.
    pub steps: u64,
    pub reason: DragEndReason,
}

#[derive(Debug)]
struct ActiveDrag {
    session: SessionId,
    cancel: CancellationToken,
}

/// Owns the drag session slot for one window.
pub struct DragController {
    surface: Arc<dyn WindowSurface>,
    config: DragConfig,
    events: EventBus,
    active: Mutex<Option<ActiveDrag>>,
    next_session: AtomicU64,
    shutdown: CancellationToken,
}

/// Clears the active slot when a session's future finishes or is dropped.
struct SessionGuard<'a> {
    controller: &'a DragController,
    session: SessionId,
}

impl Drop for SessionGuard<'_> {
    fn drop(&mut self) {
        let mut active = self.controller.slot();
        if active.as_ref().is_some_and(|a| a.session == self.session) {
            *active = None;
        }
    }
}

// =============================================================================
// SINGLE STEP
// =============================================================================

/// Run one iteration of the follow-the-pointer loop.
///
/// Returns whether the window was moved.
pub fn step(surface: &dyn WindowSurface, anchor: PointerOffset) -> PlatformResult<bool> {
    let cursor = surface.cursor_position()?;
    let (dx, dy) = anchor.delta(cursor);
    if dx == 0 && dy == 0 {
        return Ok(false);
    }
    let position = surface.position()?;
    surface.set_position(position.offset(dx, dy))?;
    Ok(true)
}

async fn pause(interval: Duration) {
    if interval.is_zero() {
        tokio::task::yield_now().await;
    } else {
        tokio::time::sleep(interval).await;
    }
}

// =============================================================================
// CONTROLLER
// =============================================================================

impl DragController {
    pub fn new(surface: Arc<dyn WindowSurface>, config: DragConfig, events: EventBus) -> Self {
        Self {
            surface,
            config,
            events,
            active: Mutex::new(None),
            next_session: AtomicU64::new(1),
            shutdown: CancellationToken::new(),
        }
    }

    /// The session currently being dragged, if any.
    pub fn active_session(&self) -> Option<SessionId> {
        self.slot().as_ref().map(|a| a.session)
    }

    pub fn is_active(&self) -> bool {
        self.active_session().is_some()
    }

    /// Drag the window until [`end`](Self::end) is called or the configured
    /// session limit elapses.
    ///
    /// # Errors
    ///
    /// Returns [`BridgeError::DragInProgress`] if another session is active;
    /// that session keeps running.
    pub async fn begin(&self, anchor: PointerOffset) -> Result<DragOutcome, BridgeError> {
        let (session, cancel) = self.activate()?;
        let _guard = SessionGuard {
            controller: self,
            session,
        };

        tracing::info!(%session, x = anchor.x, y = anchor.y, "drag session started");
        self.events.publish(Event::DragStarted { session, anchor });

        let interval = self.config.poll_interval();
        // A limit too large to represent is no limit.
        let deadline = self
            .config
            .session_limit()
            .and_then(|limit| Instant::now().checked_add(limit));
        let mut steps: u64 = 0;
        let mut failures: u64 = 0;

        let reason = loop {
            if cancel.is_cancelled() {
                break DragEndReason::Released;
            }
            if deadline.is_some_and(|d| Instant::now() >= d) {
                break DragEndReason::TimedOut;
            }

            if let Err(e) = step(self.surface.as_ref(), anchor) {
                failures += 1;
                if failures == 1 {
                    tracing::warn!(%session, error = %e, "drag step failed, continuing");
                } else {
                    tracing::debug!(%session, failures, error = %e, "drag step failed");
                }
            }
            steps += 1;

            tokio::select! {
                biased;
                () = cancel.cancelled() => {}
                () = pause(interval) => {}
            }
        };

        let outcome = DragOutcome {
            session,
            steps,
            reason,
        };
        match reason {
            DragEndReason::Released => {
                tracing::info!(%session, steps, "drag session ended");
            }
            DragEndReason::TimedOut => {
                tracing::warn!(%session, steps, "drag session hit its time limit");
            }
        }
        self.events.publish(Event::DragEnded {
            session,
            steps,
            reason,
        });
        Ok(outcome)
    }

    /// Stop the active session. A no-op when nothing is being dragged.
    ///
    /// Returns the session that was signalled. The session stays active
    /// until its loop notices the cancellation.
    pub fn end(&self) -> Option<SessionId> {
        let slot = self.slot();
        let Some(active) = slot.as_ref() else {
            tracing::debug!("drag end with no active session");
            return None;
        };
        active.cancel.cancel();
        tracing::debug!(session = %active.session, "drag end signalled");
        Some(active.session)
    }

    /// End the active session and every session started from now on.
    ///
    /// Used when the transport closes: a late `onDragStart` returns at
    /// once instead of dragging with nobody left to send `onDragEnd`.
    pub fn shutdown(&self) {
        tracing::debug!("drag controller shut down");
        self.shutdown.cancel();
        self.end();
    }

    pub fn is_shut_down(&self) -> bool {
        self.shutdown.is_cancelled()
    }

    fn activate(&self) -> Result<(SessionId, CancellationToken), BridgeError> {
        let mut active = self.slot();
        if let Some(current) = active.as_ref() {
            tracing::warn!(session = %current.session, "drag start rejected: session already active");
            return Err(BridgeError::DragInProgress);
        }
        let session = SessionId(self.next_session.fetch_add(1, Ordering::Relaxed));
        let cancel = self.shutdown.child_token();
        *active = Some(ActiveDrag {
            session,
            cancel: cancel.clone(),
        });
        Ok((session, cancel))
    }

    fn slot(&self) -> MutexGuard<'_, Option<ActiveDrag>> {
        self.active
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests;
