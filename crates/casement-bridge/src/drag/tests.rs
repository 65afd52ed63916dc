//! Tests for drag sessions.

use super::*;

use std::sync::atomic::AtomicUsize;

use casement_common::{CursorPosition, PlatformError, Point, Size};
use casement_platform::HeadlessSurface;

const WAIT: Duration = Duration::from_secs(2);

fn fast_config() -> DragConfig {
    DragConfig {
        poll_interval_ms: 1,
        max_session_secs: 0,
    }
}

fn controller_with(surface: Arc<HeadlessSurface>, config: DragConfig) -> Arc<DragController> {
    Arc::new(DragController::new(surface, config, EventBus::new(16)))
}

async fn wait_until(cond: impl Fn() -> bool) {
    tokio::time::timeout(WAIT, async {
        while !cond() {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    })
    .await
    .expect("condition not reached in time");
}

/// Grab the window at client offset (20, 10): pointer at window origin + offset.
fn grab(surface: &HeadlessSurface) -> PointerOffset {
    let origin = surface.position().unwrap();
    surface.move_pointer(f64::from(origin.x) + 20.0, f64::from(origin.y) + 10.0);
    PointerOffset::from_cursor(surface.cursor_position().unwrap())
}

// =============================================================================
// step
// =============================================================================

#[test]
fn step_tracks_pointer_relative_to_start() {
    let surface = HeadlessSurface::new(Point::new(100, 100), Size::new(800, 600));
    let start = surface.position().unwrap();
    let anchor = grab(&surface);
    let p0 = surface.pointer();

    let pointer_path = [(150.0, 130.0), (90.5, 300.2), (400.0, 40.0), (121.0, 111.0)];
    for (x, y) in pointer_path {
        surface.move_pointer(x, y);
        step(&surface, anchor).unwrap();

        let expected = start.offset((x - p0.x).trunc() as i32, (y - p0.y).trunc() as i32);
        assert_eq!(surface.position().unwrap(), expected, "pointer at ({x}, {y})");
    }
}

#[test]
fn step_without_pointer_motion_does_not_move() {
    let surface = HeadlessSurface::new(Point::new(40, 60), Size::new(800, 600));
    let anchor = grab(&surface);

    assert!(!step(&surface, anchor).unwrap());
    assert_eq!(surface.position().unwrap(), Point::new(40, 60));
}

#[test]
fn step_is_idempotent_once_caught_up() {
    let surface = HeadlessSurface::new(Point::new(0, 0), Size::new(800, 600));
    let anchor = grab(&surface);
    surface.move_pointer(70.0, 45.0);

    assert!(step(&surface, anchor).unwrap());
    let caught_up = surface.position().unwrap();
    assert!(!step(&surface, anchor).unwrap());
    assert_eq!(surface.position().unwrap(), caught_up);
    assert_eq!(caught_up, Point::new(50, 35));
}

// =============================================================================
// begin / end
// =============================================================================

#[tokio::test]
async fn end_releases_active_session() {
    let surface = Arc::new(HeadlessSurface::new(Point::new(100, 100), Size::new(800, 600)));
    let controller = controller_with(Arc::clone(&surface), fast_config());
    let anchor = grab(&surface);

    let task = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.begin(anchor).await })
    };
    wait_until(|| controller.is_active()).await;

    surface.move_pointer(420.0, 310.0);
    wait_until(|| surface.position().unwrap() == Point::new(400, 300)).await;

    assert!(controller.end().is_some());
    let outcome = tokio::time::timeout(WAIT, task)
        .await
        .expect("begin did not return after end")
        .unwrap()
        .unwrap();

    assert_eq!(outcome.reason, DragEndReason::Released);
    assert!(outcome.steps > 0);
    assert!(!controller.is_active());
}

#[tokio::test]
async fn end_without_session_is_a_noop() {
    let surface = Arc::new(HeadlessSurface::default());
    let controller = controller_with(surface, fast_config());

    assert_eq!(controller.end(), None);
    assert_eq!(controller.end(), None);
    assert!(!controller.is_active());
}

#[tokio::test]
async fn end_before_begin_does_not_cancel_later_session() {
    let surface = Arc::new(HeadlessSurface::default());
    let controller = controller_with(Arc::clone(&surface), fast_config());
    controller.end();

    let anchor = grab(&surface);
    let task = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.begin(anchor).await })
    };
    wait_until(|| controller.is_active()).await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(!task.is_finished());

    controller.end();
    tokio::time::timeout(WAIT, task).await.unwrap().unwrap().unwrap();
}

#[tokio::test]
async fn yield_only_loop_still_observes_end() {
    let surface = Arc::new(HeadlessSurface::default());
    let config = DragConfig {
        poll_interval_ms: 0,
        max_session_secs: 0,
    };
    let controller = controller_with(Arc::clone(&surface), config);
    let anchor = grab(&surface);

    let task = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.begin(anchor).await })
    };
    wait_until(|| controller.is_active()).await;

    controller.end();
    let outcome = tokio::time::timeout(WAIT, task).await.unwrap().unwrap().unwrap();
    assert_eq!(outcome.reason, DragEndReason::Released);
}

#[tokio::test]
async fn second_begin_is_rejected_while_active() {
    let surface = Arc::new(HeadlessSurface::default());
    let controller = controller_with(Arc::clone(&surface), fast_config());
    let anchor = grab(&surface);

    let first = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.begin(anchor).await })
    };
    wait_until(|| controller.is_active()).await;
    let active = controller.active_session();

    let err = controller.begin(anchor).await.unwrap_err();
    assert_eq!(err, BridgeError::DragInProgress);
    assert_eq!(controller.active_session(), active);

    controller.end();
    let outcome = tokio::time::timeout(WAIT, first).await.unwrap().unwrap().unwrap();
    assert_eq!(Some(outcome.session), active);
}

#[tokio::test]
async fn sessions_get_fresh_ids() {
    let surface = Arc::new(HeadlessSurface::default());
    let controller = controller_with(Arc::clone(&surface), fast_config());
    let anchor = grab(&surface);

    let mut ids = Vec::new();
    for _ in 0..2 {
        let task = {
            let controller = Arc::clone(&controller);
            tokio::spawn(async move { controller.begin(anchor).await })
        };
        wait_until(|| controller.is_active()).await;
        controller.end();
        ids.push(tokio::time::timeout(WAIT, task).await.unwrap().unwrap().unwrap().session);
    }
    assert_ne!(ids[0], ids[1]);
}

#[tokio::test]
async fn aborted_session_frees_the_slot() {
    let surface = Arc::new(HeadlessSurface::default());
    let controller = controller_with(Arc::clone(&surface), fast_config());
    let anchor = grab(&surface);

    let task = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.begin(anchor).await })
    };
    wait_until(|| controller.is_active()).await;

    task.abort();
    assert!(task.await.unwrap_err().is_cancelled());
    assert!(!controller.is_active());
}

#[tokio::test]
async fn shutdown_ends_current_and_later_sessions() {
    let surface = Arc::new(HeadlessSurface::default());
    let controller = controller_with(Arc::clone(&surface), fast_config());
    let anchor = grab(&surface);

    let task = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.begin(anchor).await })
    };
    wait_until(|| controller.is_active()).await;

    controller.shutdown();
    assert!(controller.is_shut_down());
    let outcome = tokio::time::timeout(WAIT, task).await.unwrap().unwrap().unwrap();
    assert_eq!(outcome.reason, DragEndReason::Released);

    let late = tokio::time::timeout(WAIT, controller.begin(anchor))
        .await
        .expect("late session should end at once")
        .unwrap();
    assert_eq!(late.steps, 0);
    assert!(!controller.is_active());
}

#[tokio::test(start_paused = true)]
async fn session_limit_ends_forgotten_drag() {
    let surface = Arc::new(HeadlessSurface::default());
    let config = DragConfig {
        poll_interval_ms: 8,
        max_session_secs: 1,
    };
    let controller = controller_with(Arc::clone(&surface), config);
    let anchor = grab(&surface);

    let outcome = controller.begin(anchor).await.unwrap();
    assert_eq!(outcome.reason, DragEndReason::TimedOut);
    // Roughly one second of 8 ms iterations.
    assert!(outcome.steps >= 100, "steps = {}", outcome.steps);
    assert!(!controller.is_active());
}

#[tokio::test]
async fn slot_stays_taken_until_cancelled_loop_exits() {
    let surface = Arc::new(HeadlessSurface::default());
    let controller = controller_with(Arc::clone(&surface), fast_config());
    let anchor = grab(&surface);

    let first = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.begin(anchor).await })
    };
    wait_until(|| controller.is_active()).await;
    let session = controller.active_session();

    // The first loop has not run since the cancel, so it is still live.
    assert_eq!(controller.end(), session);
    assert_eq!(controller.active_session(), session);
    assert_eq!(
        controller.begin(anchor).await.unwrap_err(),
        BridgeError::DragInProgress
    );

    tokio::time::timeout(WAIT, first).await.unwrap().unwrap().unwrap();
    assert!(!controller.is_active());

    let second = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.begin(anchor).await })
    };
    wait_until(|| controller.is_active()).await;
    assert_ne!(controller.active_session(), session);
    controller.end();
    tokio::time::timeout(WAIT, second).await.unwrap().unwrap().unwrap();
}

#[tokio::test]
async fn huge_session_limit_is_unbounded() {
    let surface = Arc::new(HeadlessSurface::default());
    let config = DragConfig {
        poll_interval_ms: 1,
        max_session_secs: u64::MAX / 2,
    };
    let controller = controller_with(Arc::clone(&surface), config);
    let anchor = grab(&surface);

    let task = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.begin(anchor).await })
    };
    wait_until(|| controller.is_active()).await;
    tokio::time::sleep(Duration::from_millis(10)).await;
    assert!(!task.is_finished());

    controller.end();
    let outcome = tokio::time::timeout(WAIT, task).await.unwrap().unwrap().unwrap();
    assert_eq!(outcome.reason, DragEndReason::Released);
}

#[tokio::test]
async fn lifecycle_events_are_published() {
    let surface = Arc::new(HeadlessSurface::default());
    let bus = EventBus::new(16);
    let mut rx = bus.subscribe();
    let controller = Arc::new(DragController::new(
        Arc::clone(&surface) as Arc<dyn WindowSurface>,
        fast_config(),
        bus,
    ));
    let anchor = grab(&surface);

    let task = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.begin(anchor).await })
    };

    let started = rx.recv().await.unwrap();
    let Event::DragStarted { session, anchor: a } = started else {
        panic!("expected DragStarted, got {started:?}");
    };
    assert_eq!(a, anchor);

    controller.end();
    let outcome = tokio::time::timeout(WAIT, task).await.unwrap().unwrap().unwrap();

    let ended = rx.recv().await.unwrap();
    assert!(matches!(
        ended,
        Event::DragEnded { session: s, steps, reason: DragEndReason::Released }
            if s == session && steps == outcome.steps
    ));
}

// =============================================================================
// surface failures
// =============================================================================

/// Fails the first `failures` cursor reads, then behaves like the inner surface.
struct FlakySurface {
    inner: HeadlessSurface,
    failures: AtomicUsize,
}

impl WindowSurface for FlakySurface {
    fn position(&self) -> PlatformResult<Point> {
        self.inner.position()
    }
    fn set_position(&self, position: Point) -> PlatformResult<()> {
        self.inner.set_position(position)
    }
    fn size(&self) -> PlatformResult<Size> {
        self.inner.size()
    }
    fn set_size(&self, size: Size) -> PlatformResult<()> {
        self.inner.set_size(size)
    }
    fn cursor_position(&self) -> PlatformResult<CursorPosition> {
        let left = self.failures.load(Ordering::SeqCst);
        if left > 0 {
            self.failures.store(left - 1, Ordering::SeqCst);
            return Err(PlatformError::Window("cursor unavailable".into()));
        }
        self.inner.cursor_position()
    }
    fn set_cursor_position(&self, position: CursorPosition) -> PlatformResult<()> {
        self.inner.set_cursor_position(position)
    }
    fn title(&self) -> PlatformResult<String> {
        self.inner.title()
    }
    fn set_title(&self, title: &str) -> PlatformResult<()> {
        self.inner.set_title(title)
    }
    fn maximize(&self) -> PlatformResult<()> {
        self.inner.maximize()
    }
    fn restore(&self) -> PlatformResult<()> {
        self.inner.restore()
    }
    fn iconify(&self) -> PlatformResult<()> {
        self.inner.iconify()
    }
    fn focus(&self) -> PlatformResult<()> {
        self.inner.focus()
    }
    fn show(&self) -> PlatformResult<()> {
        self.inner.show()
    }
    fn hide(&self) -> PlatformResult<()> {
        self.inner.hide()
    }
    fn close(&self) -> PlatformResult<()> {
        self.inner.close()
    }
}

#[tokio::test]
async fn failed_steps_are_skipped_not_fatal() {
    let surface = Arc::new(FlakySurface {
        inner: HeadlessSurface::new(Point::new(0, 0), Size::new(800, 600)),
        failures: AtomicUsize::new(5),
    });
    let anchor = grab(&surface.inner);
    surface.inner.move_pointer(220.0, 110.0);

    let controller = Arc::new(DragController::new(
        Arc::clone(&surface) as Arc<dyn WindowSurface>,
        fast_config(),
        EventBus::new(16),
    ));
    let task = {
        let controller = Arc::clone(&controller);
        tokio::spawn(async move { controller.begin(anchor).await })
    };

    wait_until(|| surface.inner.position().unwrap() == Point::new(200, 100)).await;
    assert_eq!(surface.failures.load(Ordering::SeqCst), 0);

    controller.end();
    let outcome = tokio::time::timeout(WAIT, task).await.unwrap().unwrap().unwrap();
    assert!(outcome.steps > 5);
}
