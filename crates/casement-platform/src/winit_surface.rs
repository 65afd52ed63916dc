//! Window surface backed by a live `winit` window.
//!
//! winit cannot query the pointer or (on every platform) read back the
//! title, so both are cached here: the host feeds `CursorMoved` positions
//! through [`WinitSurface::record_cursor`], and `set_title` stores what it
//! sets. Closing only raises a flag the event loop polls.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use winit::dpi::{PhysicalPosition, PhysicalSize};
use winit::error::ExternalError;
use winit::window::Window;

use casement_common::{CursorPosition, PlatformError, Point, Size};

use crate::surface::{PlatformResult, WindowSurface};

pub struct WinitSurface {
    window: Arc<Window>,
    cursor: Mutex<CursorPosition>,
    title: Mutex<String>,
    close_requested: AtomicBool,
}

impl WinitSurface {
    pub fn new(window: Arc<Window>, title: impl Into<String>) -> Self {
        Self {
            window,
            cursor: Mutex::new(CursorPosition::default()),
            title: Mutex::new(title.into()),
            close_requested: AtomicBool::new(false),
        }
    }

    /// Record the latest client-area cursor position from a `CursorMoved` event.
    pub fn record_cursor(&self, position: PhysicalPosition<f64>) {
        *lock(&self.cursor) = CursorPosition::new(position.x, position.y);
    }

    /// Returns `true` once after `close` was requested.
    pub fn take_close_request(&self) -> bool {
        self.close_requested.swap(false, Ordering::AcqRel)
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

fn map_external(op: &str, err: ExternalError) -> PlatformError {
    match err {
        ExternalError::NotSupported(_) => PlatformError::NotSupported(op.to_string()),
        other => PlatformError::Window(format!("{op}: {other}")),
    }
}

fn clamp_dimension(v: i32) -> u32 {
    u32::try_from(v).unwrap_or(0)
}

fn to_i32(v: u32) -> i32 {
    i32::try_from(v).unwrap_or(i32::MAX)
}

impl WindowSurface for WinitSurface {
    fn position(&self) -> PlatformResult<Point> {
        self.window
            .outer_position()
            .map(|p| Point::new(p.x, p.y))
            .map_err(|_| PlatformError::NotSupported("window position".into()))
    }

    fn set_position(&self, position: Point) -> PlatformResult<()> {
        self.window
            .set_outer_position(PhysicalPosition::new(position.x, position.y));
        Ok(())
    }

    fn size(&self) -> PlatformResult<Size> {
        let size = self.window.inner_size();
        Ok(Size::new(to_i32(size.width), to_i32(size.height)))
    }

    fn set_size(&self, size: Size) -> PlatformResult<()> {
        if size.width <= 0 || size.height <= 0 {
            return Err(PlatformError::Window(format!(
                "invalid window size {}x{}",
                size.width, size.height
            )));
        }
        // The platform may apply the size later; the next Resized event
        // carries the final value.
        let _ = self.window.request_inner_size(PhysicalSize::new(
            clamp_dimension(size.width),
            clamp_dimension(size.height),
        ));
        Ok(())
    }

    fn cursor_position(&self) -> PlatformResult<CursorPosition> {
        Ok(*lock(&self.cursor))
    }

    fn set_cursor_position(&self, position: CursorPosition) -> PlatformResult<()> {
        self.window
            .set_cursor_position(PhysicalPosition::new(position.x, position.y))
            .map_err(|e| map_external("cursor position", e))?;
        *lock(&self.cursor) = position;
        Ok(())
    }

    fn title(&self) -> PlatformResult<String> {
        Ok(lock(&self.title).clone())
    }

    fn set_title(&self, title: &str) -> PlatformResult<()> {
        self.window.set_title(title);
        *lock(&self.title) = title.to_string();
        Ok(())
    }

    fn maximize(&self) -> PlatformResult<()> {
        self.window.set_maximized(true);
        Ok(())
    }

    fn restore(&self) -> PlatformResult<()> {
        if self.window.is_minimized() == Some(true) {
            self.window.set_minimized(false);
        } else {
            self.window.set_maximized(false);
        }
        Ok(())
    }

    fn iconify(&self) -> PlatformResult<()> {
        self.window.set_minimized(true);
        Ok(())
    }

    fn focus(&self) -> PlatformResult<()> {
        self.window.focus_window();
        Ok(())
    }

    fn show(&self) -> PlatformResult<()> {
        self.window.set_visible(true);
        Ok(())
    }

    fn hide(&self) -> PlatformResult<()> {
        self.window.set_visible(false);
        Ok(())
    }

    fn close(&self) -> PlatformResult<()> {
        tracing::debug!("window close requested");
        self.close_requested.store(true, Ordering::Release);
        Ok(())
    }
}
