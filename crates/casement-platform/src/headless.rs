//! In-memory window surface.
//!
//! Models one window on a fixed-size screen together with a screen-space
//! pointer. The cursor position it reports is relative to the window, so
//! moving the window under a still pointer changes the reported cursor
//! exactly the way a real client-area cursor reading does.

use std::sync::{Mutex, MutexGuard};

use casement_common::{CursorPosition, PlatformError, Point, Size};

use crate::surface::{PlatformResult, WindowSurface};

const DEFAULT_SCREEN: Size = Size {
    width: 1920,
    height: 1080,
};

#[derive(Debug, Clone)]
struct HeadlessState {
    screen: Size,
    position: Point,
    size: Size,
    /// Pointer in screen coordinates.
    pointer: CursorPosition,
    title: String,
    visible: bool,
    focused: bool,
    minimized: bool,
    /// Geometry to return to when leaving the maximized state.
    restore_to: Option<(Point, Size)>,
    close_requested: bool,
}

/// A window that exists only in memory.
#[derive(Debug)]
pub struct HeadlessSurface {
    state: Mutex<HeadlessState>,
}

impl HeadlessSurface {
    /// Create a visible window at `position` with the given client size.
    pub fn new(position: Point, size: Size) -> Self {
        Self::with_screen(DEFAULT_SCREEN, position, size)
    }

    /// Same as [`HeadlessSurface::new`] on a screen of a custom size,
    /// which bounds what `maximize` produces.
    pub fn with_screen(screen: Size, position: Point, size: Size) -> Self {
        Self {
            state: Mutex::new(HeadlessState {
                screen,
                position,
                size,
                pointer: CursorPosition::new(f64::from(position.x), f64::from(position.y)),
                title: String::new(),
                visible: true,
                focused: true,
                minimized: false,
                restore_to: None,
                close_requested: false,
            }),
        }
    }

    /// Move the pointer to a screen position, as the user's mouse would.
    pub fn move_pointer(&self, x: f64, y: f64) {
        self.lock().pointer = CursorPosition::new(x, y);
    }

    /// Pointer in screen coordinates.
    pub fn pointer(&self) -> CursorPosition {
        self.lock().pointer
    }

    pub fn is_visible(&self) -> bool {
        self.lock().visible
    }

    pub fn is_focused(&self) -> bool {
        self.lock().focused
    }

    pub fn is_minimized(&self) -> bool {
        self.lock().minimized
    }

    pub fn is_maximized(&self) -> bool {
        self.lock().restore_to.is_some()
    }

    pub fn close_requested(&self) -> bool {
        self.lock().close_requested
    }

    fn lock(&self) -> MutexGuard<'_, HeadlessState> {
        // State stays consistent even if a holder panicked mid-update:
        // every mutation is a plain field store.
        self.state.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for HeadlessSurface {
    fn default() -> Self {
        Self::new(Point::new(100, 100), Size::new(800, 600))
    }
}

impl WindowSurface for HeadlessSurface {
    fn position(&self) -> PlatformResult<Point> {
        Ok(self.lock().position)
    }

    fn set_position(&self, position: Point) -> PlatformResult<()> {
        self.lock().position = position;
        Ok(())
    }

    fn size(&self) -> PlatformResult<Size> {
        Ok(self.lock().size)
    }

    fn set_size(&self, size: Size) -> PlatformResult<()> {
        if size.width <= 0 || size.height <= 0 {
            return Err(PlatformError::Window(format!(
                "invalid window size {}x{}",
                size.width, size.height
            )));
        }
        self.lock().size = size;
        Ok(())
    }

    fn cursor_position(&self) -> PlatformResult<CursorPosition> {
        let state = self.lock();
        Ok(CursorPosition::new(
            state.pointer.x - f64::from(state.position.x),
            state.pointer.y - f64::from(state.position.y),
        ))
    }

    fn set_cursor_position(&self, position: CursorPosition) -> PlatformResult<()> {
        let mut state = self.lock();
        state.pointer = CursorPosition::new(
            f64::from(state.position.x) + position.x,
            f64::from(state.position.y) + position.y,
        );
        Ok(())
    }

    fn title(&self) -> PlatformResult<String> {
        Ok(self.lock().title.clone())
    }

    fn set_title(&self, title: &str) -> PlatformResult<()> {
        self.lock().title = title.to_string();
        Ok(())
    }

    fn maximize(&self) -> PlatformResult<()> {
        let mut state = self.lock();
        if state.restore_to.is_none() {
            state.restore_to = Some((state.position, state.size));
        }
        state.minimized = false;
        state.position = Point::new(0, 0);
        state.size = state.screen;
        Ok(())
    }

    fn restore(&self) -> PlatformResult<()> {
        let mut state = self.lock();
        if state.minimized {
            state.minimized = false;
        } else if let Some((position, size)) = state.restore_to.take() {
            state.position = position;
            state.size = size;
        }
        Ok(())
    }

    fn iconify(&self) -> PlatformResult<()> {
        let mut state = self.lock();
        state.minimized = true;
        state.focused = false;
        Ok(())
    }

    fn focus(&self) -> PlatformResult<()> {
        let mut state = self.lock();
        if state.visible && !state.minimized {
            state.focused = true;
        }
        Ok(())
    }

    fn show(&self) -> PlatformResult<()> {
        self.lock().visible = true;
        Ok(())
    }

    fn hide(&self) -> PlatformResult<()> {
        let mut state = self.lock();
        state.visible = false;
        state.focused = false;
        Ok(())
    }

    fn close(&self) -> PlatformResult<()> {
        self.lock().close_requested = true;
        Ok(())
    }
}
