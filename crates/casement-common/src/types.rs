use serde::{Deserialize, Serialize};
use std::fmt;

/// A window position in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Shift the point by `(dx, dy)`, saturating at the `i32` bounds.
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// A window size in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// Cursor position relative to the window's client area.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CursorPosition {
    pub x: f64,
    pub y: f64,
}

impl CursorPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Where the pointer sat inside the client area when a drag began.
///
/// Coordinates are truncated toward zero, matching how the drag loop
/// truncates every subsequent cursor reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PointerOffset {
    pub x: i32,
    pub y: i32,
}

impl PointerOffset {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Capture an offset from a fractional cursor reading.
    pub fn from_cursor(cursor: CursorPosition) -> Self {
        Self {
            x: truncate(cursor.x),
            y: truncate(cursor.y),
        }
    }

    /// Delta between a live cursor reading and this anchor.
    pub fn delta(&self, cursor: CursorPosition) -> (i32, i32) {
        (
            truncate(cursor.x).saturating_sub(self.x),
            truncate(cursor.y).saturating_sub(self.y),
        )
    }
}

/// `as` saturates out-of-range floats and maps NaN to zero.
fn truncate(v: f64) -> i32 {
    v.trunc() as i32
}

/// Identifier of a single drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "drag-{}", self.0)
    }
}
