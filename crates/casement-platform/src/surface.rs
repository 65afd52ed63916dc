use casement_common::{CursorPosition, PlatformError, Point, Size};

pub type PlatformResult<T> = Result<T, PlatformError>;

/// A single native window as seen by the method channel.
///
/// Every call is synchronous. Implementations are shared across request
/// tasks, so they must guard their own mutable state; callers never lock.
pub trait WindowSurface: Send + Sync {
    /// Top-left corner of the window in screen coordinates.
    fn position(&self) -> PlatformResult<Point>;

    fn set_position(&self, position: Point) -> PlatformResult<()>;

    /// Size of the client area.
    fn size(&self) -> PlatformResult<Size>;

    fn set_size(&self, size: Size) -> PlatformResult<()>;

    /// Pointer position relative to the client area's top-left corner.
    fn cursor_position(&self) -> PlatformResult<CursorPosition>;

    fn set_cursor_position(&self, position: CursorPosition) -> PlatformResult<()>;

    fn title(&self) -> PlatformResult<String>;

    fn set_title(&self, title: &str) -> PlatformResult<()>;

    fn maximize(&self) -> PlatformResult<()>;

    /// Undo a maximize or an iconify.
    fn restore(&self) -> PlatformResult<()>;

    fn iconify(&self) -> PlatformResult<()>;

    fn focus(&self) -> PlatformResult<()>;

    fn show(&self) -> PlatformResult<()>;

    fn hide(&self) -> PlatformResult<()>;

    /// Ask the host to close the window. The host decides when.
    fn close(&self) -> PlatformResult<()>;
}
