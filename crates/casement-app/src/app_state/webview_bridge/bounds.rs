//! Window size to wry rect conversion.

use winit::dpi::PhysicalSize;

/// The wry rect covering a window's whole client area.
pub fn window_bounds(size: PhysicalSize<u32>) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}

// =============================================================================
// TESTS
// =============================================================================
