//! Windowing surfaces the method channel drives.
//!
//! [`WindowSurface`] is the seam between the bridge and a native window.
//! [`WinitSurface`] wraps a live `winit` window; [`HeadlessSurface`] keeps
//! the same state in memory for tests and the stdio host.

pub mod headless;
pub mod surface;
pub mod winit_surface;

pub use headless::HeadlessSurface;
pub use surface::{PlatformResult, WindowSurface};
pub use winit_surface::WinitSurface;
