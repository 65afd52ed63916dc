//! Method-channel bridge between an application shell and one native window.
//!
//! Request frames arrive as JSON, are decoded into a [`MethodCall`], and
//! routed by [`WindowPlugin`] either to a [`WindowSurface`] call or to the
//! [`DragController`]. [`MethodChannel`] services every frame on its own
//! task so a long-running `onDragStart` never holds up `onDragEnd`.
//!
//! [`WindowSurface`]: casement_platform::WindowSurface

pub mod args;
pub mod channel;
pub mod codec;
pub mod dispatch;
pub mod drag;
pub mod method;

pub use channel::MethodChannel;
pub use codec::{FrameError, MethodCall, MethodReply, ReplyFrame, RequestFrame};
pub use dispatch::WindowPlugin;
pub use drag::{DragController, DragOutcome};
pub use method::WindowMethod;
