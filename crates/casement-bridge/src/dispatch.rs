//! Routes decoded method calls to the window surface or the drag controller.

use std::sync::Arc;

use serde_json::{json, Value};

use casement_common::{BridgeError, CursorPosition, Event, EventBus, Point, PointerOffset, Size};
use casement_config::DragConfig;
use casement_platform::WindowSurface;

use crate::args::{decode, CursorArgs, DragStartArgs, PositionArgs, SizeArgs, TitleArgs};
use crate::codec::{MethodCall, MethodReply};
use crate::drag::DragController;
use crate::method::WindowMethod;

/// The window plugin: one surface, one drag controller.
pub struct WindowPlugin {
    surface: Arc<dyn WindowSurface>,
    drag: DragController,
    events: EventBus,
}

impl WindowPlugin {
    pub fn new(surface: Arc<dyn WindowSurface>, drag: DragConfig, events: EventBus) -> Self {
        Self {
            drag: DragController::new(Arc::clone(&surface), drag, events.clone()),
            surface,
            events,
        }
    }

    pub fn drag(&self) -> &DragController {
        &self.drag
    }

    /// Handle one call. Unknown method names get a not-implemented reply.
    pub async fn handle(&self, call: &MethodCall) -> MethodReply {
        let Some(method) = WindowMethod::from_name(&call.method) else {
            tracing::debug!(method = %call.method, "method not implemented");
            return MethodReply::NotImplemented;
        };

        match self.invoke(method, &call.args).await {
            Ok(value) => MethodReply::Success(value),
            Err(e) => {
                tracing::warn!(%method, code = e.code(), error = %e, "method call failed");
                MethodReply::from_error(&e)
            }
        }
    }

    /// Run `method` against the window and return its result value.
    ///
    /// `onDragStart` completes only after the session ends.
    ///
    /// # Errors
    ///
    /// Fails on undecodable arguments, on a rejected drag start, and when
    /// the surface reports an error.
    pub async fn invoke(&self, method: WindowMethod, args: &Value) -> Result<Value, BridgeError> {
        let surface = self.surface.as_ref();

        match method {
            WindowMethod::DragStart => {
                let a: DragStartArgs = decode(method, args)?;
                let anchor = PointerOffset::from_cursor(CursorPosition::new(a.x, a.y));
                self.drag.begin(anchor).await?;
                Ok(Value::Null)
            }
            WindowMethod::DragEnd => {
                self.drag.end();
                Ok(Value::Null)
            }
            WindowMethod::Maximize => done(surface.maximize()),
            WindowMethod::Restore => done(surface.restore()),
            WindowMethod::Iconify => done(surface.iconify()),
            WindowMethod::Focus => done(surface.focus()),
            WindowMethod::Show => done(surface.show()),
            WindowMethod::Hide => done(surface.hide()),
            WindowMethod::Close => {
                surface.close()?;
                self.events.publish(Event::CloseRequested);
                Ok(Value::Null)
            }
            WindowMethod::SetTitle => {
                let a: TitleArgs = decode(method, args)?;
                done(surface.set_title(&a.title))
            }
            WindowMethod::GetTitle => Ok(Value::String(surface.title()?)),
            WindowMethod::GetWidth => Ok(json!(surface.size()?.width)),
            WindowMethod::GetHeight => Ok(json!(surface.size()?.height)),
            WindowMethod::GetSize => {
                let size = surface.size()?;
                Ok(json!({ "width": size.width, "height": size.height }))
            }
            WindowMethod::GetPosition => {
                let p = surface.position()?;
                Ok(json!({ "x": f64::from(p.x), "y": f64::from(p.y) }))
            }
            WindowMethod::GetPositionX => Ok(json!(surface.position()?.x)),
            WindowMethod::GetPositionY => Ok(json!(surface.position()?.y)),
            WindowMethod::GetCursorPosition => {
                let c = surface.cursor_position()?;
                Ok(json!({ "x": c.x, "y": c.y }))
            }
            WindowMethod::SetSize => {
                let a: SizeArgs = decode(method, args)?;
                done(surface.set_size(Size::new(a.width, a.height)))
            }
            WindowMethod::SetPosition => {
                let a: PositionArgs = decode(method, args)?;
                done(surface.set_position(Point::new(a.x, a.y)))
            }
            WindowMethod::SetCursorPosition => {
                let a: CursorArgs = decode(method, args)?;
                done(surface.set_cursor_position(CursorPosition::new(a.x, a.y)))
            }
        }
    }
}

fn done(result: casement_platform::PlatformResult<()>) -> Result<Value, BridgeError> {
    result?;
    Ok(Value::Null)
}
