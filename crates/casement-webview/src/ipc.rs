//! IPC between the page and the method channel.
//!
//! - **JS -> Rust**: `window.casement.invokeMethod(method, args)` posts a
//!   request frame through `window.ipc.postMessage`, which reaches the
//!   `ipc_handler` registered on the WebView. It returns a Promise.
//! - **Rust -> JS**: the host evaluates [`js_resolve_reply`] to settle that
//!   Promise, and [`js_dispatch_event`] to notify `onEvent` listeners.
//!
//! The page also posts `{"pointer": [x, y]}` in physical pixels while a
//! mouse button is held.
//! A child WebView swallows mouse input, so these reports are the only
//! cursor readings the native window gets during a drag.

use serde::Deserialize;

use casement_common::Event;

/// Installs `window.casement` in every page the WebView loads.
///
/// Promises resolve with the success value and reject with
/// `{code, message, details}`; an unknown method rejects with code
/// `not_implemented`.
pub const IPC_INIT_SCRIPT: &str = r#"
(function() {
    if (window.casement) return;
    var pending = {};
    var nextId = 1;
    var listeners = [];
    window.casement = {
        invokeMethod: function(method, args) {
            var id = nextId++;
            return new Promise(function(resolve, reject) {
                pending[id] = { resolve: resolve, reject: reject };
                window.ipc.postMessage(JSON.stringify({
                    id: id,
                    method: method,
                    args: args === undefined ? null : args
                }));
            });
        },
        onEvent: function(callback) {
            listeners.push(callback);
        },
        _resolve: function(frame) {
            var p = pending[frame.id];
            if (!p) return;
            delete pending[frame.id];
            var reply = frame.reply;
            if (reply === null) {
                p.reject({ code: 'not_implemented', message: 'method not implemented', details: null });
            } else if (reply.length === 1) {
                p.resolve(reply[0]);
            } else {
                p.reject({ code: reply[0], message: reply[1], details: reply[2] });
            }
        },
        _emit: function(event) {
            listeners.forEach(function(cb) {
                try { cb(event); } catch (e) { console.error(e); }
            });
        }
    };
    window.addEventListener('mousemove', function(e) {
        if (e.buttons === 0) return;
        var dpr = window.devicePixelRatio || 1;
        window.ipc.postMessage(JSON.stringify({ pointer: [e.clientX * dpr, e.clientY * dpr] }));
    }, true);
})();
"#;

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PointerReport {
    pointer: [f64; 2],
}

/// Client-area pointer position (physical pixels) if `body` is a pointer report.
pub fn parse_pointer_report(body: &str) -> Option<(f64, f64)> {
    serde_json::from_str::<PointerReport>(body)
        .ok()
        .map(|r| (r.pointer[0], r.pointer[1]))
}

/// Script that hands a reply frame (already JSON) to the waiting Promise.
pub fn js_resolve_reply(frame_json: &str) -> String {
    format!("window.casement._resolve({frame_json});")
}

/// Script that delivers `event` to the page's `onEvent` listeners.
pub fn js_dispatch_event(event: &Event) -> String {
    let payload = serde_json::to_string(event).unwrap_or_else(|_| "null".to_string());
    format!("window.casement._emit({payload});")
}

#[cfg(test)]
mod tests {
    use super::*;
    use casement_common::{DragEndReason, SessionId};

    #[test]
    fn init_script_defines_bridge() {
        assert!(IPC_INIT_SCRIPT.contains("window.casement = {"));
        assert!(IPC_INIT_SCRIPT.contains("invokeMethod"));
        assert!(IPC_INIT_SCRIPT.contains("window.ipc.postMessage"));
        assert!(IPC_INIT_SCRIPT.contains("_resolve"));
        assert!(IPC_INIT_SCRIPT.contains("onEvent"));
    }

    #[test]
    fn pointer_reports_are_recognised() {
        assert_eq!(parse_pointer_report(r#"{"pointer":[12.5,40]}"#), Some((12.5, 40.0)));
    }

    #[test]
    fn request_frames_are_not_pointer_reports() {
        assert_eq!(parse_pointer_report(r#"{"id":1,"method":"show"}"#), None);
        assert_eq!(parse_pointer_report(r#"{"pointer":[1,2],"id":3}"#), None);
        assert_eq!(parse_pointer_report(r#"{"pointer":"x"}"#), None);
    }

    #[test]
    fn reply_script_passes_frame_verbatim() {
        let script = js_resolve_reply(r#"{"id":4,"reply":[null]}"#);
        assert_eq!(script, r#"window.casement._resolve({"id":4,"reply":[null]});"#);
    }

    #[test]
    fn event_script_serializes_event() {
        let script = js_dispatch_event(&Event::DragEnded {
            session: SessionId(2),
            steps: 40,
            reason: DragEndReason::Released,
        });
        assert!(script.starts_with("window.casement._emit({"));
        assert!(script.contains(r#""type":"DragEnded""#));
        assert!(script.contains(r#""reason":"released""#));
    }

    #[test]
    fn close_event_script() {
        assert_eq!(
            js_dispatch_event(&Event::CloseRequested),
            r#"window.casement._emit({"type":"CloseRequested"});"#
        );
    }
}
