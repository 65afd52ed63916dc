use std::borrow::Cow;
use std::sync::Arc;

use tracing::{debug, warn};
use wry::http::{Response, StatusCode};
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{ContentProvider, SCHEME};
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::WebViewHandle;
use super::types::WebViewConfig;
use super::WebViewManager;

impl WebViewManager {
    /// Create the WebView as a child of `window`, positioned at `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<WebViewHandle, wry::Error> {
        let events = &self.events;

        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_focused(true)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(events));
        builder = Self::attach_navigation_handler(builder, Arc::clone(events));
        builder = self.attach_custom_protocol(builder);

        let webview = builder.with_url(&config.url).build_as_child(window)?;

        debug!(url = %config.url, "WebView created");

        Ok(WebViewHandle { webview })
    }

    /// Set the content provider for serving bundled assets via `casement://`.
    pub fn set_content_provider(&mut self, provider: ContentProvider) {
        self.content_provider = Some(Arc::new(provider));
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some(provider) = &self.content_provider else {
            return builder;
        };
        let cp = Arc::clone(provider);
        builder.with_custom_protocol(SCHEME.to_string(), move |_wv_id, request| {
            let uri = request.uri().to_string();
            let path = ContentProvider::request_path(&uri);

            let response = match cp.resolve(path) {
                Some((mime, data)) => Response::builder()
                    .status(StatusCode::OK)
                    .header("Content-Type", mime)
                    .body(Cow::Owned(data.to_vec())),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    Response::builder()
                        .status(StatusCode::NOT_FOUND)
                        .body(Cow::Borrowed(b"Not Found".as_slice()))
                }
            };
            response.unwrap_or_else(|e| {
                warn!(error = %e, "custom protocol: bad response");
                Response::new(Cow::Borrowed(b"".as_slice()))
            })
        })
    }
}
