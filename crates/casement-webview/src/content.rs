//! Bundled pages served over the `casement://` custom protocol.
//!
//! Assets are registered in memory by the host, so a page can be loaded
//! without a local HTTP server or files on disk.

use std::borrow::Cow;
use std::collections::HashMap;

/// Custom protocol scheme registered on the WebView.
pub const SCHEME: &str = "casement";

/// In-memory assets keyed by path (no leading slash).
#[derive(Debug, Default)]
pub struct ContentProvider {
    assets: HashMap<String, (String, Cow<'static, [u8]>)>, // path -> (mime, data)
}

impl ContentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asset. The MIME type is guessed from the extension.
    pub fn add(&mut self, path: impl Into<String>, data: impl Into<Cow<'static, [u8]>>) {
        let path = path.into().trim_start_matches('/').to_string();
        let mime = mime_from_extension(&path).to_string();
        self.assets.insert(path, (mime, data.into()));
    }

    /// Resolve a request path to its MIME type and bytes.
    pub fn resolve(&self, path: &str) -> Option<(&str, &[u8])> {
        let clean = path.trim_start_matches('/');
        let clean = if clean.is_empty() { "index.html" } else { clean };
        self.assets
            .get(clean)
            .map(|(mime, data)| (mime.as_str(), data.as_ref()))
    }

    /// Strip the scheme and host from a request URI.
    ///
    /// WebView2 rewrites `casement://localhost/x` to
    /// `http://casement.localhost/x`, so both forms are accepted.
    pub fn request_path(uri: &str) -> &str {
        let rest = uri
            .strip_prefix("casement://localhost")
            .or_else(|| uri.strip_prefix("http://casement.localhost"))
            .or_else(|| uri.strip_prefix("casement://"))
            .unwrap_or("");
        let rest = rest.split(['?', '#']).next().unwrap_or("");
        rest.trim_start_matches('/')
    }
}

fn mime_from_extension(path: &str) -> &'static str {
    match path.rsplit_once('.').map(|(_, ext)| ext) {
        Some("html") | Some("htm") => "text/html",
        Some("css") => "text/css",
        Some("js") | Some("mjs") => "application/javascript",
        Some("json") => "application/json",
        Some("svg") => "image/svg+xml",
        Some("png") => "image/png",
        _ => "application/octet-stream",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn provider() -> ContentProvider {
        let mut cp = ContentProvider::new();
        cp.add("index.html", b"<html></html>".as_slice());
        cp.add("/app.js", b"console.log(1)".as_slice());
        cp
    }

    #[test]
    fn resolves_registered_assets_with_mime() {
        let cp = provider();
        assert_eq!(cp.resolve("index.html"), Some(("text/html", b"<html></html>".as_slice())));
        let (mime, _) = cp.resolve("/app.js").unwrap();
        assert_eq!(mime, "application/javascript");
    }

    #[test]
    fn empty_path_serves_index() {
        assert!(provider().resolve("/").is_some());
        assert!(provider().resolve("").is_some());
    }

    #[test]
    fn unknown_asset_is_none() {
        assert_eq!(provider().resolve("missing.css"), None);
        assert_eq!(provider().resolve("../index.html"), None);
    }

    #[test]
    fn request_path_strips_scheme_and_host() {
        assert_eq!(ContentProvider::request_path("casement://localhost/index.html"), "index.html");
        assert_eq!(ContentProvider::request_path("http://casement.localhost/app.js?v=2"), "app.js");
        assert_eq!(ContentProvider::request_path("casement://localhost"), "");
        assert_eq!(ContentProvider::request_path("https://example.com/index.html"), "");
    }

    #[test]
    fn unknown_extension_is_octet_stream() {
        assert_eq!(mime_from_extension("blob.bin"), "application/octet-stream");
        assert_eq!(mime_from_extension("noext"), "application/octet-stream");
    }
}
