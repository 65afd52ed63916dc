/// Configuration for building the WebView.
#[derive(Debug, Clone)]
pub struct WebViewConfig {
    /// Initial URL; `casement://localhost/` serves the bundled page.
    pub url: String,
    pub transparent: bool,
    /// Always on in debug builds.
    pub devtools: bool,
    pub user_agent: Option<String>,
}

impl Default for WebViewConfig {
    fn default() -> Self {
        Self {
            url: "casement://localhost/index.html".to_string(),
            transparent: false,
            devtools: cfg!(debug_assertions),
            user_agent: Some(format!("Casement/{}", env!("CARGO_PKG_VERSION"))),
        }
    }
}
