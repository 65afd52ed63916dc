mod app_state;
mod cli;
mod headless;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;
use winit::event_loop::EventLoop;

use casement_bridge::{MethodChannel, WindowPlugin};
use casement_common::EventBus;
use casement_config::CasementConfig;
use casement_platform::WindowSurface;

/// Broadcast capacity for lifecycle events.
pub(crate) const EVENT_CAPACITY: usize = 64;

/// Filter directive: `--log-level`, then `RUST_LOG`, then the config level.
fn log_filter(cli_level: Option<&str>, config: &CasementConfig) -> EnvFilter {
    let fallback = config.logging.level.directive();
    if let Some(level) = cli_level {
        match EnvFilter::try_new(level) {
            Ok(filter) => return filter,
            Err(e) => eprintln!("invalid --log-level {level:?} ({e}), using {fallback}"),
        }
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Wire a surface to a named method channel.
pub(crate) fn build_channel(
    surface: Arc<dyn WindowSurface>,
    config: &CasementConfig,
    events: &EventBus,
) -> Arc<MethodChannel> {
    let plugin = WindowPlugin::new(surface, config.drag.clone(), events.clone());
    Arc::new(MethodChannel::new(config.channel.name.clone(), Arc::new(plugin)))
}

fn main() {
    let args = cli::parse();

    // Config comes first: it decides the default log level.
    let config = casement_config::load_config(args.config.as_deref());

    let fallback = CasementConfig::default();
    let filter = log_filter(args.log_level.as_deref(), config.as_ref().unwrap_or(&fallback));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!("Casement v{} starting...", env!("CARGO_PKG_VERSION"));

    let config = config.unwrap_or_else(|e| {
        tracing::warn!("Config load failed, using defaults: {e}");
        CasementConfig::default()
    });
    if let Some(ref path) = args.config {
        tracing::info!(path = %path.display(), "Using config override");
    }
    tracing::info!(channel = %config.channel.name, "Config loaded");

    if args.headless {
        if let Err(e) = headless::run(&config) {
            tracing::error!("Headless host failed: {e}");
            std::process::exit(1);
        }
        tracing::info!("Shutdown complete");
        return;
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("Failed to create event loop: {e}");
            std::process::exit(1);
        }
    };
    let mut app = app_state::CasementApp::new(config);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
    }
    tracing::info!("Shutdown complete");
}
