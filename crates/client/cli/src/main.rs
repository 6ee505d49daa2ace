//! Terminal client entry point.
mod app;
mod input;
mod presentation;

use anyhow::Result;
use app::CliApp;
use battle_runtime::RuntimeConfig;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    setup_logging();

    let config = RuntimeConfig::from_env();
    tracing::info!(?config, "starting");

    CliApp::new(config)?.execute()
}

/// Logs go to stderr so narration on stdout stays readable.
fn setup_logging() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
