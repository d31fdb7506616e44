// Broadsheet - terminal client for a blog/journal backend
//
// Architecture:
// - API client (reqwest): one thin request core plus typed endpoint wrappers
// - Session store: persisted token, profile re-resolved on every cold start
// - TUI (ratatui): view state machine over login / list / reader / admin
// - Controllers: per-view state and decision logic
// - Events: spawned request tasks report back over an mpsc channel

mod api;
mod cli;
mod config;
mod controllers;
mod events;
mod session;
mod share;
mod tui;
mod util;

use anyhow::Result;
use api::ApiClient;
use clap::Parser;
use config::{Config, LogRotation};
use session::SessionStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    // Handle CLI subcommands first (config --show, --reset, --path)
    if cli::handle_command(&args) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Initialize tracing. The TUI owns the terminal, so logs go to rotating
    // files only - a stdout layer would garble the alternate screen.
    //
    // Precedence: RUST_LOG env var > config file level
    let default_filter = format!("broadsheet={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program so logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            match std::fs::create_dir_all(&config.logging.file_dir) {
                Ok(()) => {
                    let file_appender = match config.logging.file_rotation {
                        LogRotation::Hourly => tracing_appender::rolling::hourly(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Daily => tracing_appender::rolling::daily(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                        LogRotation::Never => tracing_appender::rolling::never(
                            &config.logging.file_dir,
                            &config.logging.file_prefix,
                        ),
                    };
                    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
                    tracing_subscriber::registry()
                        .with(filter)
                        .with(
                            tracing_subscriber::fmt::layer()
                                .json()
                                .with_writer(non_blocking)
                                .with_ansi(false),
                        )
                        .init();
                    Some(guard)
                }
                Err(e) => {
                    eprintln!(
                        "Warning: Could not create log directory {:?}: {}",
                        config.logging.file_dir, e
                    );
                    None
                }
            }
        } else {
            None
        };

    tracing::info!(version = config::VERSION, api_url = %config.api_url, "starting");

    // Restore the session from the persisted token; the TUI resolves it
    // against /api/auth/me once the event loop is up
    let session = SessionStore::load(Config::token_path());
    let api = ApiClient::new(config.api_url.clone());

    // Optional deep link from the command line; unknown targets fall through
    // to the catch-all redirect inside the router
    let initial = args.open.as_deref().map(tui::app::parse_route);

    tui::run_tui(config, api, session, initial).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
