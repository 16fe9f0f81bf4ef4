//! Breezeway Training - terminal training simulator with a walkthrough overlay.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - Walkthrough content or state transitions (see `breezeway_tui::walkthrough`).
//! - Configuration merging (see `breezeway_config`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.
//! - Every state change happens in `App::update` on this loop.

use anyhow::{Context, Result};
use clap::Parser;
use tokio::sync::mpsc::channel;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use breezeway_config::constants::{DEFAULT_CHANNEL_CAPACITY, LOG_FILE_PREFIX};
use breezeway_tui::action::{Action, RedactedAction};
use breezeway_tui::app::App;
use breezeway_tui::cli::Cli;
use breezeway_tui::runtime::{config::load_trainer_config, events::spawn_input_task, terminal};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log directory {}", cli.log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, LOG_FILE_PREFIX);
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(fmt::layer().with_writer(non_blocking).with_ansi(false))
        .init();
    // Note: _guard must live for entire main() duration to ensure logs are flushed

    let config = load_trainer_config(&cli)?;
    tracing::info!(
        theme = config.theme.id(),
        start_view = ?config.start_view,
        walkthrough = config.show_walkthrough,
        "Starting training session"
    );

    let mut app = App::new(&config);

    let task_tracker = TaskTracker::new();
    let cancel = CancellationToken::new();

    let (mut terminal, _terminal_guard) = terminal::setup_terminal(config.mouse_enabled)?;

    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);
    spawn_input_task(&task_tracker, tx, cancel.clone());

    let mut tick_interval = tokio::time::interval(config.tick_interval);

    // Main event loop
    while !app.should_quit {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            received = rx.recv() => {
                let Some(action) = received else {
                    tracing::warn!("Input channel closed");
                    break;
                };
                tracing::debug!("Handling action: {:?}", RedactedAction(&action));
                app.update(action);
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    tracing::info!("Shutting down");

    // Graceful shutdown: stop the reader and wait for it
    cancel.cancel();
    let _ = task_tracker.close();
    task_tracker.wait().await;

    // The guard restores the terminal on drop; show the cursor explicitly.
    terminal.show_cursor()?;

    Ok(())
}
