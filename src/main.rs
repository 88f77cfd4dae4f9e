// inputspy - Text input event inspector
//
// Emulates a browser text input in the terminal and logs every event it
// fires, with the properties a page listener would read.
//
// Architecture:
// - Widget: turns terminal keys, pastes and focus changes into browser
//   event sequences, mutating the input where a browser would
// - Capture: one listener table snapshots each event's fields
// - Event log: ordered entries, clear, export to the clipboard
// - TUI (ratatui): input, event log and system logs panels

mod capture;
mod cli;
mod clipboard;
mod config;
mod controls;
mod event_log;
mod events;
mod logging;
mod theme;
mod tui;
mod widget;

use anyhow::Result;
use clap::Parser;
use config::{Config, LogRotation};
use logging::{LogBuffer, TuiLogLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --path, --reset, --update)
    // If a command was handled, exit early
    let cli = cli::Cli::parse();
    if cli::handle_command(&cli) {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    // env > file > defaults, then command-line flags on top
    let mut config = Config::from_env();
    cli.apply(&mut config);

    // Logs go to the buffer so they never garble the display
    let log_buffer = LogBuffer::new();

    // Initialize tracing/logging
    // File logging: optionally write to rotating log files (in addition to the panel)
    //
    // Precedence: RUST_LOG env var > config file > default "info"
    let default_filter = format!("inputspy={}", config.logging.level);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into());

    // The guard must be kept alive for the duration of the program to ensure logs flush
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            // Create log directory if it doesn't exist
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to non-file logging
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .init();
                None
            } else {
                // Create rolling file appender based on configured rotation
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

                // Wrap in non-blocking writer (writes happen in background thread)
                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                // File layer uses JSON format for structured log parsing
                tracing_subscriber::registry()
                    .with(filter)
                    .with(TuiLogLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();

                Some(guard)
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(TuiLogLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::info!(
        "inputspy {} started: type={}, inputmode={:?}, theme={}",
        config::VERSION,
        config.initial_type.as_str(),
        widget::InputMode::option_value(config.initial_input_mode),
        config.theme
    );
    if config.logging.file_enabled {
        tracing::debug!(
            "File logging to {} ({})",
            config.logging.file_dir.display(),
            config.logging.file_rotation.as_str()
        );
    }

    if let Err(e) = tui::run_tui(config, log_buffer).await {
        tracing::error!("TUI error: {:#}", e);
        return Err(e);
    }

    Ok(())
}
