//! Sentinel TUI - Terminal dashboard for the Sentinel uptime engine.
//!
//! Responsibilities:
//! - Orchestrate application startup and shutdown.
//! - Initialize terminal, logging, and async runtime.
//! - Run the main event loop.
//!
//! Does NOT handle:
//! - REST API implementation (see `crates/client`).
//! - Configuration parsing or persistence (see `crates/config`).
//! - Async engine calls (see `runtime::side_effects`).
//!
//! Invariants:
//! - The TUI enters raw mode and alternate screen on startup.
//! - `load_dotenv()` is called at startup to support `.env` configuration.
//! - Configuration precedence: CLI args > env vars > `.env` > defaults.
//! - Mouse capture is enabled by default unless `--no-mouse` is specified.
//! - With complete credentials the app signs in on its own; otherwise it
//!   starts on the sign-in screen.

use anyhow::{Context, Result};
use clap::Parser;
use futures_util::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use sentinel_client::{MetricsCollector, MetricsExporter, SentinelClient};
use sentinel_config::constants::{DEFAULT_CHANNEL_CAPACITY, DEFAULT_UI_TICK_MS};
use sentinel_tui::action::{Action, RedactedAction};
use sentinel_tui::app::{App, Screen};
use sentinel_tui::cli::Cli;
use sentinel_tui::runtime::{
    Runtime,
    config::{load_config, open_config_manager, save_and_quit},
    dispatch,
    side_effects::TaskTracker,
    terminal::TerminalGuard,
};
use sentinel_tui::sync::PollConfig;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::channel;
use tracing_appender::non_blocking;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Create logs directory if it doesn't exist
    std::fs::create_dir_all(&cli.log_dir)
        .with_context(|| format!("Failed to create log directory {}", cli.log_dir.display()))?;

    let file_appender = tracing_appender::rolling::daily(&cli.log_dir, "sentinel-tui.log");
    let (non_blocking, _guard) = non_blocking(file_appender);
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(fmt::layer().with_writer(non_blocking))
        .init();

    // Note: _guard must live for entire main() duration to ensure logs are flushed

    let metrics_exporter = if let Some(ref bind_addr) = cli.metrics_bind {
        match MetricsExporter::install(bind_addr) {
            Ok(exporter) => {
                tracing::info!("Metrics exporter started on http://{}/metrics", bind_addr);
                Some(exporter)
            }
            Err(e) => {
                tracing::error!("Failed to start metrics exporter: {}", e);
                None
            }
        }
    } else {
        None
    };
    let metrics = if metrics_exporter.is_some() {
        MetricsCollector::new()
    } else {
        MetricsCollector::disabled()
    };

    let loaded = load_config(&cli).context("Failed to load configuration")?;
    let client = Arc::new(
        SentinelClient::builder()
            .from_config(&loaded.config)
            .metrics(metrics)
            .build()
            .context("Failed to build Sentinel client")?,
    );
    tracing::info!(base_url = client.base_url(), "Client ready");

    let config_manager = open_config_manager(loaded.state_path)?;
    let persisted_state = config_manager.lock().await.load();

    let task_tracker = TaskTracker::new();
    let (tx, mut rx) = channel::<Action>(DEFAULT_CHANNEL_CAPACITY);

    let mut terminal_guard =
        TerminalGuard::enter(cli.no_mouse).context("Failed to initialize terminal")?;
    let mut terminal = Terminal::new(CrosstermBackend::new(std::io::stdout()))?;

    // Input stream task with backpressure handling. It waits on the terminal
    // indefinitely, so it is aborted on shutdown rather than tracked.
    let tx_input = tx.clone();
    let input_task = tokio::spawn(async move {
        use crossterm::event::{Event, EventStream, KeyEventKind};
        use tokio::sync::mpsc::error::TrySendError;

        let mut reader = EventStream::new();
        while let Some(Ok(event)) = reader.next().await {
            let action = match event {
                Event::Key(key) if key.kind == KeyEventKind::Press => Action::Input(key),
                Event::Resize(width, height) => Action::Resize(width, height),
                Event::Mouse(mouse) => {
                    // Mouse events are droppable (especially mouse move floods)
                    match tx_input.try_send(Action::Mouse(mouse)) {
                        Ok(()) => {}
                        Err(TrySendError::Full(_)) => {
                            tracing::debug!("Input channel full, dropping mouse event");
                        }
                        Err(TrySendError::Closed(_)) => break,
                    }
                    continue;
                }
                _ => continue,
            };
            // Key presses and resizes are never dropped
            if tx_input.send(action).await.is_err() {
                break;
            }
        }
    });

    let runtime = Runtime {
        client: client.clone(),
        tx: tx.clone(),
        config_manager: config_manager.clone(),
        task_tracker: task_tracker.clone(),
        poll_config: PollConfig::with_interval(Duration::from_millis(cli.refresh_interval_ms)),
    };

    let credentials = loaded.config.credentials;
    let mut app = App::new(persisted_state, credentials.username.clone())
        .with_base_url(client.base_url());
    app.set_action_sender(tx.clone());

    let first = match (credentials.username, credentials.password) {
        (Some(username), Some(password)) => {
            tracing::info!(%username, "Signing in with configured credentials");
            Action::SignIn { username, password }
        }
        _ => Action::Navigate(Screen::SignIn),
    };
    dispatch(&mut app, &runtime, first).await;

    let mut tick_interval = tokio::time::interval(Duration::from_millis(DEFAULT_UI_TICK_MS));

    loop {
        terminal.draw(|f| app.render(f))?;

        tokio::select! {
            Some(action) = rx.recv() => {
                tracing::debug!(action = ?RedactedAction(&action), "Handling action");

                let action = match action {
                    Action::Input(key) => app.handle_input(key),
                    Action::Mouse(mouse) => app.handle_mouse(mouse),
                    other => app.translate_search_action(other),
                };
                let Some(action) = action else {
                    continue;
                };

                if matches!(action, Action::Quit) {
                    if let Err(e) = save_and_quit(&app, &config_manager).await {
                        tracing::error!(error = %e, "Failed to save preferences");
                    }
                    app.stop_polling();
                    break;
                }

                dispatch(&mut app, &runtime, action).await;
            }
            _ = tick_interval.tick() => {
                app.update(Action::Tick);
            }
        }
    }

    // Graceful shutdown: close tracker and wait for tasks
    input_task.abort();
    drop(runtime);
    drop(tx);
    rx.close();
    task_tracker.close();
    task_tracker.wait().await;

    terminal_guard.restore()?;
    terminal.show_cursor()?;

    Ok(())
}
