//! Tic-tac-toe terminal application.

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use std::time::Instant;
use tictactoe::{App, AppConfig, Cli, TerminalGuard, notifier_for, ui};
use tracing::{error, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    init_tracing(&config)?;

    info!("Starting tictactoe");

    let notifier = notifier_for(*config.sound(), config.assets_dir());
    let app = App::new(*config.flash(), notifier);

    let guard = TerminalGuard::enter()?;
    let res = Terminal::new(CrosstermBackend::new(io::stdout()))
        .map_err(anyhow::Error::from)
        .and_then(|mut terminal| run_app(&mut terminal, app));
    drop(guard);

    if let Err(err) = &res {
        error!(error = ?err, "Event loop error");
    }
    info!("Exiting");
    res
}

fn load_config(cli: &Cli) -> Result<AppConfig> {
    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading {}", cli.config.display()))?;
    if let Some(dir) = &cli.assets_dir {
        config.set_assets_dir(dir.clone());
    }
    if let Some(path) = &cli.log_file {
        config.set_log_file(path.clone());
    }
    if cli.mute {
        config.mute();
    }
    Ok(config)
}

/// Logs go to a file so they never draw over the UI.
fn init_tracing(config: &AppConfig) -> Result<()> {
    let log_file = std::fs::File::create(config.log_file())
        .with_context(|| format!("creating log file {}", config.log_file().display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();
    Ok(())
}

#[instrument(skip_all)]
fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, mut app: App) -> Result<()> {
    let mut dirty = true;
    loop {
        let size = terminal.size()?;
        app.resize(Rect::new(0, 0, size.width, size.height));

        if dirty {
            terminal.draw(|f| ui::draw(f, &app))?;
            dirty = false;
        }

        let now = Instant::now();
        if event::poll(app.poll_timeout(now))? {
            let event = event::read()?;
            dirty |= app.handle_event(event, Instant::now());
        }
        dirty |= app.tick(Instant::now());

        if app.should_quit() {
            return Ok(());
        }
    }
}
