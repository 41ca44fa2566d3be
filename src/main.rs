//! termon — a small live system monitor for the terminal.
//!
//! Shows per-core CPU bars, aggregate CPU, memory and swap usage (colored
//! green / yellow / red by load), total memory, free disk space and uptime
//! in a bordered dashboard. Press `q` to exit.
//!
//! A background sampler thread refreshes the metrics every second; the UI
//! loop redraws on its own cadence and only ever blocks in the bounded key
//! wait.

mod app;
mod color_scheme;
mod config;
mod input;
mod logging;
mod system;
mod terminal;
mod ui;

use std::sync::Arc;

use anyhow::Result;

use app::App;
use color_scheme::ColorScheme;
use config::Config;
use input::CrosstermKeys;
use system::collector::SysinfoProvider;
use system::sampler::Sampler;
use system::store::SnapshotStore;
use terminal::TerminalSession;

fn main() -> Result<()> {
    let config = Config::load()?;
    logging::init(config.log_file.as_deref())?;
    tracing::info!(
        sample_interval_ms = config.sample_interval_ms,
        poll_timeout_ms = config.poll_timeout_ms,
        color_scheme = config.color_scheme_id.name(),
        "starting"
    );

    // The sampler is detached and never joined; returning from main ends it.
    let store = Arc::new(SnapshotStore::new());
    let disk_mount = config.disk_mount.clone();
    Sampler::spawn_with(
        move || Ok(SysinfoProvider::new(disk_mount)),
        Arc::clone(&store),
        config.sample_interval(),
    )?;

    // Setup terminal
    let mut session = TerminalSession::enter()?;
    let mut app = App::new(&store, ColorScheme::from_id(config.color_scheme_id));

    // Run the app
    let result = app::run(
        session.terminal_mut(),
        &mut CrosstermKeys,
        &store,
        &mut app,
        config.poll_timeout(),
    );

    // Restore terminal
    let restored = session.close();

    if let Err(e) = result {
        tracing::error!("ui loop failed: {e:#}");
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
    restored?;

    tracing::info!("exiting");
    Ok(())
}
