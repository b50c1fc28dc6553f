#![warn(clippy::all)]

use std::{fs::File, io::stdout, sync::Mutex};

use anyhow::Context;
use clap::Parser;
use conway_term::{
    tui::{surface_size, App, Config, Options, TerminalGuard},
    Grid,
};
use tracing_subscriber::EnvFilter;

fn init_logging(options: &Options) -> anyhow::Result<()> {
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(Config::LOG_FILTER))
    };
    if let Some(path) = &options.log_file {
        let file = File::create(path)
            .with_context(|| format!("cannot create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_ansi(false)
            .with_writer(Mutex::new(file))
            .init();
    } else if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(std::io::stderr)
            .init();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let options = Options::parse();
    init_logging(&options)?;

    let (width, height) = surface_size().context("cannot query the terminal size")?;
    let topology = options.topology();
    tracing::info!(width, height, %topology, "starting");

    let grid = Grid::seeded(width, height, topology)?;
    let mut app = App::new(grid);

    let _guard = TerminalGuard::enter().context("cannot set up the terminal")?;
    let mut out = stdout().lock();
    app.run(&mut out, crossterm::event::read)?;
    Ok(())
}
