use std::path::PathBuf;

use clap::Parser;

use crate::Topology;

pub struct Config;

impl Config {
    pub const LIVE_GLYPH: char = '#';
    pub const DEAD_GLYPH: char = ' ';

    pub const LOG_FILTER: &'static str = "info";
}

/// Conway's Game of Life in the terminal.
///
/// Space advances one generation; Esc, Ctrl-C or Ctrl-D quit.
#[derive(Debug, Parser)]
#[command(name = "conway_term", version)]
pub struct Options {
    /// Stitch the edges of the field together instead of treating outside cells as dead.
    #[arg(short = 't', long = "toroidal")]
    pub toroidal: bool,

    /// Write logs to this file. Without it logs go to stderr, only when `RUST_LOG` is set.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Options {
    pub fn topology(&self) -> Topology {
        Topology::from_toroidal_flag(self.toroidal)
    }
}
