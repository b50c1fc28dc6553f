//! Thin terminal front-end: crossterm for input and output, clap for flags.

mod app;
mod config;
mod draw;
mod input;
mod terminal;

pub use app::App;
pub use config::{Config, Options};
pub use draw::{draw, frame_rows};
pub use input::{action_for, Action};
pub use terminal::{surface_size, TerminalGuard};
