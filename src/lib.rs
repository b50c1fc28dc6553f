mod engine;
mod grid;
mod patterns;
pub mod tui;
mod utils;

pub use engine::{neighbor_count, next_state, step, NEIGHBOR_OFFSETS};
pub use grid::{Bounds, Buffer, Grid};
pub use patterns::{Pattern, BLINKER, GLIDER, SEEDS};
pub use utils::{Error, Topology};
