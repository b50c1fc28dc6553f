use std::{
    io::{self, Write},
    ops::ControlFlow,
};

use crossterm::event::Event;

use super::{action_for, draw, Action};
use crate::Grid;

pub struct App {
    grid: Grid,
}

impl App {
    pub fn new(grid: Grid) -> Self {
        Self { grid }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Applies one action; `Break` means the loop should stop.
    pub fn handle(&mut self, action: Action) -> ControlFlow<()> {
        match action {
            Action::Advance => {
                self.grid.advance();
                ControlFlow::Continue(())
            }
            Action::Quit => ControlFlow::Break(()),
        }
    }

    /// Draws the seeded field, then blocks on `next_event` and redraws after
    /// every advance until asked to quit.
    pub fn run(
        &mut self,
        out: &mut impl Write,
        mut next_event: impl FnMut() -> io::Result<Event>,
    ) -> io::Result<()> {
        draw(out, &self.grid)?;
        loop {
            let Some(action) = action_for(&next_event()?) else {
                continue;
            };
            if self.handle(action).is_break() {
                tracing::info!(generation = self.grid.generation(), "quit");
                return Ok(());
            }
            draw(out, &self.grid)?;
        }
    }
}
