use std::io::{self, Write};

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};

use super::Config;
use crate::Grid;

/// One string per row of the field: a glyph for every live cell of
/// `current`, a blank for every dead one.
pub fn frame_rows(grid: &Grid) -> Vec<String> {
    let (w, _) = grid.size();
    grid.current()
        .chunks_exact(w)
        .map(|row| {
            row.iter()
                .map(|&alive| {
                    if alive {
                        Config::LIVE_GLYPH
                    } else {
                        Config::DEAD_GLYPH
                    }
                })
                .collect()
        })
        .collect()
}

/// Redraws the whole field starting at the top left corner of the screen.
pub fn draw(out: &mut impl Write, grid: &Grid) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (y, row) in frame_rows(grid).iter().enumerate() {
        // trailing blanks are already there after the clear
        let row = row.trim_end_matches(Config::DEAD_GLYPH);
        if !row.is_empty() {
            queue!(out, MoveTo(0, y as u16), Print(row))?;
        }
    }
    out.flush()
}
