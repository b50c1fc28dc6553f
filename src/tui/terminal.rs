use std::io::{self, stdout};

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};

use crate::Error;

/// Raw mode and alternate screen for as long as the guard lives.
pub struct TerminalGuard {
    _private: (),
}

impl TerminalGuard {
    pub fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        if let Err(err) = execute!(stdout(), EnterAlternateScreen, Hide) {
            let _ = terminal::disable_raw_mode();
            return Err(err);
        }
        Ok(Self { _private: () })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = execute!(stdout(), Show, LeaveAlternateScreen) {
            tracing::warn!(%err, "failed to leave the alternate screen");
        }
        if let Err(err) = terminal::disable_raw_mode() {
            tracing::warn!(%err, "failed to disable raw mode");
        }
    }
}

/// Size of the terminal in cells, as `(width, height)`.
pub fn surface_size() -> Result<(usize, usize), Error> {
    let (width, height) = terminal::size()?;
    check_surface(width, height)
}

fn check_surface(width: u16, height: u16) -> Result<(usize, usize), Error> {
    if width == 0 || height == 0 {
        return Err(Error::EmptySurface { width, height });
    }
    Ok((width as usize, height as usize))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_surface() {
        assert_eq!(check_surface(80, 24).unwrap(), (80, 24));
        assert!(matches!(
            check_surface(0, 24),
            Err(Error::EmptySurface {
                width: 0,
                height: 24
            })
        ));
        assert!(check_surface(80, 0).is_err());
    }
}
