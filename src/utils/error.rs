/// Failures that can happen before the first generation is drawn.
///
/// Everything past startup is total: broken preconditions inside the field
/// are programming errors and panic instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("pattern {pattern} does not fit: cell ({x}, {y}) is outside the {width}x{height} field")]
    SeedOutOfBounds {
        pattern: &'static str,
        x: isize,
        y: isize,
        width: usize,
        height: usize,
    },

    #[error("terminal has no room for the field ({width}x{height})")]
    EmptySurface { width: u16, height: u16 },

    #[error("terminal error: {0}")]
    Terminal(#[from] std::io::Error),
}
