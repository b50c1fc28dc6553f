use crate::{Bounds, Buffer, Error, Grid, Topology};

pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(isize, isize)],
}

pub const GLIDER: Pattern = Pattern {
    name: "Glider",
    cells: &[(5, 5), (6, 5), (7, 5), (7, 4), (6, 3)],
};

pub const BLINKER: Pattern = Pattern {
    name: "Blinker",
    cells: &[(20, 4), (20, 5), (20, 6)],
};

/// Patterns written into every new field, in this order.
pub const SEEDS: &[Pattern] = &[GLIDER, BLINKER];

impl Pattern {
    /// First cell that a field with these bounds cannot hold.
    ///
    /// Toroidal fields hold every cell, it is wrapped the same way `set` does.
    pub fn first_outside(&self, bounds: Bounds) -> Option<(isize, isize)> {
        self.cells
            .iter()
            .copied()
            .find(|&(x, y)| bounds.index(x, y).is_none())
    }

    pub fn fits(&self, bounds: Bounds) -> bool {
        self.first_outside(bounds).is_none()
    }

    pub fn apply(&self, grid: &mut Grid, buffer: Buffer) {
        for &(x, y) in self.cells {
            grid.set(buffer, x, y, true);
        }
    }
}

impl Grid {
    /// Creates a field holding the glider and the blinker.
    ///
    /// Fails without touching anything when a clamped field is too small for a seed.
    pub fn seeded(width: usize, height: usize, topology: Topology) -> Result<Self, Error> {
        let mut grid = Self::new(width, height, topology);
        let bounds = grid.bounds();
        for pattern in SEEDS {
            if let Some((x, y)) = pattern.first_outside(bounds) {
                return Err(Error::SeedOutOfBounds {
                    pattern: pattern.name,
                    x,
                    y,
                    width,
                    height,
                });
            }
        }
        for pattern in SEEDS {
            pattern.apply(&mut grid, Buffer::Previous);
            tracing::debug!(pattern = pattern.name, cells = pattern.cells.len(), "seeded");
        }
        grid.commit_seed();
        Ok(grid)
    }
}
