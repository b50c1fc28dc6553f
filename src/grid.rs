use crate::Topology;

/// Selects one of the two buffers of a [`Grid`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Buffer {
    /// The last committed generation; `advance` reads from it.
    Previous,
    /// Scratch buffer `advance` writes into; holds the same cells as
    /// `Previous` after every call.
    Current,
}

/// Dimensions and topology of a field.
///
/// Addresses cells of row-major buffers of length `width * height`
/// (`index = x + y * width`).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    width: usize,
    height: usize,
    topology: Topology,
}

impl Bounds {
    pub fn new(width: usize, height: usize, topology: Topology) -> Self {
        assert!(
            width >= 1 && height >= 1,
            "field must be at least 1x1, got {width}x{height}"
        );
        Self {
            width,
            height,
            topology,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Number of cells in a buffer of this field.
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    pub fn contains(&self, x: isize, y: isize) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.width && (y as usize) < self.height
    }

    /// One-step correction, not a modulo: `-1` and `-7` both land on the last
    /// cell, `len` and `len + 7` both land on the first one.
    fn wrap(v: isize, len: usize) -> usize {
        if v < 0 {
            len - 1
        } else if v as usize >= len {
            0
        } else {
            v as usize
        }
    }

    /// Row-major index of `(x, y)` after applying the topology.
    ///
    /// Returns `None` only for clamped fields, when the cell is outside.
    pub fn index(&self, x: isize, y: isize) -> Option<usize> {
        match self.topology {
            Topology::Toroidal => {
                let (x, y) = (Self::wrap(x, self.width), Self::wrap(y, self.height));
                Some(x + y * self.width)
            }
            Topology::Clamped => self
                .contains(x, y)
                .then(|| x as usize + y as usize * self.width),
        }
    }

    /// Toroidal callers must stay within one step of the field, see [`Topology::Toroidal`].
    pub fn get(&self, buffer: &[bool], x: isize, y: isize) -> bool {
        debug_assert_eq!(buffer.len(), self.area());
        match self.index(x, y) {
            Some(i) => buffer[i],
            None => false,
        }
    }

    /// Panics when a clamped field is written outside of its bounds.
    pub fn set(&self, buffer: &mut [bool], x: isize, y: isize, value: bool) {
        assert_eq!(
            buffer.len(),
            self.area(),
            "buffer does not match the {}x{} field",
            self.width,
            self.height
        );
        match self.index(x, y) {
            Some(i) => buffer[i] = value,
            None => panic!(
                "cell ({x}, {y}) is outside the {}x{} field",
                self.width, self.height
            ),
        }
    }
}

/// Field of Conway's GoL with two equally sized buffers.
#[derive(Clone, Debug)]
pub struct Grid {
    bounds: Bounds,
    previous: Vec<bool>,
    current: Vec<bool>,
    generation: u64,
}

impl Grid {
    /// Creates a blank field; both buffers are dead.
    pub fn new(width: usize, height: usize, topology: Topology) -> Self {
        let bounds = Bounds::new(width, height, topology);
        Self {
            bounds,
            previous: vec![false; bounds.area()],
            current: vec![false; bounds.area()],
            generation: 0,
        }
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn size(&self) -> (usize, usize) {
        self.bounds.size()
    }

    pub fn topology(&self) -> Topology {
        self.bounds.topology()
    }

    /// Number of `advance` calls since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn previous(&self) -> &[bool] {
        &self.previous
    }

    pub fn current(&self) -> &[bool] {
        &self.current
    }

    fn buffer(&self, buffer: Buffer) -> &[bool] {
        match buffer {
            Buffer::Previous => &self.previous,
            Buffer::Current => &self.current,
        }
    }

    fn buffer_mut(&mut self, buffer: Buffer) -> &mut [bool] {
        match buffer {
            Buffer::Previous => &mut self.previous,
            Buffer::Current => &mut self.current,
        }
    }

    pub fn get(&self, buffer: Buffer, x: isize, y: isize) -> bool {
        self.bounds.get(self.buffer(buffer), x, y)
    }

    pub fn set(&mut self, buffer: Buffer, x: isize, y: isize, value: bool) {
        let bounds = self.bounds;
        bounds.set(self.buffer_mut(buffer), x, y, value);
    }

    /// Copies the seeded `previous` buffer into `current`.
    pub fn commit_seed(&mut self) {
        self.current.copy_from_slice(&self.previous);
    }

    /// Computes the next generation and commits it into both buffers.
    pub fn advance(&mut self) {
        crate::engine::step(self.bounds, &mut self.previous, &mut self.current);
        self.generation += 1;
        tracing::trace!(
            generation = self.generation,
            population = self.population(),
            "advanced"
        );
    }

    /// Number of live cells in `current`.
    pub fn population(&self) -> usize {
        self.current.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of live cells in `current`, row by row.
    pub fn live_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let w = self.bounds.width();
        self.current
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i % w, i / w))
    }
}
