use crate::Bounds;

/// Offsets of the Moore neighborhood, starting from the left one and going clockwise.
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

/// Number of live cells around `(x, y)` in `buffer`, in `0..=8`.
pub fn neighbor_count(bounds: Bounds, buffer: &[bool], x: isize, y: isize) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .map(|&(dx, dy)| bounds.get(buffer, x + dx, y + dy) as u8)
        .sum()
}

/// Conway's rule: survival with 2 or 3 neighbors, birth with 3.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    (alive && neighbors == 2) || neighbors == 3
}

/// Writes the successor of `previous` into `current`, then copies it back
/// into `previous` so the next call starts from the new generation.
pub fn step(bounds: Bounds, previous: &mut [bool], current: &mut [bool]) {
    assert_eq!(previous.len(), bounds.area());
    assert_eq!(current.len(), bounds.area());

    let (w, h) = bounds.size();
    for y in 0..h as isize {
        for x in 0..w as isize {
            let alive = bounds.get(previous, x, y);
            let neibs = neighbor_count(bounds, previous, x, y);
            bounds.set(current, x, y, next_state(alive, neibs));
        }
    }
    previous.copy_from_slice(current);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Topology;

    fn buffer_with(bounds: Bounds, cells: &[(isize, isize)]) -> Vec<bool> {
        let mut buf = vec![false; bounds.area()];
        for &(x, y) in cells {
            bounds.set(&mut buf, x, y, true);
        }
        buf
    }

    #[test]
    fn test_rule_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive, {n} neighbors");
            assert_eq!(next_state(false, n), n == 3, "dead, {n} neighbors");
        }
    }

    #[test]
    fn test_neighbor_count_ignores_center() {
        let bounds = Bounds::new(5, 5, Topology::Clamped);
        let mut buf = vec![true; bounds.area()];
        assert_eq!(neighbor_count(bounds, &buf, 2, 2), 8);
        buf[2 + 2 * 5] = false;
        assert_eq!(neighbor_count(bounds, &buf, 2, 2), 8);
    }

    #[test]
    fn test_neighbor_count_at_corner() {
        let full = |topology| {
            let bounds = Bounds::new(4, 4, topology);
            neighbor_count(bounds, &vec![true; bounds.area()], 0, 0)
        };
        assert_eq!(full(Topology::Clamped), 3);
        assert_eq!(full(Topology::Toroidal), 8);
    }

    #[test]
    fn test_neighbor_count_across_seam() {
        let bounds = Bounds::new(6, 6, Topology::Toroidal);
        let buf = buffer_with(bounds, &[(5, 5), (5, 0), (0, 5)]);
        assert_eq!(neighbor_count(bounds, &buf, 0, 0), 3);

        let clamped = Bounds::new(6, 6, Topology::Clamped);
        let buf = buffer_with(clamped, &[(5, 5), (5, 0), (0, 5)]);
        assert_eq!(neighbor_count(clamped, &buf, 0, 0), 0);
    }

    #[test]
    fn test_step_leaves_buffers_equal() {
        let bounds = Bounds::new(8, 8, Topology::Clamped);
        let mut previous = buffer_with(bounds, &[(3, 2), (3, 3), (3, 4)]);
        let mut current = previous.clone();

        step(bounds, &mut previous, &mut current);
        assert_eq!(previous, current);
        assert_eq!(previous, buffer_with(bounds, &[(2, 3), (3, 3), (4, 3)]));
    }

    #[test]
    fn test_step_reads_only_previous() {
        let bounds = Bounds::new(5, 5, Topology::Clamped);
        let mut previous = vec![false; bounds.area()];
        let mut current = vec![true; bounds.area()];

        step(bounds, &mut previous, &mut current);
        assert!(current.iter().all(|&c| !c));
    }

    #[test]
    #[should_panic]
    fn test_step_mismatched_buffers() {
        let bounds = Bounds::new(5, 5, Topology::Clamped);
        let mut previous = vec![false; bounds.area()];
        let mut current = vec![false; bounds.area() - 1];
        step(bounds, &mut previous, &mut current);
    }
}
