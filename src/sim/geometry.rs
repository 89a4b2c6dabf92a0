//! Distance predicates shared by every entity
//!
//! All inputs are raw integer cell corners. Placement checks are inclusive
//! (`<=`), live collision checks are strict (`<`). Arithmetic is done in
//! f64, so obstacle corners anywhere in `i32` range are accepted.

use glam::{DVec2, IVec2};

use crate::consts::BIT;
use crate::{Cell, cell_center};

/// Euclidean distance between two integer points
#[inline]
pub fn distance(a: IVec2, b: IVec2) -> f64 {
    a.as_dvec2().distance(b.as_dvec2())
}

/// True if `a` and `b` are no farther apart than `threshold`
#[inline]
pub fn within(a: IVec2, b: IVec2, threshold: f64) -> bool {
    distance(a, b) <= threshold
}

/// True if `a` and `b` are strictly closer than `threshold`
#[inline]
pub fn closer_than(a: IVec2, b: IVec2, threshold: f64) -> bool {
    distance(a, b) < threshold
}

/// Placement overlap between a candidate cell and one obstacle.
///
/// Two tests: the candidate's corner against the obstacle's corner, and a
/// second term `(x + BIT - ox + BIT, y + BIT - oy + BIT)`. The second term is
/// not a far-corner distance; it is kept as written because changing it
/// changes which cells placement accepts.
pub fn placement_overlaps(candidate: Cell, obstacle: Cell) -> bool {
    let limit = BIT as f64;
    if within(candidate, obstacle, limit) {
        return true;
    }
    let bit = DVec2::splat(limit);
    let shifted = candidate.as_dvec2() + bit - obstacle.as_dvec2() + bit;
    shifted.length() <= limit
}

/// True if `candidate` overlaps any of `obstacles` for placement purposes
pub fn placement_blocked(candidate: Cell, obstacles: impl IntoIterator<Item = Cell>) -> bool {
    obstacles
        .into_iter()
        .any(|obstacle| placement_overlaps(candidate, obstacle))
}

/// Live collision: cell centers closer than two half-cells
#[inline]
pub fn cells_touch(a: Cell, b: Cell) -> bool {
    cell_center(a).distance(cell_center(b)) < (BIT / 2 + BIT / 2) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::DIM;

    #[test]
    fn test_within_is_inclusive() {
        assert!(within(IVec2::new(0, 0), IVec2::new(BIT, 0), BIT as f64));
        assert!(!within(IVec2::new(0, 0), IVec2::new(BIT + 1, 0), BIT as f64));
    }

    #[test]
    fn test_closer_than_is_strict() {
        assert!(!closer_than(IVec2::new(0, 0), IVec2::new(BIT, 0), BIT as f64));
        assert!(closer_than(IVec2::new(0, 0), IVec2::new(BIT - 1, 0), BIT as f64));
    }

    #[test]
    fn test_cells_touch_boundary() {
        let a = IVec2::new(100, 100);
        assert!(cells_touch(a, IVec2::new(100 + BIT - 1, 100)));
        assert!(!cells_touch(a, IVec2::new(100 + BIT, 100)));
        // Diagonal neighbour: ~28.3 apart
        assert!(!cells_touch(a, IVec2::new(100 + BIT, 100 + BIT)));
    }

    #[test]
    fn test_placement_corner_test() {
        let obstacle = IVec2::new(200, 200);
        assert!(placement_overlaps(IVec2::new(200 + BIT, 200), obstacle));
        assert!(!placement_overlaps(IVec2::new(200 + BIT + 1, 200), obstacle));
    }

    #[test]
    fn test_placement_shifted_term() {
        // Candidate two cells up-left of the obstacle trips only the second term
        let obstacle = IVec2::new(200, 200);
        let candidate = IVec2::new(200 - 2 * BIT, 200 - 2 * BIT);
        assert!(!within(candidate, obstacle, BIT as f64));
        assert!(placement_overlaps(candidate, obstacle));
    }

    #[test]
    fn test_placement_blocked_empty_list() {
        assert!(!placement_blocked(IVec2::new(10, 10), std::iter::empty()));
    }

    #[test]
    fn test_extreme_corners_do_not_overflow() {
        let cell = IVec2::new(100, 100);
        for far in [IVec2::MAX, IVec2::MIN, IVec2::new(i32::MIN, i32::MAX)] {
            assert!(!placement_overlaps(cell, far));
            assert!(!placement_overlaps(far, cell));
            assert!(!cells_touch(cell, far));
            assert!(!cells_touch(far, cell));
            assert!(distance(far, cell) > DIM as f64);
        }
        assert!(cells_touch(IVec2::MAX, IVec2::MAX));
        assert!(placement_overlaps(IVec2::MIN, IVec2::MIN));
    }
}
