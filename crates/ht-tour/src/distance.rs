//! Forward distance around the tour.

/// `cyclicDistance(a, b)`: how many `next` steps lead from tour order `from`
/// to tour order `to`.
///
/// Always in `[0, cell_count)`.  `cyclic_distance(a, a) == 0` and, for
/// `a != b`, `cyclic_distance(a, b) + cyclic_distance(b, a) == cell_count`.
#[inline]
pub fn cyclic_distance(from: u32, to: u32, cell_count: u32) -> u32 {
    if to >= from {
        to - from
    } else {
        cell_count - from + to
    }
}
