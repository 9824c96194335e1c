//! Grid-space helpers shared by generation, spawning, and movement.

use crate::types::Pos;

/// Eight-neighbour offsets as `(dx, dy)`, row by row from the top-left.
pub const DIRS8: [(i32, i32); 8] =
    [(-1, -1), (0, -1), (1, -1), (-1, 0), (1, 0), (-1, 1), (0, 1), (1, 1)];

pub fn manhattan(a: Pos, b: Pos) -> u32 {
    a.x.abs_diff(b.x) + a.y.abs_diff(b.y)
}

pub fn neighbors8(pos: Pos) -> impl Iterator<Item = Pos> {
    DIRS8.into_iter().map(move |(dx, dy)| pos.offset(dx, dy))
}

/// Inclusive rectangle in grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x0: i32,
    pub y0: i32,
    pub x1: i32,
    pub y1: i32,
}

impl Rect {
    pub fn contains(&self, pos: Pos) -> bool {
        pos.x >= self.x0 && pos.x <= self.x1 && pos.y >= self.y0 && pos.y <= self.y1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_is_symmetric_sum_of_axis_distances() {
        let a = Pos::new(2, 9);
        let b = Pos::new(7, 3);
        assert_eq!(manhattan(a, b), 11);
        assert_eq!(manhattan(b, a), 11);
        assert_eq!(manhattan(a, a), 0);
    }

    #[test]
    fn neighbors_follow_row_major_order_and_skip_center() {
        let center = Pos::new(5, 5);
        let cells: Vec<Pos> = neighbors8(center).collect();
        assert_eq!(cells.len(), 8);
        assert_eq!(cells[0], Pos::new(4, 4));
        assert_eq!(cells[7], Pos::new(6, 6));
        assert!(!cells.contains(&center));
    }

    #[test]
    fn rect_bounds_are_inclusive() {
        let rect = Rect { x0: 1, y0: 1, x1: 3, y1: 5 };
        assert!(rect.contains(Pos::new(1, 1)));
        assert!(rect.contains(Pos::new(3, 5)));
        assert!(!rect.contains(Pos::new(4, 5)));
        assert!(!rect.contains(Pos::new(0, 2)));
    }
}
