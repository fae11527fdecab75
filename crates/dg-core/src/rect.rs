//! Axis-aligned room rectangles.

use serde::{Deserialize, Serialize};

use crate::cell::Cell;

/// An axis-aligned integer bounding box given as a `min` corner and a
/// `size`.
///
/// Edge accessors follow the exclusive convention: `x_max()` is
/// `min.x + size.x`, one past the last column the box covers. The carve
/// clipping rule in [`crate::generation`] compares against these edge
/// values directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRect {
    pub min: Cell,
    pub size: Cell,
}

impl RoomRect {
    pub const fn new(min: Cell, size: Cell) -> Self {
        Self { min, size }
    }

    pub const fn x_min(&self) -> i32 {
        self.min.x
    }

    pub const fn y_min(&self) -> i32 {
        self.min.y
    }

    /// Exclusive right edge.
    pub const fn x_max(&self) -> i32 {
        self.min.x + self.size.x
    }

    /// Exclusive top edge.
    pub const fn y_max(&self) -> i32 {
        self.min.y + self.size.y
    }

    pub const fn width(&self) -> i32 {
        self.size.x
    }

    pub const fn height(&self) -> i32 {
        self.size.y
    }

    /// Center rounded to a cell.
    pub const fn center(&self) -> Cell {
        Cell::new(self.min.x + self.size.x / 2, self.min.y + self.size.y / 2)
    }

    /// Check if a cell lies inside the rectangle.
    pub const fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.x_min() && cell.x < self.x_max() && cell.y >= self.y_min() && cell.y < self.y_max()
    }

    /// Check if this rectangle overlaps another.
    pub const fn intersects(&self, other: &RoomRect) -> bool {
        self.x_min() < other.x_max()
            && other.x_min() < self.x_max()
            && self.y_min() < other.y_max()
            && other.y_min() < self.y_max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges_are_exclusive() {
        let r = RoomRect::new(Cell::new(2, 3), Cell::new(6, 4));
        assert_eq!(r.x_min(), 2);
        assert_eq!(r.y_min(), 3);
        assert_eq!(r.x_max(), 8);
        assert_eq!(r.y_max(), 7);
        assert_eq!(r.width(), 6);
        assert_eq!(r.height(), 4);

        assert!(r.contains(Cell::new(2, 3)));
        assert!(r.contains(Cell::new(7, 6)));
        assert!(!r.contains(Cell::new(8, 6)));
        assert!(!r.contains(Cell::new(7, 7)));
    }

    #[test]
    fn test_rect_center_rounds_to_cell() {
        assert_eq!(
            RoomRect::new(Cell::new(0, 0), Cell::new(6, 6)).center(),
            Cell::new(3, 3)
        );
        assert_eq!(
            RoomRect::new(Cell::new(4, 2), Cell::new(5, 7)).center(),
            Cell::new(6, 5)
        );
    }

    #[test]
    fn test_rect_center_is_inside() {
        let r = RoomRect::new(Cell::new(-3, 9), Cell::new(4, 5));
        assert!(r.contains(r.center()));
    }

    #[test]
    fn test_rect_intersects() {
        let a = RoomRect::new(Cell::new(0, 0), Cell::new(10, 10));
        let b = RoomRect::new(Cell::new(5, 5), Cell::new(10, 10));
        let c = RoomRect::new(Cell::new(10, 0), Cell::new(5, 5));

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        // Edge-adjacent boxes do not overlap under exclusive edges
        assert!(!a.intersects(&c));
    }
}
