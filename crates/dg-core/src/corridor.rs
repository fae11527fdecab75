//! Corridor shaping and greedy nearest-neighbor routing.
//!
//! The router connects every room center into a single chain: from the
//! player start it repeatedly walks to the closest unvisited center and
//! digs an orthogonal corridor to it. The result is a greedy
//! nearest-neighbor tour, not a minimum spanning tree; that topology is
//! part of the generator's contract.

use crate::FloorSet;
use crate::cell::Cell;
use crate::error::GenError;

/// Corridor cells plus the order in which room centers were visited.
#[derive(Debug, Clone)]
pub struct CorridorNetwork {
    /// Union of all corridor cells, room centers included.
    pub cells: FloorSet,
    /// Centers in visit order, player start first.
    pub visit_order: Vec<Cell>,
}

/// Produce the orthogonal path from `start` to `destination`, both
/// inclusive.
///
/// The vertical run always precedes the horizontal run, so the path is an
/// "L" (or a straight line) and covers exactly
/// `|dy| + |dx| + 1` cells.
pub fn shape_corridor(start: Cell, destination: Cell) -> Vec<Cell> {
    let dy = (destination.y - start.y).unsigned_abs() as usize;
    let dx = (destination.x - start.x).unsigned_abs() as usize;

    let mut path = Vec::with_capacity(dy + dx + 1);
    let mut pos = start;
    path.push(pos);

    while pos.y != destination.y {
        pos.y += (destination.y - pos.y).signum();
        path.push(pos);
    }
    while pos.x != destination.x {
        pos.x += (destination.x - pos.x).signum();
        path.push(pos);
    }

    path
}

/// Closest candidate to `from` by Euclidean distance.
///
/// Linear scan with a running minimum; equal-distance ties keep the
/// earliest list entry. Returns `None` when `candidates` is empty.
pub fn find_closest(from: Cell, candidates: &[Cell]) -> Option<Cell> {
    let mut best: Option<(Cell, i64)> = None;
    for &candidate in candidates {
        let distance = from.distance_sq(candidate);
        match best {
            Some((_, closest)) if closest <= distance => {}
            _ => best = Some((candidate, distance)),
        }
    }
    best.map(|(cell, _)| cell)
}

/// Connect `centers` to `start` with a chain of orthogonal corridors.
///
/// Every center is visited exactly once in nearest-unvisited-next order.
/// Consecutive corridors share endpoints, so all centers end up
/// transitively connected through the returned cells.
pub fn connect_rooms(start: Cell, centers: &[Cell]) -> Result<CorridorNetwork, GenError> {
    let mut cells = FloorSet::new();
    let mut visit_order = Vec::with_capacity(centers.len() + 1);
    let mut remaining: Vec<Cell> = centers.to_vec();

    let mut current = start;
    visit_order.push(current);

    while !remaining.is_empty() {
        let closest = find_closest(current, &remaining).ok_or(GenError::NoCandidates)?;
        let index = remaining
            .iter()
            .position(|&c| c == closest)
            .ok_or(GenError::NoCandidates)?;
        remaining.remove(index);

        cells.extend(shape_corridor(current, closest));
        current = closest;
        visit_order.push(current);
    }

    Ok(CorridorNetwork { cells, visit_order })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_shape_corridor_example() {
        let path = shape_corridor(Cell::new(0, 0), Cell::new(3, 2));
        assert_eq!(
            path,
            vec![
                Cell::new(0, 0),
                Cell::new(0, 1),
                Cell::new(0, 2),
                Cell::new(1, 2),
                Cell::new(2, 2),
                Cell::new(3, 2),
            ]
        );
    }

    #[test]
    fn test_shape_corridor_degenerate() {
        assert_eq!(
            shape_corridor(Cell::new(4, -1), Cell::new(4, -1)),
            vec![Cell::new(4, -1)]
        );
    }

    #[test]
    fn test_find_closest_empty_is_none() {
        assert_eq!(find_closest(Cell::ZERO, &[]), None);
    }

    #[test]
    fn test_find_closest_tie_keeps_first() {
        // Both candidates are at distance 2 from the origin
        let candidates = [Cell::new(2, 0), Cell::new(0, 2), Cell::new(5, 5)];
        assert_eq!(find_closest(Cell::ZERO, &candidates), Some(Cell::new(2, 0)));

        let flipped = [Cell::new(0, 2), Cell::new(2, 0)];
        assert_eq!(find_closest(Cell::ZERO, &flipped), Some(Cell::new(0, 2)));
    }

    #[test]
    fn test_connect_rooms_visits_each_center_once() {
        let start = Cell::new(0, 0);
        let centers = [Cell::new(10, 0), Cell::new(3, 0), Cell::new(-4, 2)];
        let network = connect_rooms(start, &centers).unwrap();

        assert_eq!(network.visit_order.len(), 4);
        assert_eq!(network.visit_order[0], start);
        for c in &centers {
            assert_eq!(network.visit_order.iter().filter(|v| *v == c).count(), 1);
        }

        // Greedy order: (3,0) is nearest the start, then from there
        // (10,0) at squared distance 49 beats (-4,2) at 53
        assert_eq!(
            network.visit_order,
            vec![start, Cell::new(3, 0), Cell::new(10, 0), Cell::new(-4, 2)]
        );
    }

    #[test]
    fn test_connect_rooms_includes_endpoints() {
        let start = Cell::new(1, 1);
        let centers = [Cell::new(6, 4), Cell::new(-2, -3)];
        let network = connect_rooms(start, &centers).unwrap();

        assert!(network.cells.contains(&start));
        for c in &centers {
            assert!(network.cells.contains(c));
        }
    }

    #[test]
    fn test_connect_rooms_no_centers() {
        let network = connect_rooms(Cell::ZERO, &[]).unwrap();
        assert!(network.cells.is_empty());
        assert_eq!(network.visit_order, vec![Cell::ZERO]);
    }

    proptest! {
        #[test]
        fn prop_corridor_shape(
            sx in -50i32..50, sy in -50i32..50,
            dx in -50i32..50, dy in -50i32..50,
        ) {
            let start = Cell::new(sx, sy);
            let dest = Cell::new(dx, dy);
            let path = shape_corridor(start, dest);

            prop_assert_eq!(path[0], start);
            prop_assert_eq!(*path.last().unwrap(), dest);
            prop_assert_eq!(
                path.len(),
                ((sy - dy).unsigned_abs() + (sx - dx).unsigned_abs() + 1) as usize
            );

            // Vertical segment first: x stays fixed until y reaches the
            // destination, then y stays fixed
            let mut turned = false;
            for pair in path.windows(2) {
                let step = pair[1] - pair[0];
                prop_assert_eq!(step.x.abs() + step.y.abs(), 1);
                if step.x != 0 {
                    turned = true;
                    prop_assert_eq!(pair[0].y, dest.y);
                } else {
                    prop_assert!(!turned, "vertical step after horizontal run");
                }
            }
        }
    }
}
