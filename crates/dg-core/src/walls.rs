//! Wall derivation from the carved floor.

use crate::cell::Cell;
use crate::{FloorSet, WallSet};

/// Compute the wall set surrounding `floor`.
///
/// A wall cell is any cell that is not floor but touches floor in one of
/// the 8 compass directions, so diagonal gaps are sealed as well.
pub fn build_walls(floor: &FloorSet) -> WallSet {
    let mut walls = WallSet::new();
    for &cell in floor {
        for neighbor in cell.neighbors8() {
            if !floor.contains(&neighbor) {
                walls.insert(neighbor);
            }
        }
    }
    walls
}
