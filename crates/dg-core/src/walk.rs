//! Bounded random-walk floor carving.
//!
//! Produces the raw, organic cluster of cells that a room interior is
//! clipped from. A walk is `iterations` simple walks of `walk_length`
//! cardinal steps each; the visited cells accumulate across iterations.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::cell::{Cell, Direction};
use crate::rng::GenRng;

/// Parameters of one bounded random walk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalkConfig {
    /// Number of simple walks to run.
    pub iterations: u32,
    /// Steps per simple walk.
    pub walk_length: u32,
    /// Restart each iteration from a uniformly chosen visited cell
    /// instead of the original start.
    pub start_randomly_each_iteration: bool,
}

impl Default for WalkConfig {
    fn default() -> Self {
        Self {
            iterations: 10,
            walk_length: 10,
            start_randomly_each_iteration: true,
        }
    }
}

/// Run a bounded random walk from `start`.
///
/// Returns the distinct visited cells in first-visit order. The order is
/// deterministic for a given seed, which keeps downstream per-cell RNG
/// draws reproducible.
pub fn walk(start: Cell, config: &WalkConfig, rng: &mut GenRng) -> Vec<Cell> {
    let mut seen = HashSet::new();
    let mut visited = Vec::new();
    seen.insert(start);
    visited.push(start);

    let mut from = start;
    for _ in 0..config.iterations {
        simple_walk(from, config.walk_length, rng, &mut seen, &mut visited);
        if config.start_randomly_each_iteration {
            from = visited[rng.rn2(visited.len() as u32) as usize];
        }
    }

    visited
}

/// One unweighted walk of `length` cardinal steps.
fn simple_walk(
    start: Cell,
    length: u32,
    rng: &mut GenRng,
    seen: &mut HashSet<Cell>,
    visited: &mut Vec<Cell>,
) {
    let mut pos = start;
    for _ in 0..length {
        let dir = Direction::CARDINAL[rng.rn2(Direction::CARDINAL.len() as u32) as usize];
        pos += dir.offset();
        if seen.insert(pos) {
            visited.push(pos);
        }
    }
}
