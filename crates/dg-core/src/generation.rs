//! Dungeon orchestration.
//!
//! Runs the full pipeline: partition the region into rooms, carve each
//! room interior with a clipped random walk, route corridors between all
//! room centers, derive walls, then prune the spawn-safe cells that ended
//! up against a wall.

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::GenError;
use crate::rect::RoomRect;
use crate::rng::GenRng;
use crate::walk::WalkConfig;
use crate::{FloorSet, PlaceableMap, WallSet, bsp, corridor, walk, walls};

/// Largest accepted clip offset.
pub const MAX_OFFSET: i32 = 10;

/// Chance (in percent) for a carved room cell to become a provisional
/// spawn-safe cell.
const PLACEABLE_PERCENT: u32 = 20;

/// Generation parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenConfig {
    /// Bounding region width in cells.
    pub width: i32,
    /// Bounding region height in cells.
    pub height: i32,
    pub min_room_width: i32,
    pub min_room_height: i32,
    /// Inward clip offset applied to carved room floor.
    pub offset: i32,
    pub walk: WalkConfig,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            width: 20,
            height: 20,
            min_room_width: 4,
            min_room_height: 4,
            offset: 1,
            walk: WalkConfig::default(),
        }
    }
}

/// A fully generated dungeon.
///
/// Owned by one generation run; the next run produces a fresh value
/// rather than updating this one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dungeon {
    pub floor: FloorSet,
    pub walls: WallSet,
    /// Spawn-safe cells per room, keyed by room center. Every cell is
    /// floor and has no wall among its 8 neighbors.
    #[serde(with = "placeable_rows")]
    pub placeable: PlaceableMap,
    /// Center of the first room the partition produced.
    pub player_start: Cell,
    pub rooms: Vec<RoomRect>,
}

/// Room-based dungeon generator.
#[derive(Debug, Clone)]
pub struct RoomDungeonGenerator {
    config: GenConfig,
}

impl RoomDungeonGenerator {
    /// Create a generator, clamping the clip offset into `0..=MAX_OFFSET`.
    pub fn new(mut config: GenConfig) -> Self {
        config.offset = config.offset.clamp(0, MAX_OFFSET);
        Self { config }
    }

    pub fn config(&self) -> &GenConfig {
        &self.config
    }

    /// Run one generation.
    ///
    /// Fails with [`GenError::NoRooms`] when the region cannot hold a
    /// single minimum-sized room. A single-room region is valid and
    /// yields no corridors.
    pub fn generate(&self, rng: &mut GenRng) -> Result<Dungeon, GenError> {
        let cfg = &self.config;
        let region = RoomRect::new(Cell::ZERO, Cell::new(cfg.width, cfg.height));

        let rooms = bsp::partition(region, cfg.min_room_width, cfg.min_room_height, rng);
        if rooms.is_empty() {
            return Err(GenError::NoRooms {
                width: cfg.width,
                height: cfg.height,
                min_width: cfg.min_room_width,
                min_height: cfg.min_room_height,
            });
        }

        let centers: Vec<Cell> = rooms.iter().map(|r| r.center()).collect();
        let player_start = centers[0];

        let mut floor = FloorSet::new();
        let mut placeable = PlaceableMap::new();
        for room in &rooms {
            let provisional = carve_room(room, cfg, &mut floor, rng);
            placeable.entry(room.center()).or_default().extend(provisional);
        }

        let network = corridor::connect_rooms(player_start, &centers[1..])?;
        floor.extend(network.cells.iter().copied());

        let walls = walls::build_walls(&floor);
        let placeable = filter_placeable(placeable, &walls);

        Ok(Dungeon {
            floor,
            walls,
            placeable,
            player_start,
            rooms,
        })
    }
}

/// Carve one room interior.
///
/// Walks from the room center, keeps the visited cells that survive the
/// clip bounds, and samples each surviving cell into the room's
/// provisional spawn-safe set at [`PLACEABLE_PERCENT`].
fn carve_room(
    room: &RoomRect,
    config: &GenConfig,
    floor: &mut FloorSet,
    rng: &mut GenRng,
) -> HashSet<Cell> {
    let mut provisional = HashSet::new();
    for cell in walk::walk(room.center(), &config.walk, rng) {
        if in_carve_bounds(room, config.offset, cell) {
            floor.insert(cell);
            if rng.percent(PLACEABLE_PERCENT) {
                provisional.insert(cell);
            }
        }
    }
    provisional
}

/// Clip predicate for carved room floor.
///
/// The x band shrinks by `offset` on both sides. The y band shrinks only
/// at the top: the lower bound is `y_min - offset`, so carved floor may
/// extend `offset` cells below the room rectangle.
fn in_carve_bounds(room: &RoomRect, offset: i32, cell: Cell) -> bool {
    cell.x >= room.x_min() + offset
        && cell.x <= room.x_max() - offset
        && cell.y >= room.y_min() - offset
        && cell.y <= room.y_max() - offset
}

/// Prune spawn-safe cells that touch a wall.
///
/// Keeps only cells with no wall among their 8 neighbors, rebuilding each
/// room's set rather than removing during iteration. Running the filter
/// on its own output is a no-op.
pub fn filter_placeable(placeable: PlaceableMap, walls: &WallSet) -> PlaceableMap {
    placeable
        .into_iter()
        .map(|(center, cells)| {
            let kept = cells
                .into_iter()
                .filter(|&cell| !next_to_wall(cell, walls))
                .collect();
            (center, kept)
        })
        .collect()
}

/// Check the 8 compass neighbors for a wall, stopping at the first hit.
fn next_to_wall(cell: Cell, walls: &WallSet) -> bool {
    cell.neighbors8().any(|n| walls.contains(&n))
}

/// Serialize the placeable map as sorted `(center, cells)` rows; struct
/// keys cannot be JSON object keys.
mod placeable_rows {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    use crate::PlaceableMap;
    use crate::cell::Cell;

    pub fn serialize<S: Serializer>(map: &PlaceableMap, serializer: S) -> Result<S::Ok, S::Error> {
        let mut rows: Vec<(Cell, Vec<Cell>)> = map
            .iter()
            .map(|(center, cells)| {
                let mut sorted: Vec<Cell> = cells.iter().copied().collect();
                sorted.sort();
                (*center, sorted)
            })
            .collect();
        rows.sort_by_key(|(center, _)| *center);
        rows.serialize(serializer)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<PlaceableMap, D::Error> {
        let rows: Vec<(Cell, Vec<Cell>)> = Vec::deserialize(deserializer)?;
        Ok(rows
            .into_iter()
            .map(|(center, cells)| (center, cells.into_iter().collect()))
            .collect())
    }
}
