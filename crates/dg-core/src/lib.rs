//! dg-core: room-based procedural dungeon generation
//!
//! Generates a connected 2D dungeon: rooms placed by binary space
//! partitioning, room interiors carved by bounded random walks, an
//! orthogonal corridor network joining every room, enclosing walls, and a
//! per-room set of spawn-safe floor cells kept clear of walls.
//!
//! This crate contains no I/O. All randomness flows through an explicit
//! seeded [`GenRng`], so a given seed and configuration always produce the
//! same dungeon.

pub mod bsp;
pub mod cell;
pub mod corridor;
pub mod error;
pub mod generation;
pub mod rect;
pub mod walk;
pub mod walls;

mod rng;

pub use cell::{Cell, Direction};
pub use corridor::CorridorNetwork;
pub use error::GenError;
pub use generation::{Dungeon, GenConfig, RoomDungeonGenerator, filter_placeable};
pub use rect::RoomRect;
pub use rng::GenRng;
pub use walk::WalkConfig;

/// All walkable cells of a dungeon.
pub type FloorSet = hashbrown::HashSet<Cell>;

/// All wall cells bounding the floor.
pub type WallSet = hashbrown::HashSet<Cell>;

/// Spawn-safe cells per room, keyed by the room's center.
pub type PlaceableMap = hashbrown::HashMap<Cell, hashbrown::HashSet<Cell>>;
