//! Binary space partitioning room provider.
//!
//! Splits the dungeon bounding region into non-overlapping room
//! rectangles. A region splits as long as one of its sides can hold two
//! minimum-sized halves; regions that cannot split any further are
//! emitted as rooms.

use std::collections::VecDeque;

use crate::cell::Cell;
use crate::rect::RoomRect;
use crate::rng::GenRng;

/// Partition `region` into rooms at least `min_width` x `min_height`.
///
/// Output order is emission order and is significant to the caller: the
/// first room's center becomes the player start. A region too small to
/// hold even one minimum-sized room yields an empty list.
pub fn partition(
    region: RoomRect,
    min_width: i32,
    min_height: i32,
    rng: &mut GenRng,
) -> Vec<RoomRect> {
    let mut rooms = Vec::new();
    let mut queue = VecDeque::new();
    queue.push_back(region);

    while let Some(room) = queue.pop_front() {
        if room.width() < min_width || room.height() < min_height {
            continue;
        }

        let can_split_v = room.height() >= 2 * min_height;
        let can_split_h = room.width() >= 2 * min_width;

        if can_split_v || can_split_h {
            // When both axes can split, pick one at random
            let split_vertically = if can_split_v && can_split_h {
                rng.one_in(2)
            } else {
                can_split_v
            };

            let (a, b) = if split_vertically {
                split_on_y(room, min_height, rng)
            } else {
                split_on_x(room, min_width, rng)
            };
            queue.push_back(a);
            queue.push_back(b);
        } else {
            rooms.push(room);
        }
    }

    rooms
}

/// Cut into a bottom and a top half, both at least `min_height` tall.
fn split_on_y(room: RoomRect, min_height: i32, rng: &mut GenRng) -> (RoomRect, RoomRect) {
    let slack = room.height() - 2 * min_height;
    let cut = min_height + rng.rn2(slack as u32 + 1) as i32;

    let bottom = RoomRect::new(room.min, Cell::new(room.width(), cut));
    let top = RoomRect::new(
        Cell::new(room.min.x, room.min.y + cut),
        Cell::new(room.width(), room.height() - cut),
    );
    (bottom, top)
}

/// Cut into a left and a right half, both at least `min_width` wide.
fn split_on_x(room: RoomRect, min_width: i32, rng: &mut GenRng) -> (RoomRect, RoomRect) {
    let slack = room.width() - 2 * min_width;
    let cut = min_width + rng.rn2(slack as u32 + 1) as i32;

    let left = RoomRect::new(room.min, Cell::new(cut, room.height()));
    let right = RoomRect::new(
        Cell::new(room.min.x + cut, room.min.y),
        Cell::new(room.width() - cut, room.height()),
    );
    (left, right)
}
