//! Room placement and corridor carving for random maps.

use rand_chacha::ChaCha8Rng;

use crate::config::MapgenConfig;
use crate::state::{Map, Tile};
use crate::types::Pos;

use super::seed::{coin_flip, random_below};

/// Room bounds; the outer ring stays wall and only the interior is carved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) struct RoomRect {
    pub(super) x1: i32,
    pub(super) y1: i32,
    pub(super) x2: i32,
    pub(super) y2: i32,
}

impl RoomRect {
    pub(super) fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x1: x, y1: y, x2: x + width, y2: y + height }
    }

    pub(super) fn center(self) -> Pos {
        Pos { y: (self.y1 + self.y2) / 2, x: (self.x1 + self.x2) / 2 }
    }

    pub(super) fn intersects(self, other: &Self) -> bool {
        self.x1 <= other.x2 && self.x2 >= other.x1 && self.y1 <= other.y2 && self.y2 >= other.y1
    }

    #[cfg(test)]
    pub(super) fn contains_interior(self, pos: Pos) -> bool {
        pos.x > self.x1 && pos.x < self.x2 && pos.y > self.y1 && pos.y < self.y2
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(super) struct RoomLayout {
    pub(super) map: Map,
    pub(super) rooms: Vec<RoomRect>,
}

pub(super) fn build_room_layout(rng: &mut ChaCha8Rng, config: &MapgenConfig) -> RoomLayout {
    let mut map = Map::filled(config.width, config.height, Tile::WALL);
    let mut rooms: Vec<RoomRect> = Vec::new();

    for _ in 0..config.max_rooms {
        let width = random_below(rng, config.room_max_size + 1) + config.room_min_size + 1;
        let height = random_below(rng, config.room_max_size + 1) + config.room_min_size + 1;
        let x = random_below(rng, config.width.saturating_sub(width));
        let y = random_below(rng, config.height.saturating_sub(height));
        let room = RoomRect::new(x as i32, y as i32, width as i32, height as i32);
        if rooms.iter().any(|other| room.intersects(other)) {
            continue;
        }

        carve_room(&mut map, room);
        let center = room.center();
        match rooms.last() {
            None => map.set_spawn(center),
            Some(previous) => {
                let previous = previous.center();
                carve_l_shaped_corridor(&mut map, previous, center, coin_flip(rng));
            }
        }
        rooms.push(room);
    }

    if rooms.is_empty() {
        let room = fallback_room(config);
        carve_room(&mut map, room);
        map.set_spawn(room.center());
        rooms.push(room);
    }

    if rooms.len() > 1
        && let Some(last) = rooms.last()
    {
        map.set_portal(last.center());
    }

    RoomLayout { map, rooms }
}

/// Smallest room centred on the map, used when no placement attempt was made.
fn fallback_room(config: &MapgenConfig) -> RoomRect {
    let width = (config.room_min_size + 2).min(config.width.saturating_sub(1)).max(2);
    let height = (config.room_min_size + 2).min(config.height.saturating_sub(1)).max(2);
    let x = config.width.saturating_sub(width) / 2;
    let y = config.height.saturating_sub(height) / 2;
    RoomRect::new(x as i32, y as i32, width as i32, height as i32)
}

fn carve_room(map: &mut Map, room: RoomRect) {
    for y in (room.y1 + 1)..room.y2 {
        for x in (room.x1 + 1)..room.x2 {
            map.set_tile(Pos { y, x }, Tile::FLOOR);
        }
    }
}

fn carve_l_shaped_corridor(map: &mut Map, start: Pos, end: Pos, horizontal_first: bool) {
    if horizontal_first {
        carve_horizontal_line(map, start.y, start.x, end.x);
        carve_vertical_line(map, end.x, start.y, end.y);
    } else {
        carve_vertical_line(map, start.x, start.y, end.y);
        carve_horizontal_line(map, end.y, start.x, end.x);
    }
}

fn carve_horizontal_line(map: &mut Map, y: i32, from_x: i32, to_x: i32) {
    for x in from_x.min(to_x)..=from_x.max(to_x) {
        map.set_tile(Pos { y, x }, Tile::FLOOR);
    }
}

fn carve_vertical_line(map: &mut Map, x: i32, from_y: i32, to_y: i32) {
    for y in from_y.min(to_y)..=from_y.max(to_y) {
        map.set_tile(Pos { y, x }, Tile::FLOOR);
    }
}
