use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use slotmap::SlotMap;

use crate::entity::Entity;
use crate::types::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tile {
    pub glyph: char,
    pub blocking: bool,
    pub opaque: bool,
    pub color: Color,
}

impl Tile {
    pub const FLOOR: Tile =
        Tile { glyph: '·', blocking: false, opaque: false, color: Color::rgb(220, 220, 220) };
    pub const WALL: Tile =
        Tile { glyph: '#', blocking: true, opaque: true, color: Color::rgb(200, 200, 200) };
    pub const PORTAL: Tile =
        Tile { glyph: '+', blocking: false, opaque: false, color: Color::rgb(120, 80, 255) };
}

/// Grid of tiles with contiguous storage indexed by `y * width + x`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Map {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
    spawn: Pos,
    portal: Option<Pos>,
}

impl Map {
    pub fn filled(width: usize, height: usize, tile: Tile) -> Self {
        Self { width, height, tiles: vec![tile; width * height], spawn: Pos::default(), portal: None }
    }

    /// All-floor map, mostly useful for fixtures.
    pub fn open(width: usize, height: usize) -> Self {
        Self::filled(width, height, Tile::FLOOR)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Inclusive maxima of stored coordinates.
    pub fn dimensions(&self) -> (i32, i32) {
        (self.width as i32 - 1, self.height as i32 - 1)
    }

    pub fn in_dimensions(&self, pos: Pos) -> bool {
        pos.x >= 0
            && pos.y >= 0
            && (pos.x as usize) < self.width
            && (pos.y as usize) < self.height
    }

    pub fn tile(&self, pos: Pos) -> Option<&Tile> {
        if !self.in_dimensions(pos) {
            return None;
        }
        self.tiles.get(self.index(pos))
    }

    pub fn set_tile(&mut self, pos: Pos, tile: Tile) {
        if !self.in_dimensions(pos) {
            return;
        }
        let idx = self.index(pos);
        self.tiles[idx] = tile;
    }

    pub fn is_empty(&self, pos: Pos) -> bool {
        self.tile(pos).is_some_and(|tile| !tile.blocking)
    }

    pub fn is_opaque(&self, pos: Pos) -> bool {
        self.tile(pos).is_some_and(|tile| tile.opaque)
    }

    /// Empty Moore neighbors of `pos`, excluding `pos` itself.
    pub fn neighbors(&self, pos: Pos) -> Vec<Pos> {
        let mut neighbors = Vec::with_capacity(8);
        for dx in -1..=1 {
            for dy in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }
                let next = pos.offset(dx, dy);
                if self.is_empty(next) {
                    neighbors.push(next);
                }
            }
        }
        neighbors
    }

    pub fn distance(&self, a: Pos, b: Pos) -> f64 {
        distance(a, b)
    }

    pub fn spawn(&self) -> Pos {
        self.spawn
    }

    pub fn set_spawn(&mut self, pos: Pos) {
        self.spawn = pos;
    }

    pub fn portal(&self) -> Option<Pos> {
        self.portal
    }

    pub fn set_portal(&mut self, pos: Pos) {
        self.set_tile(pos, Tile::PORTAL);
        self.portal = Some(pos);
    }

    pub fn positions(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Pos { y: y as i32, x: x as i32 })
        })
    }

    fn index(&self, pos: Pos) -> usize {
        (pos.y as usize) * self.width + (pos.x as usize)
    }
}

pub fn distance(a: Pos, b: Pos) -> f64 {
    let dx = f64::from(b.x - a.x);
    let dy = f64::from(b.y - a.y);
    (dx * dx + dy * dy).sqrt()
}

pub struct GameState {
    pub map: Map,
    pub entities: SlotMap<EntityId, Entity>,
    pub player_id: EntityId,
    pub movement_path: VecDeque<Pos>,
}

impl GameState {
    pub fn new(map: Map, player: Entity) -> Self {
        let mut entities = SlotMap::with_key();
        let player_id = entities.insert(player);
        Self { map, entities, player_id, movement_path: VecDeque::new() }
    }

    pub fn player(&self) -> &Entity {
        &self.entities[self.player_id]
    }

    pub fn player_pos(&self) -> Option<Pos> {
        self.player().pos()
    }

    /// Living entity that physically blocks `pos`.
    pub fn blocking_entity_at(&self, pos: Pos) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|(_, entity)| entity.blocks && !entity.dead && entity.pos() == Some(pos))
            .map(|(id, _)| id)
    }

    pub fn entities_at(&self, pos: Pos) -> impl Iterator<Item = (EntityId, &Entity)> + '_ {
        self.entities.iter().filter(move |(_, entity)| entity.pos() == Some(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_tiles_are_blocked_but_not_opaque() {
        let map = Map::open(5, 5);
        let outside = Pos { y: -1, x: 2 };
        assert!(!map.is_empty(outside));
        assert!(!map.is_opaque(outside));
        assert!(!map.is_empty(Pos { y: 2, x: 5 }));
    }

    #[test]
    fn dimensions_are_inclusive_maxima() {
        let map = Map::open(7, 4);
        assert_eq!(map.dimensions(), (6, 3));
        assert!(map.in_dimensions(Pos { y: 3, x: 6 }));
        assert!(!map.in_dimensions(Pos { y: 4, x: 6 }));
    }

    #[test]
    fn neighbors_skip_self_and_blocking_tiles() {
        let mut map = Map::open(3, 3);
        map.set_tile(Pos { y: 0, x: 1 }, Tile::WALL);
        let neighbors = map.neighbors(Pos { y: 1, x: 1 });
        assert_eq!(neighbors.len(), 7);
        assert!(!neighbors.contains(&Pos { y: 1, x: 1 }));
        assert!(!neighbors.contains(&Pos { y: 0, x: 1 }));

        let corner = map.neighbors(Pos { y: 0, x: 0 });
        assert_eq!(corner, vec![Pos { y: 1, x: 0 }, Pos { y: 1, x: 1 }]);
    }

    #[test]
    fn distance_is_euclidean() {
        let map = Map::open(10, 10);
        assert_eq!(map.distance(Pos { y: 0, x: 0 }, Pos { y: 4, x: 3 }), 5.0);
    }
}
