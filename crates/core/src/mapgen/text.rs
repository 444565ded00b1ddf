//! Line-oriented text map format: one character per tile.
//!
//! `@` marks the spawn point, `+` the portal, `#` a wall, and a space is floor.
//! Any other character becomes a blocking, see-through tile showing that glyph.

use std::collections::BTreeMap;

use crate::error::MapError;
use crate::state::{Color, Map, Tile};
use crate::types::Pos;

const DECOR_COLOR: Color = Color::rgb(200, 200, 200);

pub fn parse_text_map(text: &str) -> Result<Map, MapError> {
    let mut sparse: BTreeMap<Pos, Tile> = BTreeMap::new();
    let mut spawn = None;
    let mut portal = None;
    let mut width = 0usize;
    let mut height = 0usize;

    for (y, line) in text.lines().enumerate() {
        height = y + 1;
        for (x, ch) in line.chars().enumerate() {
            width = width.max(x + 1);
            let pos = Pos { y: y as i32, x: x as i32 };
            let tile = match ch {
                '@' => {
                    if spawn.is_some() {
                        log::warn!("spawn point defined more than once, ignoring {pos:?}");
                    } else {
                        spawn = Some(pos);
                    }
                    Tile::FLOOR
                }
                '+' if portal.is_some() => {
                    log::warn!("portal defined more than once, treating {pos:?} as floor");
                    Tile::FLOOR
                }
                '+' => {
                    portal = Some(pos);
                    Tile::PORTAL
                }
                '#' => Tile::WALL,
                ' ' => Tile::FLOOR,
                other => Tile { glyph: other, blocking: true, opaque: false, color: DECOR_COLOR },
            };
            sparse.insert(pos, tile);
        }
    }

    if sparse.is_empty() {
        return Err(MapError::Empty);
    }
    let spawn = spawn.ok_or(MapError::MissingSpawn)?;

    // Short rows leave holes inside the bounding box; those behave as open floor.
    let mut map = Map::filled(width, height, Tile::FLOOR);
    for (pos, tile) in sparse {
        map.set_tile(pos, tile);
    }
    map.set_spawn(spawn);
    if let Some(portal) = portal {
        map.set_portal(portal);
    }
    Ok(map)
}
