//! Field-of-view ray casting and per-viewer visibility memory.
//! This module keeps sight rules deterministic and isolated from movement and combat.

use crate::state::Map;
use crate::types::Pos;

const RAY_COUNT: u32 = 360;
/// Radians per ray. Slightly under one degree; the resulting coverage is part of game balance.
const RAY_STEP: f64 = 0.01745;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FovCell {
    pub seen: bool,
    pub visible: bool,
}

/// Seen/visible flags for one viewer, sized to the map it was last updated against.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FovMap {
    width: usize,
    height: usize,
    cells: Vec<FovCell>,
}

impl FovMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seen(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(|cell| cell.seen)
    }

    pub fn visible(&self, pos: Pos) -> bool {
        self.cell(pos).is_some_and(|cell| cell.visible)
    }

    pub fn clear_visible(&mut self) {
        for cell in &mut self.cells {
            cell.visible = false;
        }
    }

    /// Forgets everything; used on map transitions.
    pub fn clear_seen(&mut self) {
        self.cells.fill(FovCell::default());
    }

    pub fn visible_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions_where(|cell| cell.visible)
    }

    pub fn seen_positions(&self) -> impl Iterator<Item = Pos> + '_ {
        self.positions_where(|cell| cell.seen)
    }

    fn positions_where(&self, keep: fn(&FovCell) -> bool) -> impl Iterator<Item = Pos> + '_ {
        let width = self.width.max(1);
        self.cells.iter().enumerate().filter(move |(_, cell)| keep(cell)).map(move |(idx, _)| {
            Pos { y: (idx / width) as i32, x: (idx % width) as i32 }
        })
    }

    fn fit_to(&mut self, map: &Map) {
        if self.width != map.width() || self.height != map.height() {
            self.width = map.width();
            self.height = map.height();
            self.cells = vec![FovCell::default(); self.width * self.height];
        }
    }

    fn index(&self, pos: Pos) -> Option<usize> {
        if pos.x < 0 || pos.y < 0 {
            return None;
        }
        let (x, y) = (pos.x as usize, pos.y as usize);
        (x < self.width && y < self.height).then_some(y * self.width + x)
    }

    fn cell(&self, pos: Pos) -> Option<&FovCell> {
        self.index(pos).and_then(|idx| self.cells.get(idx))
    }

    fn mark(&mut self, pos: Pos) {
        if let Some(idx) = self.index(pos) {
            self.cells[idx] = FovCell { seen: true, visible: true };
        }
    }
}

/// Rebuilds `fov`'s visible set from `viewer` and extends its seen set.
pub fn update_fov(map: &Map, fov: &mut FovMap, view_range: i32, viewer: Pos, ignore_opacity: bool) {
    fov.fit_to(map);
    fov.clear_visible();
    for ray in 0..RAY_COUNT {
        let angle = f64::from(ray) * RAY_STEP;
        cast_ray(map, fov, view_range, viewer, (angle.cos(), angle.sin()), ignore_opacity);
    }
}

fn cast_ray(
    map: &Map,
    fov: &mut FovMap,
    view_range: i32,
    viewer: Pos,
    (step_x, step_y): (f64, f64),
    ignore_opacity: bool,
) {
    let mut ox = f64::from(viewer.x);
    let mut oy = f64::from(viewer.y);
    for _ in 0..view_range {
        // Truncation after +0.5, not rounding: negative offsets collapse toward zero.
        let pos = Pos { y: (oy + 0.5) as i32, x: (ox + 0.5) as i32 };
        fov.mark(pos);
        if !ignore_opacity && map.is_opaque(pos) {
            return;
        }
        ox += step_x;
        oy += step_y;
    }
}

#[allow(dead_code)]
pub(super) fn draw_fov_diag(map: &Map, fov: &FovMap, viewer: Pos) -> String {
    let mut text = String::new();
    for pos in map.positions() {
        if pos.x == 0 && pos.y > 0 {
            text.push('\n');
        }
        let c = if pos == viewer {
            '@'
        } else if fov.visible(pos) {
            map.tile(pos).map_or(' ', |tile| tile.glyph)
        } else if fov.seen(pos) {
            's'
        } else {
            '?'
        };
        text.push(c);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;
    use crate::state::Tile;

    #[test]
    fn fov_open_room_visibility_is_bounded_by_range() {
        let (map, origin) = open_room_fixture();
        let mut fov = FovMap::new();
        update_fov(&map, &mut fov, 3, origin, false);
        assert!(fov.visible(origin));
        assert!(fov.visible(Pos { y: 5, x: 7 }));
        assert!(!fov.visible(Pos { y: 5, x: 8 }), "ray walks range-1 steps past the viewer");
        assert!(!fov.visible(Pos { y: 1, x: 1 }));
    }

    #[test]
    fn fov_repeat_is_deterministic_for_same_state() {
        let (mut map, origin) = open_room_fixture();
        map.set_tile(Pos { y: 5, x: 7 }, Tile::WALL);
        map.set_tile(Pos { y: 6, x: 7 }, Tile::WALL);

        let mut first = FovMap::new();
        update_fov(&map, &mut first, 8, origin, false);
        let mut second = first.clone();
        update_fov(&map, &mut second, 8, origin, false);

        assert_eq!(first, second, "FOV result must be identical for same map/origin");
    }

    #[test]
    fn fov_wall_is_visible_but_tiles_behind_it_are_not() {
        let (map, origin) = wall_occlusion_fixture();
        let mut fov = FovMap::new();
        update_fov(&map, &mut fov, 10, origin, false);

        assert!(fov.visible(Pos { y: 5, x: 5 }));
        assert!(fov.visible(Pos { y: 5, x: 6 }), "the wall itself is seen");
        assert!(
            !fov.visible(Pos { y: 5, x: 7 }),
            "tile directly behind corridor wall should be occluded\n{}",
            draw_fov_diag(&map, &fov, origin)
        );
    }

    #[test]
    fn xray_sees_past_walls_up_to_range() {
        let (map, origin) = wall_occlusion_fixture();
        let mut fov = FovMap::new();
        update_fov(&map, &mut fov, 6, origin, true);

        assert!(fov.visible(Pos { y: 5, x: 7 }));
        assert!(fov.visible(Pos { y: 5, x: 8 }));
        assert!(!fov.visible(Pos { y: 5, x: 9 }), "range still applies");
    }

    #[test]
    fn moving_away_keeps_tiles_seen_but_not_visible() {
        let (map, origin) = open_room_fixture();
        let mut fov = FovMap::new();
        update_fov(&map, &mut fov, 3, origin, false);
        let corner = Pos { y: 1, x: 1 };
        update_fov(&map, &mut fov, 3, Pos { y: 2, x: 2 }, false);
        assert!(fov.visible(corner));

        update_fov(&map, &mut fov, 3, Pos { y: 8, x: 8 }, false);
        assert!(!fov.visible(corner));
        assert!(fov.seen(corner));
        assert!(fov.seen(origin));
    }

    #[test]
    fn clear_seen_forgets_everything() {
        let (map, origin) = open_room_fixture();
        let mut fov = FovMap::new();
        update_fov(&map, &mut fov, 4, origin, false);
        fov.clear_seen();
        assert_eq!(fov.seen_positions().count(), 0);
        assert_eq!(fov.visible_positions().count(), 0);
    }

    #[test]
    fn viewer_at_map_edge_never_marks_outside_tiles() {
        let map = Map::open(4, 4);
        let mut fov = FovMap::new();
        update_fov(&map, &mut fov, 6, Pos { y: 0, x: 0 }, false);
        assert!(fov.visible_positions().all(|pos| map.in_dimensions(pos)));
        assert!(!fov.visible(Pos { y: -1, x: 0 }));
    }
}
