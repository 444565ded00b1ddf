//! Camera over the tile grid: which tiles fit in the map panel and where they land on screen.

use game_core::Pos;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MapView {
    /// Screen position of the top-left drawn cell.
    pub origin_x: f32,
    pub origin_y: f32,
    pub cell_width: f32,
    pub cell_height: f32,
    /// Tile shown in the top-left cell.
    pub first: Pos,
    pub columns: i32,
    pub rows: i32,
}

impl MapView {
    /// Fits as many cells as the panel holds and centres them on `focus`, clamped to the map.
    pub fn centered(
        panel: (f32, f32, f32, f32),
        cell: (f32, f32),
        focus: Pos,
        map_size: (usize, usize),
    ) -> Self {
        let (x, y, width, height) = panel;
        let (cell_width, cell_height) = (cell.0.max(1.0), cell.1.max(1.0));
        let columns = (width / cell_width).floor().max(0.0) as i32;
        let rows = (height / cell_height).floor().max(0.0) as i32;
        let first = Pos {
            y: first_index(focus.y, rows, map_size.1 as i32),
            x: first_index(focus.x, columns, map_size.0 as i32),
        };
        Self { origin_x: x, origin_y: y, cell_width, cell_height, first, columns, rows }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        let (dx, dy) = (pos.x - self.first.x, pos.y - self.first.y);
        (0..self.columns).contains(&dx) && (0..self.rows).contains(&dy)
    }

    /// Top-left screen corner of the cell drawing `pos`.
    pub fn screen_pos(&self, pos: Pos) -> Option<(f32, f32)> {
        self.contains(pos).then(|| {
            (
                self.origin_x + (pos.x - self.first.x) as f32 * self.cell_width,
                self.origin_y + (pos.y - self.first.y) as f32 * self.cell_height,
            )
        })
    }

    pub fn tile_at(&self, screen_x: f32, screen_y: f32) -> Option<Pos> {
        let column = ((screen_x - self.origin_x) / self.cell_width).floor();
        let row = ((screen_y - self.origin_y) / self.cell_height).floor();
        if !column.is_finite() || !row.is_finite() || column < 0.0 || row < 0.0 {
            return None;
        }
        let pos = Pos { y: self.first.y + row as i32, x: self.first.x + column as i32 };
        self.contains(pos).then_some(pos)
    }

    pub fn visible_tiles(&self) -> impl Iterator<Item = Pos> + '_ {
        (0..self.rows).flat_map(move |row| {
            (0..self.columns).map(move |column| Pos {
                y: self.first.y + row,
                x: self.first.x + column,
            })
        })
    }
}

fn first_index(focus: i32, cells: i32, map_len: i32) -> i32 {
    if cells >= map_len {
        return 0;
    }
    (focus - cells / 2).clamp(0, map_len - cells)
}
