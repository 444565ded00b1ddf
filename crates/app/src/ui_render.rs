//! Rendering for the main menu, the map and the UI panels.

use crate::game_layout::{FrameLayout, PanelRect};
use crate::ui_text::{
    TAGLINE, TITLE, character_lines, fit_lines_to_panel, inventory_lines, menu_lines,
    mutation_lines, run_info, status_line,
};
use app::map_view::MapView;
use app::panels::Panels;
use app::seed::SeedChoice;
use app::ui_scale::UiScale;
use game_core::entity::Entity;
use game_core::state::Color as GlyphColor;
use game_core::{Game, GamePhase, GameState, Pos};
use macroquad::prelude::*;

const BORDER_COLOR: Color = Color { r: 0.25, g: 0.25, b: 0.25, a: 1.0 };
const REMEMBERED_COLOR: Color = Color { r: 0.3, g: 0.3, b: 0.35, a: 1.0 };
const HOVER_PATH_COLOR: Color = Color { r: 0.4, g: 1.0, b: 0.4, a: 0.25 };
const QUEUED_PATH_COLOR: Color = Color { r: 0.4, g: 0.4, b: 1.0, a: 0.25 };
const PATH_END_COLOR: Color = Color { r: 0.5, g: 0.5, b: 0.5, a: 0.45 };
const BORDER_THICKNESS: f32 = 1.0;
const PANEL_PAD_X: f32 = 10.0;
const PANEL_PAD_Y: f32 = 20.0;
const TEXT_SIZE: f32 = 18.0;
const LINE_STEP: f32 = 18.0;
pub const CELL_WIDTH: f32 = 12.0;
pub const CELL_HEIGHT: f32 = 18.0;
const GLYPH_SIZE: f32 = 22.0;

/// What one map cell shows from the player's point of view.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CellLook {
    Hidden,
    Remembered(char),
    Visible(char, Color),
}

pub struct FrameView<'a> {
    pub game: &'a Game,
    pub panels: &'a Panels,
    pub layout: &'a FrameLayout,
    pub map_view: &'a MapView,
    pub hovered: Option<Pos>,
    pub seed: SeedChoice,
    pub scale: UiScale,
}

pub fn map_view_for(game: &Game, layout: &FrameLayout, scale: UiScale) -> MapView {
    let state = game.state();
    let focus = state.player_pos().unwrap_or_else(|| state.map.spawn());
    MapView::centered(
        layout.map.as_tuple(),
        (scale.px(CELL_WIDTH), scale.px(CELL_HEIGHT)),
        focus,
        (state.map.width(), state.map.height()),
    )
}

pub fn draw_frame(frame: &FrameView<'_>) {
    clear_background(BLACK);
    if frame.game.phase() == GamePhase::MainMenu {
        draw_main_menu(frame);
        return;
    }
    draw_panel_borders(frame.layout, frame.scale);
    draw_paths(frame);
    draw_map(frame.game.state(), frame.map_view, frame.scale);
    let panels = frame.panels;
    draw_lines(&character_lines(&panels.character), frame.layout.character, frame.scale, WHITE);
    draw_lines(&mutation_lines(&panels.mutations), frame.layout.mutations, frame.scale, GREEN);
    draw_lines(&inventory_lines(&panels.inventory), frame.layout.inventory, frame.scale, YELLOW);
    draw_log(panels, frame.layout.log, frame.scale);
    draw_status(frame);
}

fn draw_main_menu(frame: &FrameView<'_>) {
    let scale = frame.scale;
    let center_x = screen_width() / 2.0;
    let mut y = screen_height() / 3.0;
    for (text, size, color) in [(TITLE, 48.0, ORANGE), (TAGLINE, 20.0, LIGHTGRAY)] {
        draw_centered(text, center_x, y, scale.px(size), color);
        y += scale.px(size) * 1.5;
    }
    y += scale.px(LINE_STEP);
    for line in menu_lines(frame.game.menu()) {
        draw_centered(&line, center_x, y, scale.px(28.0), WHITE);
        y += scale.px(36.0);
    }
    draw_centered(&status_line(frame.game, frame.panels), center_x, y, scale.px(16.0), GRAY);
}

fn draw_centered(text: &str, center_x: f32, y: f32, size: f32, color: Color) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, center_x - dims.width / 2.0, y, size, color);
}

fn draw_panel_borders(layout: &FrameLayout, scale: UiScale) {
    for panel in layout.panels() {
        draw_rectangle_lines(
            panel.x,
            panel.y,
            panel.width,
            panel.height,
            scale.px(BORDER_THICKNESS),
            BORDER_COLOR,
        );
    }
}

fn draw_map(state: &GameState, view: &MapView, scale: UiScale) {
    for pos in view.visible_tiles() {
        let Some((x, y)) = view.screen_pos(pos) else {
            continue;
        };
        let (glyph, color) = match resolve_cell(state, pos) {
            CellLook::Hidden => continue,
            CellLook::Remembered(glyph) => (glyph, REMEMBERED_COLOR),
            CellLook::Visible(glyph, color) => (glyph, color),
        };
        let mut buffer = [0u8; 4];
        draw_text(
            glyph.encode_utf8(&mut buffer),
            x,
            y + view.cell_height * 0.8,
            scale.px(GLYPH_SIZE),
            color,
        );
    }
}

/// Queued walk in blue, the hovered route in green, stopping at the first known obstacle.
fn draw_paths(frame: &FrameView<'_>) {
    let state = frame.game.state();
    let view = frame.map_view;
    let queued: Vec<Pos> = state.movement_path.iter().copied().collect();
    fill_path(state, view, &queued, QUEUED_PATH_COLOR);

    if frame.game.phase() != GamePhase::PlayersTurn {
        return;
    }
    let Some(goal) = frame.hovered else {
        return;
    };
    let seen = state.player().fov.as_ref().is_some_and(|fov| fov.seen(goal));
    if !seen {
        return;
    }
    let path = frame.game.player_path_to(goal);
    fill_path(state, view, &path, HOVER_PATH_COLOR);
    if let Some((x, y)) = path.last().and_then(|end| view.screen_pos(*end)) {
        draw_rectangle(x, y, view.cell_width, view.cell_height, PATH_END_COLOR);
    }
}

fn fill_path(state: &GameState, view: &MapView, path: &[Pos], color: Color) {
    for step in path {
        let Some((x, y)) = view.screen_pos(*step) else {
            continue;
        };
        draw_rectangle(x, y, view.cell_width, view.cell_height, color);
        if state.blocking_entity_at(*step).is_some() {
            break;
        }
    }
}

pub fn resolve_cell(state: &GameState, pos: Pos) -> CellLook {
    let Some(fov) = state.player().fov.as_ref() else {
        return CellLook::Hidden;
    };
    let Some(tile) = state.map.tile(pos) else {
        return CellLook::Hidden;
    };
    if !fov.visible(pos) {
        return if fov.seen(pos) { CellLook::Remembered(tile.glyph) } else { CellLook::Hidden };
    }

    let top = state
        .entities_at(pos)
        .max_by_key(|(id, entity)| render_layer(entity, *id == state.player_id));
    match top {
        Some((_, entity)) => {
            CellLook::Visible(entity.appearance.glyph, glyph_color(entity.appearance.color))
        }
        None => CellLook::Visible(tile.glyph, glyph_color(tile.color)),
    }
}

/// Higher layers draw over lower ones on a shared tile.
fn render_layer(entity: &Entity, is_player: bool) -> u8 {
    if is_player {
        3
    } else if entity.dead {
        0
    } else if entity.blocks {
        2
    } else {
        1
    }
}

pub fn glyph_color(color: GlyphColor) -> Color {
    Color::from_rgba(color.r, color.g, color.b, 255)
}

fn draw_lines(lines: &[String], panel: PanelRect, scale: UiScale, color: Color) {
    let text_x = panel.x + scale.px(PANEL_PAD_X);
    let mut text_y = panel.y + scale.px(PANEL_PAD_Y);
    let visible =
        fit_lines_to_panel(lines, panel.height, scale.px(LINE_STEP), scale.px(PANEL_PAD_Y));
    for line in visible {
        draw_text(&line, text_x, text_y, scale.px(TEXT_SIZE), color);
        text_y += scale.px(LINE_STEP);
    }
}

fn draw_log(panels: &Panels, panel: PanelRect, scale: UiScale) {
    let usable = (panel.height - scale.px(PANEL_PAD_Y)).max(0.0);
    let rows = (usable / scale.px(LINE_STEP)).floor() as usize + 1;
    let text_x = panel.x + scale.px(PANEL_PAD_X);
    let mut text_y = panel.y + scale.px(PANEL_PAD_Y);
    for line in panels.recent_log(rows) {
        draw_text(line, text_x, text_y, scale.px(TEXT_SIZE), LIGHTGRAY);
        text_y += scale.px(LINE_STEP);
    }
}

fn draw_status(frame: &FrameView<'_>) {
    let panel = frame.layout.status;
    let scale = frame.scale;
    let baseline = panel.y + scale.px(PANEL_PAD_Y);
    draw_text(
        &status_line(frame.game, frame.panels),
        panel.x + scale.px(PANEL_PAD_X),
        baseline,
        scale.px(TEXT_SIZE),
        WHITE,
    );
    let info = run_info(frame.game, frame.seed);
    let size = scale.px(14.0);
    let dims = measure_text(&info, None, size as u16, 1.0);
    draw_text(
        &info,
        panel.x + panel.width - dims.width - scale.px(PANEL_PAD_X),
        baseline,
        size,
        GRAY,
    );
}
