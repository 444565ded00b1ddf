//! Keyboard and mouse input collection for one rendered frame.

use app::key_map::{BOUND_KEYS, Modifiers, command_for_key};
use app::map_view::MapView;
use app::ui_scale::UiScaleAction;
use game_core::{Command, GamePhase, Pos};
use macroquad::prelude::{
    KeyCode, MouseButton, is_key_down, is_key_pressed, is_mouse_button_pressed, mouse_position,
};

#[derive(Default)]
pub struct FrameInput {
    /// Last command produced this frame; later keys win.
    pub command: Option<Command>,
    pub hovered_tile: Option<Pos>,
    pub ui_scale_action: Option<UiScaleAction>,
}

pub fn capture_frame_input(phase: GamePhase, view: &MapView) -> FrameInput {
    let ctrl_down = is_key_down(KeyCode::LeftControl) || is_key_down(KeyCode::RightControl);
    let ui_scale_action = if ctrl_down && is_key_pressed(KeyCode::Equal) {
        Some(UiScaleAction::ZoomIn)
    } else if ctrl_down && is_key_pressed(KeyCode::Minus) {
        Some(UiScaleAction::ZoomOut)
    } else if ctrl_down && is_key_pressed(KeyCode::Key0) {
        Some(UiScaleAction::Reset)
    } else {
        None
    };

    let modifiers = Modifiers {
        shift: is_key_down(KeyCode::LeftShift) || is_key_down(KeyCode::RightShift),
        alt: is_key_down(KeyCode::LeftAlt) || is_key_down(KeyCode::RightAlt),
    };
    let mut command = None;
    if !ctrl_down {
        for key in BOUND_KEYS {
            if is_key_pressed(key)
                && let Some(next) = command_for_key(phase, key, modifiers)
            {
                command = Some(next);
            }
        }
    }

    let (mouse_x, mouse_y) = mouse_position();
    let hovered_tile = view.tile_at(mouse_x, mouse_y);
    if phase == GamePhase::PlayersTurn
        && is_mouse_button_pressed(MouseButton::Left)
        && let Some(tile) = hovered_tile
    {
        command = Some(Command::SetTarget(tile));
    }

    FrameInput { command, hovered_tile, ui_scale_action }
}
