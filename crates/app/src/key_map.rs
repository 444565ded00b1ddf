//! Translation from pressed keys into game commands.
//!
//! Movement follows the arrow keys, the numeric keypad and the vi layout:
//!
//! ```text
//! y k u
//! h   l
//! b j n
//! ```

use game_core::{Command, Direction, GamePhase};
use macroquad::prelude::KeyCode;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub shift: bool,
    pub alt: bool,
}

/// Every key the frame capture polls.
pub const BOUND_KEYS: [KeyCode; 39] = [
    KeyCode::Up,
    KeyCode::Down,
    KeyCode::Left,
    KeyCode::Right,
    KeyCode::K,
    KeyCode::J,
    KeyCode::H,
    KeyCode::L,
    KeyCode::Y,
    KeyCode::U,
    KeyCode::B,
    KeyCode::N,
    KeyCode::Kp1,
    KeyCode::Kp2,
    KeyCode::Kp3,
    KeyCode::Kp4,
    KeyCode::Kp5,
    KeyCode::Kp6,
    KeyCode::Kp7,
    KeyCode::Kp8,
    KeyCode::Kp9,
    KeyCode::Space,
    KeyCode::Period,
    KeyCode::G,
    KeyCode::Enter,
    KeyCode::KpEnter,
    KeyCode::Escape,
    KeyCode::Q,
    KeyCode::Key1,
    KeyCode::Key2,
    KeyCode::Key3,
    KeyCode::Key4,
    KeyCode::Key5,
    KeyCode::Key6,
    KeyCode::Key7,
    KeyCode::Key8,
    KeyCode::Key9,
    KeyCode::PageUp,
    KeyCode::PageDown,
];

pub fn command_for_key(phase: GamePhase, key: KeyCode, modifiers: Modifiers) -> Option<Command> {
    match phase {
        GamePhase::MainMenu => menu_command(key),
        GamePhase::PlayersTurn | GamePhase::EnemyTurn | GamePhase::GameOver => {
            play_command(key, modifiers)
        }
    }
}

fn menu_command(key: KeyCode) -> Option<Command> {
    match key {
        KeyCode::Up | KeyCode::K | KeyCode::Kp8 | KeyCode::PageUp => Some(Command::MenuUp),
        KeyCode::Down | KeyCode::J | KeyCode::Kp2 | KeyCode::PageDown => Some(Command::MenuDown),
        KeyCode::Enter | KeyCode::KpEnter | KeyCode::G | KeyCode::Space => Some(Command::Confirm),
        KeyCode::Escape | KeyCode::Q => Some(Command::Quit),
        _ => None,
    }
}

fn play_command(key: KeyCode, modifiers: Modifiers) -> Option<Command> {
    if let Some(direction) = movement_direction(key) {
        return Some(Command::Move(direction));
    }
    if let Some(slot) = digit_slot(key) {
        let command = if modifiers.alt {
            Command::SelectMap(slot)
        } else if modifiers.shift {
            Command::ActivateMutation(slot)
        } else {
            Command::UseItem(slot)
        };
        return Some(command);
    }
    match key {
        KeyCode::Space | KeyCode::Period | KeyCode::Kp5 => Some(Command::Wait),
        KeyCode::G | KeyCode::Enter | KeyCode::KpEnter => Some(Command::Interact),
        KeyCode::Escape | KeyCode::Q => Some(Command::Quit),
        _ => None,
    }
}

fn movement_direction(key: KeyCode) -> Option<Direction> {
    let direction = match key {
        KeyCode::Up | KeyCode::K | KeyCode::Kp8 => Direction::North,
        KeyCode::U | KeyCode::Kp9 => Direction::NorthEast,
        KeyCode::Right | KeyCode::L | KeyCode::Kp6 => Direction::East,
        KeyCode::N | KeyCode::Kp3 => Direction::SouthEast,
        KeyCode::Down | KeyCode::J | KeyCode::Kp2 => Direction::South,
        KeyCode::B | KeyCode::Kp1 => Direction::SouthWest,
        KeyCode::Left | KeyCode::H | KeyCode::Kp4 => Direction::West,
        KeyCode::Y | KeyCode::Kp7 => Direction::NorthWest,
        _ => return None,
    };
    Some(direction)
}

/// Zero-based slot for the number row keys 1 to 9.
fn digit_slot(key: KeyCode) -> Option<usize> {
    let slot = match key {
        KeyCode::Key1 => 0,
        KeyCode::Key2 => 1,
        KeyCode::Key3 => 2,
        KeyCode::Key4 => 3,
        KeyCode::Key5 => 4,
        KeyCode::Key6 => 5,
        KeyCode::Key7 => 6,
        KeyCode::Key8 => 7,
        KeyCode::Key9 => 8,
        _ => return None,
    };
    Some(slot)
}
