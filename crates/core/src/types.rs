use std::fmt;

use serde::{Deserialize, Serialize};
use slotmap::new_key_type;

new_key_type! {
    pub struct EntityId;
}

#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct Pos {
    pub y: i32,
    pub x: i32,
}

impl Pos {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self { y: self.y + dy, x: self.x + dx }
    }

    pub fn is_adjacent(self, other: Pos) -> bool {
        self != other && self.x.abs_diff(other.x) <= 1 && self.y.abs_diff(other.y) <= 1
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GamePhase {
    MainMenu,
    PlayersTurn,
    EnemyTurn,
    GameOver,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    NorthEast,
    East,
    SouthEast,
    South,
    SouthWest,
    West,
    NorthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// Screen-space delta: north is `y - 1`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::NorthEast => (1, -1),
            Direction::East => (1, 0),
            Direction::SouthEast => (1, 1),
            Direction::South => (0, 1),
            Direction::SouthWest => (-1, 1),
            Direction::West => (-1, 0),
            Direction::NorthWest => (-1, -1),
        }
    }
}

/// Abstract input understood by [`crate::Game::dispatch`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Move(Direction),
    Wait,
    Interact,
    UseItem(usize),
    ActivateMutation(usize),
    SetTarget(Pos),
    MenuUp,
    MenuDown,
    Confirm,
    SelectMap(usize),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DispatchOutcome {
    Ignored,
    Handled,
    Advanced(AdvanceResult),
    QuitRequested,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AdvanceStopReason {
    TurnComplete,
    PlayerDied,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdvanceResult {
    pub tick: u64,
    pub stop_reason: AdvanceStopReason,
}

/// Player-facing message produced by the simulation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LogEvent {
    Welcome,
    Intro,
    MapChanged,
    Attack { attacker: String, target: String, damage: i32, hp: i32, max_hp: i32 },
    Died { name: String },
    ItemPickedUp { name: String },
    InventoryFull { name: String },
    NoInventory,
    MutationConsumed { mutation: String },
    MutationAlreadyPresent { mutation: String },
    Healed { item: String, amount: i32 },
    ItemUsed { item: String },
    MutationActivated { mutation: String, turns: u32 },
    MutationNotReady { mutation: String },
    MutationNotActivatable { mutation: String },
    MutationExpired { mutation: String },
    MutationReady { mutation: String },
}

impl fmt::Display for LogEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogEvent::Welcome => write!(f, "Welcome to Asciiventure."),
            LogEvent::Intro => {
                write!(f, "A small cat takes a stroll and ends up in an epic adventure.")
            }
            LogEvent::MapChanged => write!(f, "Map changed."),
            LogEvent::Attack { attacker, target, damage, hp, max_hp } => write!(
                f,
                "{attacker} scratches {target} for {damage} hit points. {hp}/{max_hp} HP left."
            ),
            LogEvent::Died { name } => write!(f, "{name} is dead."),
            LogEvent::ItemPickedUp { name } => write!(f, "{name} added to inventory."),
            LogEvent::InventoryFull { name } => {
                write!(f, "Your inventory is full, {name} stays on the floor.")
            }
            LogEvent::NoInventory => {
                write!(f, "You are a cat, you cannot pick up things (or can you?).")
            }
            LogEvent::MutationConsumed { mutation } => write!(f, "Mutation {mutation} consumed."),
            LogEvent::MutationAlreadyPresent { mutation } => {
                write!(f, "You already have the mutation {mutation}.")
            }
            LogEvent::Healed { item, amount } => {
                write!(f, "{item} heals you for {amount} hit points.")
            }
            LogEvent::ItemUsed { item } => write!(f, "{item} used."),
            LogEvent::MutationActivated { mutation, turns } => {
                write!(f, "{mutation} activated for {turns} turns.")
            }
            LogEvent::MutationNotReady { mutation } => write!(f, "{mutation} is not ready yet."),
            LogEvent::MutationNotActivatable { mutation } => {
                write!(f, "{mutation} cannot be activated.")
            }
            LogEvent::MutationExpired { mutation } => write!(f, "{mutation} wore off."),
            LogEvent::MutationReady { mutation } => write!(f, "{mutation} is ready again."),
        }
    }
}
