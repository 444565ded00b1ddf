//! Capability-based entity record.
//! Systems check which components are present before acting on an entity.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InventoryFull;
use crate::game::visibility::FovMap;
use crate::state::Color;
use crate::types::Pos;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Appearance {
    pub glyph: char,
    pub color: Color,
}

/// Current position plus the home position the entity was placed at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Position {
    pub current: Pos,
    pub initial: Pos,
}

impl Position {
    pub fn at(pos: Pos) -> Self {
        Self { current: pos, initial: pos }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combat {
    pub power: i32,
    pub defense: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Health {
    pub hp: i32,
    pub current_hp: i32,
    pub regeneration: i32,
}

impl Health {
    pub fn full(hp: i32, regeneration: i32) -> Self {
        Self { hp, current_hp: hp, regeneration }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Ai {
    pub engage_range: f64,
    pub leash_range: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vision {
    pub range: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemEffect {
    Healing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Item {
    pub effect: ItemEffect,
    pub data: i32,
    pub consumable: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryItem {
    pub name: String,
    pub item: Item,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Inventory {
    pub max_slots: usize,
    pub items: Vec<InventoryItem>,
}

impl Inventory {
    pub fn new(max_slots: usize) -> Self {
        Self { max_slots, items: Vec::new() }
    }

    pub fn is_full(&self) -> bool {
        self.items.len() >= self.max_slots
    }

    pub fn add(&mut self, item: InventoryItem) -> Result<(), InventoryFull> {
        if self.is_full() {
            return Err(InventoryFull);
        }
        self.items.push(item);
        Ok(())
    }

    /// Removes and returns the item in `slot`, shifting later items down.
    pub fn pop(&mut self, slot: usize) -> Option<InventoryItem> {
        if slot < self.items.len() { Some(self.items.remove(slot)) } else { None }
    }

    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|entry| entry.name.clone()).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationEffect {
    Inventory,
    #[serde(alias = "Xray")]
    XRay,
    IncreasedVision,
    Regeneration,
}

impl fmt::Display for MutationEffect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MutationEffect::Inventory => "Inventory",
            MutationEffect::XRay => "XRay",
            MutationEffect::IncreasedVision => "IncreasedVision",
            MutationEffect::Regeneration => "Regeneration",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MutationCategory {
    Core,
    Eyes,
    Claws,
    Tail,
}

impl fmt::Display for MutationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MutationCategory::Core => "Core",
            MutationCategory::Eyes => "Eyes",
            MutationCategory::Claws => "Claws",
            MutationCategory::Tail => "Tail",
        };
        f.write_str(name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivationState {
    Ready,
    Active { remaining: u32 },
    Cooldown { remaining: u32 },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Activation {
    pub active_turns: u32,
    pub cooldown_turns: u32,
    pub state: ActivationState,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mutation {
    pub effect: MutationEffect,
    pub category: MutationCategory,
    pub data: i32,
    /// `None` for permanently active mutations.
    pub activation: Option<Activation>,
}

impl Mutation {
    pub fn permanent(effect: MutationEffect, category: MutationCategory, data: i32) -> Self {
        Self { effect, category, data, activation: None }
    }

    pub fn in_effect(&self) -> bool {
        match self.activation {
            None => true,
            Some(activation) => matches!(activation.state, ActivationState::Active { .. }),
        }
    }

    pub fn description(&self) -> String {
        match self.effect {
            MutationEffect::Inventory => "Provides an inventory.".to_string(),
            MutationEffect::XRay => "Lets you look through walls.".to_string(),
            MutationEffect::IncreasedVision => {
                format!("Permanently increases vision by {}.", self.data)
            }
            MutationEffect::Regeneration => {
                format!("Regenerates {} hit points per turn.", self.data)
            }
        }
    }
}

impl fmt::Display for Mutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.category, self.effect)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    Interact,
    UseItem(usize),
    ActivateMutation(usize),
}

#[derive(Clone, Debug)]
pub struct Entity {
    pub name: String,
    pub appearance: Appearance,
    pub position: Option<Position>,
    pub target: Option<Pos>,
    pub combat: Option<Combat>,
    pub health: Option<Health>,
    pub ai: Option<Ai>,
    pub vision: Option<Vision>,
    pub item: Option<Item>,
    /// Mutation lying on the floor, waiting to be consumed.
    pub mutagen: Option<Mutation>,
    pub mutations: Vec<Mutation>,
    pub inventory: Option<Inventory>,
    pub fov: Option<FovMap>,
    pub intent: Option<Intent>,
    pub blocks: bool,
    pub dead: bool,
}

impl Entity {
    pub fn new(name: impl Into<String>, appearance: Appearance) -> Self {
        Self {
            name: name.into(),
            appearance,
            position: None,
            target: None,
            combat: None,
            health: None,
            ai: None,
            vision: None,
            item: None,
            mutagen: None,
            mutations: Vec::new(),
            inventory: None,
            fov: None,
            intent: None,
            blocks: false,
            dead: false,
        }
    }

    pub fn pos(&self) -> Option<Pos> {
        self.position.map(|position| position.current)
    }

    pub fn home(&self) -> Option<Pos> {
        self.position.map(|position| position.initial)
    }

    pub fn place_at(&mut self, pos: Pos) {
        self.position = Some(Position::at(pos));
        self.target = Some(pos);
    }

    pub fn move_to(&mut self, pos: Pos) {
        if let Some(position) = self.position.as_mut() {
            position.current = pos;
        }
    }

    pub fn has_mutation(&self, effect: MutationEffect) -> bool {
        self.mutations.iter().any(|mutation| mutation.effect == effect)
    }

    pub fn mutation_in_effect(&self, effect: MutationEffect) -> bool {
        self.mutations.iter().any(|mutation| mutation.effect == effect && mutation.in_effect())
    }

    /// Summed data of all in-effect mutations with `effect`.
    pub fn mutation_bonus(&self, effect: MutationEffect) -> i32 {
        self.mutations
            .iter()
            .filter(|mutation| mutation.effect == effect && mutation.in_effect())
            .map(|mutation| mutation.data)
            .sum()
    }

    pub fn view_range(&self) -> Option<i32> {
        self.vision
            .map(|vision| vision.range + self.mutation_bonus(MutationEffect::IncreasedVision))
    }

    pub fn sees_through_walls(&self) -> bool {
        self.mutation_in_effect(MutationEffect::XRay)
    }

    pub fn regeneration(&self) -> i32 {
        self.health.map_or(0, |health| health.regeneration)
            + self.mutation_bonus(MutationEffect::Regeneration)
    }
}
