//! JSON entity definitions and the built-in content pack.

use serde::{Deserialize, Serialize};

use crate::entity::{
    Activation, ActivationState, Ai, Appearance, Combat, Entity, Health, Item, ItemEffect,
    Mutation, MutationCategory, MutationEffect, Vision,
};
use crate::error::ContentError;
use crate::game::visibility::FovMap;
use crate::state::Color;

pub mod keys {
    pub const PLAYER_CAT: &str = "Cat";
    pub const MONSTER_MOUSE: &str = "Mouse";
    pub const MONSTER_DOG: &str = "Dog";
    pub const ITEM_HEALING_POTION: &str = "Healing Potion";
}

const PLAYER_JSON: &str = r#"{
    "name": "Cat",
    "glyph": { "char": "@", "color": { "r": 0, "g": 128, "b": 255 } },
    "blocks": true,
    "health": { "hp": 20 },
    "combat": { "power": 4, "defense": 1 },
    "vision": { "range": 10 }
}"#;

const MONSTERS_JSON: &str = r#"[
    {
        "name": "Mouse",
        "glyph": { "char": "m", "color": { "r": 160, "g": 160, "b": 160 } },
        "health": { "hp": 4 },
        "combat": { "power": 2, "defense": 0 },
        "ai": { "engage_range": 5.0, "leash_range": 8.0 },
        "vision": { "range": 6 }
    },
    {
        "name": "Dog",
        "glyph": { "char": "d", "color": { "r": 200, "g": 120, "b": 40 } },
        "health": { "hp": 10 },
        "combat": { "power": 5, "defense": 1 },
        "ai": { "engage_range": 7.0, "leash_range": 12.0 },
        "vision": { "range": 8 }
    }
]"#;

const ITEMS_JSON: &str = r#"[
    {
        "name": "Healing Potion",
        "glyph": { "char": "!", "color": { "r": 255, "g": 60, "b": 60 } },
        "item": { "effect": "Healing", "data": 8 }
    }
]"#;

const MUTAGENS_JSON: &str = r#"[
    {
        "name": "Mutagen of Sharp Eyes",
        "glyph": { "char": "*", "color": { "r": 60, "g": 220, "b": 60 } },
        "mutagen": { "effect": "IncreasedVision", "category": "Eyes", "data": 3 }
    },
    {
        "name": "Mutagen of the Pouch",
        "glyph": { "char": "*", "color": { "r": 220, "g": 200, "b": 60 } },
        "mutagen": { "effect": "Inventory", "category": "Core", "data": 5 }
    },
    {
        "name": "Mutagen of Piercing Sight",
        "glyph": { "char": "*", "color": { "r": 60, "g": 200, "b": 220 } },
        "mutagen": { "effect": "XRay", "category": "Eyes", "data": 0,
                     "activatable": true, "active_turns": 8, "cooldown_turns": 30 }
    },
    {
        "name": "Mutagen of the Lizard Tail",
        "glyph": { "char": "*", "color": { "r": 200, "g": 60, "b": 220 } },
        "mutagen": { "effect": "Regeneration", "category": "Tail", "data": 1,
                     "activatable": true, "active_turns": 5, "cooldown_turns": 20 }
    }
]"#;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GlyphDefinition {
    pub char: char,
    pub color: Color,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct HealthDefinition {
    pub hp: i32,
    #[serde(default)]
    pub regeneration: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ItemDefinition {
    pub effect: ItemEffect,
    pub data: i32,
    #[serde(default = "default_consumable")]
    pub consumable: bool,
}

fn default_consumable() -> bool {
    true
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct MutagenDefinition {
    pub effect: MutationEffect,
    pub category: MutationCategory,
    #[serde(default)]
    pub data: i32,
    #[serde(default)]
    pub activatable: bool,
    #[serde(default)]
    pub active_turns: u32,
    #[serde(default)]
    pub cooldown_turns: u32,
}

impl MutagenDefinition {
    pub fn mutation(&self) -> Mutation {
        let activation = self.activatable.then_some(Activation {
            active_turns: self.active_turns,
            cooldown_turns: self.cooldown_turns,
            state: ActivationState::Ready,
        });
        Mutation { effect: self.effect, category: self.category, data: self.data, activation }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityDefinition {
    pub name: String,
    pub glyph: GlyphDefinition,
    #[serde(default)]
    pub blocks: bool,
    #[serde(default)]
    pub health: Option<HealthDefinition>,
    #[serde(default)]
    pub combat: Option<Combat>,
    #[serde(default)]
    pub ai: Option<Ai>,
    #[serde(default)]
    pub vision: Option<Vision>,
    #[serde(default)]
    pub item: Option<ItemDefinition>,
    #[serde(default)]
    pub mutagen: Option<MutagenDefinition>,
}

impl EntityDefinition {
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Builds an entity with exactly the components the definition names.
    pub fn build(&self) -> Entity {
        let mut entity = Entity::new(
            self.name.clone(),
            Appearance { glyph: self.glyph.char, color: self.glyph.color },
        );
        entity.blocks = self.blocks;
        entity.health = self.health.map(|health| Health::full(health.hp, health.regeneration));
        entity.combat = self.combat;
        entity.ai = self.ai;
        entity.vision = self.vision;
        if entity.vision.is_some() {
            entity.fov = Some(FovMap::new());
        }
        entity.item = self.item.map(|item| Item {
            effect: item.effect,
            data: item.data,
            consumable: item.consumable,
        });
        entity.mutagen = self.mutagen.map(|mutagen| mutagen.mutation());
        entity
    }

    pub fn build_monster(&self) -> Result<Entity, ContentError> {
        let missing = if self.combat.is_none() {
            Some("combat")
        } else if self.health.is_none() {
            Some("health")
        } else if self.ai.is_none() {
            Some("ai")
        } else if self.vision.is_none() {
            Some("vision")
        } else {
            None
        };
        if let Some(missing) = missing {
            return Err(ContentError::NotAMonster { name: self.name.clone(), missing });
        }
        let mut entity = self.build();
        entity.blocks = true;
        Ok(entity)
    }

    pub fn build_item(&self) -> Result<Entity, ContentError> {
        if self.item.is_none() {
            return Err(ContentError::NotAnItem { name: self.name.clone() });
        }
        let mut entity = self.build();
        entity.blocks = false;
        Ok(entity)
    }

    pub fn build_mutagen(&self) -> Result<Entity, ContentError> {
        if self.mutagen.is_none() {
            return Err(ContentError::NotAMutagen { name: self.name.clone() });
        }
        let mut entity = self.build();
        entity.blocks = false;
        Ok(entity)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ContentPack {
    pub player: EntityDefinition,
    pub monsters: Vec<EntityDefinition>,
    pub items: Vec<EntityDefinition>,
    pub mutagens: Vec<EntityDefinition>,
}

impl ContentPack {
    pub fn builtin() -> Result<Self, ContentError> {
        Ok(Self {
            player: EntityDefinition::from_json(PLAYER_JSON)?,
            monsters: serde_json::from_str(MONSTERS_JSON)?,
            items: serde_json::from_str(ITEMS_JSON)?,
            mutagens: serde_json::from_str(MUTAGENS_JSON)?,
        })
    }

    pub fn monster(&self, name: &str) -> Result<&EntityDefinition, ContentError> {
        find(&self.monsters, name)
    }

    pub fn item(&self, name: &str) -> Result<&EntityDefinition, ContentError> {
        find(&self.items, name)
    }
}

fn find<'a>(
    definitions: &'a [EntityDefinition],
    name: &str,
) -> Result<&'a EntityDefinition, ContentError> {
    definitions
        .iter()
        .find(|definition| definition.name == name)
        .ok_or_else(|| ContentError::Missing(name.to_string()))
}
