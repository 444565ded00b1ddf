//! Tunable game settings loaded from TOML.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub player: PlayerConfig,
    pub mapgen: MapgenConfig,
    pub spawns: SpawnConfig,
    pub inventory: InventoryConfig,
    /// Enables the map-select command during play.
    pub debug_commands: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayerConfig {
    pub view_range: i32,
    pub hp: i32,
    pub power: i32,
    pub defense: i32,
    pub regeneration: i32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapgenConfig {
    pub random_maps: usize,
    pub width: usize,
    pub height: usize,
    pub max_rooms: usize,
    pub room_min_size: usize,
    pub room_max_size: usize,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SpawnConfig {
    pub monster_attempts: u32,
    /// Percent of monster spawns that are dogs instead of mice.
    pub dog_chance: u32,
    pub item_attempts: u32,
    pub healing_potion_chance: u32,
    pub mutagen_attempts: u32,
    /// Monsters never spawn closer than this to the player spawn point.
    pub safe_radius: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InventoryConfig {
    pub slots: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            player: PlayerConfig::default(),
            mapgen: MapgenConfig::default(),
            spawns: SpawnConfig::default(),
            inventory: InventoryConfig::default(),
            debug_commands: true,
        }
    }
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self { view_range: 10, hp: 20, power: 4, defense: 1, regeneration: 0 }
    }
}

impl Default for MapgenConfig {
    fn default() -> Self {
        Self {
            random_maps: 3,
            width: 100,
            height: 60,
            max_rooms: 10,
            room_min_size: 6,
            room_max_size: 20,
        }
    }
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            monster_attempts: 12,
            dog_chance: 30,
            item_attempts: 20,
            healing_potion_chance: 50,
            mutagen_attempts: 20,
            safe_radius: 6.0,
        }
    }
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self { slots: 5 }
    }
}

impl GameConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mapgen = &self.mapgen;
        if mapgen.room_min_size > mapgen.room_max_size {
            return Err(ConfigError::Invalid {
                field: "mapgen.room_min_size",
                reason: format!(
                    "{} is larger than room_max_size {}",
                    mapgen.room_min_size, mapgen.room_max_size
                ),
            });
        }
        if mapgen.random_maps > 0 && mapgen.max_rooms == 0 {
            return Err(ConfigError::Invalid {
                field: "mapgen.max_rooms",
                reason: "random maps need at least one room attempt".to_string(),
            });
        }
        // Largest room is room_min + room_max + 1 and needs at least one spare column.
        let largest_room = mapgen.room_min_size + mapgen.room_max_size + 1;
        if mapgen.width <= largest_room || mapgen.height <= largest_room {
            return Err(ConfigError::Invalid {
                field: "mapgen",
                reason: format!(
                    "a {}x{} map cannot hold rooms up to {largest_room} tiles wide",
                    mapgen.width, mapgen.height
                ),
            });
        }
        if self.player.hp <= 0 {
            return Err(ConfigError::Invalid {
                field: "player.hp",
                reason: "must be positive".to_string(),
            });
        }
        if self.player.view_range < 0 {
            return Err(ConfigError::Invalid {
                field: "player.view_range",
                reason: "must not be negative".to_string(),
            });
        }
        for (field, chance) in [
            ("spawns.dog_chance", self.spawns.dog_chance),
            ("spawns.healing_potion_chance", self.spawns.healing_potion_chance),
        ] {
            if chance > 100 {
                return Err(ConfigError::Invalid {
                    field,
                    reason: format!("{chance} is not a percentage"),
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_yields_defaults() {
        let config = GameConfig::from_toml_str("").expect("empty config");
        assert_eq!(config, GameConfig::default());
    }

    #[test]
    fn partial_sections_keep_remaining_defaults() {
        let config = GameConfig::from_toml_str(
            "[player]\nview_range = 4\n\n[mapgen]\nrandom_maps = 1\n",
        )
        .expect("partial config");
        assert_eq!(config.player.view_range, 4);
        assert_eq!(config.player.hp, PlayerConfig::default().hp);
        assert_eq!(config.mapgen.random_maps, 1);
        assert_eq!(config.mapgen.width, 100);
    }

    #[test]
    fn rooms_larger_than_the_map_are_rejected() {
        let err = GameConfig::from_toml_str("[mapgen]\nwidth = 20\nheight = 20\n")
            .expect_err("map too small for default rooms");
        assert!(matches!(err, ConfigError::Invalid { field: "mapgen", .. }));
    }

    #[test]
    fn random_maps_without_room_attempts_are_rejected() {
        let err = GameConfig::from_toml_str("[mapgen]\nmax_rooms = 0\n")
            .expect_err("no rooms to spawn in");
        assert!(matches!(err, ConfigError::Invalid { field: "mapgen.max_rooms", .. }));

        let config = GameConfig::from_toml_str("[mapgen]\nmax_rooms = 0\nrandom_maps = 0\n")
            .expect("only text maps");
        assert_eq!(config.mapgen.max_rooms, 0);
    }

    #[test]
    fn malformed_toml_is_reported() {
        let err = GameConfig::from_toml_str("[player\n").expect_err("syntax error");
        assert!(matches!(err, ConfigError::Toml(_)));
    }
}
