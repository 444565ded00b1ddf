//! Error types surfaced by map parsing, content loading, configuration, and game control.

use thiserror::Error;

use crate::types::GamePhase;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("map description is empty")]
    Empty,
    #[error("map description has no spawn point")]
    MissingSpawn,
}

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("invalid entity definition: {0}")]
    Json(#[from] serde_json::Error),
    #[error("'{name}' is not a monster definition: missing {missing}")]
    NotAMonster { name: String, missing: &'static str },
    #[error("'{name}' is not an item definition")]
    NotAnItem { name: String },
    #[error("'{name}' is not a mutagen definition")]
    NotAMutagen { name: String },
    #[error("no definition named '{0}'")]
    Missing(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid configuration value for {field}: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no maps loaded")]
    NoMapsLoaded,
    #[error("map index {index} out of range, {available} maps loaded")]
    MapIndexOutOfRange { index: usize, available: usize },
    #[error("cannot advance the simulation during {phase:?}")]
    NotInPlay { phase: GamePhase },
    #[error(transparent)]
    Content(#[from] ContentError),
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("inventory full")]
pub struct InventoryFull;
