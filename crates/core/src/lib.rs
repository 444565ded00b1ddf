pub mod config;
pub mod content;
pub mod entity;
pub mod error;
pub mod game;
pub mod mapgen;
pub mod menu;
pub mod state;
pub mod types;

pub use config::GameConfig;
pub use content::ContentPack;
pub use error::{ConfigError, ContentError, GameError, MapError};
pub use game::{CharacterSummary, Game, MutationEntry, UiSink};
pub use state::{GameState, Map};
pub use types::*;
