//! Simulation coordinator: owns the world state, loaded maps, turn phase, and the player log.

use rand_chacha::ChaCha8Rng;
use rand_chacha::rand_core::SeedableRng;

use crate::config::GameConfig;
use crate::content::ContentPack;
use crate::entity::*;
use crate::error::GameError;
use crate::mapgen::generate_random_map;
use crate::menu::MainMenu;
use crate::state::{GameState, Map, distance};
use crate::types::*;

mod combat;
mod dispatch;
mod engine;
mod hash;
mod items;
pub mod pathfinding;
mod session;
mod status;
mod ui_feed;
pub mod visibility;

#[cfg(test)]
mod test_support;

use pathfinding::{EntityObstacles, determine_astar_path};
use visibility::update_fov;

pub use ui_feed::{CharacterSummary, MutationEntry, UiSink};

pub struct Game {
    seed: u64,
    tick: u64,
    rng: ChaCha8Rng,
    config: GameConfig,
    content: ContentPack,
    maps: Vec<Map>,
    current_map: usize,
    phase: GamePhase,
    menu: MainMenu,
    state: GameState,
    log: Vec<LogEvent>,
    published_log_len: usize,
    portal_requested: bool,
}

impl Game {
    /// Generates the configured random maps, appends `extra_maps`, and waits in the main menu.
    pub fn new(
        seed: u64,
        config: GameConfig,
        content: ContentPack,
        extra_maps: Vec<Map>,
    ) -> Result<Self, GameError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut maps: Vec<Map> = (0..config.mapgen.random_maps)
            .map(|_| generate_random_map(&mut rng, &config.mapgen))
            .collect();
        maps.extend(extra_maps);
        let Some(first_map) = maps.first().cloned() else {
            return Err(GameError::NoMapsLoaded);
        };
        log::info!("game created with seed {seed} and {} maps", maps.len());

        let player = build_player(&content, &config);
        Ok(Self {
            seed,
            tick: 0,
            rng,
            config,
            content,
            maps,
            current_map: 0,
            phase: GamePhase::MainMenu,
            menu: MainMenu::default(),
            state: GameState::new(first_map, player),
            log: Vec::new(),
            published_log_len: 0,
            portal_requested: false,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn current_tick(&self) -> u64 {
        self.tick
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn menu(&self) -> &MainMenu {
        &self.menu
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn log(&self) -> &[LogEvent] {
        &self.log
    }

    pub fn map_count(&self) -> usize {
        self.maps.len()
    }

    pub fn current_map_index(&self) -> usize {
        self.current_map
    }

    pub fn is_in_play(&self) -> bool {
        matches!(self.phase, GamePhase::PlayersTurn | GamePhase::EnemyTurn)
    }

    /// True while a mouse-click path still has steps left to walk.
    pub fn has_queued_path(&self) -> bool {
        self.is_in_play() && !self.state.movement_path.is_empty()
    }

    /// Places `entity` at `pos` and refreshes its field of view.
    pub fn spawn_entity(&mut self, mut entity: Entity, pos: Pos) -> EntityId {
        entity.place_at(pos);
        let id = self.state.entities.insert(entity);
        self.refresh_fov_of(id);
        id
    }

    /// Path the player would walk to reach `goal`, avoiding blockers the player has seen.
    pub fn player_path_to(&self, goal: Pos) -> Vec<Pos> {
        let player = self.state.player();
        let Some(start) = player.pos() else {
            return Vec::new();
        };
        let obstacles = EntityObstacles::new(&self.state, player.fov.as_ref());
        determine_astar_path(&self.state.map, &obstacles, start, goal)
    }

    fn refresh_fov(&mut self) {
        let ids: Vec<EntityId> = self.state.entities.keys().collect();
        for id in ids {
            self.refresh_fov_of(id);
        }
    }

    fn refresh_fov_of(&mut self, id: EntityId) {
        let map = &self.state.map;
        let Some(entity) = self.state.entities.get_mut(id) else {
            return;
        };
        let (Some(pos), Some(range)) = (entity.pos(), entity.view_range()) else {
            return;
        };
        let ignore_opacity = entity.sees_through_walls();
        let fov = entity.fov.get_or_insert_with(Default::default);
        update_fov(map, fov, range, pos, ignore_opacity);
    }
}

fn build_player(content: &ContentPack, config: &GameConfig) -> Entity {
    let mut player = content.player.build();
    let stats = &config.player;
    player.blocks = true;
    player.health = Some(Health::full(stats.hp, stats.regeneration));
    player.combat = Some(Combat { power: stats.power, defense: stats.defense });
    player.vision = Some(Vision { range: stats.view_range });
    player.fov.get_or_insert_with(Default::default);
    player
}
