//! Game sessions: starting a new game, switching maps, and populating a fresh map.

use super::*;
use crate::content::keys;
use crate::mapgen::{random_below, roll_percent};

/// Random placement tries per spawn attempt before the attempt is dropped.
const PLACEMENT_TRIES: usize = 16;

impl Game {
    /// Resets the player and the log, enters the first map, and hands control to the player.
    pub fn start_new_game(&mut self) -> Result<(), GameError> {
        let first = self.maps.first().cloned().ok_or(GameError::NoMapsLoaded)?;
        self.tick = 0;
        self.log.clear();
        self.published_log_len = 0;
        self.portal_requested = false;
        self.state = GameState::new(first, build_player(&self.content, &self.config));
        self.enter_map(0)?;
        self.log.push(LogEvent::Welcome);
        self.log.push(LogEvent::Intro);
        self.phase = GamePhase::PlayersTurn;
        log::info!("new game started on map 0 of {}", self.maps.len());
        Ok(())
    }

    /// Switches to map `index`, keeping the player but forgetting everything it has seen.
    pub fn select_map(&mut self, index: usize) -> Result<(), GameError> {
        self.enter_map(index)?;
        self.log.push(LogEvent::MapChanged);
        Ok(())
    }

    pub(crate) fn enter_next_map(&mut self) -> Result<(), GameError> {
        let next = (self.current_map + 1) % self.maps.len().max(1);
        self.select_map(next)
    }

    fn enter_map(&mut self, index: usize) -> Result<(), GameError> {
        let map = self.maps.get(index).cloned().ok_or(GameError::MapIndexOutOfRange {
            index,
            available: self.maps.len(),
        })?;
        let player_id = self.state.player_id;
        self.current_map = index;
        self.state.entities.retain(|id, _| id == player_id);
        self.state.movement_path.clear();
        self.state.map = map;

        let spawn = self.state.map.spawn();
        if let Some(player) = self.state.entities.get_mut(player_id) {
            player.place_at(spawn);
            player.intent = None;
            if let Some(fov) = player.fov.as_mut() {
                fov.clear_seen();
            }
        }
        self.spawn_population()?;
        self.refresh_fov();
        log::info!(
            "entered map {index}: {} entities, spawn at {spawn:?}",
            self.state.entities.len()
        );
        Ok(())
    }

    fn spawn_population(&mut self) -> Result<(), GameError> {
        let spawns = self.config.spawns.clone();
        let spawn = self.state.map.spawn();

        for _ in 0..spawns.monster_attempts {
            let Some(pos) = self.random_free_position() else {
                continue;
            };
            if distance(pos, spawn) <= spawns.safe_radius {
                continue;
            }
            let key = if roll_percent(&mut self.rng, spawns.dog_chance) {
                keys::MONSTER_DOG
            } else {
                keys::MONSTER_MOUSE
            };
            let monster = self.content.monster(key)?.build_monster()?;
            self.spawn_entity(monster, pos);
        }

        for _ in 0..spawns.item_attempts {
            let Some(pos) = self.random_free_position() else {
                continue;
            };
            if roll_percent(&mut self.rng, spawns.healing_potion_chance) {
                let potion = self.content.item(keys::ITEM_HEALING_POTION)?.build_item()?;
                self.spawn_entity(potion, pos);
            }
        }

        if self.content.mutagens.is_empty() {
            return Ok(());
        }
        for _ in 0..spawns.mutagen_attempts {
            let Some(pos) = self.random_free_position() else {
                continue;
            };
            let choice = random_below(&mut self.rng, self.content.mutagens.len());
            let mutagen = self.content.mutagens[choice].build_mutagen()?;
            self.spawn_entity(mutagen, pos);
        }
        Ok(())
    }

    /// Walkable tile with nothing on it, away from the spawn point and the portal.
    fn random_free_position(&mut self) -> Option<Pos> {
        let map = &self.state.map;
        for _ in 0..PLACEMENT_TRIES {
            let pos = Pos {
                y: random_below(&mut self.rng, map.height()) as i32,
                x: random_below(&mut self.rng, map.width()) as i32,
            };
            if map.is_empty(pos)
                && pos != map.spawn()
                && Some(pos) != map.portal()
                && self.state.entities_at(pos).next().is_none()
            {
                return Some(pos);
            }
        }
        None
    }
}
