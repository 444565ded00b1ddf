//! Per-phase movement: path following for the player, pursuit or homing for AI entities.

use super::*;

impl Game {
    /// Moves every living positioned entity that acts in `phase`, in entity order.
    pub(crate) fn update_positions(&mut self, phase: GamePhase) {
        let player_id = self.state.player_id;
        let players_phase = phase == GamePhase::PlayersTurn;
        let movers: Vec<EntityId> = self
            .state
            .entities
            .iter()
            .filter(|(id, entity)| {
                (*id == player_id) == players_phase && !entity.dead && entity.position.is_some()
            })
            .map(|(id, _)| id)
            .collect();

        for id in movers {
            if self.phase == GamePhase::GameOver {
                break;
            }
            // Earlier movers may have killed this one.
            if self.state.entities.get(id).is_none_or(|entity| entity.dead) {
                continue;
            }
            if let Some(next) = self.next_step(id) {
                self.try_move(id, next);
            }
        }
    }

    fn next_step(&mut self, id: EntityId) -> Option<Pos> {
        if id == self.state.player_id {
            return self.player_next_step();
        }
        let entity = self.state.entities.get(id)?;
        let ai = entity.ai?;
        let current = entity.pos()?;
        let home = entity.home()?;
        let player_pos = self.state.player_pos()?;

        let engaged = distance(player_pos, home) <= ai.engage_range
            && distance(current, home) <= ai.leash_range;
        let goal = if engaged { player_pos } else { home };
        let obstacles = EntityObstacles::new(&self.state, entity.fov.as_ref());
        let path = determine_astar_path(&self.state.map, &obstacles, current, goal);
        log::trace!("{} at {current:?} -> {goal:?}: {} steps", entity.name, path.len());
        path.first().copied()
    }

    fn player_next_step(&mut self) -> Option<Pos> {
        if let Some(step) = self.state.movement_path.front() {
            return Some(*step);
        }
        let player = self.state.entities.get_mut(self.state.player_id)?;
        let current = player.pos()?;
        let target = player.target?;
        if target == current {
            return None;
        }
        if !current.is_adjacent(target) {
            player.target = Some(current);
            return None;
        }
        Some(target)
    }

    fn try_move(&mut self, id: EntityId, next: Pos) {
        let is_player = id == self.state.player_id;
        let Some(current) = self.state.entities.get(id).and_then(Entity::pos) else {
            return;
        };
        if next == current {
            return;
        }

        if let Some(blocker) = self.state.blocking_entity_at(next) {
            if blocker != id && self.can_fight(id, blocker) {
                self.resolve_attack(id, blocker);
            }
            if is_player {
                self.clear_player_path();
            }
            return;
        }
        if !self.state.map.is_empty(next) {
            if is_player {
                self.clear_player_path();
            }
            return;
        }

        if let Some(entity) = self.state.entities.get_mut(id) {
            entity.move_to(next);
        }
        if is_player {
            self.state.movement_path.pop_front();
            if self.state.movement_path.is_empty()
                && let Some(player) = self.state.entities.get_mut(id)
            {
                player.target = Some(next);
            }
        }
    }

    /// Both sides need combat stats and at least one of them must be the player.
    fn can_fight(&self, attacker: EntityId, target: EntityId) -> bool {
        let has_combat =
            |id: EntityId| self.state.entities.get(id).is_some_and(|entity| entity.combat.is_some());
        let player_id = self.state.player_id;
        has_combat(attacker) && has_combat(target) && (attacker == player_id || target == player_id)
    }

    pub(crate) fn clear_player_path(&mut self) {
        self.state.movement_path.clear();
        let player_id = self.state.player_id;
        if let Some(player) = self.state.entities.get_mut(player_id) {
            player.target = player.pos();
        }
    }
}
