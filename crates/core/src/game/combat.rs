//! Melee resolution and death handling.

use super::*;

impl Game {
    /// Applies `max(0, power - defense)` to the target and kills it at zero hit points.
    pub(crate) fn resolve_attack(&mut self, attacker: EntityId, target: EntityId) {
        let Some((attacker_name, power)) = self
            .state
            .entities
            .get(attacker)
            .filter(|entity| !entity.dead)
            .and_then(|entity| entity.combat.map(|combat| (entity.name.clone(), combat.power)))
        else {
            return;
        };
        let Some(defender) = self.state.entities.get_mut(target) else {
            return;
        };
        let (Some(combat), Some(health)) = (defender.combat, defender.health.as_mut()) else {
            return;
        };
        if defender.dead {
            return;
        }

        let damage = (power - combat.defense).max(0);
        health.current_hp -= damage;
        let (hp, max_hp) = (health.current_hp, health.hp);
        self.log.push(LogEvent::Attack {
            attacker: attacker_name,
            target: defender.name.clone(),
            damage,
            hp,
            max_hp,
        });
        if hp <= 0 {
            self.kill_entity(target);
        }
    }

    /// Marks `id` dead exactly once; the corpse stops blocking but stays in the world.
    pub(crate) fn kill_entity(&mut self, id: EntityId) {
        let Some(entity) = self.state.entities.get_mut(id) else {
            return;
        };
        if entity.dead {
            return;
        }
        entity.dead = true;
        entity.blocks = false;
        entity.intent = None;
        self.log.push(LogEvent::Died { name: entity.name.clone() });

        if id == self.state.player_id {
            self.phase = GamePhase::GameOver;
            self.state.movement_path.clear();
            log::info!("game over at tick {}", self.tick);
        }
    }
}
