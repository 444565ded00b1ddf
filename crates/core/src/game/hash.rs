//! Stable snapshot hashing for determinism checks.
//! Covers the simulation state only; the log and menu cursor are left out.

use std::hash::Hasher;

use super::*;
use xxhash_rust::xxh3::Xxh3;

impl Game {
    pub fn snapshot_hash(&self) -> u64 {
        let mut hasher = Xxh3::new();
        hasher.write_u64(self.seed);
        hasher.write_u64(self.tick);
        hasher.write_usize(self.current_map);
        hasher.write_u8(match self.phase {
            GamePhase::MainMenu => 0,
            GamePhase::PlayersTurn => 1,
            GamePhase::EnemyTurn => 2,
            GamePhase::GameOver => 3,
        });
        hasher.write_usize(self.state.movement_path.len());
        for step in &self.state.movement_path {
            write_pos(&mut hasher, *step);
        }

        for (id, entity) in &self.state.entities {
            hasher.write_u8(u8::from(id == self.state.player_id));
            hasher.write(entity.name.as_bytes());
            if let Some(pos) = entity.pos() {
                write_pos(&mut hasher, pos);
            }
            if let Some(health) = entity.health {
                hasher.write_i32(health.current_hp);
                hasher.write_i32(health.hp);
            }
            hasher.write_u8(u8::from(entity.dead));
            hasher.write_usize(entity.mutations.len());
            for mutation in &entity.mutations {
                hasher.write(mutation.to_string().as_bytes());
                if let Some(activation) = mutation.activation {
                    let (tag, remaining) = match activation.state {
                        ActivationState::Ready => (0, 0),
                        ActivationState::Active { remaining } => (1, remaining),
                        ActivationState::Cooldown { remaining } => (2, remaining),
                    };
                    hasher.write_u8(tag);
                    hasher.write_u32(remaining);
                }
            }
            if let Some(inventory) = &entity.inventory {
                for name in inventory.names() {
                    hasher.write(name.as_bytes());
                }
            }
            if let Some(fov) = &entity.fov {
                hasher.write_usize(fov.seen_positions().count());
            }
        }
        hasher.finish()
    }
}

fn write_pos(hasher: &mut Xxh3, pos: Pos) {
    hasher.write_i32(pos.x);
    hasher.write_i32(pos.y);
}
