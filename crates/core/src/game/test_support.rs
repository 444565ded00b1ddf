//! Shared test fixtures for the `game` submodule test suites.
//! This module exists to avoid repeating map and entity setup across many tests.
//! It does not own production gameplay logic.

use super::*;
use crate::content::keys;
use crate::state::{Color, Tile};

pub(crate) const PLAYER_HP: i32 = 20;
pub(crate) const PLAYER_POWER: i32 = 4;
pub(crate) const MOUSE_HP: i32 = 4;
pub(crate) const MOUSE_DEFENSE: i32 = 0;

pub(crate) fn open_room_fixture() -> (Map, Pos) {
    let map = Map::open(10, 10);
    let origin = Pos { y: 5, x: 5 };
    (map, origin)
}

pub(crate) fn wall_occlusion_fixture() -> (Map, Pos) {
    let mut map = Map::filled(11, 11, Tile::WALL);
    for x in 1..10 {
        map.set_tile(Pos { y: 5, x }, Tile::FLOOR);
    }
    map.set_tile(Pos { y: 5, x: 6 }, Tile::WALL);
    (map, Pos { y: 5, x: 3 })
}

/// 20x12 room with a wall ring and the spawn point at (5, 5).
pub(crate) fn arena_map() -> Map {
    let mut map = Map::filled(20, 12, Tile::WALL);
    for y in 1..11 {
        for x in 1..19 {
            map.set_tile(Pos { y, x }, Tile::FLOOR);
        }
    }
    map.set_spawn(Pos { y: 5, x: 5 });
    map
}

/// Default rules with no random maps and nothing spawned.
pub(crate) fn quiet_config() -> GameConfig {
    let mut config = GameConfig::default();
    config.mapgen.random_maps = 0;
    config.spawns.monster_attempts = 0;
    config.spawns.item_attempts = 0;
    config.spawns.mutagen_attempts = 0;
    config
}

pub(crate) fn menu_game() -> Game {
    let content = ContentPack::builtin().expect("builtin content");
    Game::new(7, quiet_config(), content, vec![arena_map()]).expect("one map")
}

pub(crate) fn started_game(config: GameConfig, maps: Vec<Map>) -> Game {
    let content = ContentPack::builtin().expect("builtin content");
    let mut game = Game::new(7, config, content, maps).expect("maps supplied");
    game.start_new_game().expect("new game");
    game
}

pub(crate) fn quiet_game() -> Game {
    started_game(quiet_config(), vec![arena_map()])
}

pub(crate) fn quiet_game_with_maps(maps: Vec<Map>) -> Game {
    started_game(quiet_config(), maps)
}

pub(crate) fn add_mouse(game: &mut Game, pos: Pos) -> EntityId {
    let mouse = game
        .content
        .monster(keys::MONSTER_MOUSE)
        .and_then(|definition| definition.build_monster())
        .expect("mouse definition");
    game.spawn_entity(mouse, pos)
}

pub(crate) fn add_potion(game: &mut Game, pos: Pos) -> EntityId {
    let potion = game
        .content
        .item(keys::ITEM_HEALING_POTION)
        .and_then(|definition| definition.build_item())
        .expect("potion definition");
    game.spawn_entity(potion, pos)
}

pub(crate) fn category_for(effect: MutationEffect) -> MutationCategory {
    match effect {
        MutationEffect::Inventory => MutationCategory::Core,
        MutationEffect::XRay | MutationEffect::IncreasedVision => MutationCategory::Eyes,
        MutationEffect::Regeneration => MutationCategory::Tail,
    }
}

pub(crate) fn add_mutagen(game: &mut Game, pos: Pos, effect: MutationEffect, data: i32) -> EntityId {
    let mut mutagen =
        Entity::new("Test Mutagen", Appearance { glyph: '*', color: Color::rgb(0, 255, 0) });
    mutagen.mutagen = Some(Mutation::permanent(effect, category_for(effect), data));
    game.spawn_entity(mutagen, pos)
}

pub(crate) fn give_mutation(game: &mut Game, effect: MutationEffect, data: i32) {
    let player_id = game.state.player_id;
    game.state.entities[player_id]
        .mutations
        .push(Mutation::permanent(effect, category_for(effect), data));
}

/// Returns the slot of the new activatable mutation.
pub(crate) fn give_activatable(
    game: &mut Game,
    effect: MutationEffect,
    active_turns: u32,
    cooldown_turns: u32,
) -> usize {
    let player_id = game.state.player_id;
    let mutations = &mut game.state.entities[player_id].mutations;
    mutations.push(Mutation {
        effect,
        category: category_for(effect),
        data: 0,
        activation: Some(Activation {
            active_turns,
            cooldown_turns,
            state: ActivationState::Ready,
        }),
    });
    mutations.len() - 1
}

pub(crate) fn give_inventory(game: &mut Game, slots: usize) {
    let player_id = game.state.player_id;
    game.state.entities[player_id].inventory = Some(Inventory::new(slots));
}

pub(crate) fn set_player_hp(game: &mut Game, hp: i32) {
    let player_id = game.state.player_id;
    if let Some(health) = game.state.entities[player_id].health.as_mut() {
        health.current_hp = hp;
    }
}
