use super::support::*;

#[test]
fn players_turn_moves_only_the_player_and_enemy_turn_only_monsters() {
    let mut game = quiet_game();
    let spawn = game.state().map.spawn();
    let player_id = game.state().player_id;
    let mouse = add_mouse(&mut game, spawn.offset(4, 0));
    game.state_mut().entities[player_id].target = Some(spawn.offset(0, 1));

    game.update_positions(GamePhase::PlayersTurn);
    assert_eq!(game.state().player_pos(), Some(spawn.offset(0, 1)));
    assert_eq!(game.state().entities[mouse].pos(), Some(spawn.offset(4, 0)));

    game.state_mut().entities[player_id].target = Some(spawn.offset(0, 2));
    game.update_positions(GamePhase::EnemyTurn);
    assert_eq!(game.state().player_pos(), Some(spawn.offset(0, 1)));
    assert_ne!(game.state().entities[mouse].pos(), Some(spawn.offset(4, 0)));
}

#[test]
fn activated_xray_applies_to_the_same_tick_fov_refresh() {
    let mut map = arena_map();
    let spawn = map.spawn();
    for y in 1..11 {
        map.set_tile(Pos { y, x: spawn.x + 2 }, Tile::WALL);
    }
    let behind = spawn.offset(4, 0);
    let mut game = quiet_game_with_maps(vec![map]);
    let player_fov = |game: &Game| game.state().player().fov.clone().expect("player fov");
    assert!(!player_fov(&game).visible(behind));

    let slot = give_activatable(&mut game, MutationEffect::XRay, 3, 5);
    game.dispatch(Command::ActivateMutation(slot)).expect("in play");
    assert!(player_fov(&game).visible(behind));
    assert!(player_fov(&game).seen(behind));

    for _ in 0..3 {
        game.dispatch(Command::Wait).expect("in play");
    }
    let fov = player_fov(&game);
    assert!(!fov.visible(behind), "x-ray wore off");
    assert!(fov.seen(behind), "seen tiles are remembered");
}

#[test]
fn increased_vision_widens_the_next_refresh() {
    let mut game = started_game(quiet_config(), vec![Map::open(40, 5)]);
    let spawn = game.state().map.spawn();
    let far = spawn.offset(12, 0);
    assert!(!game.state().player().fov.as_ref().expect("fov").visible(far));

    give_mutation(&mut game, MutationEffect::IncreasedVision, 5);
    game.dispatch(Command::Wait).expect("in play");

    assert!(game.state().player().fov.as_ref().expect("fov").visible(far));
}

#[test]
fn every_advance_ticks_once() {
    let mut game = quiet_game();
    for expected in 1..=5 {
        let result = game.advance().expect("in play");
        assert_eq!(result.tick, expected);
        assert_eq!(game.phase(), GamePhase::PlayersTurn);
    }
}
