use super::support::*;

fn open_field(width: usize, height: usize, spawn: Pos) -> Map {
    let mut map = Map::filled(width, height, Tile::WALL);
    for y in 1..(height as i32 - 1) {
        for x in 1..(width as i32 - 1) {
            map.set_tile(Pos { y, x }, Tile::FLOOR);
        }
    }
    map.set_spawn(spawn);
    map
}

fn teleport(game: &mut Game, id: EntityId, pos: Pos) {
    game.state_mut().entities[id].move_to(pos);
}

fn pos_of(game: &Game, id: EntityId) -> Pos {
    game.state().entities[id].pos().expect("positioned")
}

#[test]
fn monster_engages_then_returns_home_when_player_leaves() {
    let player_spawn = Pos { y: 10, x: 12 };
    let mut game = quiet_game_with_maps(vec![open_field(30, 20, player_spawn)]);
    let home = Pos { y: 10, x: 10 };
    let mouse = add_mouse(&mut game, home);

    game.dispatch(Command::Wait).expect("in play");
    assert_eq!(pos_of(&game, mouse), Pos { y: 10, x: 11 }, "pursues the nearby player");

    let player_id = game.state().player_id;
    teleport(&mut game, player_id, Pos { y: 10, x: 20 });
    game.dispatch(Command::Wait).expect("in play");
    assert_eq!(pos_of(&game, mouse), home, "walks back once the player is out of range");

    game.dispatch(Command::Wait).expect("in play");
    assert_eq!(pos_of(&game, mouse), home, "idles at home");
}

#[test]
fn leash_is_measured_from_the_current_position() {
    let player_spawn = Pos { y: 12, x: 12 };
    let mut game = quiet_game_with_maps(vec![open_field(30, 20, player_spawn)]);
    let home = Pos { y: 10, x: 10 };
    let mouse = add_mouse(&mut game, home);
    teleport(&mut game, mouse, Pos { y: 10, x: 19 });

    game.dispatch(Command::Wait).expect("in play");

    assert_eq!(pos_of(&game, mouse), Pos { y: 10, x: 18 }, "heads home past its leash");
}

#[test]
fn monsters_never_fight_each_other() {
    let mut game = quiet_game();
    let spawn = game.state().map.spawn();
    let first = add_mouse(&mut game, spawn.offset(3, 0));
    let second = add_mouse(&mut game, spawn.offset(4, 0));

    for _ in 0..3 {
        game.dispatch(Command::Wait).expect("in play");
    }

    for id in [first, second] {
        let health = game.state().entities[id].health.expect("health");
        assert_eq!(health.current_hp, health.hp);
    }
    assert!(game.log().iter().all(|event| match event {
        LogEvent::Attack { attacker, target, .. } => attacker == "Cat" || target == "Cat",
        _ => true,
    }));
}

#[test]
fn bumping_a_monster_attacks_and_the_monster_strikes_back() {
    let mut game = quiet_game();
    let spawn = game.state().map.spawn();
    let mouse = add_mouse(&mut game, spawn.offset(1, 0));
    game.state_mut().entities[mouse].health = Some(Health::full(10, 0));

    game.dispatch(Command::Move(Direction::East)).expect("in play");

    assert_eq!(game.state().player_pos(), Some(spawn));
    assert_eq!(pos_of(&game, mouse), spawn.offset(1, 0));
    let attacks: Vec<(&str, &str)> = game
        .log()
        .iter()
        .filter_map(|event| match event {
            LogEvent::Attack { attacker, target, .. } => {
                Some((attacker.as_str(), target.as_str()))
            }
            _ => None,
        })
        .collect();
    assert_eq!(attacks, vec![("Cat", "Mouse"), ("Mouse", "Cat")]);
}

#[test]
fn player_killed_during_enemy_turn_ends_the_game() {
    let mut game = quiet_game();
    let spawn = game.state().map.spawn();
    add_mouse(&mut game, spawn.offset(1, 1));
    set_player_hp(&mut game, 1);

    let outcome = game.dispatch(Command::Wait).expect("in play");

    assert_eq!(
        outcome,
        DispatchOutcome::Advanced(AdvanceResult {
            tick: 1,
            stop_reason: AdvanceStopReason::PlayerDied
        })
    );
    assert_eq!(game.phase(), GamePhase::GameOver);
    assert!(game.state().player().dead);
    assert!(matches!(game.advance(), Err(GameError::NotInPlay { phase: GamePhase::GameOver })));
}

#[test]
fn dead_monsters_stay_put() {
    let mut game = quiet_game();
    let spawn = game.state().map.spawn();
    let mouse = add_mouse(&mut game, spawn.offset(3, 0));
    game.kill_entity(mouse);

    game.dispatch(Command::Wait).expect("in play");

    assert_eq!(pos_of(&game, mouse), spawn.offset(3, 0));
}

#[test]
fn unreachable_player_leaves_monster_in_place() {
    let mut map = arena_map();
    let spawn = map.spawn();
    for y in 1..11 {
        map.set_tile(Pos { y, x: spawn.x + 2 }, Tile::WALL);
    }
    let mut game = quiet_game_with_maps(vec![map]);
    let mouse = add_mouse(&mut game, spawn.offset(3, 0));
    teleport(&mut game, mouse, spawn.offset(4, 0));

    for _ in 0..2 {
        game.dispatch(Command::Wait).expect("in play");
        assert_eq!(pos_of(&game, mouse), spawn.offset(4, 0), "engaged but no path");
    }
}

#[test]
fn bumping_a_peaceful_blocker_drops_the_queued_path() {
    let mut game = quiet_game();
    let spawn = game.state().map.spawn();
    let statue = add_mouse(&mut game, spawn.offset(1, 0));
    game.state_mut().entities[statue].combat = None;
    game.state_mut().entities[statue].ai = None;
    game.state_mut().movement_path = [spawn.offset(1, 0), spawn.offset(2, 0)].into();

    game.advance().expect("in play");

    assert_eq!(game.state().player_pos(), Some(spawn));
    assert!(!game.has_queued_path());
    assert_eq!(game.state().player().target, Some(spawn));
    assert!(!game.log().iter().any(|event| matches!(event, LogEvent::Attack { .. })));
}
