use app::app_loop::{AppMode, AppState, TICK_INTERVAL};
use app::key_map::{Modifiers, command_for_key};
use game_core::mapgen::parse_text_map;
use game_core::{Command, ContentPack, Game, GameConfig, GamePhase, Pos};
use macroquad::prelude::KeyCode;

const HALL: &str = "\
##########
#@       #
#        #
##########
";

fn menu_game() -> Game {
    let mut config = GameConfig::default();
    config.mapgen.random_maps = 0;
    config.spawns.monster_attempts = 0;
    config.spawns.item_attempts = 0;
    config.spawns.mutagen_attempts = 0;
    let map = parse_text_map(HALL).expect("hall map");
    let content = ContentPack::builtin().expect("builtin content");
    Game::new(12345, config, content, vec![map]).expect("one map")
}

fn press(app: &mut AppState, game: &mut Game, key: KeyCode) {
    let command = command_for_key(game.phase(), key, Modifiers::default())
        .unwrap_or_else(|| panic!("{key:?} is unbound in {:?}", game.phase()));
    app.queue(command);
    app.step(game);
}

#[test]
fn enter_on_the_menu_starts_a_game() {
    let mut game = menu_game();
    let mut app = AppState::new();

    press(&mut app, &mut game, KeyCode::Enter);

    assert_eq!(game.phase(), GamePhase::PlayersTurn);
    assert_eq!(game.state().player_pos(), Some(Pos { y: 1, x: 1 }));
    assert_eq!(app.mode, AppMode::Running);
}

#[test]
fn quit_entry_ends_the_app() {
    let mut game = menu_game();
    let mut app = AppState::new();

    press(&mut app, &mut game, KeyCode::Down);
    press(&mut app, &mut game, KeyCode::Enter);

    assert_eq!(app.mode, AppMode::QuitRequested);
}

#[test]
fn escape_in_play_returns_to_the_menu_without_quitting() {
    let mut game = menu_game();
    let mut app = AppState::new();
    press(&mut app, &mut game, KeyCode::Enter);

    press(&mut app, &mut game, KeyCode::Escape);

    assert_eq!(game.phase(), GamePhase::MainMenu);
    assert_eq!(app.mode, AppMode::Running);
}

#[test]
fn commands_wait_for_the_next_tick_interval() {
    let mut game = menu_game();
    let mut app = AppState::new();
    let confirm = command_for_key(GamePhase::MainMenu, KeyCode::Enter, Modifiers::default());
    app.queue(confirm.expect("enter is bound"));

    app.tick(&mut game, TICK_INTERVAL / 4.0);
    assert_eq!(game.phase(), GamePhase::MainMenu);
    assert!(app.has_pending());

    app.tick(&mut game, TICK_INTERVAL);
    assert_eq!(game.phase(), GamePhase::PlayersTurn);
    assert!(!app.has_pending());
}

#[test]
fn clicked_path_is_walked_one_tick_per_step() {
    let mut game = menu_game();
    let mut app = AppState::new();
    press(&mut app, &mut game, KeyCode::Enter);
    let goal = Pos { y: 1, x: 5 };

    app.queue(Command::SetTarget(goal));
    app.step(&mut game);
    assert_eq!(game.current_tick(), 0, "setting a target does not spend a turn");
    assert!(game.has_queued_path());

    // A long stall still runs a single step.
    app.tick(&mut game, 5.0);
    assert_eq!(game.current_tick(), 1);
    assert_eq!(game.state().player_pos(), Some(Pos { y: 1, x: 2 }));

    for _ in 0..3 {
        app.step(&mut game);
    }
    assert_eq!(game.state().player_pos(), Some(goal));
    assert!(!game.has_queued_path());

    app.step(&mut game);
    assert_eq!(game.current_tick(), 4, "no queued path, no input, no tick");
}

#[test]
fn a_key_press_interrupts_auto_walk() {
    let mut game = menu_game();
    let mut app = AppState::new();
    press(&mut app, &mut game, KeyCode::Enter);
    app.queue(Command::SetTarget(Pos { y: 1, x: 8 }));
    app.step(&mut game);
    app.step(&mut game);

    press(&mut app, &mut game, KeyCode::J);

    assert_eq!(game.state().player_pos(), Some(Pos { y: 2, x: 2 }));
    assert!(!game.has_queued_path());
}
