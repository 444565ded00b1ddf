use std::collections::HashSet;

use anyhow::{Context, Result, bail};
use clap::Parser;
use game_core::{Command, ContentPack, Direction, Game, GameConfig, GamePhase, Pos};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    #[arg(short, long, default_value_t = 1000)]
    steps: u32,
}

fn choose<T: Clone>(rng: &mut ChaCha8Rng, slice: &[T]) -> T {
    let p = rng.next_u64() as usize % slice.len();
    slice[p].clone()
}

fn random_command(rng: &mut ChaCha8Rng, game: &Game) -> Command {
    let map = &game.state().map;
    let kind = choose(rng, &[0, 0, 0, 1, 2, 3, 4, 5, 5, 6, 7]);
    match kind {
        0 => Command::Move(choose(rng, &Direction::ALL)),
        1 => Command::Wait,
        2 => Command::Interact,
        3 => Command::UseItem(rng.next_u64() as usize % 10),
        4 => Command::ActivateMutation(rng.next_u64() as usize % 10),
        5 => {
            // Off-map goals are allowed; the path is simply empty.
            let x = (rng.next_u64() % (map.width() as u64 + 4)) as i32 - 2;
            let y = (rng.next_u64() % (map.height() as u64 + 4)) as i32 - 2;
            Command::SetTarget(Pos { y, x })
        }
        6 => Command::SelectMap(rng.next_u64() as usize % game.map_count()),
        _ => choose(rng, &[Command::Quit, Command::MenuUp, Command::MenuDown, Command::Confirm]),
    }
}

fn check_invariants(game: &Game, last_tick: u64) -> Result<()> {
    let state = game.state();
    if game.current_tick() < last_tick {
        bail!("Invariant failed: tick went backwards ({last_tick} -> {})", game.current_tick());
    }

    let mut blocked = HashSet::new();
    for (_, entity) in state.entities.iter() {
        if let Some(health) = entity.health
            && health.current_hp > health.hp
        {
            bail!("Invariant failed: {} has HP > Max HP", entity.name);
        }
        if entity.dead || entity.health.is_none() {
            continue;
        }
        let Some(pos) = entity.pos() else { continue };
        if !state.map.is_empty(pos) {
            bail!("Invariant failed: {} stands on a blocking tile at {pos:?}", entity.name);
        }
        if entity.blocks && !blocked.insert(pos) {
            bail!("Invariant failed: two living blockers share {pos:?}");
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    println!("Starting Fuzz harness on seed {} for max {} steps...", args.seed, args.steps);
    let mut config = GameConfig::default();
    config.debug_commands = true;
    let content = ContentPack::builtin().context("Failed to load built-in entity definitions")?;
    let mut game = Game::new(args.seed, config, content, Vec::new())?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    let mut games = 0;
    let mut last_tick = 0;
    for step in 0..args.steps {
        match game.phase() {
            GamePhase::MainMenu => {
                game.start_new_game()?;
                games += 1;
                last_tick = 0;
                continue;
            }
            GamePhase::GameOver => {
                println!("Cat died on tick {} (step {step})", game.current_tick());
                game.dispatch(Command::Quit)?;
                continue;
            }
            GamePhase::PlayersTurn | GamePhase::EnemyTurn => {}
        }

        if game.has_queued_path() && rng.next_u64() % 4 != 0 {
            game.advance().with_context(|| format!("advance failed at step {step}"))?;
        } else {
            let command = random_command(&mut rng, &game);
            log::debug!("step {step}: {command:?}");
            game.dispatch(command)
                .with_context(|| format!("dispatch of {command:?} failed at step {step}"))?;
        }

        if game.phase() != GamePhase::MainMenu {
            check_invariants(&game, last_tick)?;
            last_tick = game.current_tick();
        }
    }

    println!("Played {games} games, last snapshot 0x{:016x}", game.snapshot_hash());
    println!("Fuzzing completed successfully.");
    Ok(())
}
