//! Headless run of a seeded game with a scripted cat, printing the message log.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use game_core::{
    AdvanceStopReason, Command, ContentPack, DispatchOutcome, Game, GameConfig, GamePhase, Pos,
};
use rand_chacha::{
    ChaCha8Rng,
    rand_core::{Rng, SeedableRng},
};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value_t = 42)]
    seed: u64,
    /// Stop after this many simulation ticks
    #[arg(short, long, default_value_t = 500)]
    ticks: u64,
    /// Optional config.toml overriding the default rules
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<GameConfig> {
    let Some(path) = path else {
        return Ok(GameConfig::default());
    };
    log::info!("loading config from {}", path.display());
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    GameConfig::from_toml_str(&text)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

/// Picks the next command: pick up what is underfoot, otherwise walk somewhere seen.
fn scripted_command(game: &Game, rng: &mut ChaCha8Rng) -> Command {
    let state = game.state();
    let Some(here) = state.player_pos() else {
        return Command::Wait;
    };
    let something_underfoot = state.entities_at(here).any(|(id, entity)| {
        id != state.player_id && (entity.item.is_some() || entity.mutagen.is_some())
    });
    if something_underfoot {
        return Command::Interact;
    }

    let seen: Vec<Pos> = state
        .player()
        .fov
        .as_ref()
        .map(|fov| fov.seen_positions().filter(|pos| state.map.is_empty(*pos)).collect())
        .unwrap_or_default();
    if seen.is_empty() {
        return Command::Wait;
    }
    let goal = seen[(rng.next_u64() % seen.len() as u64) as usize];
    Command::SetTarget(goal)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let config = load_config(args.config.as_ref())?;
    let content = ContentPack::builtin().context("Failed to load built-in entity definitions")?;
    let mut game = Game::new(args.seed, config, content, Vec::new())
        .context("Failed to set up the game")?;
    game.dispatch(Command::Confirm).context("Failed to start a new game")?;
    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);

    println!("Simulating seed {} for up to {} ticks...", args.seed, args.ticks);
    let mut printed = 0;
    while game.current_tick() < args.ticks && game.phase() == GamePhase::PlayersTurn {
        let outcome = if game.has_queued_path() {
            game.advance().map(DispatchOutcome::Advanced)
        } else {
            game.dispatch(scripted_command(&game, &mut rng))
        }
        .context("Simulation rejected a scripted command")?;

        for event in &game.log()[printed..] {
            println!("[{:>4}] {event}", game.current_tick());
        }
        printed = game.log().len();

        if let DispatchOutcome::Advanced(result) = outcome
            && result.stop_reason == AdvanceStopReason::PlayerDied
        {
            println!("The cat died on tick {}.", result.tick);
        }
    }

    println!("Final Tick: {}", game.current_tick());
    println!("Map: {}/{}", game.current_map_index() + 1, game.map_count());
    println!("Snapshot Hash: 0x{:016x}", game.snapshot_hash());
    Ok(())
}
