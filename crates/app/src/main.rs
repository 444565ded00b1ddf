mod frame_input;
mod game_layout;
mod ui_render;
mod ui_text;
mod window_config;

use std::path::PathBuf;
use std::process;

use anyhow::{Context, Result, anyhow};
use app::app_loop::{AppMode, AppState};
use app::map_dir::load_map_directory;
use app::panels::Panels;
use app::seed::SeedChoice;
use app::settings::load_config;
use app::ui_scale::UiScale;
use app::ui_scale_file::UiScaleFile;
use clap::Parser;
use frame_input::capture_frame_input;
use game_core::{ContentPack, Game, GamePhase, UiSink};
use game_layout::{FrameLayout, LayoutNodes, compute_frame_layout, setup_layout};
use macroquad::prelude::*;
use macroquad::window::Conf;
use taffy::TaffyTree;
use ui_render::{FrameView, draw_frame, map_view_for};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// World seed; a random one is picked when omitted
    #[arg(short, long)]
    seed: Option<u64>,
    /// Path to a config.toml; defaults to the per-user config directory
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory of hand-made `.txt` maps, played after the generated ones
    #[arg(short, long, default_value = "assets/maps")]
    maps: PathBuf,
}

struct Layout {
    taffy: TaffyTree<()>,
    nodes: LayoutNodes,
    scale: UiScale,
}

impl Layout {
    fn build(scale: UiScale) -> Result<Self> {
        let mut taffy = TaffyTree::new();
        let nodes = setup_layout(&mut taffy, scale.get())
            .map_err(|err| anyhow!("Failed to build panel layout: {err}"))?;
        Ok(Self { taffy, nodes, scale })
    }

    fn compute(&mut self) -> Result<FrameLayout> {
        compute_frame_layout(&mut self.taffy, &self.nodes, screen_width(), screen_height())
            .map_err(|err| anyhow!("Failed to lay out panels: {err}"))
    }
}

fn window_conf() -> Conf {
    window_config::build_window_conf()
}

fn build_game(args: &Args, seed: SeedChoice) -> Result<Game> {
    let config = load_config(args.config.as_deref())?;
    let maps = load_map_directory(&args.maps)?;
    let content = ContentPack::builtin().context("Failed to load built-in entity definitions")?;
    Game::new(seed.value(), config, content, maps).context("Failed to set up the game")
}

fn save_ui_scale(scale: UiScale) {
    let Some(path) = UiScaleFile::default_path() else {
        return;
    };
    if let Err(err) = UiScaleFile::from_scale(scale).write_atomic(&path) {
        log::warn!("could not save ui scale to {}: {err}", path.display());
    }
}

fn exit_with(err: &anyhow::Error) -> ! {
    log::error!("{err:#}");
    eprintln!("error: {err:#}");
    process::exit(1);
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();
    let args = Args::parse();
    let seed = SeedChoice::from_cli(args.seed);
    let mut game = build_game(&args, seed).unwrap_or_else(|err| exit_with(&err));
    log::info!("starting with {} and {} maps", seed.label(), game.map_count());

    let saved_scale = UiScaleFile::default_path().and_then(|path| UiScaleFile::load_scale(&path));
    let mut scale = window_config::runtime_ui_scale(saved_scale);
    let mut layout = Layout::build(scale).unwrap_or_else(|err| exit_with(&err));
    let mut app_state = AppState::new();
    let mut panels = Panels::new();

    loop {
        if layout.scale != scale {
            layout = Layout::build(scale).unwrap_or_else(|err| exit_with(&err));
        }
        let frame_layout = layout.compute().unwrap_or_else(|err| exit_with(&err));
        let map_view = map_view_for(&game, &frame_layout, scale);

        let input = capture_frame_input(game.phase(), &map_view);
        if let Some(action) = input.ui_scale_action {
            scale = scale.apply(action);
            save_ui_scale(scale);
        }
        if let Some(command) = input.command {
            app_state.queue(command);
        }

        let phase_before = game.phase();
        app_state.tick(&mut game, get_frame_time());
        if app_state.mode == AppMode::QuitRequested {
            break;
        }
        if phase_before == GamePhase::MainMenu && game.phase() != GamePhase::MainMenu {
            panels.clear();
        }

        game.publish(&mut panels);
        match input.hovered_tile {
            Some(tile) => game.publish_status(&mut panels, tile),
            None => panels.set_status_text(""),
        }

        draw_frame(&FrameView {
            game: &game,
            panels: &panels,
            layout: &frame_layout,
            map_view: &map_view,
            hovered: input.hovered_tile,
            seed,
            scale,
        });
        next_frame().await;
    }
}
