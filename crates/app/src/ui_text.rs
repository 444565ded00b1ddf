//! Text for the side panels, the main menu and the status bar.

use app::panels::Panels;
use app::seed::SeedChoice;
use app::format_snapshot_hash;
use game_core::entity::ActivationState;
use game_core::menu::MainMenu;
use game_core::{CharacterSummary, Game, GamePhase, MutationEntry};

pub const TITLE: &str = "Lili's Quest";
pub const TAGLINE: &str = "A game featuring a little cat, monsters and mutations.";

pub fn character_lines(summary: &CharacterSummary) -> Vec<String> {
    vec![
        format!("Time: {}", summary.tick),
        format!("HP: {}/{}", summary.hp, summary.max_hp),
        format!("Vision: {}", summary.vision),
        format!("Power: {}", summary.power),
        format!("Defense: {}", summary.defense),
    ]
}

pub fn mutation_lines(mutations: &[MutationEntry]) -> Vec<String> {
    if mutations.is_empty() {
        return vec!["No mutations".to_string()];
    }
    let mut lines = vec!["Mutations:".to_string()];
    for (slot, entry) in mutations.iter().enumerate() {
        let line = match entry.state {
            None => entry.label.clone(),
            Some(state) => {
                format!("{} {}", entry.label, activation_text(slot, state))
            }
        };
        lines.push(line);
    }
    lines
}

fn activation_text(slot: usize, state: ActivationState) -> String {
    match state {
        ActivationState::Ready => format!("[shift+{}]", slot + 1),
        ActivationState::Active { remaining } => format!("(active {remaining})"),
        ActivationState::Cooldown { remaining } => format!("(cooldown {remaining})"),
    }
}

pub fn inventory_lines(items: &[String]) -> Vec<String> {
    if items.is_empty() {
        return vec!["Inventory empty".to_string()];
    }
    let mut lines = vec!["Inventory:".to_string()];
    lines.extend(items.iter().enumerate().map(|(slot, name)| format!("{}: {name}", slot + 1)));
    lines
}

/// Menu entries with a marker in front of the selected one.
pub fn menu_lines(menu: &MainMenu) -> Vec<String> {
    menu.entries()
        .iter()
        .enumerate()
        .map(|(index, action)| {
            let marker = if index == menu.cursor() { '>' } else { ' ' };
            format!("{marker} {}", action.label())
        })
        .collect()
}

/// Hover text when something is under the cursor, otherwise a phase hint.
pub fn status_line(game: &Game, panels: &Panels) -> String {
    if !panels.status.is_empty() {
        return panels.status.clone();
    }
    match game.phase() {
        GamePhase::MainMenu => "Up/Down to choose, Enter to confirm".to_string(),
        GamePhase::PlayersTurn | GamePhase::EnemyTurn => {
            "Move: arrows/hjklyubn  Wait: space  Pick up: g  Use: 1-9  Mutate: shift+1-9"
                .to_string()
        }
        GamePhase::GameOver => "You died. Esc returns to the main menu.".to_string(),
    }
}

pub fn run_info(game: &Game, seed: SeedChoice) -> String {
    format!(
        "Map {}/{}  {}  hash={}",
        game.current_map_index() + 1,
        game.map_count(),
        seed.label(),
        format_snapshot_hash(game.snapshot_hash())
    )
}

/// Keeps the first lines that fit and replaces the rest with a count.
pub fn fit_lines_to_panel(
    lines: &[String],
    panel_height: f32,
    line_step: f32,
    panel_pad_y: f32,
) -> Vec<String> {
    if line_step <= 0.0 {
        return Vec::new();
    }

    let usable_height = (panel_height - panel_pad_y).max(0.0);
    let max_lines = (usable_height / line_step).floor() as usize;
    if lines.len() <= max_lines {
        return lines.to_vec();
    }
    if max_lines == 0 {
        return Vec::new();
    }
    if max_lines == 1 {
        return vec![format!("... and {} more", lines.len())];
    }

    let hidden_count = lines.len() - (max_lines - 1);
    let mut fitted_lines = lines[..max_lines - 1].to_vec();
    fitted_lines.push(format!("... and {hidden_count} more"));
    fitted_lines
}
