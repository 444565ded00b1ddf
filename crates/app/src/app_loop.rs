//! Fixed-rate pacing between rendered frames and simulation ticks.

use game_core::{AdvanceResult, AdvanceStopReason, Command, DispatchOutcome, Game, GamePhase};

pub const TICKS_PER_SECOND: f32 = 15.0;
pub const TICK_INTERVAL: f32 = 1.0 / TICKS_PER_SECOND;

#[derive(Debug, PartialEq, Eq, Default)]
pub enum AppMode {
    #[default]
    Running,
    QuitRequested,
}

#[derive(Default)]
pub struct AppState {
    pub mode: AppMode,
    /// Latest command captured since the previous step. Newer input replaces older input.
    pending: Option<Command>,
    accumulator: f32,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn queue(&mut self, command: Command) {
        self.pending = Some(command);
    }

    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Accumulate frame time and run at most one step once a tick interval has elapsed.
    pub fn tick(&mut self, game: &mut Game, frame_time: f32) {
        if self.mode == AppMode::QuitRequested {
            return;
        }
        if frame_time.is_finite() && frame_time > 0.0 {
            self.accumulator += frame_time;
        }
        if self.accumulator < TICK_INTERVAL {
            return;
        }
        // Slow frames never queue a burst of catch-up steps.
        self.accumulator = (self.accumulator - TICK_INTERVAL).min(TICK_INTERVAL);
        self.step(game);
    }

    /// One paced step: the pending command if any, otherwise one auto-walk tick.
    pub fn step(&mut self, game: &mut Game) {
        if let Some(command) = self.pending.take() {
            self.apply_command(game, command);
            return;
        }
        if game.phase() == GamePhase::PlayersTurn && game.has_queued_path() {
            match game.advance() {
                Ok(result) => log_advance(&result),
                Err(err) => log::warn!("auto-walk stopped: {err}"),
            }
        }
    }

    fn apply_command(&mut self, game: &mut Game, command: Command) {
        match game.dispatch(command) {
            Ok(DispatchOutcome::QuitRequested) => {
                log::info!("quit requested from the main menu");
                self.mode = AppMode::QuitRequested;
            }
            Ok(DispatchOutcome::Advanced(result)) => log_advance(&result),
            Ok(DispatchOutcome::Handled | DispatchOutcome::Ignored) => {}
            Err(err) => log::warn!("command {command:?} rejected: {err}"),
        }
    }

}

fn log_advance(result: &AdvanceResult) {
    if result.stop_reason == AdvanceStopReason::PlayerDied {
        log::info!("player died on tick {}", result.tick);
    }
}
