//! Per-tick simulation loop and stop-reason handling for the game engine.

use super::*;

impl Game {
    /// Resolves one tick: player movement, enemy movement, then the systems in fixed order.
    pub fn advance(&mut self) -> Result<AdvanceResult, GameError> {
        if !self.is_in_play() {
            return Err(GameError::NotInPlay { phase: self.phase });
        }

        self.phase = GamePhase::PlayersTurn;
        self.update_positions(GamePhase::PlayersTurn);
        if self.phase != GamePhase::GameOver {
            self.phase = GamePhase::EnemyTurn;
            self.update_positions(GamePhase::EnemyTurn);
        }

        self.pickup_system();
        self.use_system();
        self.mutation_timer_system();
        self.activation_system();
        self.regeneration_system();

        if self.portal_requested && self.phase != GamePhase::GameOver {
            self.portal_requested = false;
            self.enter_next_map()?;
        }
        self.refresh_fov();
        self.tick += 1;

        let stop_reason = if self.phase == GamePhase::GameOver {
            log::info!("player died at tick {}", self.tick);
            AdvanceStopReason::PlayerDied
        } else {
            self.phase = GamePhase::PlayersTurn;
            AdvanceStopReason::TurnComplete
        };
        log::debug!("tick {} resolved: {stop_reason:?}", self.tick);
        Ok(AdvanceResult { tick: self.tick, stop_reason })
    }
}
