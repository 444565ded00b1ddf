//! Single entry point translating abstract commands into game actions by phase.

use super::*;
use crate::menu::MenuAction;

impl Game {
    pub fn dispatch(&mut self, command: Command) -> Result<DispatchOutcome, GameError> {
        log::debug!("dispatch {command:?} during {:?}", self.phase);
        match self.phase {
            GamePhase::MainMenu => self.dispatch_menu(command),
            GamePhase::PlayersTurn => self.dispatch_play(command),
            GamePhase::EnemyTurn => Ok(DispatchOutcome::Ignored),
            GamePhase::GameOver => Ok(match command {
                Command::Quit => {
                    self.phase = GamePhase::MainMenu;
                    DispatchOutcome::Handled
                }
                _ => DispatchOutcome::Ignored,
            }),
        }
    }

    fn dispatch_menu(&mut self, command: Command) -> Result<DispatchOutcome, GameError> {
        let outcome = match command {
            Command::MenuUp => {
                self.menu.move_cursor(-1);
                DispatchOutcome::Handled
            }
            Command::MenuDown => {
                self.menu.move_cursor(1);
                DispatchOutcome::Handled
            }
            Command::Confirm => match self.menu.selected() {
                MenuAction::NewGame => {
                    self.start_new_game()?;
                    DispatchOutcome::Handled
                }
                MenuAction::Quit => DispatchOutcome::QuitRequested,
            },
            Command::Quit => DispatchOutcome::QuitRequested,
            _ => DispatchOutcome::Ignored,
        };
        Ok(outcome)
    }

    fn dispatch_play(&mut self, command: Command) -> Result<DispatchOutcome, GameError> {
        let player_id = self.state.player_id;
        let Some(current) = self.state.player_pos() else {
            return Ok(DispatchOutcome::Ignored);
        };
        match command {
            Command::Move(direction) => {
                let (dx, dy) = direction.delta();
                self.state.movement_path.clear();
                self.state.entities[player_id].target = Some(current.offset(dx, dy));
            }
            Command::Wait => {
                self.state.movement_path.clear();
                self.state.entities[player_id].target = Some(current);
            }
            Command::Interact => self.state.entities[player_id].intent = Some(Intent::Interact),
            Command::UseItem(slot) => {
                self.state.entities[player_id].intent = Some(Intent::UseItem(slot));
            }
            Command::ActivateMutation(slot) => {
                self.state.entities[player_id].intent = Some(Intent::ActivateMutation(slot));
            }
            Command::SetTarget(goal) => {
                let path = self.player_path_to(goal);
                let goal = path.last().copied().unwrap_or(current);
                self.state.entities[player_id].target = Some(goal);
                self.state.movement_path = path.into();
                return Ok(DispatchOutcome::Handled);
            }
            Command::SelectMap(index) => {
                if !self.config.debug_commands {
                    return Ok(DispatchOutcome::Ignored);
                }
                self.select_map(index)?;
                return Ok(DispatchOutcome::Handled);
            }
            Command::Quit => {
                self.state.movement_path.clear();
                self.phase = GamePhase::MainMenu;
                return Ok(DispatchOutcome::Handled);
            }
            Command::MenuUp | Command::MenuDown | Command::Confirm => {
                return Ok(DispatchOutcome::Ignored);
            }
        }
        Ok(DispatchOutcome::Advanced(self.advance()?))
    }
}
