//! Status systems: activatable mutation timers and hit point regeneration.

use super::*;

impl Game {
    /// Advances ready -> active -> cooldown -> ready counters by one tick.
    pub(crate) fn mutation_timer_system(&mut self) {
        let player_id = self.state.player_id;
        let mut events = Vec::new();
        for (id, entity) in &mut self.state.entities {
            for mutation in &mut entity.mutations {
                let label = mutation.to_string();
                let Some(activation) = mutation.activation.as_mut() else {
                    continue;
                };
                let event = match activation.state {
                    ActivationState::Ready => None,
                    ActivationState::Active { remaining } if remaining > 1 => {
                        activation.state = ActivationState::Active { remaining: remaining - 1 };
                        None
                    }
                    ActivationState::Active { .. } => {
                        activation.state = if activation.cooldown_turns > 0 {
                            ActivationState::Cooldown { remaining: activation.cooldown_turns }
                        } else {
                            ActivationState::Ready
                        };
                        Some(LogEvent::MutationExpired { mutation: label })
                    }
                    ActivationState::Cooldown { remaining } if remaining > 1 => {
                        activation.state = ActivationState::Cooldown { remaining: remaining - 1 };
                        None
                    }
                    ActivationState::Cooldown { .. } => {
                        activation.state = ActivationState::Ready;
                        Some(LogEvent::MutationReady { mutation: label })
                    }
                };
                if id == player_id {
                    events.extend(event);
                }
            }
        }
        self.log.extend(events);
    }

    /// Resolves one-shot activation intents; runs after the timers so a fresh activation
    /// lasts its full duration.
    pub(crate) fn activation_system(&mut self) {
        let actors =
            self.entities_with_intent(|intent| matches!(intent, Intent::ActivateMutation(_)));
        for actor in actors {
            let Some(Intent::ActivateMutation(slot)) = self.take_intent(actor) else {
                continue;
            };
            let Some(mutation) = self.state.entities[actor].mutations.get_mut(slot) else {
                continue;
            };
            let label = mutation.to_string();
            let event = match mutation.activation.as_mut() {
                None => LogEvent::MutationNotActivatable { mutation: label },
                Some(activation) if activation.state == ActivationState::Ready => {
                    activation.state =
                        ActivationState::Active { remaining: activation.active_turns };
                    LogEvent::MutationActivated { mutation: label, turns: activation.active_turns }
                }
                Some(_) => LogEvent::MutationNotReady { mutation: label },
            };
            self.log.push(event);
        }
    }

    /// Adds the regeneration rate to living, wounded entities; a negative total can kill.
    pub(crate) fn regeneration_system(&mut self) {
        let mut dying = Vec::new();
        for (id, entity) in &mut self.state.entities {
            if entity.dead {
                continue;
            }
            let regeneration = entity.regeneration();
            let Some(health) = entity.health.as_mut() else {
                continue;
            };
            if regeneration == 0 || health.current_hp >= health.hp {
                continue;
            }
            health.current_hp += regeneration;
            if health.current_hp > health.hp {
                health.current_hp = health.hp;
            } else if health.current_hp < 0 {
                dying.push(id);
            }
        }
        for id in dying {
            self.kill_entity(id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn activation_cycles_through_active_cooldown_and_ready() {
        let mut game = quiet_game();
        let slot = give_activatable(&mut game, MutationEffect::XRay, 2, 3);

        game.dispatch(Command::ActivateMutation(slot)).expect("in play");
        assert!(game.state().player().sees_through_walls());
        game.dispatch(Command::Wait).expect("in play");
        assert!(game.state().player().sees_through_walls(), "active for two ticks");

        game.dispatch(Command::Wait).expect("in play");
        assert!(!game.state().player().sees_through_walls());
        assert!(game.log().contains(&LogEvent::MutationExpired {
            mutation: "[Eyes] XRay".to_string()
        }));

        game.dispatch(Command::ActivateMutation(slot)).expect("in play");
        assert!(matches!(game.log().last(), Some(LogEvent::MutationNotReady { .. })));

        game.dispatch(Command::Wait).expect("in play");
        game.dispatch(Command::Wait).expect("in play");
        assert!(game.log().contains(&LogEvent::MutationReady {
            mutation: "[Eyes] XRay".to_string()
        }));
        let state = game.state().player().mutations[slot].activation.expect("activatable").state;
        assert_eq!(state, ActivationState::Ready);
    }

    #[test]
    fn permanent_mutations_cannot_be_activated() {
        let mut game = quiet_game();
        give_mutation(&mut game, MutationEffect::IncreasedVision, 2);
        game.dispatch(Command::ActivateMutation(0)).expect("in play");
        assert!(matches!(game.log().last(), Some(LogEvent::MutationNotActivatable { .. })));
    }

    #[test]
    fn regeneration_caps_at_max_and_ignores_healthy_entities() {
        let mut game = quiet_game();
        give_mutation(&mut game, MutationEffect::Regeneration, 5);
        set_player_hp(&mut game, PLAYER_HP - 2);

        game.dispatch(Command::Wait).expect("in play");
        assert_eq!(game.state().player().health.expect("health").current_hp, PLAYER_HP);
        game.dispatch(Command::Wait).expect("in play");
        assert_eq!(game.state().player().health.expect("health").current_hp, PLAYER_HP);
    }

    #[test]
    fn negative_regeneration_kills_only_below_zero() {
        let mut game = quiet_game();
        let player_id = game.state().player_id;
        if let Some(health) = game.state_mut().entities[player_id].health.as_mut() {
            health.regeneration = -2;
        }
        set_player_hp(&mut game, 2);

        let first = game.dispatch(Command::Wait).expect("in play");
        assert_eq!(game.state().player().health.expect("health").current_hp, 0);
        assert!(!game.state().player().dead, "zero hit points from regeneration is survivable");
        assert!(matches!(first, DispatchOutcome::Advanced(_)));

        let second = game.dispatch(Command::Wait).expect("in play");
        assert!(game.state().player().dead);
        assert_eq!(game.phase(), GamePhase::GameOver);
        assert!(matches!(
            second,
            DispatchOutcome::Advanced(AdvanceResult { stop_reason: AdvanceStopReason::PlayerDied, .. })
        ));
    }
}
