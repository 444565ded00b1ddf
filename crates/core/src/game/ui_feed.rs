//! One-way notifications from the simulation to whatever draws it.

use super::*;

/// Receiver for everything the side panels and log window show.
pub trait UiSink {
    fn add_log_entry(&mut self, line: &str);
    fn set_status_text(&mut self, text: &str);
    fn set_character(&mut self, summary: &CharacterSummary);
    fn set_mutations(&mut self, mutations: &[MutationEntry]);
    fn set_inventory(&mut self, items: &[String]);
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CharacterSummary {
    pub tick: u64,
    pub hp: i32,
    pub max_hp: i32,
    pub vision: i32,
    pub power: i32,
    pub defense: i32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MutationEntry {
    pub label: String,
    pub description: String,
    pub state: Option<ActivationState>,
}

impl Game {
    /// Sends log lines added since the previous publish plus fresh panel contents.
    pub fn publish(&mut self, sink: &mut impl UiSink) {
        for event in &self.log[self.published_log_len.min(self.log.len())..] {
            sink.add_log_entry(&event.to_string());
        }
        self.published_log_len = self.log.len();

        sink.set_character(&self.character_summary());
        sink.set_mutations(&self.mutation_entries());
        let items = self.state.player().inventory.as_ref().map(Inventory::names).unwrap_or_default();
        sink.set_inventory(&items);
    }

    /// Status-bar text for a hovered tile; empty when nothing visible is there.
    pub fn publish_status(&self, sink: &mut impl UiSink, hovered: Pos) {
        sink.set_status_text(self.describe_at(hovered).as_deref().unwrap_or(""));
    }

    pub fn describe_at(&self, pos: Pos) -> Option<String> {
        let player = self.state.player();
        if !player.fov.as_ref().is_some_and(|fov| fov.visible(pos)) {
            return None;
        }
        let (_, entity) = self
            .state
            .entities_at(pos)
            .find(|(id, _)| *id != self.state.player_id)?;
        let text = if entity.dead {
            format!("{}(Dead)", entity.name)
        } else if entity.item.is_some() {
            format!("{}: Pick up item with 'g'", entity.name)
        } else if let Some(mutation) = entity.mutagen {
            format!("{mutation}: {}", mutation.description())
        } else {
            entity.name.clone()
        };
        Some(text)
    }

    pub fn character_summary(&self) -> CharacterSummary {
        let player = self.state.player();
        let health = player.health.unwrap_or(Health::full(0, 0));
        let combat = player.combat.unwrap_or(Combat { power: 0, defense: 0 });
        CharacterSummary {
            tick: self.tick,
            hp: health.current_hp,
            max_hp: health.hp,
            vision: player.view_range().unwrap_or_default(),
            power: combat.power,
            defense: combat.defense,
        }
    }

    pub fn mutation_entries(&self) -> Vec<MutationEntry> {
        self.state
            .player()
            .mutations
            .iter()
            .map(|mutation| MutationEntry {
                label: mutation.to_string(),
                description: mutation.description(),
                state: mutation.activation.map(|activation| activation.state),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[derive(Default)]
    struct RecordingSink {
        lines: Vec<String>,
        status: String,
        character: CharacterSummary,
        mutations: Vec<MutationEntry>,
        inventory: Vec<String>,
    }

    impl UiSink for RecordingSink {
        fn add_log_entry(&mut self, line: &str) {
            self.lines.push(line.to_string());
        }

        fn set_status_text(&mut self, text: &str) {
            self.status = text.to_string();
        }

        fn set_character(&mut self, summary: &CharacterSummary) {
            self.character = summary.clone();
        }

        fn set_mutations(&mut self, mutations: &[MutationEntry]) {
            self.mutations = mutations.to_vec();
        }

        fn set_inventory(&mut self, items: &[String]) {
            self.inventory = items.to_vec();
        }
    }

    #[test]
    fn publish_sends_each_log_line_once() {
        let mut game = quiet_game();
        let mut sink = RecordingSink::default();
        game.publish(&mut sink);
        assert_eq!(
            sink.lines,
            vec![
                "Welcome to Asciiventure.".to_string(),
                "A small cat takes a stroll and ends up in an epic adventure.".to_string(),
            ]
        );

        game.dispatch(Command::Wait).expect("in play");
        game.publish(&mut sink);
        assert_eq!(sink.lines.len(), 2);
        assert_eq!(sink.character.tick, 1);
        assert_eq!(sink.character.hp, PLAYER_HP);
        assert!(sink.inventory.is_empty());
    }

    #[test]
    fn panels_list_mutations_and_inventory() {
        let mut game = quiet_game();
        give_mutation(&mut game, MutationEffect::IncreasedVision, 3);
        give_inventory(&mut game, 2);
        let here = game.state().player_pos().expect("player placed");
        add_potion(&mut game, here);
        game.dispatch(Command::Interact).expect("in play");

        let mut sink = RecordingSink::default();
        game.publish(&mut sink);
        assert_eq!(sink.inventory, vec!["Healing Potion".to_string()]);
        assert_eq!(sink.mutations[0].label, "[Eyes] IncreasedVision");
        assert_eq!(sink.character.vision, game.config().player.view_range + 3);
    }

    #[test]
    fn hover_text_describes_visible_entities_only() {
        let mut game = quiet_game();
        let here = game.state().player_pos().expect("player placed");
        let mouse = add_mouse(&mut game, here.offset(2, 0));
        add_potion(&mut game, here.offset(0, 2));

        let mut sink = RecordingSink::default();
        game.publish_status(&mut sink, here.offset(2, 0));
        assert_eq!(sink.status, "Mouse");
        assert_eq!(
            game.describe_at(here.offset(0, 2)).as_deref(),
            Some("Healing Potion: Pick up item with 'g'")
        );

        game.kill_entity(mouse);
        assert_eq!(game.describe_at(here.offset(2, 0)).as_deref(), Some("Mouse(Dead)"));
        assert_eq!(game.describe_at(here), None, "the player is never described");
        assert_eq!(game.describe_at(Pos { y: 200, x: 200 }), None);
    }
}
