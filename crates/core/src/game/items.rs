//! Interaction systems: picking up items, consuming mutagens, and using inventory slots.

use super::*;

impl Game {
    /// Resolves one-shot interact intents against items and mutagens on the same tile.
    pub(crate) fn pickup_system(&mut self) {
        let actors = self.entities_with_intent(|intent| matches!(intent, Intent::Interact));
        for actor in actors {
            let Some(pos) = self.take_intent(actor).and_then(|_| self.state.entities[actor].pos())
            else {
                continue;
            };
            if actor == self.state.player_id && self.state.map.portal() == Some(pos) {
                self.portal_requested = true;
            }

            let targets: Vec<EntityId> = self
                .state
                .entities_at(pos)
                .filter(|(id, entity)| {
                    *id != actor && !entity.dead && (entity.item.is_some() || entity.mutagen.is_some())
                })
                .map(|(id, _)| id)
                .collect();
            for target in targets {
                if self.state.entities[target].item.is_some() {
                    self.pick_up_item(actor, target);
                } else {
                    self.consume_mutagen(actor, target);
                }
            }
        }
    }

    /// Pops the requested inventory slot and applies the item.
    pub(crate) fn use_system(&mut self) {
        let actors = self.entities_with_intent(|intent| matches!(intent, Intent::UseItem(_)));
        for actor in actors {
            let Some(Intent::UseItem(slot)) = self.take_intent(actor) else {
                continue;
            };
            let entity = &mut self.state.entities[actor];
            let Some(entry) = entity.inventory.as_mut().and_then(|inventory| inventory.pop(slot))
            else {
                continue;
            };

            let event = match (entry.item.effect, entity.health.as_mut()) {
                (ItemEffect::Healing, Some(health)) => {
                    let before = health.current_hp;
                    health.current_hp = (health.current_hp + entry.item.data).min(health.hp);
                    LogEvent::Healed { item: entry.name.clone(), amount: health.current_hp - before }
                }
                (ItemEffect::Healing, None) => LogEvent::ItemUsed { item: entry.name.clone() },
            };
            if !entry.item.consumable
                && let Some(inventory) = entity.inventory.as_mut()
            {
                inventory.items.insert(slot.min(inventory.items.len()), entry);
            }
            self.log.push(event);
        }
    }

    fn pick_up_item(&mut self, actor: EntityId, target: EntityId) {
        let Some(item) = self.state.entities[target].item else {
            return;
        };
        let name = self.state.entities[target].name.clone();
        let Some(inventory) = self.state.entities[actor].inventory.as_mut() else {
            self.log.push(LogEvent::NoInventory);
            return;
        };
        match inventory.add(InventoryItem { name: name.clone(), item }) {
            Ok(()) => {
                self.state.entities.remove(target);
                self.log.push(LogEvent::ItemPickedUp { name });
            }
            Err(_) => self.log.push(LogEvent::InventoryFull { name }),
        }
    }

    fn consume_mutagen(&mut self, actor: EntityId, target: EntityId) {
        let Some(mutation) = self.state.entities[target].mutagen else {
            return;
        };
        let default_slots = self.config.inventory.slots;
        let entity = &mut self.state.entities[actor];
        if entity.has_mutation(mutation.effect) {
            self.log.push(LogEvent::MutationAlreadyPresent { mutation: mutation.to_string() });
            return;
        }

        entity.mutations.push(mutation);
        if mutation.effect == MutationEffect::Inventory && entity.inventory.is_none() {
            let slots = usize::try_from(mutation.data).ok().filter(|&slots| slots > 0);
            entity.inventory = Some(Inventory::new(slots.unwrap_or(default_slots)));
        }
        self.state.entities.remove(target);
        self.log.push(LogEvent::MutationConsumed { mutation: mutation.to_string() });
    }

    pub(crate) fn entities_with_intent(&self, wanted: impl Fn(Intent) -> bool) -> Vec<EntityId> {
        self.state
            .entities
            .iter()
            .filter(|(_, entity)| !entity.dead && entity.intent.is_some_and(&wanted))
            .map(|(id, _)| id)
            .collect()
    }

    pub(crate) fn take_intent(&mut self, id: EntityId) -> Option<Intent> {
        self.state.entities.get_mut(id).and_then(|entity| entity.intent.take())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::test_support::*;

    #[test]
    fn cat_without_inventory_cannot_pick_up_items() {
        let mut game = quiet_game();
        let here = game.state().player_pos().expect("player placed");
        let potion = add_potion(&mut game, here);

        game.dispatch(Command::Interact).expect("in play");

        assert!(game.log().contains(&LogEvent::NoInventory));
        assert!(game.state().entities.contains_key(potion));
    }

    #[test]
    fn inventory_mutagen_grants_configured_slots() {
        let mut game = quiet_game();
        let here = game.state().player_pos().expect("player placed");
        add_mutagen(&mut game, here, MutationEffect::Inventory, 0);

        game.dispatch(Command::Interact).expect("in play");

        let inventory = game.state().player().inventory.as_ref().expect("inventory granted");
        assert_eq!(inventory.max_slots, game.config().inventory.slots);
        assert!(game.log().contains(&LogEvent::MutationConsumed {
            mutation: "[Core] Inventory".to_string()
        }));
    }

    #[test]
    fn duplicate_mutation_stays_on_the_floor() {
        let mut game = quiet_game();
        let here = game.state().player_pos().expect("player placed");
        give_mutation(&mut game, MutationEffect::IncreasedVision, 2);
        let mutagen = add_mutagen(&mut game, here, MutationEffect::IncreasedVision, 3);

        game.dispatch(Command::Interact).expect("in play");

        assert!(game.state().entities.contains_key(mutagen));
        assert_eq!(game.state().player().mutations.len(), 1);
        assert!(matches!(game.log().last(), Some(LogEvent::MutationAlreadyPresent { .. })));
    }

    #[test]
    fn full_inventory_leaves_item_and_inventory_untouched() {
        let mut game = quiet_game();
        let here = game.state().player_pos().expect("player placed");
        give_inventory(&mut game, 1);
        add_potion(&mut game, here);
        game.dispatch(Command::Interact).expect("in play");
        let second = add_potion(&mut game, here);
        let before = game.state().player().inventory.clone();

        game.dispatch(Command::Interact).expect("in play");
        game.dispatch(Command::Interact).expect("in play");

        assert_eq!(game.state().player().inventory, before);
        assert!(game.state().entities.contains_key(second));
        let full_lines =
            game.log().iter().filter(|event| matches!(event, LogEvent::InventoryFull { .. })).count();
        assert_eq!(full_lines, 2, "one line per attempt");
    }

    #[test]
    fn healing_is_capped_at_max_hp_and_consumes_the_slot() {
        let mut game = quiet_game();
        let here = game.state().player_pos().expect("player placed");
        give_inventory(&mut game, 3);
        add_potion(&mut game, here);
        game.dispatch(Command::Interact).expect("in play");
        set_player_hp(&mut game, PLAYER_HP - 3);

        game.dispatch(Command::UseItem(0)).expect("in play");

        let player = game.state().player();
        assert_eq!(player.health.expect("health").current_hp, PLAYER_HP);
        assert!(player.inventory.as_ref().expect("inventory").items.is_empty());
        assert!(game.log().contains(&LogEvent::Healed {
            item: "Healing Potion".to_string(),
            amount: 3
        }));
        assert_eq!(player.intent, None);
    }

    #[test]
    fn using_an_empty_slot_is_a_no_op() {
        let mut game = quiet_game();
        give_inventory(&mut game, 2);
        let log_len = game.log().len();
        game.dispatch(Command::UseItem(4)).expect("in play");
        assert_eq!(game.log().len(), log_len);
    }
}
