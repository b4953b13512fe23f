//! Inventory consumption.

use crate::env::{GameEnv, OracleError};
use crate::event::EventQueue;
use crate::state::GameState;

use super::ActionTransition;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum UseItemError {
    /// The front inventory entry names an unregistered item type. This is a
    /// content bug, not a player-reachable state.
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Result of an item use. All variants consume the turn; only `Consumed`
/// removes the inventory entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum UseItemOutcome {
    Consumed { item: String },
    /// The effect refused (e.g. a potion at full health). The item stays.
    Failed { item: String },
    EmptyInventory,
}

/// Uses the oldest acquired inventory item (FIFO).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct UseItemAction;

impl ActionTransition for UseItemAction {
    type Error = UseItemError;
    type Result = UseItemOutcome;

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut EventQueue,
    ) -> Result<UseItemOutcome, UseItemError> {
        state.last_action_was_turn = false;

        let Some(item) = state.player.items.first().cloned() else {
            return Ok(UseItemOutcome::EmptyInventory);
        };
        let effect = env
            .items()?
            .definition(&item)
            .ok_or_else(|| OracleError::unknown("item", item.clone()))?
            .effect
            .clone();

        if effect.apply(state, events) {
            state.player.items.remove(0);
            Ok(UseItemOutcome::Consumed { item })
        } else {
            Ok(UseItemOutcome::Failed { item })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit;

    #[test]
    fn empty_inventory_is_a_soft_failure() {
        let (mut state, oracles) = testkit::single_hall(5);
        let mut events = EventQueue::new();
        let outcome = UseItemAction
            .apply(&mut state, &oracles.env(), &mut events)
            .unwrap();
        assert_eq!(outcome, UseItemOutcome::EmptyInventory);
    }

    #[test]
    fn consumed_item_is_removed_fifo() {
        let (mut state, oracles) = testkit::single_hall(5);
        state.player.hp = 1;
        state.player.items = vec!["snack".into(), "dud".into()];

        let mut events = EventQueue::new();
        let outcome = UseItemAction
            .apply(&mut state, &oracles.env(), &mut events)
            .unwrap();

        assert_eq!(
            outcome,
            UseItemOutcome::Consumed {
                item: "snack".into()
            }
        );
        assert_eq!(state.player.items, vec!["dud".to_string()]);
        assert_eq!(state.player.hp, 2);
    }

    #[test]
    fn failed_effect_keeps_the_item() {
        let (mut state, oracles) = testkit::single_hall(5);
        state.player.items = vec!["dud".into()];

        let mut events = EventQueue::new();
        let outcome = UseItemAction
            .apply(&mut state, &oracles.env(), &mut events)
            .unwrap();

        assert_eq!(outcome, UseItemOutcome::Failed { item: "dud".into() });
        assert_eq!(state.player.items, vec!["dud".to_string()]);
    }

    #[test]
    fn unregistered_item_fails_hard() {
        let (mut state, oracles) = testkit::single_hall(5);
        state.player.items = vec!["phantom".into()];

        let mut events = EventQueue::new();
        let err = UseItemAction
            .apply(&mut state, &oracles.env(), &mut events)
            .unwrap_err();
        assert_eq!(
            err,
            UseItemError::Oracle(OracleError::unknown("item", "phantom"))
        );
    }
}
