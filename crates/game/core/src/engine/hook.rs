//! Post-turn hooks that apply automatic world effects after the action and
//! enemy phases have resolved.

use crate::event::{EventQueue, GameEvent};
use crate::state::{GameState, Tile};

/// A hook applied after every completed turn, in priority order (lower
/// values first).
pub trait PostTurnHook: Send + Sync {
    fn priority(&self) -> i32 {
        0
    }

    /// Whether this hook has anything to do for the current state.
    fn should_trigger(&self, state: &GameState) -> bool;

    /// Applies the hook's effects directly to the game state.
    fn apply(&self, state: &mut GameState, events: &mut EventQueue);
}

/// Collects gold when the player ends a turn on a gold tile, replacing the
/// tile with plain floor so re-entering grants nothing.
#[derive(Debug)]
pub struct GoldPickupHook;

impl PostTurnHook for GoldPickupHook {
    fn should_trigger(&self, state: &GameState) -> bool {
        matches!(state.dungeon.get(state.player.pos), Some(Tile::Gold { .. }))
    }

    fn apply(&self, state: &mut GameState, events: &mut EventQueue) {
        let pos = state.player.pos;
        let Some(Tile::Gold { hall, amount }) = state.dungeon.get(pos).cloned() else {
            return;
        };
        state.player.gold += amount;
        state.dungeon[pos] = Tile::Floor { hall };
        events.push(GameEvent::GoldPickup { amount });
    }
}
