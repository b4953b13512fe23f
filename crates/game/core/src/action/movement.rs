//! Corridor movement.

use crate::enemy::enemy_at;
use crate::env::{GameEnv, OracleError};
use crate::event::{EventQueue, GameEvent};
use crate::state::{Facing, GameState};

use super::ActionTransition;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error(transparent)]
    Oracle(#[from] OracleError),
}

/// Result of a movement attempt. `Blocked` still consumes the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Facing changed; position did not.
    Turned,
    Stepped { from: usize, to: usize },
    /// Destination out of bounds, unwalkable, or occupied by an enemy.
    Blocked,
}

/// One-cell movement intent.
///
/// Requesting a direction the player does not face spends the turn on the
/// facing change alone; enemies still act.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MoveAction {
    pub direction: Facing,
}

impl MoveAction {
    pub fn new(direction: Facing) -> Self {
        Self { direction }
    }
}

impl ActionTransition for MoveAction {
    type Error = MoveError;
    type Result = MoveOutcome;

    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut EventQueue,
    ) -> Result<MoveOutcome, MoveError> {
        if state.player.facing != self.direction {
            state.player.facing = self.direction;
            state.last_action_was_turn = true;
            return Ok(MoveOutcome::Turned);
        }
        state.last_action_was_turn = false;

        let from = state.player.pos;
        let Some(to) = self.direction.step_from(from, state.dungeon_len()) else {
            return Ok(MoveOutcome::Blocked);
        };

        let tiles = env.tiles()?;
        if !tiles.is_walkable(state.dungeon[to].kind()) {
            return Ok(MoveOutcome::Blocked);
        }
        if enemy_at(&state.enemies, to).is_some() {
            return Ok(MoveOutcome::Blocked);
        }

        state.player.pos = to;
        events.push(GameEvent::PlayerMoved { from, to });
        Ok(MoveOutcome::Stepped { from, to })
    }
}
