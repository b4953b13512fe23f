//! Door traversal.

use crate::enemy::enemy_at;
use crate::env::GameEnv;
use crate::event::{EventQueue, GameEvent};
use crate::state::{GameState, Tile};

use super::ActionTransition;

/// Door failures reject the action during pre-validation, so no turn is
/// consumed, unlike movement where illegal steps still spend the turn.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DoorError {
    #[error("player is not standing on a door")]
    NotOnDoor,

    #[error("door at {pos} has no paired door")]
    Unpaired { pos: usize },

    #[error("far side of the door is blocked")]
    Blocked,
}

/// Teleport through the door the player stands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct DoorAction;

impl DoorAction {
    fn target(state: &GameState) -> Result<usize, DoorError> {
        let pos = state.player.pos;
        match state.dungeon.get(pos) {
            Some(Tile::Door { .. }) => {}
            _ => return Err(DoorError::NotOnDoor),
        }
        state
            .door_connections
            .get(&pos)
            .copied()
            .ok_or(DoorError::Unpaired { pos })
    }
}

impl ActionTransition for DoorAction {
    type Error = DoorError;
    type Result = ();

    fn pre_validate(&self, state: &GameState, _env: &GameEnv<'_>) -> Result<(), DoorError> {
        let target = Self::target(state)?;
        if enemy_at(&state.enemies, target).is_some() {
            return Err(DoorError::Blocked);
        }
        Ok(())
    }

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        events: &mut EventQueue,
    ) -> Result<(), DoorError> {
        state.last_action_was_turn = false;
        let to = Self::target(state)?;
        let from = state.player.pos;
        state.player.pos = to;
        events.push(GameEvent::DoorUsed { from, to });
        Ok(())
    }
}
