//! Player actions and the transition pipeline they run through.
//!
//! Each action implements [`ActionTransition`]: `pre_validate` rejects
//! actions that must not consume a turn (a blocked door), `apply` mutates
//! the state and reports a soft outcome for gameplay-legality failures that
//! still consume the turn (a step into a wall), `post_validate` checks
//! invariants after mutation.
mod combat;
mod interact;
mod inventory;
mod movement;

pub use combat::{AttackAction, AttackError, AttackOutcome};
pub use interact::{DoorAction, DoorError};
pub use inventory::{UseItemAction, UseItemError, UseItemOutcome};
pub use movement::{MoveAction, MoveError, MoveOutcome};

use crate::env::GameEnv;
use crate::event::EventQueue;
use crate::state::GameState;

/// Defines how a concrete action variant mutates game state.
pub trait ActionTransition {
    type Error;
    type Result;

    /// Validates pre-conditions using the state **before** mutation.
    /// A failure here aborts the action without consuming the turn.
    fn pre_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the game state directly.
    fn apply(
        &self,
        state: &mut GameState,
        env: &GameEnv<'_>,
        events: &mut EventQueue,
    ) -> Result<Self::Result, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &GameState, _env: &GameEnv<'_>) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level action enum routed through [`crate::engine::GameEngine`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Move(MoveAction),
    Attack(AttackAction),
    UseDoor(DoorAction),
    UseItem(UseItemAction),
}

/// Action-specific result carried in the turn outcome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ActionOutcome {
    Move(MoveOutcome),
    Attack(AttackOutcome),
    Door,
    UseItem(UseItemOutcome),
}
