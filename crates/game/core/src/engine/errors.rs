//! Turn execution errors.

use crate::action::{AttackError, DoorError, MoveError, UseItemError};
use crate::env::OracleError;

/// Which pipeline phase rejected the action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

/// A transition failure tagged with the phase it occurred in.
///
/// Pre-validation failures leave the state untouched and the turn
/// unconsumed; the orchestrator surfaces them as user-facing messages.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{phase:?} failed: {error}")]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

/// Top-level error surfaced by [`super::GameEngine::execute`].
#[derive(Debug, thiserror::Error)]
pub enum ExecuteError {
    #[error("move failed: {0}")]
    Move(TransitionPhaseError<MoveError>),

    #[error("attack failed: {0}")]
    Attack(TransitionPhaseError<AttackError>),

    #[error("door use failed: {0}")]
    Door(TransitionPhaseError<DoorError>),

    #[error("item use failed: {0}")]
    UseItem(TransitionPhaseError<UseItemError>),

    #[error(transparent)]
    Oracle(#[from] OracleError),
}

impl ExecuteError {
    /// The door-blocked case the presentation layer messages on.
    pub fn is_door_blocked(&self) -> bool {
        matches!(
            self,
            ExecuteError::Door(TransitionPhaseError {
                error: DoorError::Blocked,
                ..
            })
        )
    }
}
