//! Enemy instances and their behaviour-local state.

use super::tile::HallId;

/// Discrete behaviour phase. Its meaning is private to the enemy type's
/// behaviour: the slime pattern alternates the two phases, the bat ignores
/// the field entirely.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BehaviorState {
    Move,
    Attack,
}

/// A living enemy.
///
/// Created by [`crate::enemy::spawn_enemy`] from a registered definition,
/// mutated in place by its behaviour and by combat damage, and removed from
/// `GameState::enemies` exactly when `hp` drops to zero or below.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Enemy {
    /// Resolves into a registered [`crate::env::EnemyDefinition`].
    pub type_id: String,
    pub pos: usize,
    pub hall: HallId,
    pub hp: i32,
    pub damage: i32,
    pub state: BehaviorState,
}
