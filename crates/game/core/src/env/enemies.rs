//! Enemy definitions, behaviour dispatch, and telegraphs.

use std::sync::Arc;

use crate::event::EventQueue;
use crate::state::{BehaviorState, Enemy, GameState};

/// How an enemy acts and what it telegraphs.
///
/// Implementations receive the full game state and may read/write player hit
/// points, move the enemy within its owning hall, and toggle the enemy's
/// [`BehaviorState`]. `telegraph` must stay consistent with what `step`
/// would do next from the same state.
pub trait EnemyBehavior: Send + Sync {
    /// Advances the enemy by one turn.
    fn step(&self, enemy: &mut Enemy, state: &mut GameState, events: &mut EventQueue);

    /// Pure preview of the enemy's next action.
    fn telegraph(&self, enemy: &Enemy, player_pos: usize) -> Telegraph;
}

/// Behaviour that never acts. Useful for scenery-grade enemy types.
pub struct NoopBehavior;

impl EnemyBehavior for NoopBehavior {
    fn step(&self, _enemy: &mut Enemy, _state: &mut GameState, _events: &mut EventQueue) {}

    fn telegraph(&self, _enemy: &Enemy, _player_pos: usize) -> Telegraph {
        Telegraph::idle()
    }
}

/// One-step-ahead visual hint of an enemy's next action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Telegraph {
    pub glyph: char,
    pub style: TelegraphStyle,
}

/// Presentation category of a telegraph glyph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TelegraphStyle {
    Move,
    Attack,
}

impl Telegraph {
    pub fn movement(glyph: char) -> Self {
        Self {
            glyph,
            style: TelegraphStyle::Move,
        }
    }

    pub fn attack() -> Self {
        Self {
            glyph: '!',
            style: TelegraphStyle::Attack,
        }
    }

    /// The "no meaningful move" dot shown when the enemy shares the player's
    /// column or holds position.
    pub fn idle() -> Self {
        Self {
            glyph: '\u{00b7}',
            style: TelegraphStyle::Move,
        }
    }

    /// Directional arrow pointing from `from` toward `to`.
    pub fn arrow_toward(from: usize, to: usize) -> Self {
        if to > from {
            Self::movement('\u{2192}')
        } else if to < from {
            Self::movement('\u{2190}')
        } else {
            Self::idle()
        }
    }
}

/// Immutable enemy type definition, registered once at startup.
#[derive(Clone)]
pub struct EnemyDefinition {
    pub name: String,
    pub glyph: char,
    pub hp: i32,
    pub damage: i32,
    pub initial_state: BehaviorState,
    /// Gold dropped on kill, inclusive range.
    pub gold_drop: (u32, u32),
    /// Weight in level spawn selection. Clamped to at least 1.
    pub spawn_weight: u32,
    /// Lowest level this type may spawn at.
    pub min_level: u32,
    pub behavior: Arc<dyn EnemyBehavior>,
}

impl EnemyDefinition {
    pub fn spawn_weight(&self) -> u32 {
        self.spawn_weight.max(1)
    }
}

impl std::fmt::Debug for EnemyDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnemyDefinition")
            .field("name", &self.name)
            .field("glyph", &self.glyph)
            .field("hp", &self.hp)
            .field("damage", &self.damage)
            .field("spawn_weight", &self.spawn_weight)
            .field("min_level", &self.min_level)
            .finish_non_exhaustive()
    }
}

/// Read-only access to registered enemy types.
pub trait EnemyOracle: Send + Sync {
    /// Returns the definition for `id`, if registered.
    fn definition(&self, id: &str) -> Option<&EnemyDefinition>;

    /// All registered ids in registration order.
    fn names(&self) -> Vec<&str>;
}

impl std::fmt::Debug for dyn EnemyOracle + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn EnemyOracle")
    }
}
