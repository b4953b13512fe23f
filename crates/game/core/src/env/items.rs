//! Item definitions and effects.

use std::sync::Arc;

use crate::event::EventQueue;
use crate::state::GameState;

/// Effect invoked when the player uses an item.
///
/// Returns `true` when the item did something and should be consumed.
/// A `false` return leaves the item in the inventory (a potion at full
/// health, a dagger thrown into empty air).
pub trait ItemEffect: Send + Sync {
    fn apply(&self, state: &mut GameState, events: &mut EventQueue) -> bool;
}

/// Immutable item type definition.
#[derive(Clone)]
pub struct ItemDefinition {
    pub name: String,
    pub glyph: char,
    pub description: String,
    pub effect: Arc<dyn ItemEffect>,
}

impl std::fmt::Debug for ItemDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ItemDefinition")
            .field("name", &self.name)
            .field("glyph", &self.glyph)
            .finish_non_exhaustive()
    }
}

/// Read-only access to registered item types.
pub trait ItemOracle: Send + Sync {
    fn definition(&self, id: &str) -> Option<&ItemDefinition>;
}

impl std::fmt::Debug for dyn ItemOracle + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn ItemOracle")
    }
}
