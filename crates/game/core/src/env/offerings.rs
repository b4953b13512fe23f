//! Shop offering definitions.

use std::sync::Arc;

use crate::state::PlayerState;

/// Permanent or consumable augmentation applied on purchase.
pub trait OfferingEffect: Send + Sync {
    fn apply(&self, player: &mut PlayerState);
}

/// Immutable shop offering definition.
#[derive(Clone)]
pub struct OfferingDefinition {
    pub name: String,
    pub glyph: char,
    pub description: String,
    pub cost: u32,
    pub effect: Arc<dyn OfferingEffect>,
}

impl std::fmt::Debug for OfferingDefinition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OfferingDefinition")
            .field("name", &self.name)
            .field("cost", &self.cost)
            .finish_non_exhaustive()
    }
}

/// Read-only access to registered shop offerings.
pub trait OfferingOracle: Send + Sync {
    fn definition(&self, id: &str) -> Option<&OfferingDefinition>;

    /// All registered ids in registration order; the shop lists offers in
    /// exactly this order.
    fn names(&self) -> Vec<&str>;
}

impl std::fmt::Debug for dyn OfferingOracle + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn OfferingOracle")
    }
}
