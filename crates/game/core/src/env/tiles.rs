//! Tile display and passability metadata.

use crate::state::TileKind;

/// Immutable tile type definition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileDefinition {
    pub glyph: char,
    pub walkable: bool,
    /// Whether the interact intent does something while standing here.
    pub interactable: bool,
    /// Hint line shown while the player stands on this tile.
    pub hint: String,
}

/// Read-only access to registered tile types.
pub trait TileOracle: Send + Sync {
    fn definition(&self, kind: TileKind) -> Option<&TileDefinition>;

    /// Passability check used by movement. Unregistered kinds are not
    /// walkable.
    fn is_walkable(&self, kind: TileKind) -> bool {
        self.definition(kind).is_some_and(|def| def.walkable)
    }
}

impl std::fmt::Debug for dyn TileOracle + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("dyn TileOracle")
    }
}
