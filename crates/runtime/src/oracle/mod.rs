//! Runtime wrappers around static content registries.
//!
//! The content crate hands out plain [`Registry`] tables; this module wraps
//! them in the `corridor-core` oracle traits and bundles them into an
//! [`OracleBundle`] so the session can build [`GameEnv`] snapshots on
//! demand. The data is immutable at runtime; dynamic state lives in
//! [`corridor_core::GameState`].

use corridor_core::{
    EnemyDefinition, EnemyOracle, GameEnv, ItemDefinition, ItemOracle, OfferingDefinition,
    OfferingOracle, PcgRng, Registry, TileDefinition, TileKind, TileOracle,
};

/// Enemy registry behind [`EnemyOracle`].
pub struct EnemyTable(Registry<EnemyDefinition>);

impl EnemyOracle for EnemyTable {
    fn definition(&self, id: &str) -> Option<&EnemyDefinition> {
        self.0.get(id)
    }

    fn names(&self) -> Vec<&str> {
        self.0.names().collect()
    }
}

/// Item registry behind [`ItemOracle`].
pub struct ItemTable(Registry<ItemDefinition>);

impl ItemOracle for ItemTable {
    fn definition(&self, id: &str) -> Option<&ItemDefinition> {
        self.0.get(id)
    }
}

/// Tile registry behind [`TileOracle`], keyed by [`TileKind`] name.
pub struct TileTable(Registry<TileDefinition>);

impl TileOracle for TileTable {
    fn definition(&self, kind: TileKind) -> Option<&TileDefinition> {
        self.0.get(kind.as_ref())
    }
}

/// Offering registry behind [`OfferingOracle`].
pub struct OfferingTable(Registry<OfferingDefinition>);

impl OfferingOracle for OfferingTable {
    fn definition(&self, id: &str) -> Option<&OfferingDefinition> {
        self.0.get(id)
    }

    fn names(&self) -> Vec<&str> {
        self.0.names().collect()
    }
}

/// All oracle implementations the engine needs, bundled for one session.
pub struct OracleBundle {
    enemies: EnemyTable,
    items: ItemTable,
    tiles: TileTable,
    offerings: OfferingTable,
    rng: PcgRng,
}

impl OracleBundle {
    /// Bundles custom registries.
    pub fn new(
        enemies: Registry<EnemyDefinition>,
        items: Registry<ItemDefinition>,
        tiles: Registry<TileDefinition>,
        offerings: Registry<OfferingDefinition>,
    ) -> Self {
        Self {
            enemies: EnemyTable(enemies),
            items: ItemTable(items),
            tiles: TileTable(tiles),
            offerings: OfferingTable(offerings),
            rng: PcgRng,
        }
    }

    /// Bundles the stock content tables.
    pub fn builtin() -> Self {
        Self::new(
            corridor_content::builtin_enemies(),
            corridor_content::builtin_items(),
            corridor_content::builtin_tiles(),
            corridor_content::builtin_offerings(),
        )
    }

    /// Builds a borrowed environment snapshot for one engine call.
    pub fn env(&self) -> GameEnv<'_> {
        GameEnv::with_all(
            &self.enemies,
            &self.items,
            &self.tiles,
            &self.offerings,
            &self.rng,
        )
    }

    pub fn enemies(&self) -> &dyn EnemyOracle {
        &self.enemies
    }

    pub fn items(&self) -> &dyn ItemOracle {
        &self.items
    }

    pub fn offerings(&self) -> &dyn OfferingOracle {
        &self.offerings
    }

    pub fn tiles(&self) -> &dyn TileOracle {
        &self.tiles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_bundle_exposes_stock_content() {
        let bundle = OracleBundle::builtin();
        assert!(bundle.enemies().definition("slime").is_some());
        assert!(bundle.tiles().definition(TileKind::Floor).is_some());
        assert_eq!(bundle.offerings().names().len(), 4);
        assert!(bundle.env().items().is_ok());
    }
}
