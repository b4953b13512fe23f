//! Traits describing registered content.
//!
//! Oracles expose the registered enemy, item, tile, and shop-offering
//! definitions plus deterministic RNG. The [`GameEnv`] aggregate bundles
//! them so the engine can reach everything it needs without hard coupling to
//! concrete registries.
mod enemies;
mod error;
mod items;
mod offerings;
mod rng;
mod tiles;

pub use enemies::{
    EnemyBehavior, EnemyDefinition, EnemyOracle, NoopBehavior, Telegraph, TelegraphStyle,
};
pub use error::OracleError;
pub use items::{ItemDefinition, ItemEffect, ItemOracle};
pub use offerings::{OfferingDefinition, OfferingEffect, OfferingOracle};
pub use rng::{PcgRng, RngOracle, compute_seed};
pub use tiles::{TileDefinition, TileOracle};

/// Aggregates the oracles required by the engine and action pipeline.
///
/// Fields are optional so tests can build a partial environment; accessors
/// fail with a descriptive [`OracleError`] when an absent oracle is needed.
#[derive(Clone, Copy)]
pub struct GameEnv<'a> {
    enemies: Option<&'a dyn EnemyOracle>,
    items: Option<&'a dyn ItemOracle>,
    tiles: Option<&'a dyn TileOracle>,
    offerings: Option<&'a dyn OfferingOracle>,
    rng: Option<&'a dyn RngOracle>,
}

impl<'a> GameEnv<'a> {
    pub fn with_all(
        enemies: &'a dyn EnemyOracle,
        items: &'a dyn ItemOracle,
        tiles: &'a dyn TileOracle,
        offerings: &'a dyn OfferingOracle,
        rng: &'a dyn RngOracle,
    ) -> Self {
        Self {
            enemies: Some(enemies),
            items: Some(items),
            tiles: Some(tiles),
            offerings: Some(offerings),
            rng: Some(rng),
        }
    }

    pub fn empty() -> Self {
        Self {
            enemies: None,
            items: None,
            tiles: None,
            offerings: None,
            rng: None,
        }
    }

    pub fn with_enemies(mut self, enemies: &'a dyn EnemyOracle) -> Self {
        self.enemies = Some(enemies);
        self
    }

    pub fn with_items(mut self, items: &'a dyn ItemOracle) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_tiles(mut self, tiles: &'a dyn TileOracle) -> Self {
        self.tiles = Some(tiles);
        self
    }

    pub fn with_offerings(mut self, offerings: &'a dyn OfferingOracle) -> Self {
        self.offerings = Some(offerings);
        self
    }

    pub fn with_rng(mut self, rng: &'a dyn RngOracle) -> Self {
        self.rng = Some(rng);
        self
    }

    /// Returns the enemy oracle, or an error if not available.
    pub fn enemies(&self) -> Result<&'a dyn EnemyOracle, OracleError> {
        self.enemies.ok_or(OracleError::EnemiesNotAvailable)
    }

    /// Returns the item oracle, or an error if not available.
    pub fn items(&self) -> Result<&'a dyn ItemOracle, OracleError> {
        self.items.ok_or(OracleError::ItemsNotAvailable)
    }

    /// Returns the tile oracle, or an error if not available.
    pub fn tiles(&self) -> Result<&'a dyn TileOracle, OracleError> {
        self.tiles.ok_or(OracleError::TilesNotAvailable)
    }

    /// Returns the offering oracle, or an error if not available.
    pub fn offerings(&self) -> Result<&'a dyn OfferingOracle, OracleError> {
        self.offerings.ok_or(OracleError::OfferingsNotAvailable)
    }

    /// Returns the RNG oracle, or an error if not available.
    pub fn rng(&self) -> Result<&'a dyn RngOracle, OracleError> {
        self.rng.ok_or(OracleError::RngNotAvailable)
    }
}
