//! Authoritative game state representation.
//!
//! This module owns the data structures describing the player, the dungeon
//! strip, halls, enemies, and turn bookkeeping. Runtime layers read this
//! state freely but mutate it exclusively through the engine.
mod enemy;
mod player;
mod tile;

pub use enemy::{BehaviorState, Enemy};
pub use player::{Facing, PlayerState};
pub use tile::{Hall, HallId, Tile, TileKind};

use std::collections::BTreeMap;

use crate::config::GameConfig;

/// Canonical snapshot of the game state.
///
/// One instance lives for the whole session; level transitions replace the
/// dungeon fields in place and death restart resets the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    /// Base seed for deterministic random rolls. Set once at session start.
    pub game_seed: u64,
    /// Action sequence number, incremented once per executed action.
    /// Combined with `game_seed` to derive per-event RNG seeds.
    pub nonce: u64,

    pub player: PlayerState,
    /// The dungeon strip; index = absolute position.
    pub dungeon: Vec<Tile>,
    /// Non-overlapping contiguous hall ranges; index = hall id.
    pub halls: Vec<Hall>,
    /// Symmetric pairing of door positions: if a maps to b, b maps to a.
    pub door_connections: BTreeMap<usize, usize>,
    /// Living enemies in spawn order. Spawn order is turn order.
    pub enemies: Vec<Enemy>,
    /// Monotonically increasing except for the death-restart reset to 1.
    pub current_level: u32,
    /// Whether the last player action only changed facing. Drives the hint
    /// line in the presentation layer, nothing else.
    pub last_action_was_turn: bool,
}

impl GameState {
    /// Creates a fresh pre-level state for a new session.
    pub fn new(config: &GameConfig, game_seed: u64) -> Self {
        Self {
            game_seed,
            nonce: 0,
            player: PlayerState::new(&config.player),
            dungeon: Vec::new(),
            halls: Vec::new(),
            door_connections: BTreeMap::new(),
            enemies: Vec::new(),
            current_level: 1,
            last_action_was_turn: false,
        }
    }

    pub fn dungeon_len(&self) -> usize {
        self.dungeon.len()
    }

    /// The hall containing the player, if the player stands on a hall-tagged
    /// tile. Walls carry no hall id, so this fails closed.
    pub fn current_hall(&self) -> Option<&Hall> {
        let tile = self.dungeon.get(self.player.pos)?;
        self.halls.get(tile.hall_id()?)
    }

    /// Installs a freshly generated level, keeping player stats intact.
    pub fn install_level(
        &mut self,
        dungeon: Vec<Tile>,
        halls: Vec<Hall>,
        door_connections: BTreeMap<usize, usize>,
        enemies: Vec<Enemy>,
        start_pos: usize,
    ) {
        self.dungeon = dungeon;
        self.halls = halls;
        self.door_connections = door_connections;
        self.enemies = enemies;
        self.player.pos = start_pos;
    }
}
