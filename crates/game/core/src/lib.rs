//! Deterministic game rules for the corridor roguelike.
//!
//! `corridor-core` defines the canonical rules (actions, engine, world state)
//! and exposes pure APIs that can be reused by the runtime and offline tools.
//! All state mutation flows through [`engine::GameEngine`]; content crates
//! register behaviour definitions through the oracle traits in [`env`].
pub mod action;
pub mod config;
pub mod enemy;
pub mod engine;
pub mod env;
pub mod event;
pub mod registry;
pub mod shop;
pub mod state;

#[cfg(test)]
pub(crate) mod testkit;

pub use action::{
    Action, ActionOutcome, ActionTransition, AttackAction, AttackError, AttackOutcome, DoorAction,
    DoorError, MoveAction, MoveError, MoveOutcome, UseItemAction, UseItemError, UseItemOutcome,
};
pub use config::{GameConfig, LevelConfig, PlayerConfig};
pub use enemy::{
    DEFAULT_SPAWN_TYPE, enemy_at, pick_enemy_type, process_enemy_turn, spawn_enemy,
};
pub use engine::{
    ExecuteError, GameEngine, GoldPickupHook, PostTurnHook, TransitionPhase,
    TransitionPhaseError, TurnOutcome, run_enemy_turns,
};
pub use env::{
    EnemyBehavior, EnemyDefinition, EnemyOracle, GameEnv, ItemDefinition, ItemEffect, ItemOracle,
    OfferingDefinition, OfferingEffect, OfferingOracle, OracleError, PcgRng, RngOracle, Telegraph,
    TelegraphStyle, TileDefinition, TileOracle, compute_seed,
};
pub use event::{EventQueue, GameEvent};
pub use registry::Registry;
pub use shop::{OfferSnapshot, ShopSession, ShopTransaction};
pub use state::{BehaviorState, Enemy, Facing, GameState, Hall, HallId, PlayerState, Tile, TileKind};
