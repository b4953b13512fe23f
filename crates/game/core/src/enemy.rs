//! Enemy lifecycle: spawning, spawn-type selection, and per-turn dispatch.

use crate::env::{EnemyOracle, OracleError, RngOracle};
use crate::event::{EventQueue, GameEvent};
use crate::state::{Enemy, GameState, HallId};

/// Fallback spawn type when no registered type qualifies for the level.
pub const DEFAULT_SPAWN_TYPE: &str = "slime";

/// Returns the enemy occupying `pos`, if any.
///
/// Enemies never share a position, so at most one can match.
pub fn enemy_at(enemies: &[Enemy], pos: usize) -> Option<&Enemy> {
    enemies.iter().find(|enemy| enemy.pos == pos)
}

/// Constructs an [`Enemy`] from its registered definition.
///
/// The instance copies the definition's starting hit points, damage, and
/// initial behaviour state; the caller owns placing it into
/// `GameState::enemies`.
pub fn spawn_enemy(
    oracle: &dyn EnemyOracle,
    events: &mut EventQueue,
    type_id: &str,
    pos: usize,
    hall: HallId,
) -> Result<Enemy, OracleError> {
    let def = oracle
        .definition(type_id)
        .ok_or_else(|| OracleError::unknown("enemy", type_id))?;

    let enemy = Enemy {
        type_id: type_id.to_string(),
        pos,
        hall,
        hp: def.hp,
        damage: def.damage,
        state: def.initial_state,
    };
    events.push(GameEvent::EnemySpawned {
        type_id: enemy.type_id.clone(),
        pos,
    });
    Ok(enemy)
}

/// Selects an enemy type for a spawn at `level` by weighted random draw.
///
/// Candidates are the registered types whose `min_level` admits the level,
/// walked in registration order; each type's weight (minimum 1) shrinks the
/// roll until it goes negative. An empty candidate set falls back to
/// [`DEFAULT_SPAWN_TYPE`].
pub fn pick_enemy_type(
    oracle: &dyn EnemyOracle,
    rng: &dyn RngOracle,
    seed: u64,
    level: u32,
) -> String {
    let candidates: Vec<&str> = oracle
        .names()
        .into_iter()
        .filter(|name| {
            oracle
                .definition(name)
                .is_some_and(|def| level >= def.min_level)
        })
        .collect();
    if candidates.is_empty() {
        return DEFAULT_SPAWN_TYPE.to_string();
    }

    let weights: Vec<u32> = candidates
        .iter()
        .map(|name| {
            oracle
                .definition(name)
                .map_or(1, |def| def.spawn_weight())
        })
        .collect();
    let total: u32 = weights.iter().sum();

    let mut roll = rng.range(seed, 0, total - 1) as i64;
    for (name, weight) in candidates.iter().zip(&weights) {
        roll -= *weight as i64;
        if roll < 0 {
            return (*name).to_string();
        }
    }
    // The roll is bounded by the total weight, so the loop always returns;
    // keep the last candidate as a safety net.
    candidates[candidates.len() - 1].to_string()
}

/// Runs one enemy's turn by dispatching to its type's behaviour.
///
/// The enemy is copied out for the duration of the step so the behaviour can
/// borrow the rest of the state mutably, then written back.
pub fn process_enemy_turn(
    idx: usize,
    state: &mut GameState,
    oracle: &dyn EnemyOracle,
    events: &mut EventQueue,
) -> Result<(), OracleError> {
    let mut enemy = state.enemies[idx].clone();
    let behavior = oracle
        .definition(&enemy.type_id)
        .ok_or_else(|| OracleError::unknown("enemy", enemy.type_id.clone()))?
        .behavior
        .clone();

    behavior.step(&mut enemy, state, events);
    state.enemies[idx] = enemy;
    Ok(())
}
