//! Built-in enemy types and their behaviours.

use std::sync::Arc;

use corridor_core::env::{EnemyBehavior, EnemyDefinition, Telegraph};
use corridor_core::event::{EventQueue, GameEvent};
use corridor_core::registry::Registry;
use corridor_core::state::{BehaviorState, Enemy, GameState};
use corridor_core::enemy_at;

/// Sign of a one-cell step from `from` toward `to`; `None` when aligned.
fn dir_toward(from: usize, to: usize) -> Option<isize> {
    match to.cmp(&from) {
        std::cmp::Ordering::Greater => Some(1),
        std::cmp::Ordering::Less => Some(-1),
        std::cmp::Ordering::Equal => None,
    }
}

/// Moves the enemy one cell in `dir` if the destination is inside its hall,
/// walkable, unoccupied by another enemy, and (unless `onto_player`) not
/// the player's cell.
fn try_step(enemy: &mut Enemy, state: &GameState, dir: isize, onto_player: bool) {
    let Some(hall) = state.halls.get(enemy.hall) else {
        return;
    };
    let to = enemy.pos as isize + dir;
    if to < hall.start as isize || to > hall.end as isize {
        return;
    }
    let to = to as usize;
    if state.dungeon[to].is_wall() {
        return;
    }
    if enemy_at(&state.enemies, to).is_some() {
        return;
    }
    if !onto_player && to == state.player.pos {
        return;
    }
    enemy.pos = to;
}

fn damage_player(enemy: &Enemy, state: &mut GameState, events: &mut EventQueue) {
    state.player.hp -= enemy.damage;
    events.push(GameEvent::PlayerDamaged {
        amount: enemy.damage,
        source: enemy.type_id.clone(),
    });
}

/// Alternating move/attack cycle, shared by slime and skeleton.
///
/// Move phase: one step toward the player, then arm. Attack phase: hit only
/// if a step toward the player would land exactly on them, then disarm
/// whether or not the hit connected.
pub struct SlimePattern;

impl EnemyBehavior for SlimePattern {
    fn step(&self, enemy: &mut Enemy, state: &mut GameState, events: &mut EventQueue) {
        match enemy.state {
            BehaviorState::Attack => {
                let dir = if state.player.pos > enemy.pos { 1 } else { -1 };
                if enemy.pos as isize + dir == state.player.pos as isize {
                    damage_player(enemy, state, events);
                }
                enemy.state = BehaviorState::Move;
            }
            BehaviorState::Move => {
                if let Some(dir) = dir_toward(enemy.pos, state.player.pos) {
                    try_step(enemy, state, dir, false);
                }
                enemy.state = BehaviorState::Attack;
            }
        }
    }

    fn telegraph(&self, enemy: &Enemy, player_pos: usize) -> Telegraph {
        match enemy.state {
            BehaviorState::Move => Telegraph::arrow_toward(enemy.pos, player_pos),
            BehaviorState::Attack => Telegraph::attack(),
        }
    }
}

/// Moves toward the player every turn and bites whenever a step toward the
/// player lands adjacent. No behaviour state.
pub struct BatPattern;

impl EnemyBehavior for BatPattern {
    fn step(&self, enemy: &mut Enemy, state: &mut GameState, events: &mut EventQueue) {
        if let Some(dir) = dir_toward(enemy.pos, state.player.pos) {
            try_step(enemy, state, dir, false);
        }
        let attack_dir = if state.player.pos > enemy.pos { 1 } else { -1 };
        if enemy.pos as isize + attack_dir == state.player.pos as isize {
            damage_player(enemy, state, events);
        }
    }

    fn telegraph(&self, enemy: &Enemy, player_pos: usize) -> Telegraph {
        if player_pos.abs_diff(enemy.pos) <= 2 {
            Telegraph::attack()
        } else {
            Telegraph::arrow_toward(enemy.pos, player_pos)
        }
    }
}

/// Keeps its distance and zaps at range 2.
///
/// Attack phase hits anything within two cells without moving. Move phase
/// retreats when adjacent (retreat may land on the "behind" cell only),
/// approaches when out of range, and holds at exactly range 2.
pub struct WizardPattern;

impl EnemyBehavior for WizardPattern {
    fn step(&self, enemy: &mut Enemy, state: &mut GameState, events: &mut EventQueue) {
        let dist = state.player.pos.abs_diff(enemy.pos);
        match enemy.state {
            BehaviorState::Attack => {
                if dist <= 2 {
                    damage_player(enemy, state, events);
                }
                enemy.state = BehaviorState::Move;
            }
            BehaviorState::Move => {
                if dist <= 1 {
                    // Retreating, so landing on the player is impossible and
                    // the occupancy check skips that clause.
                    let dir = if state.player.pos > enemy.pos { -1 } else { 1 };
                    try_step(enemy, state, dir, true);
                } else if dist > 2 {
                    let dir = if state.player.pos > enemy.pos { 1 } else { -1 };
                    try_step(enemy, state, dir, false);
                }
                enemy.state = BehaviorState::Attack;
            }
        }
    }

    fn telegraph(&self, enemy: &Enemy, player_pos: usize) -> Telegraph {
        let dist = player_pos.abs_diff(enemy.pos);
        match enemy.state {
            BehaviorState::Attack => {
                if dist <= 2 {
                    Telegraph::attack()
                } else {
                    Telegraph::idle()
                }
            }
            BehaviorState::Move => {
                if dist <= 1 {
                    // Retreating: arrow points away from the player.
                    if player_pos > enemy.pos {
                        Telegraph::movement('\u{2190}')
                    } else {
                        Telegraph::movement('\u{2192}')
                    }
                } else if dist > 2 {
                    Telegraph::arrow_toward(enemy.pos, player_pos)
                } else {
                    Telegraph::idle()
                }
            }
        }
    }
}

/// The stock enemy table.
pub fn builtin_enemies() -> Registry<EnemyDefinition> {
    let mut registry = Registry::new();
    registry.register(
        "slime",
        EnemyDefinition {
            name: "slime".into(),
            glyph: 's',
            hp: 1,
            damage: 1,
            initial_state: BehaviorState::Move,
            gold_drop: (1, 2),
            spawn_weight: 10,
            min_level: 1,
            behavior: Arc::new(SlimePattern),
        },
    );
    registry.register(
        "bat",
        EnemyDefinition {
            name: "bat".into(),
            glyph: 'b',
            hp: 1,
            damage: 1,
            initial_state: BehaviorState::Move,
            gold_drop: (1, 3),
            spawn_weight: 6,
            min_level: 1,
            behavior: Arc::new(BatPattern),
        },
    );
    // Same pattern as the slime; the stats do the work.
    registry.register(
        "skeleton",
        EnemyDefinition {
            name: "skeleton".into(),
            glyph: 'S',
            hp: 2,
            damage: 2,
            initial_state: BehaviorState::Move,
            gold_drop: (2, 4),
            spawn_weight: 4,
            min_level: 2,
            behavior: Arc::new(SlimePattern),
        },
    );
    registry.register(
        "wizard",
        EnemyDefinition {
            name: "wizard".into(),
            glyph: 'W',
            hp: 2,
            damage: 1,
            initial_state: BehaviorState::Move,
            gold_drop: (3, 5),
            spawn_weight: 3,
            min_level: 3,
            behavior: Arc::new(WizardPattern),
        },
    );
    registry
}
