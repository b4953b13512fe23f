//! Built-in consumable items.

use std::sync::Arc;

use corridor_core::env::{ItemDefinition, ItemEffect};
use corridor_core::event::{EventQueue, GameEvent};
use corridor_core::registry::Registry;
use corridor_core::state::GameState;

pub const HEALTH_POTION: &str = "health-potion";
pub const THROWING_DAGGER: &str = "throwing-dagger";

/// Restores up to 2 hit points, capped at max. Refuses at full health so
/// the potion is not wasted.
struct HealthPotion;

impl ItemEffect for HealthPotion {
    fn apply(&self, state: &mut GameState, events: &mut EventQueue) -> bool {
        let player = &mut state.player;
        if player.hp >= player.max_hp {
            return false;
        }
        player.hp = (player.hp + 2).min(player.max_hp);
        events.push(GameEvent::ItemUsed {
            item: HEALTH_POTION.into(),
        });
        true
    }
}

/// Hits the first enemy within 3 cells in the facing direction for 2
/// damage. Cells beyond the first hit are never checked; a clean miss
/// leaves the dagger in the inventory.
struct ThrowingDagger;

impl ItemEffect for ThrowingDagger {
    fn apply(&self, state: &mut GameState, events: &mut EventQueue) -> bool {
        let facing = state.player.facing.delta();
        let origin = state.player.pos as isize;
        for i in 1..=3 {
            let pos = origin + facing * i;
            if pos < 0 || pos as usize >= state.dungeon_len() {
                continue;
            }
            let pos = pos as usize;
            let Some(idx) = state.enemies.iter().position(|enemy| enemy.pos == pos) else {
                continue;
            };

            let enemy = &mut state.enemies[idx];
            enemy.hp -= 2;
            if enemy.hp <= 0 {
                let dead = state.enemies.remove(idx);
                events.push(GameEvent::EnemyKilled {
                    type_id: dead.type_id,
                    pos,
                });
            }
            events.push(GameEvent::ItemUsed {
                item: THROWING_DAGGER.into(),
            });
            return true;
        }
        false
    }
}

/// The stock item table.
pub fn builtin_items() -> Registry<ItemDefinition> {
    let mut registry = Registry::new();
    registry.register(
        HEALTH_POTION,
        ItemDefinition {
            name: "Potion".into(),
            glyph: 'p',
            description: "Restore 2 HP".into(),
            effect: Arc::new(HealthPotion),
        },
    );
    registry.register(
        THROWING_DAGGER,
        ItemDefinition {
            name: "Dagger".into(),
            glyph: 'd',
            description: "Hit enemy up to 3 tiles away".into(),
            effect: Arc::new(ThrowingDagger),
        },
    );
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tiles::tests_support::{hall_state, slime};
    use corridor_core::state::Facing;

    #[test]
    fn potion_refuses_at_full_health() {
        let mut state = hall_state(4);
        let mut events = EventQueue::new();
        assert!(!HealthPotion.apply(&mut state, &mut events));
        assert!(events.is_empty());
    }

    #[test]
    fn potion_caps_at_max_hp() {
        let mut state = hall_state(4);
        state.player.hp = 2;
        let mut events = EventQueue::new();
        assert!(HealthPotion.apply(&mut state, &mut events));
        assert_eq!(state.player.hp, 3);
    }

    #[test]
    fn dagger_hits_first_enemy_and_stops_scanning() {
        let mut state = hall_state(6);
        state.player.pos = 0;
        state.player.facing = Facing::Right;
        state.enemies.push(slime(2));
        state.enemies.push(slime(3));

        let mut events = EventQueue::new();
        assert!(ThrowingDagger.apply(&mut state, &mut events));

        // First target died (1 hp - 2); the one behind it was never touched.
        assert_eq!(state.enemies.len(), 1);
        assert_eq!(state.enemies[0].pos, 3);
        assert_eq!(state.enemies[0].hp, 1);
        assert_eq!(
            events.events(),
            &[
                GameEvent::EnemyKilled {
                    type_id: "slime".into(),
                    pos: 2
                },
                GameEvent::ItemUsed {
                    item: THROWING_DAGGER.into()
                },
            ]
        );
    }

    #[test]
    fn dagger_respects_facing_and_range() {
        let mut state = hall_state(8);
        state.player.pos = 1;
        state.player.facing = Facing::Left;
        // In range to the right, but the player faces left.
        state.enemies.push(slime(3));

        let mut events = EventQueue::new();
        assert!(!ThrowingDagger.apply(&mut state, &mut events));
        assert_eq!(state.enemies.len(), 1);

        state.player.facing = Facing::Right;
        state.enemies[0].pos = 5;
        // Range is 3; an enemy 4 cells away is safe.
        assert!(!ThrowingDagger.apply(&mut state, &mut events));
    }

    #[test]
    fn dagger_wounds_without_killing_tougher_enemies() {
        let mut state = hall_state(6);
        state.player.pos = 0;
        state.player.facing = Facing::Right;
        let mut skeleton = slime(2);
        skeleton.type_id = "skeleton".into();
        skeleton.hp = 3;
        state.enemies.push(skeleton);

        let mut events = EventQueue::new();
        assert!(ThrowingDagger.apply(&mut state, &mut events));
        assert_eq!(state.enemies[0].hp, 1);
        assert_eq!(
            events.events(),
            &[GameEvent::ItemUsed {
                item: THROWING_DAGGER.into()
            }]
        );
    }
}
