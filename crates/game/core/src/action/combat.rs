//! Player melee attack.

use crate::env::GameEnv;
use crate::event::{EventQueue, GameEvent};
use crate::state::GameState;

use super::ActionTransition;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum AttackError {}

/// Result of an attack. Hitting empty air is a soft failure that still
/// consumes the turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackOutcome {
    Missed,
    Hit { pos: usize },
    Killed { pos: usize },
}

/// Melee strike at the single cell the player faces.
///
/// Deals a flat 1 damage. The player's `damage` stat is reserved for
/// effects that scale; the basic strike never does.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct AttackAction;

impl ActionTransition for AttackAction {
    type Error = AttackError;
    type Result = AttackOutcome;

    fn apply(
        &self,
        state: &mut GameState,
        _env: &GameEnv<'_>,
        events: &mut EventQueue,
    ) -> Result<AttackOutcome, AttackError> {
        state.last_action_was_turn = false;

        let Some(pos) = state
            .player
            .facing
            .step_from(state.player.pos, state.dungeon_len())
        else {
            return Ok(AttackOutcome::Missed);
        };
        let Some(idx) = state.enemies.iter().position(|enemy| enemy.pos == pos) else {
            return Ok(AttackOutcome::Missed);
        };

        let enemy = &mut state.enemies[idx];
        enemy.hp -= 1;
        events.push(GameEvent::PlayerAttacked {
            pos,
            target: enemy.type_id.clone(),
        });

        if enemy.hp <= 0 {
            let dead = state.enemies.remove(idx);
            events.push(GameEvent::EnemyKilled {
                type_id: dead.type_id,
                pos,
            });
            Ok(AttackOutcome::Killed { pos })
        } else {
            Ok(AttackOutcome::Hit { pos })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testkit;

    #[test]
    fn attack_hits_only_the_faced_cell() {
        let (mut state, oracles) = testkit::single_hall(5);
        state.player.pos = 2;
        // Enemy behind the player is untouchable.
        state.enemies.push(testkit::slime_at(1, 0));

        let mut events = EventQueue::new();
        let outcome = AttackAction
            .apply(&mut state, &oracles.env(), &mut events)
            .unwrap();

        assert_eq!(outcome, AttackOutcome::Missed);
        assert_eq!(state.enemies.len(), 1);
        assert!(events.is_empty());
    }

    #[test]
    fn lethal_hit_removes_the_enemy() {
        let (mut state, oracles) = testkit::single_hall(5);
        state.player.pos = 2;
        let mut enemy = testkit::slime_at(3, 0);
        enemy.hp = 1;
        state.enemies.push(enemy);

        let mut events = EventQueue::new();
        let outcome = AttackAction
            .apply(&mut state, &oracles.env(), &mut events)
            .unwrap();

        assert_eq!(outcome, AttackOutcome::Killed { pos: 3 });
        assert!(state.enemies.is_empty());
        assert_eq!(
            events.events(),
            &[
                GameEvent::PlayerAttacked {
                    pos: 3,
                    target: "slime".into()
                },
                GameEvent::EnemyKilled {
                    type_id: "slime".into(),
                    pos: 3
                },
            ]
        );
    }

    #[test]
    fn nonlethal_hit_leaves_enemy_in_place() {
        let (mut state, oracles) = testkit::single_hall(5);
        state.player.pos = 2;
        let mut enemy = testkit::slime_at(3, 0);
        enemy.hp = 2;
        state.enemies.push(enemy);

        let mut events = EventQueue::new();
        let outcome = AttackAction
            .apply(&mut state, &oracles.env(), &mut events)
            .unwrap();

        assert_eq!(outcome, AttackOutcome::Hit { pos: 3 });
        assert_eq!(state.enemies[0].hp, 1);
    }
}
