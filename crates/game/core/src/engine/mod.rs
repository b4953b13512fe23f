//! Turn resolution pipeline.
//!
//! The [`GameEngine`] is the authoritative reducer for [`GameState`]. One
//! call to [`GameEngine::execute`] resolves one full turn: player action,
//! hall-scoped enemy reactions, post-turn world effects, and the death
//! check, emitting lifecycle events in exactly that order.
mod errors;
mod hook;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};
pub use hook::{GoldPickupHook, PostTurnHook};

use crate::action::{Action, ActionOutcome, ActionTransition};
use crate::enemy::process_enemy_turn;
use crate::env::{GameEnv, OracleError};
use crate::event::{EventQueue, GameEvent};
use crate::state::GameState;

/// Complete outcome of one executed turn.
#[derive(Debug)]
pub struct TurnOutcome {
    /// Action-specific result (step taken, attack landed, item consumed).
    pub action: ActionOutcome,
    /// Whether the player's hit points dropped to zero this turn.
    pub player_died: bool,
    /// Lifecycle events in emission order, drained for publication.
    pub events: Vec<GameEvent>,
}

/// Executes a transition through the three-phase pipeline.
fn drive_transition<T>(
    transition: &T,
    state: &mut GameState,
    env: &GameEnv<'_>,
    events: &mut EventQueue,
) -> Result<T::Result, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state, env, events)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state, env)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Runs the enemy phase: every enemy sharing the player's hall acts once,
/// in spawn order. Fails closed when the player stands on no hall-tagged
/// tile. Enemies in other halls never act.
pub fn run_enemy_turns(
    state: &mut GameState,
    env: &GameEnv<'_>,
    events: &mut EventQueue,
) -> Result<(), OracleError> {
    let Some(hall_id) = state.current_hall().map(|hall| hall.id) else {
        return Ok(());
    };
    let indices: Vec<usize> = state
        .enemies
        .iter()
        .enumerate()
        .filter(|(_, enemy)| enemy.hall == hall_id)
        .map(|(idx, _)| idx)
        .collect();

    let oracle = env.enemies()?;
    for idx in indices {
        process_enemy_turn(idx, state, oracle, events)?;
    }
    Ok(())
}

/// Game engine that resolves one turn at a time against a borrowed state.
pub struct GameEngine<'a> {
    state: &'a mut GameState,
    hooks: Vec<Box<dyn PostTurnHook>>,
}

impl<'a> GameEngine<'a> {
    /// Creates an engine with the built-in post-turn hooks.
    pub fn new(state: &'a mut GameState) -> Self {
        Self::with_hooks(state, vec![Box::new(GoldPickupHook)])
    }

    /// Creates an engine with a custom hook set.
    pub fn with_hooks(state: &'a mut GameState, mut hooks: Vec<Box<dyn PostTurnHook>>) -> Self {
        hooks.sort_by_key(|hook| hook.priority());
        Self { state, hooks }
    }

    /// Executes one player action as a full turn.
    ///
    /// Ordering is load-bearing: an enemy killed by the player action cannot
    /// act this turn, and a lethal counter-hit is detected only after every
    /// enemy in the hall has acted. A pre-validation failure propagates as
    /// an error before any event is emitted; no turn is consumed.
    pub fn execute(
        &mut self,
        env: &GameEnv<'_>,
        action: &Action,
    ) -> Result<TurnOutcome, ExecuteError> {
        // Events are buffered locally, so a rejected action publishes nothing.
        let mut events = EventQueue::new();
        events.push(GameEvent::TurnStart);

        let outcome = match action {
            Action::Move(transition) => ActionOutcome::Move(
                drive_transition(transition, self.state, env, &mut events)
                    .map_err(ExecuteError::Move)?,
            ),
            Action::Attack(transition) => ActionOutcome::Attack(
                drive_transition(transition, self.state, env, &mut events)
                    .map_err(ExecuteError::Attack)?,
            ),
            Action::UseDoor(transition) => {
                drive_transition(transition, self.state, env, &mut events)
                    .map_err(ExecuteError::Door)?;
                ActionOutcome::Door
            }
            Action::UseItem(transition) => ActionOutcome::UseItem(
                drive_transition(transition, self.state, env, &mut events)
                    .map_err(ExecuteError::UseItem)?,
            ),
        };

        run_enemy_turns(self.state, env, &mut events)?;
        events.push(GameEvent::TurnEnd);

        for hook in &self.hooks {
            if hook.should_trigger(self.state) {
                hook.apply(self.state, &mut events);
            }
        }

        let player_died = self.state.player.is_dead();
        if player_died {
            events.push(GameEvent::PlayerDied);
        }

        self.state.nonce += 1;

        Ok(TurnOutcome {
            action: outcome,
            player_died,
            events: events.drain(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{MoveAction, MoveOutcome};
    use crate::state::{Facing, Tile};
    use crate::testkit;

    #[test]
    fn gold_pickup_happens_once() {
        let (mut state, oracles) = testkit::single_hall(5);
        state.dungeon[1] = Tile::Gold { hall: 0, amount: 2 };
        state.player.pos = 0;

        let env = oracles.env();
        let mut engine = GameEngine::new(&mut state);
        let outcome = engine
            .execute(&env, &Action::Move(MoveAction::new(Facing::Right)))
            .unwrap();

        assert!(outcome.events.contains(&GameEvent::GoldPickup { amount: 2 }));
        assert_eq!(state.player.gold, 2);
        assert_eq!(state.dungeon[1], Tile::Floor { hall: 0 });

        // Step away and back: the tile is plain floor now.
        let env = oracles.env();
        let mut engine = GameEngine::new(&mut state);
        engine
            .execute(&env, &Action::Move(MoveAction::new(Facing::Left)))
            .unwrap();
        engine
            .execute(&env, &Action::Move(MoveAction::new(Facing::Left)))
            .unwrap();
        engine
            .execute(&env, &Action::Move(MoveAction::new(Facing::Right)))
            .unwrap();
        engine
            .execute(&env, &Action::Move(MoveAction::new(Facing::Right)))
            .unwrap();
        assert_eq!(state.player.gold, 2);
    }

    #[test]
    fn turn_events_bracket_the_action() {
        let (mut state, oracles) = testkit::single_hall(5);
        let env = oracles.env();
        let mut engine = GameEngine::new(&mut state);
        let outcome = engine
            .execute(&env, &Action::Move(MoveAction::new(Facing::Right)))
            .unwrap();

        assert_eq!(outcome.events.first(), Some(&GameEvent::TurnStart));
        assert!(outcome.events.contains(&GameEvent::TurnEnd));
        assert_eq!(
            outcome.action,
            ActionOutcome::Move(MoveOutcome::Stepped { from: 0, to: 1 })
        );
    }

    #[test]
    fn nonce_advances_per_turn() {
        let (mut state, oracles) = testkit::single_hall(5);
        let env = oracles.env();
        let mut engine = GameEngine::new(&mut state);
        engine
            .execute(&env, &Action::Move(MoveAction::new(Facing::Right)))
            .unwrap();
        engine
            .execute(&env, &Action::Move(MoveAction::new(Facing::Right)))
            .unwrap();
        assert_eq!(state.nonce, 2);
    }

    #[test]
    fn rejected_door_leaves_no_trace() {
        let (mut state, oracles) = testkit::two_halls_with_door();
        state.player.pos = 1;
        state.enemies.push(testkit::slime_at(4, 1));

        let env = oracles.env();
        let mut engine = GameEngine::new(&mut state);
        let err = engine
            .execute(&env, &Action::UseDoor(crate::action::DoorAction))
            .unwrap_err();

        assert!(err.is_door_blocked());
        assert_eq!(state.player.pos, 1);
        assert_eq!(state.nonce, 0);
    }
}
