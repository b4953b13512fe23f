//! Intent routing and session flow.
//!
//! [`GameSession`] owns the [`GameState`] for one play-through and is the
//! only layer allowed to mutate it, always through the core engine or the
//! shop state machine. A frontend feeds it [`Intent`] values and renders
//! from the returned [`StepReport`] plus the state accessors; the same
//! events also go out on the session's [`EventBus`] for passive observers.
//!
//! Flow rules, in priority order:
//! - dead player: every intent except `Interact` is ignored; `Interact`
//!   restarts at level 1 with starting stats.
//! - open shop: move intents drive the cursor, `Interact` buys or leaves;
//!   leaving generates the next level.
//! - otherwise intents map to engine actions; `Interact` resolves against
//!   the tile under the player (door teleport or stairs).

use tracing::{debug, info};

use corridor_core::{
    Action, AttackAction, DoorAction, EventQueue, Facing, GameConfig, GameEngine, GameEvent,
    GameState, MoveAction, ShopSession, ShopTransaction, Tile, TileKind, UseItemAction,
    compute_seed,
};

use crate::error::Result;
use crate::events::EventBus;
use crate::levelgen::{GeneratedLevel, generate_level};
use crate::oracle::OracleBundle;

/// Seed-derivation context for level generation rolls.
const LEVEL_SEED_CONTEXT: u32 = 0x4c45_5645;

/// One player input, already decoupled from any keymap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    /// Context-sensitive: door, stairs, shop buy, death restart.
    Interact,
    Attack,
    UseItem,
}

/// What the session is currently doing, derived from state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionFlow {
    Playing,
    Shopping,
    Dead,
}

/// Everything a frontend needs to react to one processed intent.
#[derive(Debug, Default)]
pub struct StepReport {
    /// Lifecycle events in emission order; also published on the bus.
    pub events: Vec<GameEvent>,
    /// Transient line for the message area, when the intent warrants one.
    pub message: Option<String>,
}

impl StepReport {
    fn ignored() -> Self {
        Self::default()
    }

    fn with_message(message: impl Into<String>) -> Self {
        Self {
            events: Vec::new(),
            message: Some(message.into()),
        }
    }
}

/// One play-through: state, shop, content oracles, and the event bus.
pub struct GameSession {
    config: GameConfig,
    state: GameState,
    shop: ShopSession,
    oracles: OracleBundle,
    bus: EventBus,
    /// Count of generated levels, mixed into each generation seed.
    levels_generated: u64,
}

impl GameSession {
    /// Starts a session with the built-in content, generating level 1.
    pub fn new(config: GameConfig, game_seed: u64) -> Result<Self> {
        Self::with_oracles(config, game_seed, OracleBundle::builtin())
    }

    /// Starts a session with custom content registries.
    pub fn with_oracles(config: GameConfig, game_seed: u64, oracles: OracleBundle) -> Result<Self> {
        let state = GameState::new(&config, game_seed);
        let mut session = Self {
            config,
            state,
            shop: ShopSession::new(),
            oracles,
            bus: EventBus::new(),
            levels_generated: 0,
        };
        let mut events = EventQueue::new();
        session.install_generated_level(&mut events)?;
        session.bus.publish_all(events.drain());
        Ok(session)
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn shop(&self) -> &ShopSession {
        &self.shop
    }

    pub fn oracles(&self) -> &OracleBundle {
        &self.oracles
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// A handle for subscribing to session events.
    pub fn bus(&self) -> EventBus {
        self.bus.clone()
    }

    pub fn flow(&self) -> SessionFlow {
        if self.state.player.is_dead() {
            SessionFlow::Dead
        } else if self.shop.is_open() {
            SessionFlow::Shopping
        } else {
            SessionFlow::Playing
        }
    }

    /// Replaces the current dungeon with a handcrafted level.
    ///
    /// Scripted scenarios and tests use this to bypass random generation;
    /// player stats carry over exactly as on a stairs transition.
    pub fn load_level(&mut self, level: GeneratedLevel) {
        self.state.install_level(
            level.dungeon,
            level.halls,
            level.door_connections,
            level.enemies,
            level.start_pos,
        );
    }

    /// Processes one intent and returns what happened.
    pub fn step(&mut self, intent: Intent) -> Result<StepReport> {
        debug!(?intent, flow = ?self.flow(), "session step");
        let report = match self.flow() {
            SessionFlow::Dead => self.step_dead(intent)?,
            SessionFlow::Shopping => self.step_shop(intent)?,
            SessionFlow::Playing => self.step_playing(intent)?,
        };
        self.bus.publish_all(report.events.iter().cloned());
        Ok(report)
    }

    fn step_dead(&mut self, intent: Intent) -> Result<StepReport> {
        if intent != Intent::Interact {
            return Ok(StepReport::ignored());
        }
        info!("restarting after death");
        self.state.player.reset(&self.config.player);
        self.state.current_level = 1;
        let mut events = EventQueue::new();
        self.install_generated_level(&mut events)?;
        Ok(StepReport {
            events: events.drain(),
            message: None,
        })
    }

    fn step_shop(&mut self, intent: Intent) -> Result<StepReport> {
        match intent {
            Intent::MoveLeft => {
                self.shop.navigate(-1);
                Ok(StepReport::ignored())
            }
            Intent::MoveRight => {
                self.shop.navigate(1);
                Ok(StepReport::ignored())
            }
            Intent::Interact => {
                let mut events = EventQueue::new();
                let transaction =
                    self.shop
                        .buy(&mut self.state, self.oracles.offerings(), &mut events)?;
                let message = match transaction {
                    ShopTransaction::Leave => {
                        // The level counter advanced when the stairs were
                        // used; the shop only delays the generation.
                        self.install_generated_level(&mut events)?;
                        None
                    }
                    ShopTransaction::Bought { item } => {
                        let name = self
                            .oracles
                            .offerings()
                            .definition(&item)
                            .map_or(item, |def| def.name.clone());
                        Some(format!("Bought {name}"))
                    }
                    ShopTransaction::CannotAfford { .. } => Some("Not enough gold!".to_string()),
                    ShopTransaction::Noop => None,
                };
                Ok(StepReport {
                    events: events.drain(),
                    message,
                })
            }
            Intent::Attack | Intent::UseItem => Ok(StepReport::ignored()),
        }
    }

    fn step_playing(&mut self, intent: Intent) -> Result<StepReport> {
        match intent {
            Intent::MoveLeft => self.execute(Action::Move(MoveAction::new(Facing::Left))),
            Intent::MoveRight => self.execute(Action::Move(MoveAction::new(Facing::Right))),
            Intent::Attack => self.execute(Action::Attack(AttackAction)),
            Intent::UseItem => self.execute(Action::UseItem(UseItemAction)),
            Intent::Interact => self.interact(),
        }
    }

    /// Resolves the interact intent against the tile under the player.
    fn interact(&mut self) -> Result<StepReport> {
        let kind = self
            .state
            .dungeon
            .get(self.state.player.pos)
            .map(Tile::kind);
        match kind {
            Some(TileKind::Door) => match self.execute(Action::UseDoor(DoorAction)) {
                Ok(report) => Ok(report),
                Err(crate::RuntimeError::Execute(err)) if err.is_door_blocked() => {
                    Ok(StepReport::with_message("Something blocks the other side!"))
                }
                Err(err) => Err(err),
            },
            Some(TileKind::Stairs) => {
                let from = self.state.current_level;
                self.state.current_level += 1;
                info!(from, to = self.state.current_level, "descending");
                let mut events = EventQueue::new();
                events.push(GameEvent::LevelChanged {
                    from,
                    to: self.state.current_level,
                });
                self.shop.open(self.oracles.offerings(), &mut events);
                Ok(StepReport {
                    events: events.drain(),
                    message: None,
                })
            }
            _ => Ok(StepReport::ignored()),
        }
    }

    /// Runs one action through the core engine as a full turn.
    fn execute(&mut self, action: Action) -> Result<StepReport> {
        let env = self.oracles.env();
        let outcome = GameEngine::new(&mut self.state).execute(&env, &action)?;
        Ok(StepReport {
            events: outcome.events,
            message: None,
        })
    }

    /// Generates and installs a level for `state.current_level`.
    ///
    /// Each generation draws a fresh seed from the session seed and the
    /// count of levels generated so far, so replaying the same seed and
    /// intent sequence reproduces the same dungeons.
    fn install_generated_level(&mut self, events: &mut EventQueue) -> Result<()> {
        let seed = compute_seed(
            self.state.game_seed,
            self.levels_generated,
            LEVEL_SEED_CONTEXT,
        );
        self.levels_generated += 1;
        let level = generate_level(
            &self.config.level,
            self.state.current_level,
            seed,
            self.oracles.enemies(),
            events,
        )?;
        info!(
            level = self.state.current_level,
            halls = level.halls.len(),
            enemies = level.enemies.len(),
            "level installed"
        );
        self.load_level(level);
        Ok(())
    }
}
