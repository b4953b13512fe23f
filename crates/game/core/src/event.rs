//! Lifecycle events emitted by the turn pipeline.
//!
//! The engine and behaviours push events into an [`EventQueue`] as they
//! mutate state; the runtime drains the queue after each action and fans the
//! events out on its bus. Subscribers never feed back into the turn.

/// One game-state change notification.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameEvent {
    TurnStart,
    TurnEnd,
    PlayerMoved { from: usize, to: usize },
    PlayerAttacked { pos: usize, target: String },
    PlayerDamaged { amount: i32, source: String },
    PlayerDied,
    EnemyKilled { type_id: String, pos: usize },
    EnemySpawned { type_id: String, pos: usize },
    LevelGenerated { level: u32 },
    LevelChanged { from: u32, to: u32 },
    DoorUsed { from: usize, to: usize },
    GoldPickup { amount: u32 },
    ItemUsed { item: String },
    ShopOpened,
    ShopClosed,
    ShopPurchase { item: String },
}

/// Ordered buffer of events produced by one action or flow step.
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drains all queued events in emission order.
    pub fn drain(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
