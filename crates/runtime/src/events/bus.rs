//! Topic-based event bus implementation.

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

use corridor_core::GameEvent;

/// Topics for event routing.
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Per-turn lifecycle: turn brackets, player actions, combat.
    Turn,
    /// World changes: spawns, levels, doors, gold.
    World,
    /// Shop lifecycle and purchases.
    Shop,
}

impl Topic {
    /// Routing table from event to topic.
    pub fn of(event: &GameEvent) -> Topic {
        match event {
            GameEvent::TurnStart
            | GameEvent::TurnEnd
            | GameEvent::PlayerMoved { .. }
            | GameEvent::PlayerAttacked { .. }
            | GameEvent::PlayerDamaged { .. }
            | GameEvent::PlayerDied
            | GameEvent::ItemUsed { .. } => Topic::Turn,

            GameEvent::EnemyKilled { .. }
            | GameEvent::EnemySpawned { .. }
            | GameEvent::LevelGenerated { .. }
            | GameEvent::LevelChanged { .. }
            | GameEvent::DoorUsed { .. }
            | GameEvent::GoldPickup { .. } => Topic::World,

            GameEvent::ShopOpened
            | GameEvent::ShopClosed
            | GameEvent::ShopPurchase { .. } => Topic::Shop,
        }
    }
}

/// Topic-based event bus.
///
/// Consumers subscribe to the topics they care about and only receive those
/// events. Publication is fire-and-forget: a topic with no subscribers drops
/// the event silently.
pub struct EventBus {
    channels: Arc<HashMap<Topic, broadcast::Sender<GameEvent>>>,
}

impl EventBus {
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a bus with the given buffer capacity per topic.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut channels = HashMap::new();
        channels.insert(Topic::Turn, broadcast::channel(capacity).0);
        channels.insert(Topic::World, broadcast::channel(capacity).0);
        channels.insert(Topic::Shop, broadcast::channel(capacity).0);

        Self {
            channels: Arc::new(channels),
        }
    }

    /// Publishes an event to its topic. Never blocks the turn.
    pub fn publish(&self, event: GameEvent) {
        let topic = Topic::of(&event);
        if let Some(tx) = self.channels.get(&topic)
            && tx.send(event).is_err()
        {
            // No subscribers for this topic, which is normal.
            tracing::trace!("no subscribers for topic {:?}", topic);
        }
    }

    /// Publishes a batch in emission order.
    pub fn publish_all(&self, events: impl IntoIterator<Item = GameEvent>) {
        for event in events {
            self.publish(event);
        }
    }

    /// Subscribes to a single topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<GameEvent> {
        self.channels
            .get(&topic)
            .expect("topic channel not initialized")
            .subscribe()
    }
}

impl Clone for EventBus {
    fn clone(&self) -> Self {
        Self {
            channels: Arc::clone(&self.channels),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn events_route_to_their_topic() {
        let bus = EventBus::new();
        let mut turn = bus.subscribe(Topic::Turn);
        let mut world = bus.subscribe(Topic::World);

        bus.publish(GameEvent::TurnStart);
        bus.publish(GameEvent::GoldPickup { amount: 3 });

        assert_eq!(turn.recv().await.unwrap(), GameEvent::TurnStart);
        assert_eq!(
            world.recv().await.unwrap(),
            GameEvent::GoldPickup { amount: 3 }
        );
        assert!(turn.try_recv().is_err());
    }

    #[test]
    fn publish_without_subscribers_is_silent() {
        let bus = EventBus::new();
        bus.publish(GameEvent::ShopOpened);
    }
}
