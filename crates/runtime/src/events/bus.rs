//! Topic-based event bus implementation.

use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::sync::broadcast;

use super::types::{EquipmentEvent, EvolutionEvent, ProgressionEvent, SatchelEvent, WalletEvent};

/// Topics for event routing
#[derive(Debug, Clone, Copy, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum Topic {
    /// Experience, level-ups, and synthesis
    Progression,
    /// Evolution availability and commits
    Evolution,
    /// Weapon equip/unequip
    Equipment,
    /// Gold balance changes
    Wallet,
    /// Item stacks entering or leaving the satchel
    Satchel,
}

impl Topic {
    pub const ALL: [Topic; 5] = [
        Topic::Progression,
        Topic::Evolution,
        Topic::Equipment,
        Topic::Wallet,
        Topic::Satchel,
    ];
}

/// Event wrapper that carries the topic and typed event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    Progression(ProgressionEvent),
    Evolution(EvolutionEvent),
    Equipment(EquipmentEvent),
    Wallet(WalletEvent),
    Satchel(SatchelEvent),
}

impl Event {
    pub fn topic(&self) -> Topic {
        match self {
            Event::Progression(_) => Topic::Progression,
            Event::Evolution(_) => Topic::Evolution,
            Event::Equipment(_) => Topic::Equipment,
            Event::Wallet(_) => Topic::Wallet,
            Event::Satchel(_) => Topic::Satchel,
        }
    }
}

struct Channels {
    progression: broadcast::Sender<Event>,
    evolution: broadcast::Sender<Event>,
    equipment: broadcast::Sender<Event>,
    wallet: broadcast::Sender<Event>,
    satchel: broadcast::Sender<Event>,
}

impl Channels {
    fn sender(&self, topic: Topic) -> &broadcast::Sender<Event> {
        match topic {
            Topic::Progression => &self.progression,
            Topic::Evolution => &self.evolution,
            Topic::Equipment => &self.equipment,
            Topic::Wallet => &self.wallet,
            Topic::Satchel => &self.satchel,
        }
    }
}

/// Topic-based event bus
///
/// Allows consumers to subscribe to specific topics and only receive
/// events they care about. `publish` never blocks and works without an async
/// executor; receivers can drain with `try_recv`.
#[derive(Clone)]
pub struct EventBus {
    channels: Arc<Channels>,
}

impl EventBus {
    /// Creates a new event bus with default capacity for each topic
    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    /// Creates a new event bus with specified capacity per topic
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            channels: Arc::new(Channels {
                progression: broadcast::channel(capacity).0,
                evolution: broadcast::channel(capacity).0,
                equipment: broadcast::channel(capacity).0,
                wallet: broadcast::channel(capacity).0,
                satchel: broadcast::channel(capacity).0,
            }),
        }
    }

    /// Publish an event to its corresponding topic
    pub fn publish(&self, event: Event) {
        let topic = event.topic();
        if self.channels.sender(topic).send(event).is_err() {
            // No subscribers for this topic - this is normal, not an error
            tracing::trace!("No subscribers for topic {:?}", topic);
        }
    }

    /// Subscribe to a specific topic
    ///
    /// Returns a receiver that will only receive events for that topic.
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.channels.sender(topic).subscribe()
    }

    /// Subscribe to multiple topics
    ///
    /// Returns receivers for each requested topic.
    pub fn subscribe_multiple(
        &self,
        topics: &[Topic],
    ) -> Vec<(Topic, broadcast::Receiver<Event>)> {
        topics
            .iter()
            .map(|&topic| (topic, self.subscribe(topic)))
            .collect()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
