//! Topic-based event bus for buildup events.
//!
//! Events are published to specific topics, and consumers subscribe only to
//! the topics they need.

mod bus;
mod types;

pub use bus::{Event, EventBus, Topic};
pub use types::{EquipmentEvent, EvolutionEvent, ProgressionEvent, SatchelEvent, WalletEvent};
