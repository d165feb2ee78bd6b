//! Session orchestration for weapon buildup.
//!
//! This crate wires the pure rules of `buildup-core` and the catalogs of
//! `buildup-content` into a command-driven session. Consumers build a
//! [`ProgressionDriver`], feed it [`Command`]s, and subscribe to the
//! [`EventBus`] for what happened.
//!
//! Modules are organized by responsibility:
//! - [`driver`] hosts the command handler and its outcomes
//! - [`api`] exposes the error types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`inventory`] holds the session-owned equipment, wallet, and satchel
pub mod api;
pub mod driver;
pub mod events;
pub mod inventory;

pub use api::{Result, RuntimeError};
pub use driver::{Command, Outcome, ProgressionDriver};
pub use events::{
    EquipmentEvent, Event, EventBus, EvolutionEvent, ProgressionEvent, SatchelEvent, Topic,
    WalletEvent,
};
pub use inventory::{Equipment, ItemStack, Satchel, Wallet};
