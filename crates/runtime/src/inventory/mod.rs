//! Session-owned holdings: the equipped weapon, gold, and synthesis items.
//!
//! Each holder is a plain value owned by the driver. Nothing here is global.

mod equipment;
mod satchel;
mod wallet;

pub use equipment::Equipment;
pub use satchel::{ItemStack, Satchel};
pub use wallet::Wallet;
