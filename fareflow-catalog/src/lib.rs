pub mod inventory;
pub mod item;
pub mod pricing;

pub use inventory::{InventoryStore, MemoryInventoryStore};
pub use item::{InventoryItem, NewInventoryItem};
pub use pricing::{compute_dynamic_price, scarcity_multiplier, Availability};
