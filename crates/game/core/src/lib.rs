//! Deterministic quiver rules shared by game sessions and tools.
//!
//! `quiver-core` decides which pack item a player fires or throws by default.
//! It remembers the last choice per weapon category and recomputes choices as
//! the inventory and the wielded weapon change. Inventory, equipment and item
//! properties are read through the oracles in [`env`]; all mutation goes
//! through [`quiver::PlayerQuiver`].
pub mod config;
pub mod env;
pub mod error;
pub mod quiver;
pub mod state;

pub use config::{FireOrderPrefs, QuiverConfig};
pub use env::{BodySize, Env, ItemRules, LaunchKind, PlayerOracle, QuiverEnv, StandardRules};
pub use error::{ErrorSeverity, GameError};
#[cfg(feature = "serde")]
pub use quiver::{PersistError, QUIVER_COOKIE, QuiverRecord};
pub use quiver::{
    DesiredItem, FireOrder, FireTypes, NoFireItem, PlayerQuiver, QuiverChoice, QuiverError,
    QuiverMemory, QuiverSelection, SlotToken, fire_order, item_matches,
};
pub use state::{
    AmmoType, Brand, CategoryTable, Item, ItemClass, ItemFlags, MissileKind, Pack, PlayerState,
    WeaponKind, index_to_letter, letter_to_index,
};
