//! Quiver selection: what the player fires or throws by default.
//!
//! - [`item_matches`]: does an item satisfy a fire-order preference entry
//! - [`fire_order`]: ranked pack slots that can be fired
//! - [`QuiverMemory`]: last used item per weapon category
//! - [`PlayerQuiver`]: event handlers keeping the memory consistent
mod controller;
mod error;
mod fire_order;
mod matcher;
mod memory;
#[cfg(feature = "serde")]
mod persist;
mod preserve;

pub use controller::{PlayerQuiver, QuiverChoice, QuiverSelection};
pub use error::{NoFireItem, QuiverError};
pub use fire_order::{FireOrder, fire_order};
pub use matcher::{FireTypes, item_matches};
pub use memory::{DesiredItem, QuiverMemory, pack_slot};
#[cfg(feature = "serde")]
pub use persist::{PersistError, QUIVER_COOKIE, QuiverRecord};
pub use preserve::SlotToken;
