//! Quiver persistence.
//!
//! Repositories store the record produced by `PlayerQuiver::save` and hand
//! back a validated `PlayerQuiver` on load.
mod error;
mod file;
mod memory;

pub use error::{RepositoryError, Result};
pub use file::FileQuiverRepository;
pub use memory::InMemoryQuiverRepository;

use quiver_core::PlayerQuiver;

/// Repository for the player's quiver.
pub trait QuiverRepository: Send + Sync {
    /// Save the quiver, replacing any earlier record.
    fn save(&self, quiver: &PlayerQuiver) -> Result<()>;

    /// Load the saved quiver, if any.
    ///
    /// A record that fails validation is an error, never `None`.
    fn load(&self) -> Result<Option<PlayerQuiver>>;

    /// Check if a record exists
    fn exists(&self) -> bool;

    /// Delete the record
    fn delete(&self) -> Result<()>;
}
