//! In-memory QuiverRepository implementation for tests and local runs.

use std::sync::RwLock;

use quiver_core::{PlayerQuiver, QuiverRecord};

use crate::repository::{QuiverRepository, RepositoryError, Result};

/// Keeps the last saved record in memory.
///
/// Records go through the same validation as the file repository on load.
pub struct InMemoryQuiverRepository {
    record: RwLock<Option<QuiverRecord>>,
}

impl InMemoryQuiverRepository {
    pub fn new() -> Self {
        Self {
            record: RwLock::new(None),
        }
    }

    /// Create with a raw record already stored.
    pub fn with_record(record: QuiverRecord) -> Self {
        Self {
            record: RwLock::new(Some(record)),
        }
    }
}

impl Default for InMemoryQuiverRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl QuiverRepository for InMemoryQuiverRepository {
    fn save(&self, quiver: &PlayerQuiver) -> Result<()> {
        let mut record = self
            .record
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *record = Some(quiver.save());
        Ok(())
    }

    fn load(&self) -> Result<Option<PlayerQuiver>> {
        let record = self
            .record
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        match record.clone() {
            Some(record) => Ok(Some(PlayerQuiver::load(record)?)),
            None => Ok(None),
        }
    }

    fn exists(&self) -> bool {
        self.record
            .read()
            .map(|record| record.is_some())
            .unwrap_or(false)
    }

    fn delete(&self) -> Result<()> {
        let mut record = self
            .record
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        *record = None;
        Ok(())
    }
}
