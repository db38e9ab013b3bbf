//! File-based QuiverRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use quiver_core::{PlayerQuiver, QuiverRecord};

use crate::repository::{QuiverRepository, RepositoryError, Result};

/// Stores the quiver record as `quiver.bin` in bincode format.
///
/// Writes go to a temporary file that is renamed over the record, so a
/// crash mid-save leaves the previous record intact.
pub struct FileQuiverRepository {
    base_dir: PathBuf,
}

impl FileQuiverRepository {
    pub const FILE_NAME: &'static str = "quiver.bin";

    /// Create a repository rooted at `base_dir`, creating the directory.
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    pub fn record_path(&self) -> PathBuf {
        self.base_dir.join(Self::FILE_NAME)
    }
}

impl QuiverRepository for FileQuiverRepository {
    fn save(&self, quiver: &PlayerQuiver) -> Result<()> {
        let path = self.record_path();
        let temp_path = path.with_extension("bin.tmp");

        let bytes = bincode::serialize(&quiver.save())
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved quiver to {}", path.display());

        Ok(())
    }

    fn load(&self) -> Result<Option<PlayerQuiver>> {
        let path = self.record_path();

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let record: QuiverRecord = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;
        let quiver = PlayerQuiver::load(record)?;

        tracing::debug!("Loaded quiver from {}", path.display());

        Ok(Some(quiver))
    }

    fn exists(&self) -> bool {
        self.record_path().exists()
    }

    fn delete(&self) -> Result<()> {
        let path = self.record_path();

        if path.exists() {
            fs::remove_file(&path).map_err(RepositoryError::Io)?;
            tracing::debug!("Deleted quiver record");
        }

        Ok(())
    }
}
