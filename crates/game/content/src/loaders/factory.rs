//! Content factory for loading quiver data from a directory.

use std::path::{Path, PathBuf};

use quiver_core::{PlayerState, QuiverConfig};

use crate::loaders::{LoadResult, OptionsLoader, PackLoader};

/// Content factory that loads quiver content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── quiver.toml
/// └── packs/
///     ├── archer.ron
///     └── brawler.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Factory over the data shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load quiver options from `quiver.toml`.
    ///
    /// A missing file yields the default options.
    pub fn load_options(&self) -> LoadResult<QuiverConfig> {
        let path = self.data_dir.join("quiver.toml");
        if !path.exists() {
            return Ok(QuiverConfig::default());
        }
        OptionsLoader::load(&path)
    }

    /// Load a starting pack from `packs/{name}.ron`.
    pub fn load_pack(&self, name: &str) -> LoadResult<PlayerState> {
        let path = self.data_dir.join("packs").join(format!("{}.ron", name));
        PackLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
