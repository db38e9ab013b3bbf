//! Persisted quiver record.
//!
//! The record is written verbatim into save files. A fixed cookie opens it so
//! that a misaligned or foreign record is rejected instead of being read as
//! quiver data.

use crate::error::{ErrorSeverity, GameError};
use crate::quiver::{PlayerQuiver, QuiverMemory};
use crate::state::{AmmoType, CategoryTable, Item};

/// Marker opening every quiver record.
pub const QUIVER_COOKIE: u16 = 0xb015;

/// Save-file layout of a [`PlayerQuiver`].
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct QuiverRecord {
    pub cookie: u16,
    pub last_weapon: Item,
    /// Active category index.
    pub active: u32,
    /// Number of per-category entries that follow.
    pub count: u32,
    pub items: Vec<Item>,
}

/// Corrupt quiver record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PersistError {
    #[error("bad quiver cookie {found:#06x} (expected {expected:#06x})", expected = QUIVER_COOKIE)]
    BadCookie { found: u16 },

    #[error("active quiver category {active} is out of range")]
    ActiveOutOfRange { active: u32 },

    #[error("quiver record holds {count} categories, at most {max} exist")]
    TooManyCategories { count: u32, max: usize },

    #[error("quiver record declares {count} entries but stores {items}")]
    CountMismatch { count: u32, items: usize },
}

impl GameError for PersistError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Fatal
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::BadCookie { .. } => "PERSIST_BAD_COOKIE",
            Self::ActiveOutOfRange { .. } => "PERSIST_ACTIVE_OUT_OF_RANGE",
            Self::TooManyCategories { .. } => "PERSIST_TOO_MANY_CATEGORIES",
            Self::CountMismatch { .. } => "PERSIST_COUNT_MISMATCH",
        }
    }
}

impl PlayerQuiver {
    /// Captures the full category table.
    pub fn save(&self) -> QuiverRecord {
        let items: Vec<Item> = self.memory().table().values().cloned().collect();
        QuiverRecord {
            cookie: QUIVER_COOKIE,
            last_weapon: self.last_weapon().clone(),
            active: self.active().index() as u32,
            count: items.len() as u32,
            items,
        }
    }

    /// Rebuilds a quiver from a record.
    ///
    /// Categories beyond `count` (records written with fewer categories)
    /// start out empty.
    ///
    /// # Errors
    ///
    /// Every error means the record is corrupt; callers must not continue
    /// loading the save it came from.
    pub fn load(record: QuiverRecord) -> Result<Self, PersistError> {
        if record.cookie != QUIVER_COOKIE {
            return Err(PersistError::BadCookie {
                found: record.cookie,
            });
        }

        let active = AmmoType::from_index(record.active).ok_or(PersistError::ActiveOutOfRange {
            active: record.active,
        })?;

        if record.count as usize > AmmoType::ALL.len() {
            return Err(PersistError::TooManyCategories {
                count: record.count,
                max: AmmoType::ALL.len(),
            });
        }
        if record.count as usize != record.items.len() {
            return Err(PersistError::CountMismatch {
                count: record.count,
                items: record.items.len(),
            });
        }

        let mut stored = record.items.into_iter();
        let table = CategoryTable::from_fn(|_| stored.next().unwrap_or_default());

        Ok(Self::from_parts(
            QuiverMemory::from_parts(table, active),
            record.last_weapon,
        ))
    }
}
