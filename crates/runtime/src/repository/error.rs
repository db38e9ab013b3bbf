//! Error types raised by repository implementations.

use quiver_core::{ErrorSeverity, GameError, PersistError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("quiver repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted quiver record: {0}")]
    Persist(#[from] PersistError),
}

impl GameError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LockPoisoned | Self::Io(_) => ErrorSeverity::Internal,
            Self::Serialization(_) | Self::Persist(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPOSITORY_LOCK_POISONED",
            Self::Io(_) => "REPOSITORY_IO",
            Self::Serialization(_) => "REPOSITORY_SERIALIZATION",
            Self::Persist(err) => err.error_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
