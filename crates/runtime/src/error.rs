//! Errors surfaced by the session API.
//!
//! Wraps quiver rejections, content loading failures and repository errors
//! so callers can bubble them up with one type.
use quiver_core::{ErrorSeverity, GameError, NoFireItem, QuiverError};
use thiserror::Error;

pub use crate::repository::RepositoryError;

pub type Result<T> = std::result::Result<T, SessionError>;

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("You can't carry that many items.")]
    PackFull,

    #[error("pack slot {0} holds no item")]
    EmptySlot(usize),

    #[error("You are wearing the item in slot {0}.")]
    Worn(usize),

    #[error("You are wielding the item in slot {0}.")]
    Wielded(usize),

    #[error(transparent)]
    Quiver(#[from] QuiverError),

    #[error(transparent)]
    NoFireItem(#[from] NoFireItem),

    #[error("failed to load content: {0}")]
    Content(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl GameError for SessionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::PackFull | Self::EmptySlot(_) | Self::Worn(_) | Self::Wielded(_) => {
                ErrorSeverity::Validation
            }
            Self::Quiver(err) => err.severity(),
            Self::NoFireItem(err) => err.severity(),
            Self::Content(_) => ErrorSeverity::Fatal,
            Self::Repository(err) => err.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::PackFull => "SESSION_PACK_FULL",
            Self::EmptySlot(_) => "SESSION_EMPTY_SLOT",
            Self::Worn(_) => "SESSION_WORN",
            Self::Wielded(_) => "SESSION_WIELDED",
            Self::Quiver(err) => err.error_code(),
            Self::NoFireItem(err) => err.error_code(),
            Self::Content(_) => "SESSION_CONTENT",
            Self::Repository(err) => err.error_code(),
        }
    }
}
