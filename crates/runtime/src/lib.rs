//! Runtime glue for the quiver.
//!
//! [`QuiverSession`] owns a player's inventory together with their quiver and
//! forwards every inventory and equipment change to the quiver handlers.
//! Quiver state is persisted through a [`QuiverRepository`].
//!
//! Modules are organized by responsibility:
//! - [`session`] applies player actions and keeps the quiver in sync
//! - [`repository`] saves and loads quiver records
//! - [`error`] collects the errors surfaced to callers
pub mod error;
pub mod repository;
pub mod session;

pub use error::{Result, SessionError};
pub use repository::{
    FileQuiverRepository, InMemoryQuiverRepository, QuiverRepository, RepositoryError,
};
pub use session::QuiverSession;

/// Installs a `fmt` subscriber writing to stderr.
///
/// The filter comes from `RUST_LOG`, with `info` added as a floor. Returns
/// false if a global subscriber was already installed.
pub fn init_tracing() -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
