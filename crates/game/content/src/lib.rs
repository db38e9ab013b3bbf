//! Data-driven quiver content and loaders.
//!
//! This crate reads player-facing data files:
//! - Quiver options (fire order, first fire slot) from TOML
//! - Starting packs (items, wielded weapon, body size) from RON
//!
//! Loaders produce `quiver-core` types directly; nothing here holds state.

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ContentFactory, LoadResult, OptionsLoader, PackLoader, PackSpec, SlotSpec};
