//! Errors raised by quiver queries and selections.

use crate::error::{ErrorSeverity, GameError};
use crate::state::index_to_letter;

fn letter(slot: &usize) -> char {
    index_to_letter(*slot)
}

/// Why there is nothing to fire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoFireItem {
    /// Nothing in the pack can be fired or thrown at all.
    #[error("No suitable missiles.")]
    NoSuitableMissiles,

    /// Candidates exist, but only before the configured `fire_items_start`.
    #[error("Nothing suitable (fire_items_start = '{}').", letter(.start))]
    BeforeFireItemsStart { start: usize },

    /// Candidates exist, but the best one is inscribed `=f`.
    #[error("Nothing suitable (ignored '=f'-inscribed item on '{}').", letter(.slot))]
    InscriptionExcluded { slot: usize },
}

impl GameError for NoFireItem {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Recoverable
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoSuitableMissiles => "QUIVER_NO_SUITABLE_MISSILES",
            Self::BeforeFireItemsStart { .. } => "QUIVER_BEFORE_FIRE_ITEMS_START",
            Self::InscriptionExcluded { .. } => "QUIVER_INSCRIPTION_EXCLUDED",
        }
    }
}

/// Rejected explicit quiver selections.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuiverError {
    #[error("You can't quiver wielded items.")]
    CannotQuiverWielded,

    #[error("You can't quiver worn items.")]
    CannotQuiverWorn,

    #[error("pack slot {0} holds no item")]
    EmptySlot(usize),
}

impl GameError for QuiverError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::CannotQuiverWielded => "QUIVER_WIELDED",
            Self::CannotQuiverWorn => "QUIVER_WORN",
            Self::EmptySlot(_) => "QUIVER_EMPTY_SLOT",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reasons_name_inventory_letters() {
        assert_eq!(NoFireItem::NoSuitableMissiles.to_string(), "No suitable missiles.");
        assert_eq!(
            NoFireItem::BeforeFireItemsStart { start: 2 }.to_string(),
            "Nothing suitable (fire_items_start = 'c')."
        );
        assert_eq!(
            NoFireItem::InscriptionExcluded { slot: 26 }.to_string(),
            "Nothing suitable (ignored '=f'-inscribed item on 'A')."
        );
        assert!(NoFireItem::NoSuitableMissiles.severity().is_recoverable());
    }
}
