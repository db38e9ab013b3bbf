use arrayvec::ArrayVec;

use crate::quiver::FireTypes;

/// Ordered preference list consulted by the fire-order resolver.
pub type FireOrderPrefs = ArrayVec<FireTypes, { QuiverConfig::MAX_FIRE_ORDER }>;

/// Quiver configuration constants and tunable options.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuiverConfig {
    /// Preference categories, highest priority first.
    ///
    /// A single entry may combine several kinds (`DART | STONE`); items matching
    /// any kind of an entry share that entry's rank.
    pub fire_order: FireOrderPrefs,

    /// First pack slot considered when building the fire order.
    /// Slots before it are only reported when explaining an empty quiver.
    pub fire_items_start: usize,
}

impl QuiverConfig {
    // ===== compile-time constants used as type parameters =====
    /// Pack capacity: one slot per inventory letter (a-z, A-Z).
    pub const MAX_INVENTORY_SLOTS: usize = 52;
    pub const MAX_FIRE_ORDER: usize = 16;

    // ===== runtime-tunable defaults =====
    pub const DEFAULT_FIRE_ORDER: [FireTypes; 11] = [
        FireTypes::LAUNCHER,
        FireTypes::RETURNING,
        FireTypes::JAVELIN,
        FireTypes::DART.union(FireTypes::STONE),
        FireTypes::ROCK,
        FireTypes::SPEAR,
        FireTypes::NET,
        FireTypes::HAND_AXE,
        FireTypes::DAGGER,
        FireTypes::CLUB,
        FireTypes::INSCRIBED,
    ];
    pub const DEFAULT_FIRE_ITEMS_START: usize = 0;

    pub fn new() -> Self {
        Self {
            fire_order: Self::DEFAULT_FIRE_ORDER.into_iter().collect(),
            fire_items_start: Self::DEFAULT_FIRE_ITEMS_START,
        }
    }

    /// Replaces the preference list. Entries past [`Self::MAX_FIRE_ORDER`] are dropped.
    pub fn with_fire_order(mut self, order: impl IntoIterator<Item = FireTypes>) -> Self {
        self.fire_order = order.into_iter().take(Self::MAX_FIRE_ORDER).collect();
        self
    }

    pub fn with_fire_items_start(mut self, fire_items_start: usize) -> Self {
        self.fire_items_start = fire_items_start;
        self
    }
}

impl Default for QuiverConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_order_puts_launcher_first() {
        let config = QuiverConfig::default();
        assert_eq!(config.fire_order.first(), Some(&FireTypes::LAUNCHER));
        assert_eq!(config.fire_order.len(), QuiverConfig::DEFAULT_FIRE_ORDER.len());
        assert_eq!(config.fire_items_start, 0);
    }

    #[test]
    fn oversized_order_is_truncated() {
        let config = QuiverConfig::new().with_fire_order(core::iter::repeat_n(FireTypes::DART, 40));
        assert_eq!(config.fire_order.len(), QuiverConfig::MAX_FIRE_ORDER);
    }
}
