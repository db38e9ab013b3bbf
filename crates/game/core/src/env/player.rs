use crate::state::Item;

/// Body size of the player; bounds what can be thrown.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BodySize {
    Tiny,
    Little,
    Small,
    #[default]
    Medium,
    Large,
    Big,
    Giant,
}

/// Read access to the player's inventory and equipment.
pub trait PlayerOracle: Send + Sync {
    /// Number of pack slots. Slot indices run from `0` to `capacity() - 1`.
    ///
    /// At most [`QuiverConfig::MAX_INVENTORY_SLOTS`]: one slot per inventory
    /// letter. The quiver never looks at slots beyond that bound.
    ///
    /// [`QuiverConfig::MAX_INVENTORY_SLOTS`]: crate::config::QuiverConfig::MAX_INVENTORY_SLOTS
    fn capacity(&self) -> usize;

    /// Returns the item in `slot`, or `None` if the slot is empty or out of range.
    fn item(&self, slot: usize) -> Option<&Item>;

    /// Pack slot of the wielded weapon.
    fn wielded_slot(&self) -> Option<usize>;

    /// Returns true if `slot` is wielded or worn.
    fn is_equipped(&self, slot: usize) -> bool;

    fn body_size(&self) -> BodySize;

    /// Returns true while the player is held immobile by a net or web.
    fn is_held(&self) -> bool;

    fn weapon(&self) -> Option<&Item> {
        self.wielded_slot().and_then(|slot| self.item(slot))
    }
}
