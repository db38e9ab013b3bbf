//! Reference player inventory.
//!
//! The quiver only reads inventory through [`PlayerOracle`]; [`PlayerState`]
//! is the implementation used by the runtime session and by tests.

use arrayvec::ArrayVec;

use crate::config::QuiverConfig;
use crate::env::{BodySize, ItemRules, PlayerOracle};
use crate::state::{Item, ItemClass};

/// Maximum number of simultaneously worn items (armour, cloak, ...).
pub const MAX_WORN: usize = 8;

/// Returns the inventory letter of a pack slot: `a`-`z`, then `A`-`Z`.
pub fn index_to_letter(slot: usize) -> char {
    match slot {
        0..=25 => (b'a' + slot as u8) as char,
        26..=51 => (b'A' + (slot - 26) as u8) as char,
        _ => '?',
    }
}

/// Inverse of [`index_to_letter`].
pub fn letter_to_index(letter: char) -> Option<usize> {
    match letter {
        'a'..='z' => Some(letter as usize - 'a' as usize),
        'A'..='Z' => Some(letter as usize - 'A' as usize + 26),
        _ => None,
    }
}

/// Fixed-capacity pack; one slot per inventory letter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pack {
    slots: [Item; QuiverConfig::MAX_INVENTORY_SLOTS],
}

impl Pack {
    pub fn new() -> Self {
        Self {
            slots: core::array::from_fn(|_| Item::default()),
        }
    }

    pub const fn capacity(&self) -> usize {
        QuiverConfig::MAX_INVENTORY_SLOTS
    }

    /// Returns the item in `slot` if the slot holds a valid item.
    pub fn get(&self, slot: usize) -> Option<&Item> {
        self.slots.get(slot).filter(|item| item.is_valid())
    }

    pub fn get_mut(&mut self, slot: usize) -> Option<&mut Item> {
        self.slots.get_mut(slot).filter(|item| item.is_valid())
    }

    /// Places `item` in `slot`, replacing whatever was there.
    ///
    /// Returns the previous content, or `None` if `slot` is out of range.
    pub fn insert(&mut self, slot: usize, mut item: Item) -> Option<Item> {
        let target = self.slots.get_mut(slot)?;
        item.letter = Some(index_to_letter(slot));
        item.link = Some(slot);
        Some(core::mem::replace(target, item))
    }

    /// Adds `item`, merging into a stack-compatible missile stack if there is
    /// one, otherwise taking the first free slot.
    pub fn add(&mut self, item: Item, rules: &dyn ItemRules) -> Option<usize> {
        if matches!(item.class, ItemClass::Missile(_))
            && let Some(slot) = self.slots.iter().position(|existing| {
                existing.is_valid() && rules.items_stack(existing, &item)
            })
        {
            let existing = &mut self.slots[slot];
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            return Some(slot);
        }

        let slot = self.slots.iter().position(|existing| !existing.is_valid())?;
        self.insert(slot, item);
        Some(slot)
    }

    /// Takes up to `amount` items out of `slot`. Emptied slots become unassigned.
    pub fn take(&mut self, slot: usize, amount: u16) -> Option<Item> {
        let existing = self.get_mut(slot)?;
        let taken = amount.min(existing.quantity);
        existing.quantity -= taken;
        let removed = Item {
            quantity: taken,
            ..existing.clone()
        };
        if existing.quantity == 0 {
            *existing = Item::default();
        }
        Some(removed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Item)> {
        self.slots
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_valid())
    }
}

impl Default for Pack {
    fn default() -> Self {
        Self::new()
    }
}

/// Inventory and equipment of the player.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerState {
    pub pack: Pack,
    /// Pack slot of the wielded weapon.
    pub wielded: Option<usize>,
    /// Pack slots of worn items.
    pub worn: ArrayVec<usize, MAX_WORN>,
    pub body_size: BodySize,
    /// Caught in a net or web.
    pub held: bool,
}

impl PlayerState {
    pub fn new(pack: Pack) -> Self {
        Self {
            pack,
            ..Self::default()
        }
    }

    pub fn with_wielded(mut self, slot: usize) -> Self {
        self.wielded = Some(slot);
        self
    }

    pub fn with_body_size(mut self, body_size: BodySize) -> Self {
        self.body_size = body_size;
        self
    }

    pub fn with_held(mut self, held: bool) -> Self {
        self.held = held;
        self
    }
}

impl PlayerOracle for PlayerState {
    fn capacity(&self) -> usize {
        self.pack.capacity()
    }

    fn item(&self, slot: usize) -> Option<&Item> {
        self.pack.get(slot)
    }

    fn wielded_slot(&self) -> Option<usize> {
        self.wielded.filter(|&slot| self.pack.get(slot).is_some())
    }

    fn is_equipped(&self, slot: usize) -> bool {
        self.wielded == Some(slot) || self.worn.contains(&slot)
    }

    fn body_size(&self) -> BodySize {
        self.body_size
    }

    fn is_held(&self) -> bool {
        self.held
    }
}
