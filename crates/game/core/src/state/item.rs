//! Item snapshots.
//!
//! An [`Item`] is a value copy of an inventory item's identity. The quiver
//! stores these copies so it can remember "what" was fired independently of
//! "where" it currently lives in the pack.

use bitflags::bitflags;

/// Inscription that removes an item from the fire order.
pub const FIRE_EXCLUDE_INSCRIPTION: &str = "=f";

/// Inscription that matches the `INSCRIBED` fire preference.
pub const FIRE_PREFER_INSCRIPTION: &str = "+f";

/// Base class and subtype of an item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemClass {
    /// No item. Used for empty quiver entries and "no weapon".
    #[default]
    Unassigned,
    Missile(MissileKind),
    Weapon(WeaponKind),
    Armour,
    Other,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MissileKind {
    Needle,
    Stone,
    SlingBullet,
    Arrow,
    Bolt,
    Dart,
    Javelin,
    LargeRock,
    ThrowingNet,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WeaponKind {
    // Melee weapons
    Club,
    Mace,
    Dagger,
    ShortSword,
    LongSword,
    HandAxe,
    WarAxe,
    Spear,

    // Launchers
    Blowgun,
    Sling,
    Bow,
    Longbow,
    Crossbow,
    HandCrossbow,
}

impl WeaponKind {
    pub const fn is_launcher(self) -> bool {
        matches!(
            self,
            Self::Blowgun
                | Self::Sling
                | Self::Bow
                | Self::Longbow
                | Self::Crossbow
                | Self::HandCrossbow
        )
    }
}

/// Special property carried by a weapon or missile.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Brand {
    #[default]
    Normal,
    Returning,
    Flaming,
    Freezing,
    Venom,
}

bitflags! {
    /// What the player knows about an item.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ItemFlags: u8 {
        const KNOW_TYPE   = 1 << 0;
        const KNOW_PLUSES = 1 << 1;
    }
}

// Flag names (`"KNOW_TYPE | KNOW_PLUSES"`) in human-readable formats, raw bits otherwise.
#[cfg(feature = "serde")]
impl serde::Serialize for ItemFlags {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for ItemFlags {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

/// Snapshot of an item's identity and properties.
///
/// `link` and `letter` describe where the item was when the snapshot was
/// taken; they are never updated when the pack changes afterwards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Item {
    pub class: ItemClass,
    pub brand: Brand,
    /// Enchantment.
    pub plus: i8,
    pub flags: ItemFlags,
    pub inscription: String,
    pub quantity: u16,
    /// Inventory letter assigned when the item entered the pack.
    pub letter: Option<char>,
    /// Pack slot the item occupied.
    pub link: Option<usize>,
}

impl Item {
    pub fn new(class: ItemClass, quantity: u16) -> Self {
        Self {
            class,
            quantity,
            ..Self::default()
        }
    }

    pub fn missile(kind: MissileKind, quantity: u16) -> Self {
        Self::new(ItemClass::Missile(kind), quantity)
    }

    pub fn weapon(kind: WeaponKind) -> Self {
        Self::new(ItemClass::Weapon(kind), 1)
    }

    pub fn with_brand(mut self, brand: Brand) -> Self {
        self.brand = brand;
        self
    }

    pub fn with_plus(mut self, plus: i8) -> Self {
        self.plus = plus;
        self
    }

    pub fn with_inscription(mut self, inscription: impl Into<String>) -> Self {
        self.inscription = inscription.into();
        self
    }

    /// Marks the item's type as known.
    pub fn identified(mut self) -> Self {
        self.flags |= ItemFlags::KNOW_TYPE;
        self
    }

    /// Returns true if this snapshot describes an actual item.
    pub fn is_valid(&self) -> bool {
        self.class != ItemClass::Unassigned && self.quantity > 0
    }

    pub fn is_unassigned(&self) -> bool {
        self.class == ItemClass::Unassigned
    }

    pub fn is_type_known(&self) -> bool {
        self.flags.contains(ItemFlags::KNOW_TYPE)
    }

    pub fn has_inscription(&self, marker: &str) -> bool {
        self.inscription.contains(marker)
    }

    pub fn weapon_kind(&self) -> Option<WeaponKind> {
        match self.class {
            ItemClass::Weapon(kind) => Some(kind),
            _ => None,
        }
    }

    pub fn missile_kind(&self) -> Option<MissileKind> {
        match self.class {
            ItemClass::Missile(kind) => Some(kind),
            _ => None,
        }
    }

    /// Copy stored as a "last used" choice: same identity, quantity one.
    pub fn to_desired(&self) -> Self {
        Self {
            quantity: 1,
            ..self.clone()
        }
    }

    /// Like [`Self::to_desired`], recording the pack slot it was taken from.
    pub fn to_desired_at(&self, slot: usize) -> Self {
        Self {
            link: Some(slot),
            ..self.to_desired()
        }
    }
}
