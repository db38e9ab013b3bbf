//! Weapon categories and the fixed-size table keyed by them.

use core::ops::{Index, IndexMut};

use strum::EnumCount;

use super::{Item, WeaponKind};

/// Ammunition category selected by the wielded weapon.
///
/// Each category keeps its own "last used" quiver entry, so switching from a
/// bow to a sling and back restores the arrows.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumCount,
    strum::EnumIter,
    strum::FromRepr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum AmmoType {
    /// Hand-thrown items; used when no launcher is wielded.
    #[default]
    #[strum(to_string = "throwing")]
    Throw,
    #[strum(to_string = "blowgun")]
    Blowgun,
    #[strum(to_string = "sling")]
    Sling,
    #[strum(to_string = "bow")]
    Bow,
    #[strum(to_string = "crossbow")]
    Crossbow,
    #[strum(to_string = "hand crossbow")]
    HandCrossbow,
}

impl AmmoType {
    /// Every category in discriminant order.
    pub const ALL: [AmmoType; AmmoType::COUNT] = [
        AmmoType::Throw,
        AmmoType::Blowgun,
        AmmoType::Sling,
        AmmoType::Bow,
        AmmoType::Crossbow,
        AmmoType::HandCrossbow,
    ];

    /// Returns the category for the given wielded item, or `Throw` if it is
    /// not a launcher.
    pub fn for_weapon(weapon: Option<&Item>) -> Self {
        match weapon.and_then(Item::weapon_kind) {
            Some(WeaponKind::Blowgun) => AmmoType::Blowgun,
            Some(WeaponKind::Sling) => AmmoType::Sling,
            Some(WeaponKind::Bow | WeaponKind::Longbow) => AmmoType::Bow,
            Some(WeaponKind::Crossbow) => AmmoType::Crossbow,
            Some(WeaponKind::HandCrossbow) => AmmoType::HandCrossbow,
            _ => AmmoType::Throw,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Decodes a persisted category index.
    pub fn from_index(index: u32) -> Option<Self> {
        u8::try_from(index).ok().and_then(Self::from_repr)
    }

    /// Name used when talking about the launchers of this category
    /// ("Quivering 7 arrows for bows.").
    pub const fn plural(self) -> &'static str {
        match self {
            AmmoType::Throw => "throwing",
            AmmoType::Blowgun => "blowguns",
            AmmoType::Sling => "slings",
            AmmoType::Bow => "bows",
            AmmoType::Crossbow => "crossbows",
            AmmoType::HandCrossbow => "hand crossbows",
        }
    }
}

/// One `T` per [`AmmoType`].
///
/// Backed by an array sized by the category domain, so an entry exists for
/// every category at all times.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CategoryTable<T> {
    entries: [T; AmmoType::COUNT],
}

impl<T> CategoryTable<T> {
    pub fn from_fn(mut f: impl FnMut(AmmoType) -> T) -> Self {
        Self {
            entries: AmmoType::ALL.map(&mut f),
        }
    }

    pub const fn len(&self) -> usize {
        AmmoType::COUNT
    }

    pub const fn is_empty(&self) -> bool {
        false
    }

    pub fn iter(&self) -> impl Iterator<Item = (AmmoType, &T)> {
        AmmoType::ALL.into_iter().zip(self.entries.iter())
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

impl<T: Default> Default for CategoryTable<T> {
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T> Index<AmmoType> for CategoryTable<T> {
    type Output = T;

    fn index(&self, ammo: AmmoType) -> &T {
        &self.entries[ammo.index()]
    }
}

impl<T> IndexMut<AmmoType> for CategoryTable<T> {
    fn index_mut(&mut self, ammo: AmmoType) -> &mut T {
        &mut self.entries[ammo.index()]
    }
}
