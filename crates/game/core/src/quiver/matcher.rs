//! Preference matching for the fire order.

use bitflags::bitflags;

use crate::env::QuiverEnv;
use crate::state::{Brand, FIRE_PREFER_INSCRIPTION, Item, ItemClass, MissileKind, WeaponKind};

bitflags! {
    /// Item kinds a fire-order preference entry accepts.
    ///
    /// Entries may combine kinds (`DART | STONE`) to give them equal rank.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct FireTypes: u16 {
        /// Ammunition for the current launcher.
        const LAUNCHER  = 1 << 0;
        const DART      = 1 << 1;
        const STONE     = 1 << 2;
        /// Large rocks.
        const ROCK      = 1 << 3;
        const JAVELIN   = 1 << 4;
        const SPEAR     = 1 << 5;
        const HAND_AXE  = 1 << 6;
        const CLUB      = 1 << 7;
        const DAGGER    = 1 << 8;
        /// Identified weapons of returning.
        const RETURNING = 1 << 9;
        /// Throwing nets.
        const NET       = 1 << 10;
        /// Anything inscribed `+f`.
        const INSCRIBED = 1 << 11;
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for FireTypes {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        bitflags::serde::serialize(self, serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for FireTypes {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        bitflags::serde::deserialize(deserializer)
    }
}

/// Returns true if `item` satisfies the preference entry `types`.
///
/// `launcher` decides what `LAUNCHER` accepts; it is usually, but not
/// necessarily, the wielded weapon.
pub fn item_matches(
    item: &Item,
    types: FireTypes,
    launcher: Option<&Item>,
    env: &QuiverEnv<'_>,
) -> bool {
    if !item.is_valid() {
        return false;
    }

    if types.contains(FireTypes::INSCRIBED) && item.has_inscription(FIRE_PREFER_INSCRIPTION) {
        return true;
    }

    match item.class {
        ItemClass::Missile(kind) => {
            let by_kind = match kind {
                MissileKind::Dart => FireTypes::DART,
                MissileKind::Stone => FireTypes::STONE,
                MissileKind::Javelin => FireTypes::JAVELIN,
                MissileKind::LargeRock => FireTypes::ROCK,
                MissileKind::ThrowingNet => FireTypes::NET,
                _ => FireTypes::empty(),
            };
            types.intersects(by_kind)
                || (types.contains(FireTypes::LAUNCHER)
                    && launcher.is_some_and(|launcher| env.rules().launched_by(item, launcher)))
        }
        ItemClass::Weapon(kind)
            if env.rules().is_throwable(item, env.player().body_size()) =>
        {
            if types.contains(FireTypes::RETURNING)
                && item.brand == Brand::Returning
                && item.is_type_known()
            {
                return true;
            }
            let by_kind = match kind {
                WeaponKind::Dagger => FireTypes::DAGGER,
                WeaponKind::Spear => FireTypes::SPEAR,
                WeaponKind::HandAxe => FireTypes::HAND_AXE,
                WeaponKind::Club => FireTypes::CLUB,
                _ => FireTypes::empty(),
            };
            types.intersects(by_kind)
        }
        _ => false,
    }
}
