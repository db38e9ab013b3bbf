use crate::env::BodySize;
use crate::state::{Item, ItemClass, MissileKind, WeaponKind};

/// How a projectile leaves the player relative to the wielded weapon.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LaunchKind {
    /// Fired from the wielded launcher.
    Launched,
    /// Thrown by hand.
    Thrown,
    /// Neither; firing it would just fumble it.
    Fumbled,
}

/// Item property queries consumed by the quiver.
pub trait ItemRules: Send + Sync {
    /// Returns true if `item` is ammunition for `launcher`.
    fn launched_by(&self, item: &Item, launcher: &Item) -> bool;

    /// Returns true if `item` is a ranged launcher.
    fn is_range_weapon(&self, item: &Item) -> bool;

    /// Returns true if a player of `size` can usefully throw `item`.
    fn is_throwable(&self, item: &Item, size: BodySize) -> bool;

    /// Returns true if the two items would merge into one stack.
    ///
    /// Compares identity only: class, enchantment, brand and what is known
    /// about them. Quantity, position and inscription are ignored.
    fn items_stack(&self, a: &Item, b: &Item) -> bool;

    /// Stack-compatible and carrying the same inventory letter.
    fn items_similar(&self, a: &Item, b: &Item) -> bool {
        self.items_stack(a, b) && a.letter == b.letter
    }

    fn launch_kind(&self, item: &Item, weapon: Option<&Item>, size: BodySize) -> LaunchKind {
        if weapon.is_some_and(|weapon| self.launched_by(item, weapon)) {
            LaunchKind::Launched
        } else if self.is_throwable(item, size) {
            LaunchKind::Thrown
        } else {
            LaunchKind::Fumbled
        }
    }
}

/// Built-in item rules.
///
/// | Launcher | Ammunition |
/// |---|---|
/// | blowgun | needles |
/// | sling | stones, sling bullets |
/// | bow, longbow | arrows |
/// | crossbow | bolts |
/// | hand crossbow | darts |
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StandardRules;

impl ItemRules for StandardRules {
    fn launched_by(&self, item: &Item, launcher: &Item) -> bool {
        let (Some(missile), Some(weapon)) = (item.missile_kind(), launcher.weapon_kind()) else {
            return false;
        };
        matches!(
            (missile, weapon),
            (MissileKind::Needle, WeaponKind::Blowgun)
                | (MissileKind::Stone | MissileKind::SlingBullet, WeaponKind::Sling)
                | (MissileKind::Arrow, WeaponKind::Bow | WeaponKind::Longbow)
                | (MissileKind::Bolt, WeaponKind::Crossbow)
                | (MissileKind::Dart, WeaponKind::HandCrossbow)
        )
    }

    fn is_range_weapon(&self, item: &Item) -> bool {
        item.weapon_kind().is_some_and(WeaponKind::is_launcher)
    }

    fn is_throwable(&self, item: &Item, size: BodySize) -> bool {
        match item.class {
            ItemClass::Missile(MissileKind::LargeRock) => size >= BodySize::Large,
            ItemClass::Missile(
                MissileKind::Dart
                | MissileKind::Javelin
                | MissileKind::Stone
                | MissileKind::ThrowingNet,
            ) => true,
            ItemClass::Weapon(
                WeaponKind::Dagger | WeaponKind::Spear | WeaponKind::HandAxe | WeaponKind::Club,
            ) => true,
            _ => false,
        }
    }

    fn items_stack(&self, a: &Item, b: &Item) -> bool {
        !a.is_unassigned()
            && a.class == b.class
            && a.plus == b.plus
            && a.brand == b.brand
            && a.flags == b.flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn launch_kind_prefers_launcher() {
        let rules = StandardRules;
        let bow = Item::weapon(WeaponKind::Bow);
        let arrows = Item::missile(MissileKind::Arrow, 10);
        let darts = Item::missile(MissileKind::Dart, 10);
        let sword = Item::weapon(WeaponKind::LongSword);

        assert_eq!(rules.launch_kind(&arrows, Some(&bow), BodySize::Medium), LaunchKind::Launched);
        assert_eq!(rules.launch_kind(&darts, Some(&bow), BodySize::Medium), LaunchKind::Thrown);
        assert_eq!(rules.launch_kind(&arrows, None, BodySize::Medium), LaunchKind::Fumbled);
        assert_eq!(rules.launch_kind(&sword, None, BodySize::Medium), LaunchKind::Fumbled);
    }

    #[test]
    fn large_rocks_need_a_large_body() {
        let rules = StandardRules;
        let rock = Item::missile(MissileKind::LargeRock, 1);
        assert!(!rules.is_throwable(&rock, BodySize::Medium));
        assert!(rules.is_throwable(&rock, BodySize::Large));
    }

    #[test]
    fn stacking_ignores_position_and_quantity() {
        let rules = StandardRules;
        let mut a = Item::missile(MissileKind::Bolt, 4).with_plus(1);
        let mut b = Item::missile(MissileKind::Bolt, 9).with_plus(1);
        a.letter = Some('c');
        b.letter = Some('d');
        assert!(rules.items_stack(&a, &b));
        assert!(!rules.items_similar(&a, &b));
        assert!(!rules.items_stack(&a, &b.clone().with_plus(2)));
        assert!(!rules.items_stack(&Item::default(), &Item::default()));
    }
}
