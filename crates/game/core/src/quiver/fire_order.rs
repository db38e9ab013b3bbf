//! Fire-order resolution.
//!
//! Ranks every pack item that could be fired or thrown. Items are grouped by
//! the first preference entry they match and ordered by pack slot inside a
//! group, so the result only changes when the inventory, the equipment or the
//! configuration does.

use arrayvec::ArrayVec;

use crate::config::QuiverConfig;
use crate::env::{LaunchKind, QuiverEnv};
use crate::quiver::item_matches;
use crate::state::{FIRE_EXCLUDE_INSCRIPTION, Item, WeaponKind};

/// Pack slots in firing preference order.
pub type FireOrder = ArrayVec<usize, { QuiverConfig::MAX_INVENTORY_SLOTS }>;

/// Sort key: (preference index, pack slot).
type RankKey = (usize, usize);

/// Builds the fire order.
///
/// With `ignore_exclusions` the configured `fire_items_start` and `=f`
/// inscriptions are disregarded; this variant is only used to explain why the
/// regular order came out empty.
pub fn fire_order(
    env: &QuiverEnv<'_>,
    ignore_exclusions: bool,
    launcher: Option<&Item>,
) -> FireOrder {
    let player = env.player();
    let capacity = player.capacity().min(QuiverConfig::MAX_INVENTORY_SLOTS);
    let start = if ignore_exclusions {
        0
    } else {
        env.config().fire_items_start
    };

    let mut order = FireOrder::new();

    // In a net nothing can be thrown; a blowgun still works.
    if player.is_held() {
        if let Some(blowgun) =
            launcher.filter(|launcher| launcher.weapon_kind() == Some(WeaponKind::Blowgun))
        {
            order.extend((start..capacity).filter(|&slot| {
                player
                    .item(slot)
                    .is_some_and(|item| env.rules().launched_by(item, blowgun))
            }));
        }
        return order;
    }

    let wielded = player.wielded_slot();
    let prefs = &env.config().fire_order;
    let mut ranked: ArrayVec<RankKey, { QuiverConfig::MAX_INVENTORY_SLOTS }> = ArrayVec::new();

    for slot in start..capacity {
        let Some(item) = player.item(slot) else {
            continue;
        };
        if wielded == Some(slot) {
            continue;
        }
        if env.launch_kind(item) == LaunchKind::Fumbled {
            continue;
        }
        if !ignore_exclusions && item.has_inscription(FIRE_EXCLUDE_INSCRIPTION) {
            continue;
        }

        if let Some(rank) = prefs
            .iter()
            .position(|&types| item_matches(item, types, launcher, env))
        {
            ranked.push((rank, slot));
        }
    }

    ranked.sort_unstable();
    order.extend(ranked.into_iter().map(|(_, slot)| slot));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::{Env, StandardRules};
    use crate::quiver::FireTypes;
    use crate::state::{MissileKind, Pack, PlayerState};

    fn resolve(player: &PlayerState, config: &QuiverConfig, ignore: bool) -> Vec<usize> {
        let env = Env::new(player, &StandardRules, config).into_quiver_env();
        fire_order(&env, ignore, env.weapon()).to_vec()
    }

    fn pack(items: impl IntoIterator<Item = (usize, Item)>) -> Pack {
        let mut pack = Pack::new();
        for (slot, item) in items {
            pack.insert(slot, item);
        }
        pack
    }

    #[test]
    fn ranks_by_preference_then_slot() {
        let player = PlayerState::new(pack([
            (0, Item::weapon(WeaponKind::Dagger)),
            (1, Item::missile(MissileKind::Stone, 3)),
            (2, Item::missile(MissileKind::Javelin, 2)),
            (4, Item::missile(MissileKind::Dart, 8)),
        ]));
        let config = QuiverConfig::default();
        // javelin, then darts/stones sharing a rank, then dagger
        assert_eq!(resolve(&player, &config, false), vec![2, 1, 4, 0]);
    }

    #[test]
    fn equal_rank_items_keep_slot_order() {
        let player = PlayerState::new(pack([
            (7, Item::missile(MissileKind::Dart, 1)),
            (3, Item::missile(MissileKind::Dart, 1).with_plus(1)),
            (5, Item::missile(MissileKind::Dart, 1).with_plus(2)),
        ]));
        let config = QuiverConfig::new().with_fire_order([FireTypes::DART]);
        assert_eq!(resolve(&player, &config, false), vec![3, 5, 7]);
    }

    #[test]
    fn skips_wielded_and_unmatched_items() {
        let player = PlayerState::new(pack([
            (0, Item::weapon(WeaponKind::Dagger)),
            (1, Item::weapon(WeaponKind::Dagger)),
            (2, Item::weapon(WeaponKind::LongSword)),
            (3, Item::missile(MissileKind::Arrow, 12)),
        ]))
        .with_wielded(0);
        let config = QuiverConfig::default();
        assert_eq!(resolve(&player, &config, false), vec![1]);
    }

    #[test]
    fn exclusion_inscription_and_start_offset() {
        let player = PlayerState::new(pack([
            (0, Item::missile(MissileKind::Dart, 5)),
            (3, Item::missile(MissileKind::Stone, 5).with_inscription("=f")),
            (6, Item::missile(MissileKind::Javelin, 1)),
        ]));
        let config = QuiverConfig::default().with_fire_items_start(2);
        assert_eq!(resolve(&player, &config, false), vec![6]);
        assert_eq!(resolve(&player, &config, true), vec![6, 0, 3]);
    }

    #[test]
    fn held_player_can_only_use_a_blowgun() {
        let items = [
            (0, Item::weapon(WeaponKind::Blowgun)),
            (1, Item::missile(MissileKind::Needle, 10)),
            (2, Item::missile(MissileKind::Dart, 10)),
        ];
        let config = QuiverConfig::default();

        let with_blowgun = PlayerState::new(pack(items.clone()))
            .with_wielded(0)
            .with_held(true);
        assert_eq!(resolve(&with_blowgun, &config, false), vec![1]);

        let unarmed = PlayerState::new(pack(items)).with_held(true);
        assert!(resolve(&unarmed, &config, false).is_empty());
    }

    #[test]
    fn repeated_resolution_is_stable() {
        let player = PlayerState::new(pack([
            (9, Item::missile(MissileKind::Stone, 2)),
            (1, Item::missile(MissileKind::Dart, 2)),
            (4, Item::weapon(WeaponKind::Spear)),
        ]));
        let config = QuiverConfig::default();
        let first = resolve(&player, &config, false);
        for _ in 0..5 {
            assert_eq!(resolve(&player, &config, false), first);
        }
    }

    /// Reports more slots than there are inventory letters.
    struct OversizedPack {
        items: Vec<Item>,
    }

    impl crate::env::PlayerOracle for OversizedPack {
        fn capacity(&self) -> usize {
            self.items.len()
        }

        fn item(&self, slot: usize) -> Option<&Item> {
            self.items.get(slot).filter(|item| item.is_valid())
        }

        fn wielded_slot(&self) -> Option<usize> {
            None
        }

        fn is_equipped(&self, _slot: usize) -> bool {
            false
        }

        fn body_size(&self) -> crate::env::BodySize {
            crate::env::BodySize::Medium
        }

        fn is_held(&self) -> bool {
            false
        }
    }

    #[test]
    fn slots_beyond_inventory_letters_are_ignored() {
        let mut items = vec![Item::default(); QuiverConfig::MAX_INVENTORY_SLOTS + 8];
        items[3] = Item::missile(MissileKind::Dart, 2);
        items[55] = Item::missile(MissileKind::Javelin, 2);
        let player = OversizedPack { items };
        let config = QuiverConfig::default();
        let env = Env::new(&player, &StandardRules, &config).into_quiver_env();

        assert_eq!(fire_order(&env, true, None).as_slice(), &[3]);

        let javelin = Item::missile(MissileKind::Javelin, 1);
        assert_eq!(crate::quiver::pack_slot(&javelin, &env), None);
        let darts = Item::missile(MissileKind::Dart, 1);
        assert_eq!(crate::quiver::pack_slot(&darts, &env), Some(3));
    }
}
