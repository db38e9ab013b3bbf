use quiver_core::{
    AmmoType, Env, FireTypes, Item, MissileKind, NoFireItem, Pack, PlayerQuiver, PlayerState,
    QuiverConfig, StandardRules, WeaponKind,
};

fn player_with(items: impl IntoIterator<Item = (usize, Item)>) -> PlayerState {
    let mut pack = Pack::new();
    for (slot, item) in items {
        pack.insert(slot, item);
    }
    PlayerState::new(pack)
}

/// Bow wielded, arrows in slot 3, no quiver history: the bow category fills
/// itself and firing picks the arrows.
#[test]
fn bow_with_arrows_fires_arrows() {
    let player = player_with([
        (0, Item::weapon(WeaponKind::Bow)),
        (3, Item::missile(MissileKind::Arrow, 10)),
    ])
    .with_wielded(0);
    let config = QuiverConfig::default();
    let env = Env::new(&player, &StandardRules, &config).into_quiver_env();

    let mut quiver = PlayerQuiver::new();
    quiver.on_weapon_changed(&env);

    assert_eq!(quiver.active(), AmmoType::Bow);
    assert_eq!(quiver.get_fire_item(&env), Ok(3));
    let remembered = quiver.memory().last_used(AmmoType::Bow);
    assert_eq!(remembered.missile_kind(), Some(MissileKind::Arrow));
    assert_eq!(remembered.quantity, 1);
}

/// Caught in a net while wielding a dagger: nothing can be fired.
#[test]
fn held_with_dagger_resolves_nothing() {
    let player = player_with([
        (0, Item::weapon(WeaponKind::Dagger)),
        (1, Item::missile(MissileKind::Dart, 12)),
        (2, Item::missile(MissileKind::Javelin, 4)),
        (3, Item::weapon(WeaponKind::Spear)),
    ])
    .with_wielded(0)
    .with_held(true);
    let config = QuiverConfig::default();
    let env = Env::new(&player, &StandardRules, &config).into_quiver_env();

    let quiver = PlayerQuiver::new();
    assert!(quiver.get_fire_order(&env).is_empty());
    assert_eq!(quiver.get_fire_item(&env), Err(NoFireItem::NoSuitableMissiles));
}

/// Wielding the quivered dagger clears the throwing choice and refills it
/// from the remaining pack.
#[test]
fn wielding_quivered_item_forces_refill() {
    let config = QuiverConfig::default();
    let items = [
        (1, Item::weapon(WeaponKind::Dagger)),
        (4, Item::weapon(WeaponKind::Club)),
    ];

    let mut quiver = PlayerQuiver::new();
    let unarmed = player_with(items.clone());
    let env = Env::new(&unarmed, &StandardRules, &config).into_quiver_env();
    quiver.on_weapon_changed(&env);
    assert_eq!(quiver.get_fire_item(&env), Ok(1));
    assert_eq!(quiver.memory().last_used(AmmoType::Throw).link, Some(1));

    let wielding = player_with(items).with_wielded(1);
    let env = Env::new(&wielding, &StandardRules, &config).into_quiver_env();
    quiver.on_weapon_changed(&env);

    assert_eq!(quiver.active(), AmmoType::Throw);
    let refilled = quiver.memory().last_used(AmmoType::Throw);
    assert_eq!(refilled.weapon_kind(), Some(WeaponKind::Club));
    assert_eq!(refilled.link, Some(4));
    assert_eq!(quiver.get_fire_item(&env), Ok(4));
}

/// Wielding the only throwable item leaves the category empty.
#[test]
fn wielding_only_quivered_item_empties_category() {
    let config = QuiverConfig::default();
    let mut quiver = PlayerQuiver::new();

    let unarmed = player_with([(2, Item::weapon(WeaponKind::Spear))]);
    quiver.on_weapon_changed(&Env::new(&unarmed, &StandardRules, &config).into_quiver_env());
    assert!(quiver.memory().last_used(AmmoType::Throw).is_valid());

    let wielding = PlayerState {
        wielded: Some(2),
        ..unarmed
    };
    let env = Env::new(&wielding, &StandardRules, &config).into_quiver_env();
    quiver.on_weapon_changed(&env);

    let cleared = quiver.memory().last_used(AmmoType::Throw);
    assert!(!cleared.is_valid());
    assert_eq!(cleared.quantity, 0);
    assert_eq!(quiver.get_fire_item(&env), Err(NoFireItem::NoSuitableMissiles));
}

/// Explicitly firing something that is neither ammunition nor throwable
/// leaves every category untouched.
#[test]
fn explicit_fire_of_unthrowable_item_changes_nothing() {
    let player = player_with([
        (0, Item::weapon(WeaponKind::Sling)),
        (1, Item::missile(MissileKind::Stone, 30)),
        (2, Item::missile(MissileKind::Arrow, 5)),
    ])
    .with_wielded(0);
    let config = QuiverConfig::default();
    let env = Env::new(&player, &StandardRules, &config).into_quiver_env();

    let mut quiver = PlayerQuiver::new();
    quiver.on_weapon_changed(&env);
    let before = quiver.memory().table().clone();
    let active = quiver.active();

    let arrows = player.pack.get(2).cloned().expect("arrows in slot 2");
    quiver.on_item_fired(&arrows, true, &env);
    quiver.on_item_fired_alt(&arrows, &env);

    assert_eq!(quiver.memory().table(), &before);
    assert_eq!(quiver.active(), active);
}

#[test]
fn failure_reasons_distinguish_exclusions() {
    let config = QuiverConfig::default().with_fire_items_start(5);

    let early = player_with([(2, Item::missile(MissileKind::Dart, 3))]);
    let env = Env::new(&early, &StandardRules, &config).into_quiver_env();
    assert_eq!(
        PlayerQuiver::new().get_fire_item(&env),
        Err(NoFireItem::BeforeFireItemsStart { start: 5 })
    );

    let inscribed = player_with([(7, Item::missile(MissileKind::Dart, 3).with_inscription("=f"))]);
    let env = Env::new(&inscribed, &StandardRules, &config).into_quiver_env();
    let err = PlayerQuiver::new().get_fire_item(&env).unwrap_err();
    assert_eq!(err, NoFireItem::InscriptionExcluded { slot: 7 });
    assert_eq!(
        err.to_string(),
        "Nothing suitable (ignored '=f'-inscribed item on 'h')."
    );
}

#[test]
fn categories_are_remembered_across_weapon_switches() {
    let config = QuiverConfig::new().with_fire_order([FireTypes::LAUNCHER, FireTypes::DART]);
    let items = [
        (0, Item::weapon(WeaponKind::Bow)),
        (1, Item::weapon(WeaponKind::Sling)),
        (2, Item::missile(MissileKind::Arrow, 20)),
        (3, Item::missile(MissileKind::Arrow, 20).with_plus(2)),
        (4, Item::missile(MissileKind::SlingBullet, 15)),
    ];
    let mut quiver = PlayerQuiver::new();

    let with_bow = player_with(items.clone()).with_wielded(0);
    let env = Env::new(&with_bow, &StandardRules, &config).into_quiver_env();
    quiver.on_weapon_changed(&env);
    quiver
        .choose_item(quiver_core::QuiverSelection::Slot(3), &env)
        .expect("enchanted arrows can be quivered");
    assert_eq!(quiver.get_fire_item(&env), Ok(3));

    let with_sling = player_with(items.clone()).with_wielded(1);
    let env = Env::new(&with_sling, &StandardRules, &config).into_quiver_env();
    quiver.on_weapon_changed(&env);
    assert_eq!(quiver.active(), AmmoType::Sling);
    assert_eq!(quiver.get_fire_item(&env), Ok(4));

    let with_bow = player_with(items).with_wielded(0);
    let env = Env::new(&with_bow, &StandardRules, &config).into_quiver_env();
    quiver.on_weapon_changed(&env);
    assert_eq!(quiver.active(), AmmoType::Bow);
    assert_eq!(quiver.get_fire_item(&env), Ok(3));
}

/// The remembered dagger is gone; its only stack-compatible match is the
/// dagger now wielded, so the default fire item comes from the fire order.
#[test]
fn remembered_item_matching_only_the_wielded_weapon_is_skipped() {
    let config = QuiverConfig::default();
    let mut quiver = PlayerQuiver::new();

    let unarmed = player_with([
        (1, Item::weapon(WeaponKind::Dagger)),
        (4, Item::weapon(WeaponKind::Dagger)),
        (6, Item::weapon(WeaponKind::Club)),
    ]);
    let env = Env::new(&unarmed, &StandardRules, &config).into_quiver_env();
    let thrown = unarmed.pack.get(4).cloned().expect("dagger in slot 4");
    quiver.on_item_fired(&thrown, true, &env);
    assert_eq!(quiver.memory().last_used(AmmoType::Throw).letter, Some('e'));

    let wielding = player_with([
        (1, Item::weapon(WeaponKind::Dagger)),
        (6, Item::weapon(WeaponKind::Club)),
    ])
    .with_wielded(1);
    let env = Env::new(&wielding, &StandardRules, &config).into_quiver_env();
    quiver.on_weapon_changed(&env);

    assert_eq!(quiver.get_desired_item(&env).slot, Some(1));
    assert_eq!(quiver.get_fire_order(&env).as_slice(), &[6]);
    assert_eq!(quiver.get_fire_item(&env), Ok(6));
}
