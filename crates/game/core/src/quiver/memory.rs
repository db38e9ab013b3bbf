//! Per-category "last used" memory.

use crate::config::QuiverConfig;
use crate::env::{LaunchKind, QuiverEnv};
use crate::state::{AmmoType, CategoryTable, Item};

/// Item the quiver would like to fire, as shown in the status display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DesiredItem<'a> {
    /// Pack slot holding the item, if it is still carried.
    pub slot: Option<usize>,
    /// The live pack item when `slot` is set (accurate count), otherwise the
    /// remembered snapshot.
    pub item: &'a Item,
}

/// One remembered item per [`AmmoType`] plus the active category.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct QuiverMemory {
    last_used: CategoryTable<Item>,
    active: AmmoType,
    redraw: bool,
}

impl QuiverMemory {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(last_used: CategoryTable<Item>, active: AmmoType) -> Self {
        Self {
            last_used,
            active,
            redraw: true,
        }
    }

    pub fn active(&self) -> AmmoType {
        self.active
    }

    pub fn last_used(&self, ammo: AmmoType) -> &Item {
        &self.last_used[ammo]
    }

    pub fn active_item(&self) -> &Item {
        &self.last_used[self.active]
    }

    pub fn table(&self) -> &CategoryTable<Item> {
        &self.last_used
    }

    /// Resolves the active category's snapshot against the pack.
    pub fn get_desired<'a>(&'a self, env: &QuiverEnv<'a>) -> DesiredItem<'a> {
        let stored = self.active_item();
        match pack_slot(stored, env) {
            Some(slot) => DesiredItem {
                slot: Some(slot),
                item: env.player().item(slot).unwrap_or(stored),
            },
            None => DesiredItem {
                slot: None,
                item: stored,
            },
        }
    }

    /// Remembers `item` for `ammo` and makes `ammo` the active category.
    pub fn set_quiver(&mut self, item: &Item, ammo: AmmoType) {
        self.last_used[ammo] = item.to_desired();
        self.active = ammo;
        self.redraw = true;
    }

    /// Forgets the item remembered for `ammo` and makes `ammo` active.
    pub fn empty_quiver(&mut self, ammo: AmmoType) {
        self.last_used[ammo] = Item::default();
        self.active = ammo;
        self.redraw = true;
    }

    /// Records that `item` was fired.
    ///
    /// Only an explicit choice updates the memory: ammunition for the wielded
    /// launcher goes to the launcher's category, anything else that can be
    /// thrown goes to `Throw`. Firing whatever the quiver offered changes
    /// nothing.
    pub fn on_item_fired(&mut self, item: &Item, explicitly_chosen: bool, env: &QuiverEnv<'_>) {
        self.redraw = true;
        if !explicitly_chosen {
            return;
        }

        if env.launched_by_weapon(item) {
            let ammo = AmmoType::for_weapon(env.weapon());
            self.last_used[ammo] = item.to_desired();
            self.active = ammo;
        } else if env.launch_kind(item) != LaunchKind::Fumbled {
            tracing::trace!(?item.class, "item is for throwing");
            self.last_used[AmmoType::Throw] = item.to_desired();
            self.active = AmmoType::Throw;
        }
    }

    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Returns and clears the redraw request.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw)
    }

    pub(crate) fn request_redraw(&mut self) {
        self.redraw = true;
    }

    pub(crate) fn set_active(&mut self, ammo: AmmoType) {
        self.active = ammo;
    }

    pub(crate) fn entry_mut(&mut self, ammo: AmmoType) -> &mut Item {
        &mut self.last_used[ammo]
    }
}

/// Finds the pack slot holding an item that looks like `item`.
///
/// An item with the same identity and letter wins; failing that, any
/// stack-compatible item is accepted.
pub fn pack_slot(item: &Item, env: &QuiverEnv<'_>) -> Option<usize> {
    if !item.is_valid() {
        return None;
    }

    let player = env.player();
    let rules = env.rules();
    let capacity = player.capacity().min(QuiverConfig::MAX_INVENTORY_SLOTS);
    let carried = || {
        (0..capacity)
            .filter_map(|slot| player.item(slot).map(|candidate| (slot, candidate)))
    };

    carried()
        .find(|(_, candidate)| rules.items_similar(item, candidate))
        .or_else(|| carried().find(|(_, candidate)| rules.items_stack(item, candidate)))
        .map(|(slot, _)| slot)
}
