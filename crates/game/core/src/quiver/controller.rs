//! The player's quiver.
//!
//! [`PlayerQuiver`] reacts to game events (firing, wielding, inventory
//! changes, explicit selection) and keeps the per-category memory pointing at
//! something sensible. There is no explicit state enum: the active category
//! and the remembered items are the state.

use crate::env::{LaunchKind, QuiverEnv};
use crate::quiver::{
    DesiredItem, FireOrder, NoFireItem, QuiverError, QuiverMemory, fire_order,
};
use crate::state::{AmmoType, Item};

/// Explicit quiver request coming from the UI.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuiverSelection {
    /// Forget the choice for the wielded weapon's category.
    Reset,
    /// Quiver the item in this pack slot.
    Slot(usize),
}

/// Outcome of an accepted [`QuiverSelection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum QuiverChoice {
    Reset(AmmoType),
    Quivered { slot: usize, ammo: AmmoType },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PlayerQuiver {
    memory: QuiverMemory,
    /// Weapon seen by the last `on_weapon_changed`; unassigned when unarmed.
    last_weapon: Item,
}

impl PlayerQuiver {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn from_parts(memory: QuiverMemory, last_weapon: Item) -> Self {
        Self {
            memory,
            last_weapon,
        }
    }

    pub fn memory(&self) -> &QuiverMemory {
        &self.memory
    }

    pub(crate) fn memory_mut(&mut self) -> &mut QuiverMemory {
        &mut self.memory
    }

    pub fn last_weapon(&self) -> &Item {
        &self.last_weapon
    }

    pub fn active(&self) -> AmmoType {
        self.memory.active()
    }

    /// Returns and clears the pending redraw request.
    pub fn take_redraw(&mut self) -> bool {
        self.memory.take_redraw()
    }

    /// Item shown in the quiver display; may no longer be in the pack.
    pub fn get_desired_item<'a>(&'a self, env: &QuiverEnv<'a>) -> DesiredItem<'a> {
        self.memory.get_desired(env)
    }

    /// Pack slot that `fire` should use by default.
    ///
    /// Falls back to the head of the fire order when the remembered item is
    /// gone or only resolves to the wielded weapon, and explains the failure
    /// when that is empty too.
    pub fn get_fire_item(&self, env: &QuiverEnv<'_>) -> Result<usize, NoFireItem> {
        if let Some(slot) = self.memory.get_desired(env).slot
            && env.player().wielded_slot() != Some(slot)
        {
            return Ok(slot);
        }

        let weapon = env.weapon();
        if let Some(&slot) = fire_order(env, false, weapon).first() {
            return Ok(slot);
        }

        let start = env.config().fire_items_start;
        match fire_order(env, true, weapon).first() {
            None => Err(NoFireItem::NoSuitableMissiles),
            Some(&slot) if slot < start => Err(NoFireItem::BeforeFireItemsStart { start }),
            Some(&slot) => Err(NoFireItem::InscriptionExcluded { slot }),
        }
    }

    /// Fire order for the wielded weapon.
    pub fn get_fire_order(&self, env: &QuiverEnv<'_>) -> FireOrder {
        fire_order(env, false, env.weapon())
    }

    pub fn set_quiver(&mut self, item: &Item, ammo: AmmoType) {
        self.memory.set_quiver(item, ammo);
    }

    pub fn empty_quiver(&mut self, ammo: AmmoType) {
        self.memory.empty_quiver(ammo);
    }

    /// Applies an explicit quiver selection.
    pub fn choose_item(
        &mut self,
        selection: QuiverSelection,
        env: &QuiverEnv<'_>,
    ) -> Result<QuiverChoice, QuiverError> {
        let player = env.player();
        let slot = match selection {
            QuiverSelection::Reset => {
                let ammo = AmmoType::for_weapon(env.weapon());
                self.memory.empty_quiver(ammo);
                return Ok(QuiverChoice::Reset(ammo));
            }
            QuiverSelection::Slot(slot) => slot,
        };

        if player.wielded_slot() == Some(slot) {
            return Err(QuiverError::CannotQuiverWielded);
        }
        if player.is_equipped(slot) {
            return Err(QuiverError::CannotQuiverWorn);
        }
        let item = player.item(slot).ok_or(QuiverError::EmptySlot(slot))?;

        let ammo = if env.launched_by_weapon(item) {
            AmmoType::for_weapon(env.weapon())
        } else {
            AmmoType::Throw
        };
        self.memory.set_quiver(&item.to_desired_at(slot), ammo);
        Ok(QuiverChoice::Quivered { slot, ammo })
    }

    /// Notification that `item` was fired.
    pub fn on_item_fired(&mut self, item: &Item, explicitly_chosen: bool, env: &QuiverEnv<'_>) {
        self.memory.on_item_fired(item, explicitly_chosen, env);
    }

    /// Notification that `item` was fired with the alternate targeting mode.
    /// Behaves exactly like an explicit [`Self::on_item_fired`].
    pub fn on_item_fired_alt(&mut self, item: &Item, env: &QuiverEnv<'_>) {
        self.on_item_fired(item, true, env);
    }

    /// Called when the player may have switched weapons.
    ///
    /// The active category only follows the weapon when the weapon really
    /// changed, so re-wielding the same bow keeps a manual `Throw` selection.
    pub fn on_weapon_changed(&mut self, env: &QuiverEnv<'_>) {
        match env.weapon() {
            None => {
                if !self.last_weapon.is_unassigned() {
                    self.last_weapon = Item::default();
                    self.memory.set_active(AmmoType::Throw);
                }
            }
            Some(weapon) => {
                if !env.rules().items_stack(weapon, &self.last_weapon) {
                    self.last_weapon = weapon.clone();
                    self.memory.set_active(AmmoType::for_weapon(Some(weapon)));
                }
            }
        }

        self.maybe_fill_empty_slot(env);
    }

    /// Called when the quantity of the item in `slot` changed by `amount`.
    pub fn on_inv_quantity_changed(&mut self, slot: usize, amount: i32, env: &QuiverEnv<'_>) {
        let Some(item) = env.player().item(slot) else {
            return;
        };
        if env.launch_kind(item) == LaunchKind::Fumbled {
            return;
        }

        if !self.memory.active_item().is_valid() {
            tracing::trace!(slot, amount, "quiver empty, trying to refill");
            self.maybe_fill_empty_slot(env);
            self.memory.request_redraw();
        } else if self.get_fire_item(env) == Ok(slot) {
            self.memory.request_redraw();
        }
    }

    /// Refills the wielded weapon's category if it is empty, or if the item
    /// it remembers is the weapon now being wielded.
    fn maybe_fill_empty_slot(&mut self, env: &QuiverEnv<'_>) {
        let weapon = env.weapon();
        let ammo = AmmoType::for_weapon(weapon);
        let wielded = env.player().wielded_slot();

        let current = self.memory.entry_mut(ammo);
        tracing::trace!(?ammo, ?current.class, link = ?current.link, ?wielded, "last quiver item");

        if current.is_valid() {
            if current.link.is_some() && current.link == wielded {
                // Wielding what was quivered; force a refill below.
                current.quantity = 0;
            } else {
                return;
            }
        }

        tracing::debug!(?ammo, "recalculating fire order");

        let desired = if weapon.is_some_and(|weapon| env.rules().is_range_weapon(weapon)) {
            LaunchKind::Launched
        } else {
            LaunchKind::Thrown
        };

        let player = env.player();
        let refill = fire_order(env, false, weapon).into_iter().find_map(|slot| {
            player
                .item(slot)
                .filter(|item| env.launch_kind(item) == desired)
                .map(|item| item.to_desired_at(slot))
        });

        if let Some(item) = refill {
            *self.memory.entry_mut(ammo) = item;
            self.memory.request_redraw();
        }
    }
}
