//! A player's inventory with its quiver kept in sync.
//!
//! Every mutation of the pack or the equipment goes through
//! [`QuiverSession`], which forwards the matching notification to the
//! [`PlayerQuiver`]. Queries build a fresh [`QuiverEnv`] over the current
//! state each time.

use quiver_content::ContentFactory;
use quiver_core::{
    DesiredItem, Env, FireOrder, Item, ItemFlags, PlayerQuiver, PlayerState, QuiverChoice,
    QuiverConfig, QuiverEnv, QuiverSelection, StandardRules,
};

use crate::error::{Result, SessionError};
use crate::repository::QuiverRepository;

/// Borrows the fields an environment needs without borrowing the quiver.
fn quiver_env<'a>(
    player: &'a PlayerState,
    rules: &'a StandardRules,
    config: &'a QuiverConfig,
) -> QuiverEnv<'a> {
    Env::new(player, rules, config).into_quiver_env()
}

pub struct QuiverSession {
    player: PlayerState,
    quiver: PlayerQuiver,
    config: QuiverConfig,
    rules: StandardRules,
}

impl QuiverSession {
    /// Starts a session with an empty quiver memory.
    ///
    /// The wielded weapon's category is filled right away.
    pub fn new(player: PlayerState, config: QuiverConfig) -> Self {
        Self::with_quiver(player, config, PlayerQuiver::new())
    }

    /// Starts a session with a previously saved quiver.
    pub fn with_quiver(player: PlayerState, config: QuiverConfig, quiver: PlayerQuiver) -> Self {
        let mut session = Self {
            player,
            quiver,
            config,
            rules: StandardRules,
        };
        session.weapon_changed();
        session
    }

    /// Starts a session from `quiver.toml` and `packs/{pack}.ron`.
    pub fn from_content(factory: &ContentFactory, pack: &str) -> Result<Self> {
        let config = factory
            .load_options()
            .map_err(|e| SessionError::Content(format!("{e:#}")))?;
        let player = factory
            .load_pack(pack)
            .map_err(|e| SessionError::Content(format!("{e:#}")))?;
        tracing::info!(
            "Loaded pack '{}' from {}",
            pack,
            factory.data_dir().display()
        );
        Ok(Self::new(player, config))
    }

    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    pub fn quiver(&self) -> &PlayerQuiver {
        &self.quiver
    }

    pub fn config(&self) -> &QuiverConfig {
        &self.config
    }

    pub fn env(&self) -> QuiverEnv<'_> {
        quiver_env(&self.player, &self.rules, &self.config)
    }

    // ===== queries =====

    /// Item shown in the quiver display.
    pub fn desired(&self) -> DesiredItem<'_> {
        self.quiver.get_desired_item(&self.env())
    }

    /// Pack slot `fire(None)` would use.
    pub fn fire_item(&self) -> std::result::Result<usize, quiver_core::NoFireItem> {
        self.quiver.get_fire_item(&self.env())
    }

    pub fn fire_order(&self) -> FireOrder {
        self.quiver.get_fire_order(&self.env())
    }

    /// Returns and clears the quiver's redraw request.
    pub fn take_redraw(&mut self) -> bool {
        self.quiver.take_redraw()
    }

    // ===== equipment =====

    /// Wields the item in `slot`.
    pub fn wield(&mut self, slot: usize) -> Result<()> {
        if self.player.pack.get(slot).is_none() {
            return Err(SessionError::EmptySlot(slot));
        }
        if self.player.worn.contains(&slot) {
            return Err(SessionError::Worn(slot));
        }

        self.player.wielded = Some(slot);
        tracing::debug!(slot, "wielded");
        self.weapon_changed();
        Ok(())
    }

    pub fn unwield(&mut self) {
        if self.player.wielded.take().is_some() {
            tracing::debug!("unwielded");
            self.weapon_changed();
        }
    }

    /// Sets whether the player is caught in a net or web.
    pub fn set_held(&mut self, held: bool) {
        self.player.held = held;
    }

    // ===== inventory =====

    /// Adds `item` to the pack, merging it into a matching stack.
    pub fn pick_up(&mut self, item: Item) -> Result<usize> {
        let amount = i32::from(item.quantity);
        let slot = self
            .player
            .pack
            .add(item, &self.rules)
            .ok_or(SessionError::PackFull)?;

        tracing::debug!(slot, amount, "picked up");
        let env = quiver_env(&self.player, &self.rules, &self.config);
        self.quiver.on_inv_quantity_changed(slot, amount, &env);
        Ok(slot)
    }

    /// Removes up to `amount` items from `slot`.
    ///
    /// Dropping the whole wielded stack unwields it first.
    pub fn drop_item(&mut self, slot: usize, amount: u16) -> Result<Item> {
        let quantity = self
            .player
            .pack
            .get(slot)
            .map(|item| item.quantity)
            .ok_or(SessionError::EmptySlot(slot))?;
        if self.player.worn.contains(&slot) {
            return Err(SessionError::Worn(slot));
        }

        if amount >= quantity && self.player.wielded == Some(slot) {
            self.unwield();
        }

        let dropped = self
            .player
            .pack
            .take(slot, amount)
            .ok_or(SessionError::EmptySlot(slot))?;

        tracing::debug!(slot, amount = dropped.quantity, "dropped");
        let env = quiver_env(&self.player, &self.rules, &self.config);
        self.quiver
            .on_inv_quantity_changed(slot, -i32::from(dropped.quantity), &env);
        Ok(dropped)
    }

    /// Fires one item.
    ///
    /// With `None` the quivered item is used; an explicit slot counts as an
    /// explicit choice and may change the quiver.
    pub fn fire(&mut self, slot: Option<usize>) -> Result<Item> {
        self.fire_with(slot, false)
    }

    /// Fires one item with the alternate targeting mode.
    pub fn fire_alt(&mut self, slot: Option<usize>) -> Result<Item> {
        self.fire_with(slot, true)
    }

    fn fire_with(&mut self, slot: Option<usize>, alt: bool) -> Result<Item> {
        let explicitly_chosen = slot.is_some();
        let slot = match slot {
            Some(slot) => slot,
            None => self.fire_item()?,
        };

        if self.player.pack.get(slot).is_none() {
            return Err(SessionError::EmptySlot(slot));
        }
        if self.player.wielded == Some(slot) {
            return Err(SessionError::Wielded(slot));
        }
        if self.player.worn.contains(&slot) {
            return Err(SessionError::Worn(slot));
        }

        let fired = self
            .player
            .pack
            .take(slot, 1)
            .ok_or(SessionError::EmptySlot(slot))?;

        let env = quiver_env(&self.player, &self.rules, &self.config);
        tracing::debug!(slot, explicitly_chosen, alt, kind = ?env.launch_kind(&fired), "fired");
        if alt {
            self.quiver.on_item_fired_alt(&fired, &env);
        } else {
            self.quiver.on_item_fired(&fired, explicitly_chosen, &env);
        }
        self.quiver.on_inv_quantity_changed(slot, -1, &env);
        Ok(fired)
    }

    /// Identifies the item in `slot` without losing quiver choices that point
    /// at it.
    pub fn identify(&mut self, slot: usize) -> Result<()> {
        let token = self
            .quiver
            .capture_slots(&quiver_env(&self.player, &self.rules, &self.config));

        let item = self
            .player
            .pack
            .get_mut(slot)
            .ok_or(SessionError::EmptySlot(slot))?;
        item.flags |= ItemFlags::KNOW_TYPE | ItemFlags::KNOW_PLUSES;
        tracing::debug!(slot, "identified");

        let env = quiver_env(&self.player, &self.rules, &self.config);
        self.quiver.restore_slots(token, &env);
        Ok(())
    }

    // ===== quiver =====

    /// Applies an explicit quiver selection.
    pub fn choose(&mut self, selection: QuiverSelection) -> Result<QuiverChoice> {
        let env = quiver_env(&self.player, &self.rules, &self.config);
        let choice = self.quiver.choose_item(selection, &env)?;
        tracing::debug!(?choice, "quiver selection");
        Ok(choice)
    }

    // ===== persistence =====

    pub fn save(&self, repo: &dyn QuiverRepository) -> Result<()> {
        repo.save(&self.quiver)?;
        Ok(())
    }

    /// Replaces the quiver with the saved one.
    ///
    /// Returns false, leaving the quiver untouched, if nothing was saved.
    pub fn restore(&mut self, repo: &dyn QuiverRepository) -> Result<bool> {
        let Some(quiver) = repo.load()? else {
            return Ok(false);
        };
        self.quiver = quiver;
        self.weapon_changed();
        Ok(true)
    }

    fn weapon_changed(&mut self) {
        let env = quiver_env(&self.player, &self.rules, &self.config);
        self.quiver.on_weapon_changed(&env);
        tracing::debug!(active = %self.quiver.active(), "weapon changed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quiver_core::{AmmoType, MissileKind, Pack, WeaponKind};

    fn session_with(items: impl IntoIterator<Item = (usize, Item)>) -> QuiverSession {
        let mut pack = Pack::new();
        for (slot, item) in items {
            pack.insert(slot, item);
        }
        QuiverSession::new(PlayerState::new(pack), QuiverConfig::default())
    }

    #[test]
    fn wield_switches_active_category() {
        let mut session = session_with([
            (0, Item::weapon(WeaponKind::Crossbow)),
            (1, Item::missile(MissileKind::Bolt, 12)),
            (2, Item::missile(MissileKind::Dart, 5)),
        ]);
        assert_eq!(session.quiver().active(), AmmoType::Throw);
        assert_eq!(session.fire_item(), Ok(2));

        session.wield(0).expect("crossbow can be wielded");
        assert_eq!(session.quiver().active(), AmmoType::Crossbow);
        assert_eq!(session.fire_item(), Ok(1));

        session.unwield();
        assert_eq!(session.quiver().active(), AmmoType::Throw);
        assert_eq!(session.fire_item(), Ok(2));
    }

    #[test]
    fn wield_rejects_empty_and_worn_slots() {
        let mut session = session_with([(3, Item::new(quiver_core::ItemClass::Armour, 1))]);
        session.player.worn.push(3);

        assert!(matches!(session.wield(0), Err(SessionError::EmptySlot(0))));
        assert!(matches!(session.wield(3), Err(SessionError::Worn(3))));
    }

    #[test]
    fn firing_decrements_stack() {
        let mut session = session_with([(4, Item::missile(MissileKind::Dart, 2))]);

        let fired = session.fire(None).expect("darts fire");
        assert_eq!(fired.quantity, 1);
        assert_eq!(session.player().pack.get(4).map(|item| item.quantity), Some(1));

        session.fire(None).expect("last dart fires");
        assert!(session.player().pack.get(4).is_none());
        assert!(matches!(
            session.fire(None),
            Err(SessionError::NoFireItem(_))
        ));
    }

    #[test]
    fn cannot_fire_wielded_weapon() {
        let mut session = session_with([(0, Item::weapon(WeaponKind::Dagger))]);
        session.wield(0).expect("dagger can be wielded");
        assert!(matches!(session.fire(Some(0)), Err(SessionError::Wielded(0))));
    }

    #[test]
    fn picking_up_refills_empty_quiver() {
        let mut session = QuiverSession::new(PlayerState::default(), QuiverConfig::default());
        assert!(!session.quiver().memory().active_item().is_valid());

        let slot = session
            .pick_up(Item::missile(MissileKind::Javelin, 3))
            .expect("pack has room");
        assert_eq!(slot, 0);
        assert_eq!(session.desired().slot, Some(0));
        assert!(session.take_redraw());
        assert!(!session.take_redraw());
    }

    #[test]
    fn dropping_wielded_stack_unwields() {
        let mut session = session_with([(0, Item::weapon(WeaponKind::Sling))]);
        session.wield(0).expect("sling can be wielded");
        assert_eq!(session.quiver().active(), AmmoType::Sling);

        let dropped = session.drop_item(0, 1).expect("sling dropped");
        assert_eq!(dropped.weapon_kind(), Some(WeaponKind::Sling));
        assert_eq!(session.player().wielded, None);
        assert_eq!(session.quiver().active(), AmmoType::Throw);
    }

    #[test]
    fn default_fire_never_picks_the_wielded_weapon() {
        let mut session = session_with([
            (1, Item::weapon(WeaponKind::Dagger)),
            (4, Item::weapon(WeaponKind::Dagger)),
            (6, Item::weapon(WeaponKind::Club)),
        ]);
        session.fire(Some(4)).expect("dagger is thrown");
        session.wield(1).expect("dagger can be wielded");

        assert_eq!(session.fire_item(), Ok(6));
        let fired = session.fire(None).expect("club is thrown");
        assert_eq!(fired.weapon_kind(), Some(WeaponKind::Club));
    }
}
