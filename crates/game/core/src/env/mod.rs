//! Traits describing the collaborators the quiver reads from.
//!
//! Oracles expose the player's inventory and equipment and the item property
//! rules. The [`Env`] aggregate bundles them with the [`QuiverConfig`] so every
//! quiver operation receives its inputs explicitly instead of reaching for
//! global player state.
mod player;
mod rules;

pub use player::{BodySize, PlayerOracle};
pub use rules::{ItemRules, LaunchKind, StandardRules};

use crate::config::QuiverConfig;
use crate::state::Item;

/// Aggregates the read-only inputs of the quiver operations.
pub struct Env<'a, P, R>
where
    P: PlayerOracle + ?Sized,
    R: ItemRules + ?Sized,
{
    player: &'a P,
    rules: &'a R,
    config: &'a QuiverConfig,
}

pub type QuiverEnv<'a> = Env<'a, dyn PlayerOracle + 'a, dyn ItemRules + 'a>;

impl<P, R> Clone for Env<'_, P, R>
where
    P: PlayerOracle + ?Sized,
    R: ItemRules + ?Sized,
{
    fn clone(&self) -> Self {
        *self
    }
}

impl<P, R> Copy for Env<'_, P, R>
where
    P: PlayerOracle + ?Sized,
    R: ItemRules + ?Sized,
{
}

impl<'a, P, R> Env<'a, P, R>
where
    P: PlayerOracle + ?Sized,
    R: ItemRules + ?Sized,
{
    pub fn new(player: &'a P, rules: &'a R, config: &'a QuiverConfig) -> Self {
        Self {
            player,
            rules,
            config,
        }
    }

    pub fn player(&self) -> &'a P {
        self.player
    }

    pub fn rules(&self) -> &'a R {
        self.rules
    }

    pub fn config(&self) -> &'a QuiverConfig {
        self.config
    }

    /// The wielded weapon, if any.
    pub fn weapon(&self) -> Option<&'a Item> {
        self.player.weapon()
    }

    /// Launch classification of `item` for the currently wielded weapon.
    pub fn launch_kind(&self, item: &Item) -> LaunchKind {
        self.rules
            .launch_kind(item, self.weapon(), self.player.body_size())
    }

    /// Returns true if `item` is ammunition for the wielded weapon.
    pub fn launched_by_weapon(&self, item: &Item) -> bool {
        self.weapon()
            .is_some_and(|weapon| self.rules.launched_by(item, weapon))
    }
}

impl<'a, P, R> Env<'a, P, R>
where
    P: PlayerOracle + 'a,
    R: ItemRules + 'a,
{
    /// Converts this environment into a trait-object based `QuiverEnv`.
    pub fn into_quiver_env(self) -> QuiverEnv<'a> {
        let player: &'a dyn PlayerOracle = self.player;
        let rules: &'a dyn ItemRules = self.rules;
        Env::new(player, rules, self.config)
    }
}
