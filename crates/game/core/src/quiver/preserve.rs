//! Keeping quiver choices attached to items whose identity changes.
//!
//! Identifying an item changes what it stacks with, so a remembered snapshot
//! taken before identification would no longer find it. Capture the pack
//! slots first, change the items, then restore.

use crate::env::QuiverEnv;
use crate::quiver::{PlayerQuiver, pack_slot};
use crate::state::CategoryTable;

/// Pack slot of each category's remembered item at capture time.
#[derive(Clone, Debug, PartialEq, Eq)]
#[must_use = "pass the token to `PlayerQuiver::restore_slots`"]
pub struct SlotToken {
    slots: CategoryTable<Option<usize>>,
}

impl SlotToken {
    pub fn slots(&self) -> &CategoryTable<Option<usize>> {
        &self.slots
    }
}

impl PlayerQuiver {
    /// Records where every remembered item currently lives in the pack.
    pub fn capture_slots(&self, env: &QuiverEnv<'_>) -> SlotToken {
        SlotToken {
            slots: CategoryTable::from_fn(|ammo| pack_slot(self.memory().last_used(ammo), env)),
        }
    }

    /// Re-snapshots the items at the captured slots.
    ///
    /// Categories whose item was not in the pack at capture time are left as
    /// they are.
    pub fn restore_slots(&mut self, token: SlotToken, env: &QuiverEnv<'_>) {
        let player = env.player();
        for (ammo, slot) in token.slots.iter() {
            let Some(slot) = *slot else {
                continue;
            };
            if let Some(item) = player.item(slot) {
                *self.memory_mut().entry_mut(ammo) = item.to_desired_at(slot);
            }
        }
        self.memory_mut().request_redraw();
    }
}
