//! Item snapshots, weapon categories, and the reference player inventory.
mod category;
mod item;
mod pack;

pub use category::{AmmoType, CategoryTable};
pub use item::{
    Brand, FIRE_EXCLUDE_INSCRIPTION, FIRE_PREFER_INSCRIPTION, Item, ItemClass, ItemFlags,
    MissileKind, WeaponKind,
};
pub use pack::{MAX_WORN, Pack, PlayerState, index_to_letter, letter_to_index};
