//! Starting pack loader.

use std::path::Path;

use quiver_core::{BodySize, Item, Pack, PlayerState, index_to_letter, letter_to_index};

use crate::loaders::{LoadResult, read_file};

/// One pack entry: an inventory letter and the item it holds.
#[derive(Clone, Debug, serde::Deserialize)]
pub struct SlotSpec {
    pub slot: char,
    pub item: Item,
}

/// On-disk form of a player's starting inventory.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default)]
pub struct PackSpec {
    pub items: Vec<SlotSpec>,
    /// Letter of the wielded weapon.
    pub wielded: Option<char>,
    /// Letters of worn items.
    pub worn: Vec<char>,
    pub body_size: BodySize,
}

impl PackSpec {
    /// Places every item and resolves equipment letters.
    pub fn build(self) -> LoadResult<PlayerState> {
        let mut pack = Pack::new();
        for SlotSpec { slot, item } in self.items {
            let index = slot_index(slot)?;
            if !item.is_valid() {
                return Err(anyhow::anyhow!("Slot '{}' holds an empty item", slot));
            }
            if pack.get(index).is_some() {
                return Err(anyhow::anyhow!("Slot '{}' is assigned twice", slot));
            }
            pack.insert(index, item);
        }

        let mut player = PlayerState::new(pack).with_body_size(self.body_size);

        if let Some(letter) = self.wielded {
            let index = occupied_slot(&player.pack, letter)?;
            player = player.with_wielded(index);
        }

        for letter in self.worn {
            let index = occupied_slot(&player.pack, letter)?;
            player.worn.try_push(index).map_err(|_| {
                anyhow::anyhow!("Too many worn items (at most {})", player.worn.capacity())
            })?;
        }

        Ok(player)
    }
}

fn slot_index(letter: char) -> LoadResult<usize> {
    letter_to_index(letter)
        .ok_or_else(|| anyhow::anyhow!("'{}' is not an inventory letter", letter))
}

fn occupied_slot(pack: &Pack, letter: char) -> LoadResult<usize> {
    let index = slot_index(letter)?;
    pack.get(index)
        .map(|_| index)
        .ok_or_else(|| anyhow::anyhow!("Equipped slot '{}' is empty", index_to_letter(index)))
}

/// Loader for starting packs from RON files.
pub struct PackLoader;

impl PackLoader {
    /// Load a starting pack from a RON file.
    pub fn load(path: &Path) -> LoadResult<PlayerState> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse a starting pack from RON text.
    pub fn parse(content: &str) -> LoadResult<PlayerState> {
        let spec: PackSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse pack RON: {}", e))?;
        spec.build()
    }
}
