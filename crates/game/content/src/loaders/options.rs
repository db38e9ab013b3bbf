//! Quiver options loader.

use std::path::Path;

use quiver_core::{FireOrderPrefs, FireTypes, QuiverConfig, letter_to_index};

use crate::loaders::{LoadResult, read_file};

/// On-disk form of the quiver options.
///
/// ```toml
/// fire_order = ["launcher", "dart | stone", "inscribed"]
/// fire_items_start = "c"
/// ```
///
/// Omitted fields keep their defaults.
#[derive(Clone, Debug, Default, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
struct OptionsSpec {
    fire_order: Option<Vec<String>>,
    fire_items_start: Option<char>,
}

/// Loader for quiver options from TOML files.
pub struct OptionsLoader;

impl OptionsLoader {
    /// Load quiver options from a TOML file.
    pub fn load(path: &Path) -> LoadResult<QuiverConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse quiver options from TOML text.
    pub fn parse(content: &str) -> LoadResult<QuiverConfig> {
        let spec: OptionsSpec = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse quiver options TOML: {}", e))?;

        let mut config = QuiverConfig::default();

        if let Some(entries) = spec.fire_order {
            config.fire_order = parse_fire_order(&entries)?;
        }

        if let Some(letter) = spec.fire_items_start {
            config.fire_items_start = letter_to_index(letter).ok_or_else(|| {
                anyhow::anyhow!("fire_items_start must be an inventory letter, got '{}'", letter)
            })?;
        }

        Ok(config)
    }
}

fn parse_fire_order(entries: &[String]) -> LoadResult<FireOrderPrefs> {
    if entries.len() > QuiverConfig::MAX_FIRE_ORDER {
        return Err(anyhow::anyhow!(
            "fire_order has {} entries, at most {} are allowed",
            entries.len(),
            QuiverConfig::MAX_FIRE_ORDER
        ));
    }

    let mut order = FireOrderPrefs::new();
    for entry in entries {
        let types = parse_fire_types(entry)?;
        order.push(types);
    }
    Ok(order)
}

/// Parses one preference entry such as `"dart | stone"` or `"hand_axe"`.
fn parse_fire_types(entry: &str) -> LoadResult<FireTypes> {
    let normalized = entry.trim().to_ascii_uppercase().replace('-', "_");
    if normalized.is_empty() {
        return Err(anyhow::anyhow!("empty fire_order entry"));
    }
    bitflags::parser::from_str::<FireTypes>(&normalized)
        .map_err(|e| anyhow::anyhow!("Invalid fire_order entry '{}': {}", entry, e))
}
