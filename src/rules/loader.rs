//! Load enchantment tables from TOML files

use crate::core::error::{ConfigError, Result};
use crate::core::types::{Level, Rank};
use crate::enchant::catalog::Enchantment;
use crate::rules::tables::{
    ConflictGraph, EnchantmentTables, ExcludedSet, MaxLevels, PreferenceOrder,
};
use serde::Deserialize;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

/// Tables shipped with the plugin
const DEFAULT_TABLES: &str = include_str!("../../data/enchantments.toml");

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct TablesFile {
    excluded: Vec<String>,
    conflicts: Vec<ConflictGroupEntry>,
    conflict_map: BTreeMap<String, Vec<String>>,
    preferences: BTreeMap<String, Rank>,
    max_levels: BTreeMap<String, Level>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConflictGroupEntry {
    #[serde(default)]
    name: Option<String>,
    members: Vec<String>,
}

/// Load tables from a TOML file on disk
pub fn load_tables(path: &Path) -> Result<EnchantmentTables> {
    let content = fs::read_to_string(path)?;
    let tables = parse_tables(&content)?;
    tracing::info!("Loaded enchantment tables from {}", path.display());
    Ok(tables)
}

/// The built-in vanilla tables
pub fn default_tables() -> Result<EnchantmentTables> {
    parse_tables(DEFAULT_TABLES)
}

/// Parse and validate tables from TOML text
pub fn parse_tables(content: &str) -> Result<EnchantmentTables> {
    let file: TablesFile = toml::from_str(content)?;

    let excluded = file
        .excluded
        .iter()
        .map(|name| parse_enchantment("excluded", name))
        .collect::<std::result::Result<ExcludedSet, _>>()?;

    let mut conflicts = ConflictGraph::new();
    for (index, group) in file.conflicts.iter().enumerate() {
        let name = group
            .name
            .clone()
            .unwrap_or_else(|| format!("conflicts[{}]", index));
        let members = group
            .members
            .iter()
            .map(|m| parse_enchantment("conflicts", m))
            .collect::<std::result::Result<Vec<_>, _>>()?;
        conflicts.add_group(&name, &members)?;
    }

    if !file.conflict_map.is_empty() {
        let mut adjacency = Vec::with_capacity(file.conflict_map.len());
        for (from, targets) in parse_section("conflict_map", &file.conflict_map)? {
            let targets = targets
                .iter()
                .map(|t| parse_enchantment("conflict_map", t))
                .collect::<std::result::Result<Vec<_>, _>>()?;
            adjacency.push((from, targets));
        }
        conflicts.extend(&ConflictGraph::from_adjacency(adjacency)?);
    }

    let mut preferences = PreferenceOrder::new();
    for (enchantment, rank) in parse_section("preferences", &file.preferences)? {
        preferences.set(enchantment, *rank);
    }

    let mut max_levels = MaxLevels::new();
    for (enchantment, level) in parse_section("max_levels", &file.max_levels)? {
        max_levels.set(enchantment, *level)?;
    }

    tracing::debug!(
        "Parsed enchantment tables: {} conflict edges, {} ranked, {} excluded",
        conflicts.edge_count(),
        preferences.len(),
        excluded.iter().count()
    );

    Ok(EnchantmentTables::new()
        .with_conflicts(conflicts)
        .with_preferences(preferences)
        .with_excluded(excluded)
        .with_max_levels(max_levels))
}

/// Resolve the keys of a keyed section
///
/// Keys are matched leniently, so `mending` and `MENDING` are distinct TOML
/// keys naming one enchantment. Those are rejected rather than letting one
/// value win.
fn parse_section<'f, V>(
    section: &str,
    entries: &'f BTreeMap<String, V>,
) -> std::result::Result<Vec<(Enchantment, &'f V)>, ConfigError> {
    let mut seen = BTreeSet::new();
    let mut resolved = Vec::with_capacity(entries.len());
    for (name, value) in entries {
        let enchantment = parse_enchantment(section, name)?;
        if !seen.insert(enchantment) {
            return Err(ConfigError::DuplicateEntry {
                section: section.to_string(),
                name: enchantment.key().to_string(),
            });
        }
        resolved.push((enchantment, value));
    }
    Ok(resolved)
}

fn parse_enchantment(section: &str, name: &str) -> std::result::Result<Enchantment, ConfigError> {
    name.parse().map_err(|_| ConfigError::UnknownEnchantment {
        section: section.to_string(),
        name: name.to_string(),
    })
}
