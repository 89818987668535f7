//! Enchantment tables loaded from TOML

pub mod tables;
mod loader;

pub use loader::{default_tables, load_tables, parse_tables};
pub use tables::{ConflictGraph, EnchantmentTables, ExcludedSet, MaxLevels, PreferenceOrder};
