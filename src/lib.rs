//! MaxEnchant - applies every compatible enchantment at its maximum level

pub mod command;
pub mod core;
pub mod enchant;
pub mod plugin;
pub mod rules;

pub use crate::core::types::{EnchantmentSet, Level, Rank};
pub use crate::enchant::{Enchantment, EnchantmentSelector, Selection};
pub use crate::plugin::MaxEnchantPlugin;
pub use crate::rules::EnchantmentTables;
