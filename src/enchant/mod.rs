//! Enchantments, item applicability and the selection algorithm

pub mod catalog;
pub mod item;
pub mod selector;

pub use catalog::Enchantment;
pub use item::{ItemKind, VanillaItem};
pub use selector::{EnchantmentSelector, Selection};
