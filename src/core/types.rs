//! Core type definitions used throughout the codebase

use crate::enchant::catalog::Enchantment;
use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::BTreeMap;

/// Enchantment level (always >= 1 once applied)
pub type Level = u32;

/// Preference rank; higher wins among conflicting candidates
pub type Rank = i32;

/// The enchantments applied to one item, keyed by enchantment
///
/// Ordered so that iteration, display and serialization never depend on
/// hashing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EnchantmentSet(BTreeMap<Enchantment, Level>);

impl EnchantmentSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the level of an enchantment, returning the old level
    pub fn insert(&mut self, enchantment: Enchantment, level: Level) -> Option<Level> {
        self.0.insert(enchantment, level)
    }

    pub fn get(&self, enchantment: Enchantment) -> Option<Level> {
        self.0.get(&enchantment).copied()
    }

    pub fn contains(&self, enchantment: Enchantment) -> bool {
        self.0.contains_key(&enchantment)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Enchantment, Level)> + '_ {
        self.0.iter().map(|(e, l)| (*e, *l))
    }

    pub fn keys(&self) -> impl Iterator<Item = Enchantment> + '_ {
        self.0.keys().copied()
    }

    /// True if every entry of `other` is present here with the same level
    pub fn includes(&self, other: &EnchantmentSet) -> bool {
        other.iter().all(|(e, l)| self.get(e) == Some(l))
    }
}

impl FromIterator<(Enchantment, Level)> for EnchantmentSet {
    fn from_iter<I: IntoIterator<Item = (Enchantment, Level)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for EnchantmentSet {
    type Item = (Enchantment, Level);
    type IntoIter = btree_map::IntoIter<Enchantment, Level>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl std::fmt::Display for EnchantmentSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return write!(f, "(none)");
        }
        let mut first = true;
        for (enchantment, level) in self.iter() {
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{} {}", enchantment.display_name(), level)?;
            first = false;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_replaces_level() {
        let mut set = EnchantmentSet::new();
        assert_eq!(set.insert(Enchantment::Sharpness, 3), None);
        assert_eq!(set.insert(Enchantment::Sharpness, 5), Some(3));
        assert_eq!(set.get(Enchantment::Sharpness), Some(5));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_includes() {
        let small: EnchantmentSet = [(Enchantment::Unbreaking, 3)].into_iter().collect();
        let big: EnchantmentSet = [(Enchantment::Unbreaking, 3), (Enchantment::Mending, 1)]
            .into_iter()
            .collect();
        assert!(big.includes(&small));
        assert!(!small.includes(&big));

        let releveled: EnchantmentSet = [(Enchantment::Unbreaking, 1)].into_iter().collect();
        assert!(!big.includes(&releveled));
    }

    #[test]
    fn test_display_is_ordered() {
        let set: EnchantmentSet = [(Enchantment::Mending, 1), (Enchantment::Protection, 4)]
            .into_iter()
            .collect();
        assert_eq!(set.to_string(), "Protection 4, Mending 1");
        assert_eq!(EnchantmentSet::new().to_string(), "(none)");
    }

    #[test]
    fn test_serializes_as_map() {
        let set: EnchantmentSet = [(Enchantment::FireAspect, 2)].into_iter().collect();
        let json = serde_json::to_string(&set).unwrap();
        assert_eq!(json, r#"{"fire_aspect":2}"#);
        let back: EnchantmentSet = serde_json::from_str(&json).unwrap();
        assert_eq!(back, set);
    }
}
