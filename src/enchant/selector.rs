//! Greedy maximum-enchantment selection
//!
//! Candidates are the eligible enchantments that are neither excluded nor
//! already on the item. They are visited once, highest preference rank
//! first (ties by enchantment key), and each is committed at its max level
//! unless it conflicts with something already committed. Existing
//! enchantments are never removed or re-leveled.

use crate::core::types::{EnchantmentSet, Level};
use crate::enchant::catalog::Enchantment;
use crate::rules::tables::EnchantmentTables;
use serde::Serialize;
use std::cmp::Reverse;

/// Result of one selection pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    /// Input enchantments plus everything added
    pub updated: EnchantmentSet,
    /// Newly added enchantments in the order they were committed
    pub added: Vec<(Enchantment, Level)>,
}

impl Selection {
    pub fn added_count(&self) -> usize {
        self.added.len()
    }

    pub fn is_unchanged(&self) -> bool {
        self.added.is_empty()
    }
}

/// Selects enchantments against a fixed set of tables
#[derive(Debug, Clone, Copy)]
pub struct EnchantmentSelector<'a> {
    tables: &'a EnchantmentTables,
}

impl<'a> EnchantmentSelector<'a> {
    pub fn new(tables: &'a EnchantmentTables) -> Self {
        Self { tables }
    }

    /// Candidates in the order the greedy pass visits them
    pub fn candidates<I>(&self, eligible: I, current: &EnchantmentSet) -> Vec<Enchantment>
    where
        I: IntoIterator<Item = Enchantment>,
    {
        let mut candidates: Vec<Enchantment> = eligible
            .into_iter()
            .filter(|e| !self.tables.is_excluded(*e) && !current.contains(*e))
            .collect();

        candidates.sort_unstable_by_key(|e| (Reverse(self.tables.rank(*e)), e.key()));
        // Duplicates share rank and key, so they are adjacent
        candidates.dedup();
        candidates
    }

    /// Add every non-conflicting eligible enchantment at its max level
    pub fn select<I>(&self, eligible: I, current: &EnchantmentSet) -> Selection
    where
        I: IntoIterator<Item = Enchantment>,
    {
        let mut updated = current.clone();
        let mut added = Vec::new();

        for candidate in self.candidates(eligible, current) {
            if self.tables.conflicts.conflicts_with_any(candidate, &updated) {
                tracing::trace!("Skipping {}: conflicts with an applied enchantment", candidate);
                continue;
            }
            let level = self.tables.max_level(candidate);
            updated.insert(candidate, level);
            added.push((candidate, level));
        }

        tracing::debug!(
            "Selected {} new enchantments ({} already present)",
            added.len(),
            current.len()
        );

        Selection { updated, added }
    }
}
