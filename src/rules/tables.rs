//! Static enchantment tables: conflicts, preferences, exclusions, max levels
//!
//! Built once and never mutated afterwards. Construction is where integrity
//! is checked; lookups never fail.

use crate::core::error::ConfigError;
use crate::core::types::{EnchantmentSet, Level, Rank};
use crate::enchant::catalog::Enchantment;
use ahash::AHashMap;
use std::collections::BTreeSet;

/// Undirected conflict relation between enchantments
///
/// Every edge is stored in both directions.
#[derive(Debug, Clone, Default)]
pub struct ConflictGraph {
    edges: AHashMap<Enchantment, BTreeSet<Enchantment>>,
}

impl ConflictGraph {
    pub fn new() -> Self {
        Self::default()
    }

    fn link(&mut self, a: Enchantment, b: Enchantment) {
        self.edges.entry(a).or_default().insert(b);
        self.edges.entry(b).or_default().insert(a);
    }

    /// Make every member of `group` conflict with every other member
    pub fn add_group(&mut self, name: &str, group: &[Enchantment]) -> Result<(), ConfigError> {
        let members: BTreeSet<Enchantment> = group.iter().copied().collect();
        if members.len() < 2 {
            return Err(ConfigError::DegenerateGroup {
                group: name.to_string(),
            });
        }
        for &a in &members {
            for &b in members.range((std::ops::Bound::Excluded(a), std::ops::Bound::Unbounded)) {
                self.link(a, b);
            }
        }
        Ok(())
    }

    /// Build from named mutually exclusive groups
    pub fn from_groups<'a, I>(groups: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a [Enchantment])>,
    {
        let mut graph = Self::new();
        for (name, members) in groups {
            graph.add_group(name, members)?;
        }
        Ok(graph)
    }

    /// Build from explicit per-enchantment conflict lists
    ///
    /// Each listed edge must be listed in the other direction too.
    pub fn from_adjacency<I, C>(adjacency: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (Enchantment, C)>,
        C: IntoIterator<Item = Enchantment>,
    {
        let mut listed: AHashMap<Enchantment, BTreeSet<Enchantment>> = AHashMap::new();
        for (from, conflicts) in adjacency {
            let entry = listed.entry(from).or_default();
            for to in conflicts {
                if to == from {
                    return Err(ConfigError::SelfConflict(from.key().to_string()));
                }
                entry.insert(to);
            }
        }

        // Check in catalog order so the reported edge is stable
        let mut graph = Self::new();
        for from in Enchantment::ALL {
            let Some(conflicts) = listed.get(&from) else {
                continue;
            };
            for &to in conflicts {
                let mirrored = listed.get(&to).is_some_and(|back| back.contains(&from));
                if !mirrored {
                    return Err(ConfigError::AsymmetricConflict {
                        from: from.key().to_string(),
                        to: to.key().to_string(),
                    });
                }
                graph.link(from, to);
            }
        }
        Ok(graph)
    }

    /// Merge another graph's edges into this one
    pub fn extend(&mut self, other: &ConflictGraph) {
        for (&a, conflicts) in &other.edges {
            for &b in conflicts {
                self.link(a, b);
            }
        }
    }

    pub fn conflicts(&self, a: Enchantment, b: Enchantment) -> bool {
        self.edges.get(&a).is_some_and(|set| set.contains(&b))
    }

    /// Enchantments conflicting with `enchantment`, in catalog order
    pub fn conflicts_of(&self, enchantment: Enchantment) -> impl Iterator<Item = Enchantment> + '_ {
        self.edges
            .get(&enchantment)
            .into_iter()
            .flat_map(|set| set.iter().copied())
    }

    /// First enchantment in `applied` that conflicts with `enchantment`
    fn first_conflict_in(
        &self,
        enchantment: Enchantment,
        applied: &EnchantmentSet,
    ) -> Option<Enchantment> {
        self.conflicts_of(enchantment).find(|other| applied.contains(*other))
    }

    pub fn conflicts_with_any(&self, enchantment: Enchantment, applied: &EnchantmentSet) -> bool {
        self.first_conflict_in(enchantment, applied).is_some()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum::<usize>() / 2
    }
}

/// Preference ranks; unlisted enchantments rank 0
#[derive(Debug, Clone, Default)]
pub struct PreferenceOrder {
    ranks: AHashMap<Enchantment, Rank>,
}

impl PreferenceOrder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, enchantment: Enchantment, rank: Rank) {
        self.ranks.insert(enchantment, rank);
    }

    pub fn rank(&self, enchantment: Enchantment) -> Rank {
        self.ranks.get(&enchantment).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.ranks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranks.is_empty()
    }
}

impl FromIterator<(Enchantment, Rank)> for PreferenceOrder {
    fn from_iter<I: IntoIterator<Item = (Enchantment, Rank)>>(iter: I) -> Self {
        Self {
            ranks: iter.into_iter().collect(),
        }
    }
}

/// Enchantments that are never handed out (curses)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludedSet(BTreeSet<Enchantment>);

impl ExcludedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, enchantment: Enchantment) -> bool {
        self.0.contains(&enchantment)
    }

    pub fn iter(&self) -> impl Iterator<Item = Enchantment> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Enchantment> for ExcludedSet {
    fn from_iter<I: IntoIterator<Item = Enchantment>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Level granted to a newly added enchantment
///
/// The vanilla max unless overridden. Still a pure function of the
/// enchantment once built.
#[derive(Debug, Clone, Default)]
pub struct MaxLevels {
    overrides: AHashMap<Enchantment, Level>,
}

impl MaxLevels {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, enchantment: Enchantment, level: Level) -> Result<(), ConfigError> {
        if level == 0 {
            return Err(ConfigError::ZeroMaxLevel(enchantment.key().to_string()));
        }
        self.overrides.insert(enchantment, level);
        Ok(())
    }

    pub fn get(&self, enchantment: Enchantment) -> Level {
        self.overrides
            .get(&enchantment)
            .copied()
            .unwrap_or_else(|| enchantment.max_level())
    }
}

/// All tables the selector consults, bundled
#[derive(Debug, Clone, Default)]
pub struct EnchantmentTables {
    pub conflicts: ConflictGraph,
    pub preferences: PreferenceOrder,
    pub excluded: ExcludedSet,
    pub max_levels: MaxLevels,
}

impl EnchantmentTables {
    /// Empty tables: nothing conflicts, nothing excluded, vanilla levels
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: replace the conflict graph
    pub fn with_conflicts(mut self, conflicts: ConflictGraph) -> Self {
        self.conflicts = conflicts;
        self
    }

    /// Builder: replace the preference ranks
    pub fn with_preferences(mut self, preferences: PreferenceOrder) -> Self {
        self.preferences = preferences;
        self
    }

    /// Builder: replace the excluded set
    pub fn with_excluded(mut self, excluded: ExcludedSet) -> Self {
        self.excluded = excluded;
        self
    }

    /// Builder: replace the max level overrides
    pub fn with_max_levels(mut self, max_levels: MaxLevels) -> Self {
        self.max_levels = max_levels;
        self
    }

    pub fn rank(&self, enchantment: Enchantment) -> Rank {
        self.preferences.rank(enchantment)
    }

    pub fn is_excluded(&self, enchantment: Enchantment) -> bool {
        self.excluded.contains(enchantment)
    }

    pub fn max_level(&self, enchantment: Enchantment) -> Level {
        self.max_levels.get(enchantment)
    }
}
