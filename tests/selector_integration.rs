//! Integration tests for enchantment selection against the shipped tables

use max_enchant::enchant::{Enchantment, EnchantmentSelector, ItemKind};
use max_enchant::rules::{default_tables, EnchantmentTables};
use max_enchant::EnchantmentSet;
use proptest::prelude::*;

fn tables() -> EnchantmentTables {
    default_tables().expect("shipped tables are valid")
}

fn set(entries: &[(Enchantment, u32)]) -> EnchantmentSet {
    entries.iter().copied().collect()
}

/// Protection wins the protection group (rank 100)
#[test]
fn test_protection_group_prefers_protection() {
    let tables = tables();
    let selection = EnchantmentSelector::new(&tables).select(
        [
            Enchantment::Protection,
            Enchantment::FireProtection,
            Enchantment::BlastProtection,
            Enchantment::ProjectileProtection,
        ],
        &EnchantmentSet::new(),
    );

    assert_eq!(selection.updated, set(&[(Enchantment::Protection, 4)]));
    assert_eq!(selection.added_count(), 1);
}

/// Mending (90) beats Infinity (70)
#[test]
fn test_mending_beats_infinity() {
    let tables = tables();
    let selection = EnchantmentSelector::new(&tables).select(
        [Enchantment::Infinity, Enchantment::Mending],
        &EnchantmentSet::new(),
    );

    assert_eq!(selection.updated, set(&[(Enchantment::Mending, 1)]));
    assert_eq!(selection.added_count(), 1);
}

/// Existing enchantments are never re-leveled
#[test]
fn test_existing_sharpness_untouched() {
    let tables = tables();
    let current = set(&[(Enchantment::Sharpness, 3)]);
    let selection = EnchantmentSelector::new(&tables).select([Enchantment::Sharpness], &current);

    assert_eq!(selection.updated, current);
    assert_eq!(selection.added_count(), 0);
}

/// Curses are never handed out
#[test]
fn test_binding_curse_excluded() {
    let tables = tables();
    let selection = EnchantmentSelector::new(&tables)
        .select([Enchantment::BindingCurse], &EnchantmentSet::new());

    assert!(selection.updated.is_empty());
    assert_eq!(selection.added_count(), 0);
}

/// Riptide conflicts with both Loyalty and Channeling
#[test]
fn test_trident_gets_loyalty_and_channeling() {
    let tables = tables();
    let selection = EnchantmentSelector::new(&tables)
        .select(ItemKind::Trident.eligible(), &EnchantmentSet::new());

    let updated = &selection.updated;
    assert_eq!(updated.get(Enchantment::Loyalty), Some(3));
    assert_eq!(updated.get(Enchantment::Channeling), Some(1));
    assert_eq!(updated.get(Enchantment::Impaling), Some(5));
    assert!(!updated.contains(Enchantment::Riptide));
}

/// Pre-existing Riptide keeps Channeling off too
#[test]
fn test_existing_riptide_blocks_channeling() {
    let tables = tables();
    let current = set(&[(Enchantment::Riptide, 1)]);
    let selection =
        EnchantmentSelector::new(&tables).select(ItemKind::Trident.eligible(), &current);

    assert_eq!(selection.updated.get(Enchantment::Riptide), Some(1));
    assert!(!selection.updated.contains(Enchantment::Loyalty));
    assert!(!selection.updated.contains(Enchantment::Channeling));
}

/// A full netherite sword
#[test]
fn test_sword_full_kit() {
    let tables = tables();
    let selection = EnchantmentSelector::new(&tables)
        .select(ItemKind::Sword.eligible(), &EnchantmentSet::new());

    let expected = set(&[
        (Enchantment::Sharpness, 5),
        (Enchantment::Knockback, 2),
        (Enchantment::FireAspect, 2),
        (Enchantment::Looting, 3),
        (Enchantment::SweepingEdge, 3),
        (Enchantment::Unbreaking, 3),
        (Enchantment::Mending, 1),
    ]);
    assert_eq!(selection.updated, expected);
    // Ranked enchantments are committed first
    assert_eq!(selection.added[0], (Enchantment::Sharpness, 5));
}

/// Pickaxe takes Fortune over Silk Touch
#[test]
fn test_pickaxe_prefers_fortune() {
    let tables = tables();
    let selection = EnchantmentSelector::new(&tables)
        .select(ItemKind::Pickaxe.eligible(), &EnchantmentSet::new());

    assert_eq!(selection.updated.get(Enchantment::Fortune), Some(3));
    assert!(!selection.updated.contains(Enchantment::SilkTouch));
    assert_eq!(selection.updated.get(Enchantment::Efficiency), Some(5));
}

/// Crossbow takes Multishot over Piercing
#[test]
fn test_crossbow_prefers_multishot() {
    let tables = tables();
    let selection = EnchantmentSelector::new(&tables)
        .select(ItemKind::Crossbow.eligible(), &EnchantmentSet::new());

    assert!(selection.updated.contains(Enchantment::Multishot));
    assert!(!selection.updated.contains(Enchantment::Piercing));
    assert_eq!(selection.updated.get(Enchantment::QuickCharge), Some(3));
}

/// Shared tables can be used from several threads at once
#[test]
fn test_concurrent_selection() {
    let tables = tables();
    let expected = EnchantmentSelector::new(&tables)
        .select(ItemKind::Boots.eligible(), &EnchantmentSet::new());

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                scope.spawn(|| {
                    EnchantmentSelector::new(&tables)
                        .select(ItemKind::Boots.eligible(), &EnchantmentSet::new())
                })
            })
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

fn universe_strategy() -> impl Strategy<Value = Vec<Enchantment>> {
    proptest::sample::subsequence(Enchantment::ALL.to_vec(), 0..=Enchantment::ALL.len())
        .prop_shuffle()
}

fn current_strategy() -> impl Strategy<Value = EnchantmentSet> {
    proptest::collection::btree_map(
        proptest::sample::select(Enchantment::ALL.to_vec()),
        1..=5u32,
        0..6,
    )
    .prop_map(|map| map.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_idempotent(universe in universe_strategy(), current in current_strategy()) {
        let tables = tables();
        let selector = EnchantmentSelector::new(&tables);
        let first = selector.select(universe.clone(), &current);
        let second = selector.select(universe, &first.updated);

        prop_assert_eq!(&second.updated, &first.updated);
        prop_assert_eq!(second.added_count(), 0);
    }

    #[test]
    fn prop_superset_and_count(universe in universe_strategy(), current in current_strategy()) {
        let tables = tables();
        let selection = EnchantmentSelector::new(&tables).select(universe, &current);

        prop_assert!(selection.updated.includes(&current));
        prop_assert_eq!(selection.added_count(), selection.updated.len() - current.len());
    }

    #[test]
    fn prop_added_are_eligible_and_maxed(
        universe in universe_strategy(),
        current in current_strategy(),
    ) {
        let tables = tables();
        let selection = EnchantmentSelector::new(&tables).select(universe.clone(), &current);

        for (enchantment, level) in &selection.added {
            prop_assert!(universe.contains(enchantment));
            prop_assert!(!tables.is_excluded(*enchantment));
            prop_assert!(!current.contains(*enchantment));
            prop_assert_eq!(*level, tables.max_level(*enchantment));
        }
    }

    #[test]
    fn prop_no_new_conflicts(universe in universe_strategy(), current in current_strategy()) {
        let tables = tables();
        let selection = EnchantmentSelector::new(&tables).select(universe, &current);

        for (a, _) in selection.updated.iter() {
            for (b, _) in selection.updated.iter() {
                if tables.conflicts.conflicts(a, b) {
                    prop_assert!(current.contains(a) || current.contains(b));
                }
            }
        }
    }

    #[test]
    fn prop_order_independent(universe in universe_strategy(), current in current_strategy()) {
        let tables = tables();
        let selector = EnchantmentSelector::new(&tables);
        let mut reversed = universe.clone();
        reversed.reverse();

        let a = selector.select(universe, &current);
        let b = selector.select(reversed, &current);
        prop_assert_eq!(a, b);
    }
}
