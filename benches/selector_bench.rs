//! Benchmarks for enchantment selection.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use max_enchant::enchant::{Enchantment, EnchantmentSelector, ItemKind};
use max_enchant::rules::default_tables;
use max_enchant::EnchantmentSet;

/// Worst case universe: an enchanted book accepts every enchantment.
fn bench_select_full_universe(c: &mut Criterion) {
    let tables = default_tables().expect("shipped tables are valid");
    let selector = EnchantmentSelector::new(&tables);
    let universe = ItemKind::Book.eligible();

    c.bench_function("select_full_universe", |b| {
        b.iter(|| {
            selector.select(
                black_box(universe.iter().copied()),
                black_box(&EnchantmentSet::new()),
            )
        });
    });
}

/// Typical call: a sword that already carries a couple of enchantments.
fn bench_select_sword(c: &mut Criterion) {
    let tables = default_tables().expect("shipped tables are valid");
    let selector = EnchantmentSelector::new(&tables);
    let universe = ItemKind::Sword.eligible();
    let current: EnchantmentSet = [(Enchantment::Smite, 3), (Enchantment::Unbreaking, 1)]
        .into_iter()
        .collect();

    c.bench_function("select_sword", |b| {
        b.iter(|| selector.select(black_box(universe.iter().copied()), black_box(&current)));
    });
}

/// Table parsing and validation, paid once at enable.
fn bench_load_default_tables(c: &mut Criterion) {
    c.bench_function("load_default_tables", |b| {
        b.iter(|| default_tables().expect("shipped tables are valid"));
    });
}

criterion_group!(
    benches,
    bench_select_full_universe,
    bench_select_sword,
    bench_load_default_tables
);
criterion_main!(benches);
