//! Preprocessing benchmarks.
//!
//! Random feature models with a fixed share of core/dead features and
//! pairwise-style expression groups.
//!
//! Run with:
//! ```bash
//! cargo bench --bench preprocess
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;

use twise_rs::assignment::FixedAssignment;
use twise_rs::clause::Clause;
use twise_rs::expression::Expression;
use twise_rs::manager::{ManagerConfig, PresenceConditionManager};

// ============================================================================
// Helper: random input
// ============================================================================

fn random_lit(rng: &mut ChaCha8Rng, num_vars: u32) -> i32 {
    let v = rng.gen_range(1..=num_vars) as i32;
    if rng.gen_bool(0.5) {
        v
    } else {
        -v
    }
}

/// `num_groups` groups of `per_group` expressions with 1..=3 clauses each.
fn random_input(num_vars: u32, num_groups: usize, per_group: usize) -> (FixedAssignment, Vec<Vec<Expression>>) {
    let mut rng = ChaCha8Rng::seed_from_u64(42);

    // Roughly 10% of the features are core or dead.
    let fixed: Vec<i32> = (1..=num_vars as i32)
        .filter_map(|v| match rng.gen_range(0..20) {
            0 => Some(v),
            1 => Some(-v),
            _ => None,
        })
        .collect();

    let groups = (0..num_groups)
        .map(|_| {
            (0..per_group)
                .map(|_| {
                    let num_clauses = rng.gen_range(1..=3);
                    (0..num_clauses)
                        .map(|_| {
                            let size = rng.gen_range(1..=3);
                            Clause::new((0..size).map(|_| random_lit(&mut rng, num_vars)).collect::<Vec<_>>())
                        })
                        .collect()
                })
                .collect()
        })
        .collect();

    (FixedAssignment::new(num_vars, fixed), groups)
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_preprocess(c: &mut Criterion) {
    let mut group = c.benchmark_group("preprocess");

    for &num_vars in &[50u32, 200, 1000] {
        let (fixed, groups) = random_input(num_vars, 4, num_vars as usize);
        let expressions: usize = groups.iter().map(Vec::len).sum();
        group.throughput(Throughput::Elements(expressions as u64));

        group.bench_with_input(BenchmarkId::new("default", num_vars), &num_vars, |b, &n| {
            b.iter(|| PresenceConditionManager::new(n, black_box(&fixed), black_box(&groups)))
        });
    }

    group.finish();
}

fn bench_table_bits(c: &mut Criterion) {
    let mut group = c.benchmark_group("table_bits");
    let num_vars = 500;
    let (fixed, groups) = random_input(num_vars, 4, 2000);

    for &bits in &[0usize, 4, 8, 12, 16] {
        let config = ManagerConfig::default().with_table_bits(bits);
        group.bench_with_input(BenchmarkId::from_parameter(bits), &config, |b, config| {
            b.iter(|| PresenceConditionManager::with_config(num_vars, &fixed, &groups, config))
        });
    }

    group.finish();
}

fn bench_sorting(c: &mut Criterion) {
    let mut group = c.benchmark_group("sorting");
    let num_vars = 500;
    let (fixed, groups) = random_input(num_vars, 4, 2000);

    for sort_groups in [false, true] {
        let config = ManagerConfig::default().with_sort_groups(sort_groups);
        group.bench_with_input(BenchmarkId::from_parameter(sort_groups), &config, |b, config| {
            b.iter(|| PresenceConditionManager::with_config(num_vars, &fixed, &groups, config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_preprocess, bench_table_bits, bench_sorting);
criterion_main!(benches);
