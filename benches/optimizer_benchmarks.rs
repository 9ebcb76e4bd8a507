//! Performance benchmarks for the Leave Scheduling Engine.
//!
//! This benchmark suite tracks the cost of the optimization pipeline on a
//! full-year calendar:
//! - Candidate generation and pruning
//! - The full pipeline at several leave budgets
//! - Preset-driven planning including calendar construction
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

use holiday_optimizer::calendar::build_calendar;
use holiday_optimizer::config::{PlannerConfig, PresetLibrary};
use holiday_optimizer::models::Day;
use holiday_optimizer::optimizer::{OptimizeParams, generate_candidates, optimize, plan, prune_candidates};

use chrono::NaiveDate;

/// A full 2026 calendar with the German holiday set.
fn full_year_days(budget: usize) -> (Vec<Day>, PlannerConfig) {
    let library = PresetLibrary::builtin().expect("builtin presets");
    let mut config = library
        .get_preset("germany", Some(budget), None)
        .expect("germany preset");
    config.start_date = NaiveDate::from_ymd_opt(2026, 1, 1);
    let days = build_calendar(&config);
    (days, config)
}

fn bench_candidate_generation(c: &mut Criterion) {
    let (days, _) = full_year_days(19);

    c.bench_function("generate_candidates/full_year", |b| {
        b.iter(|| generate_candidates(black_box(&days), 4, 9))
    });

    let candidates = generate_candidates(&days, 4, 9);
    c.bench_function("prune_candidates/full_year", |b| {
        b.iter(|| prune_candidates(black_box(candidates.clone()), 19))
    });
}

fn bench_optimize_budgets(c: &mut Criterion) {
    let mut group = c.benchmark_group("optimize/full_year");
    for budget in [5usize, 15, 25] {
        let (days, _) = full_year_days(budget);
        group.bench_with_input(BenchmarkId::from_parameter(budget), &budget, |b, &budget| {
            b.iter(|| optimize(black_box(days.clone()), &OptimizeParams::new(budget)))
        });
    }
    group.finish();
}

fn bench_plan_from_preset(c: &mut Criterion) {
    let (_, config) = full_year_days(19);
    c.bench_function("plan/germany_2026", |b| b.iter(|| plan(black_box(&config))));
}

criterion_group!(
    benches,
    bench_candidate_generation,
    bench_optimize_budgets,
    bench_plan_from_preset
);
criterion_main!(benches);
