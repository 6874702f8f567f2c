use cashrocket_core::*;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample");
    for mines in [1, 3, 12, MAX_MINES] {
        let mut sampler = RandomMineSampler::new(0x5EED);
        group.bench_function(format!("{mines}_mines"), |b| {
            b.iter(|| sampler.sample(black_box(mines)))
        });
    }
    group.finish();
}

fn bench_round(c: &mut Criterion) {
    c.bench_function("start_reveal_reset", |b| {
        let mut engine = RoundEngine::with_seed(1);
        let mut ledger = Ledger::new(Money::from_units(i64::MAX / 1000));
        b.iter(|| {
            engine.start(&mut ledger, Money::from_units(1), 3).ok();
            for index in 0..TOTAL_CELLS {
                if engine.reveal(black_box(index)) == Ok(RevealOutcome::HitMine) {
                    break;
                }
            }
            engine.reset();
        })
    });
}

fn bench_payout(c: &mut Criterion) {
    c.bench_function("payout_table", |b| {
        b.iter(|| {
            let mut total = Money::ZERO;
            for mines in MIN_MINES..=MAX_MINES {
                for opened in 0..(TOTAL_CELLS - mines) {
                    let m = multiplier(black_box(opened), black_box(mines));
                    total = total + potential_win(Money::from_units(100), m);
                }
            }
            total
        })
    });
}

criterion_group!(benches, bench_sampling, bench_round, bench_payout);
criterion_main!(benches);
