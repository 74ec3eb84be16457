use criterion::{black_box, criterion_group, criterion_main, Criterion};

use foscia_shared::falsy::{only_truthy, Truthiness};
use foscia_shared::identifiers::{IdentifiersKeeper, IdentifiersMap};

const KINDS: [&str; 4] = ["posts", "users", "comments", "tags"];

fn filled_keeper(per_kind: u64) -> IdentifiersKeeper<&'static str, u64, u64> {
    let mut keeper = IdentifiersKeeper::with_capacity(per_kind as usize);
    for kind in KINDS {
        for id in 0..per_kind {
            keeper.put(kind, id, id);
        }
    }
    keeper
}

fn keeper_put(c: &mut Criterion) {
    c.bench_function("keeper put 4x1000", |b| b.iter(|| filled_keeper(black_box(1000))));
}

fn keeper_find(c: &mut Criterion) {
    let keeper = filled_keeper(1000);
    c.bench_function("keeper find", |b| {
        b.iter(|| {
            let mut hits = 0;
            for kind in KINDS {
                for id in (0..1000).step_by(7) {
                    if keeper.find(black_box(&kind), black_box(&id)).is_some() {
                        hits += 1;
                    }
                }
            }
            hits
        })
    });
}

fn keeper_forget_all(c: &mut Criterion) {
    c.bench_function("keeper forget_all", |b| {
        b.iter_batched(
            || filled_keeper(1000),
            |mut keeper| {
                keeper.forget_all(&"posts");
                keeper
            },
            criterion::BatchSize::SmallInput,
        )
    });
}

fn truthy_filter(c: &mut Criterion) {
    let values: Vec<Option<i64>> = (0..10_000).map(|n| if n % 3 == 0 { None } else { Some(n % 5) }).collect();
    c.bench_function("only_truthy 10k", |b| {
        b.iter(|| only_truthy(black_box(&values)).count())
    });
    c.bench_function("is_falsy 10k", |b| {
        b.iter(|| values.iter().filter(|v| v.is_falsy()).count())
    });
}

criterion_group!(benches, keeper_put, keeper_find, keeper_forget_all, truthy_filter);
criterion_main!(benches);
