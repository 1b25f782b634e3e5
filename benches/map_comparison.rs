use criterion::BatchSize;
use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

const SIZES: &[usize] = &[1_000, 100_000];

fn random_keys(count: usize) -> Vec<u64> {
    let mut rng = SmallRng::seed_from_u64(0x5EED_CAFE);
    (0..count).map(|_| rng.random()).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for &size in SIZES {
        let keys = random_keys(size);

        group.bench_function(format!("open_hash/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut map = open_hash::HashMap::new();
                    for key in keys {
                        map.insert(key, key);
                    }
                    map
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut map = std::collections::HashMap::new();
                    for key in keys {
                        map.insert(key, key);
                    }
                    map
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut map = hashbrown::HashMap::new();
                    for key in keys {
                        map.insert(key, key);
                    }
                    map
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for &size in SIZES {
        let keys = random_keys(size);

        let mut ours = open_hash::HashMap::new();
        let mut std_map = std::collections::HashMap::new();
        let mut brown = hashbrown::HashMap::new();
        for &key in &keys {
            ours.insert(key, key);
            std_map.insert(key, key);
            brown.insert(key, key);
        }

        group.bench_function(format!("open_hash/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for key in &keys {
                    if ours.get(key).is_some() {
                        hits += 1;
                    }
                }
                hits
            })
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for key in &keys {
                    if std_map.get(key).is_some() {
                        hits += 1;
                    }
                }
                hits
            })
        });

        group.bench_function(format!("hashbrown/{size}"), |b| {
            b.iter(|| {
                let mut hits = 0usize;
                for key in &keys {
                    if brown.get(key).is_some() {
                        hits += 1;
                    }
                }
                hits
            })
        });
    }
    group.finish();
}

fn bench_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("churn");
    for &size in SIZES {
        let keys = random_keys(size);

        // Insert-remove-reinsert cycles stress tombstone reclamation.
        group.bench_function(format!("open_hash/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut map = open_hash::HashMap::new();
                    for &key in &keys {
                        map.insert(key, key);
                    }
                    for &key in &keys {
                        map.remove(&key);
                    }
                    for &key in &keys {
                        map.insert(key, key);
                    }
                    map
                },
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("std/{size}"), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| {
                    let mut map = std::collections::HashMap::new();
                    for &key in &keys {
                        map.insert(key, key);
                    }
                    for &key in &keys {
                        map.remove(&key);
                    }
                    for &key in &keys {
                        map.insert(key, key);
                    }
                    map
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_lookup, bench_churn);
criterion_main!(benches);
