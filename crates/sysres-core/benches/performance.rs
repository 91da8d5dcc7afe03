// Rust guideline compliant 2026-10-18

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::Value;
use sysres_core::{resolve_all, Inventory, NoopObserver};

fn build_inventory(count: usize) -> Inventory {
    let encode = |i: usize| {
        Value::String(format!(
            r#"{{"systemDisplayName":"system-{i}","systemKey":{{"systemName":"sys-{i:06}","userName":"bench"}}}}"#
        ))
    };
    let mut own: Vec<Value> = (0..count).map(encode).collect();
    // A sprinkling of truncated records forces the pattern fallback.
    for i in (0..count).step_by(50) {
        own[i] = Value::String(format!(r#"{{"systemDisplayName":"system-{i}","systemKey":{{"systemName":"sys-{i:06}""#));
    }
    let shared = (count..count * 2).map(encode).collect();
    Inventory { own, shared }
}

fn bench_resolve_shared_tail(c: &mut Criterion) {
    let inventory = build_inventory(1000);
    let targets = vec!["system-1999".to_string(), "system-0".to_string()];
    c.bench_function("resolve_2_of_2000", |b| {
        b.iter(|| black_box(resolve_all(&inventory, &targets, &mut NoopObserver)))
    });
}

fn bench_resolve_missing(c: &mut Criterion) {
    let inventory = build_inventory(1000);
    let targets = vec!["absent".to_string()];
    c.bench_function("resolve_missing_2000", |b| {
        b.iter(|| black_box(resolve_all(&inventory, &targets, &mut NoopObserver)))
    });
}

criterion_group!(benches, bench_resolve_shared_tail, bench_resolve_missing);
criterion_main!(benches);
