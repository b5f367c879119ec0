//! Performance benchmarks for the subscription manager.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use subscriptions::{
    render_header_list, HeadlessHost, ManagerConfig, MemoryStorage, Subreddit, SubscriptionList,
    SubscriptionManager,
};

fn names(count: usize) -> Vec<String> {
    (0..count).map(|i| format!("Subreddit{:04}", i)).collect()
}

/// Benchmark toggling with varying list sizes (each toggle writes through)
fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle");

    for size in [5, 50, 500] {
        group.bench_with_input(BenchmarkId::new("list_size", size), &size, |b, &size| {
            let manager = SubscriptionManager::new(
                ManagerConfig::default(),
                MemoryStorage::new(),
                HeadlessHost::new("/r/x").with_list_container(),
            )
            .unwrap();
            for name in names(size) {
                manager.toggle_subscription(&name).unwrap();
            }

            b.iter(|| {
                // Add then remove, leaving the list unchanged
                manager.toggle_subscription(black_box("middle")).unwrap();
                manager.toggle_subscription(black_box("middle")).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark decoding the persisted list and rendering the sidebar
fn bench_load_and_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_and_render");

    for size in [5, 50, 500] {
        let list = SubscriptionList::from_names(names(size).iter().map(|n| Subreddit::new(n)));
        let raw = list.encode().unwrap();

        group.bench_with_input(BenchmarkId::new("list_size", size), &raw, |b, raw| {
            b.iter(|| {
                let list = SubscriptionList::decode(black_box(raw)).unwrap();
                black_box(render_header_list(&list));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_toggle, bench_load_and_render);
criterion_main!(benches);
