//! Benchmarks for notification hashing and argument serialization.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use neo_primitives::UInt160;
use neo_smart_contract::{BinarySerializer, NotifyEventArgs};
use neo_vm::{ExecutionEngineLimits, StackItem};

fn transfer_state() -> Vec<StackItem> {
    vec![
        StackItem::from_byte_string(vec![0x11u8; 20]),
        StackItem::from_byte_string(vec![0x22u8; 20]),
        StackItem::from_int(1_000_000_000i64),
    ]
}

/// Benchmark the notification hash for typical and limit-sized arguments
fn bench_notification_hash(c: &mut Criterion) {
    let mut group = c.benchmark_group("notification_hash");

    let transfer = NotifyEventArgs::new_with_optional_container(
        None,
        UInt160::zero(),
        "Transfer",
        transfer_state(),
    );
    group.bench_function("transfer", |b| {
        b.iter(|| black_box(transfer.get_notification_hash()))
    });

    for count in [8usize, 31, 32] {
        let args = NotifyEventArgs::new_with_optional_container(
            None,
            UInt160::zero(),
            "Batch",
            (0..count as i64).map(StackItem::from_int).collect(),
        );
        group.bench_with_input(BenchmarkId::new("ints", count), &args, |b, args| {
            b.iter(|| black_box(args.get_notification_hash()))
        });
    }

    group.finish();
}

/// Benchmark the serializer on a nested value
fn bench_serialize(c: &mut Criterion) {
    let limits = ExecutionEngineLimits::default();
    let item = StackItem::from_array(vec![
        StackItem::from_array(transfer_state()),
        StackItem::from_map(vec![(StackItem::from("amount"), StackItem::from_int(42))]),
    ]);

    c.bench_function("binary_serializer_nested", |b| {
        b.iter(|| black_box(BinarySerializer::serialize(&item, &limits).unwrap()))
    });
}

criterion_group!(benches, bench_notification_hash, bench_serialize);
criterion_main!(benches);
