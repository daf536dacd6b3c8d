//! # Billing-Cycle Benchmarks
//!
//! | Crate | Operation | Expectation |
//! |-------|-----------|-------------|
//! | bc-01 | `project` over 1..1200 cycles | linear in cycles |
//! | bc-02 | `seal` / `open` | dominated by PBKDF2 |

use std::time::Duration;

use bc_01_schedule_projector::ScheduleProjector;
use bc_02_envelope_codec::{EnvelopeCodec, SchedulePayload};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn origin() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 31).unwrap()
}

// ============================================================================
// BC-01: Schedule Projection
// ============================================================================

fn bench_projection(c: &mut Criterion) {
    let projector = ScheduleProjector::standard();
    let mut group = c.benchmark_group("bc-01-schedule-projector");

    group.bench_function("compute_cycle", |b| {
        b.iter(|| black_box(projector.compute_cycle(black_box(origin())).unwrap()))
    });

    for cycles in [1u32, 12, 120, 1200] {
        group.throughput(Throughput::Elements(u64::from(cycles) * 9));
        group.bench_with_input(BenchmarkId::new("project", cycles), &cycles, |b, &cycles| {
            b.iter(|| black_box(projector.project(origin(), cycles).unwrap()))
        });
    }

    group.finish();
}

// ============================================================================
// BC-02: Envelope Codec
// ============================================================================

fn bench_envelope(c: &mut Criterion) {
    let codec = EnvelopeCodec::default();
    let payload = SchedulePayload::from(
        ScheduleProjector::standard()
            .project_default(origin())
            .unwrap(),
    );
    let envelope = codec.seal_schedule(&payload, "bench").unwrap();

    let mut group = c.benchmark_group("bc-02-envelope-codec");
    group.sample_size(10);
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("seal_schedule", |b| {
        b.iter(|| black_box(codec.seal_schedule(&payload, "bench").unwrap()))
    });
    group.bench_function("open_schedule", |b| {
        b.iter(|| black_box(codec.open_schedule(&envelope, "bench").unwrap()))
    });

    group.finish();
}

criterion_group!(benches, bench_projection, bench_envelope);
criterion_main!(benches);
