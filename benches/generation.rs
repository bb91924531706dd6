//! Benchmarks for the sample generation hot path
//!
//! Run with: cargo bench --bench generation

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use chimes::effects::{chord, Note};
use chimes::generators::{chime, chime_into, tone};
use chimes::pcm;

fn bench_tone(c: &mut Criterion) {
    let mut group = c.benchmark_group("tone");

    for duration_ms in [60, 180, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(duration_ms),
            duration_ms,
            |b, &duration_ms| {
                b.iter(|| black_box(tone(880, duration_ms, 0.9).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_chime(c: &mut Criterion) {
    let mut group = c.benchmark_group("chime");

    for duration_ms in [60, 180, 1000].iter() {
        group.bench_with_input(
            BenchmarkId::from_parameter(duration_ms),
            duration_ms,
            |b, &duration_ms| {
                b.iter(|| black_box(chime(880, duration_ms, 0.9).unwrap()));
            },
        );
    }

    group.finish();
}

fn bench_overlay_into_reused_buffer(c: &mut Criterion) {
    // Regeneration into a caller-held buffer, the no-allocation path
    let mut buf = vec![0u8; pcm::buffer_len(600)];

    c.bench_function("chime_into_overlay_600ms", |b| {
        b.iter(|| {
            chime_into(black_box(880), 600, 0.5, &mut buf, 0, true).unwrap();
        });
    });
}

fn bench_chord_composition(c: &mut Criterion) {
    c.bench_function("chord_three_notes_600ms", |b| {
        b.iter(|| {
            black_box(
                chord(&[
                    Note::new(880, 600, 0.3),
                    Note::new(330, 600, 0.3),
                    Note::new(262, 600, 0.3),
                ])
                .unwrap(),
            )
        });
    });
}

criterion_group!(
    benches,
    bench_tone,
    bench_chime,
    bench_overlay_into_reused_buffer,
    bench_chord_composition
);
criterion_main!(benches);
