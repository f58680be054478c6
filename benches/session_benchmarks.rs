use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use reptrack_core::config::ExerciseProfile;
use reptrack_core::counting::RepCounter;
use reptrack_core::session::SessionTracker;
use reptrack_core::utils::time::MockTimeProvider;
use std::sync::Arc;

const STREAM_LENGTHS: &[usize] = &[1_000, 10_000, 100_000];

/// Synthetic angle sweep crossing both hysteresis thresholds every cycle.
fn angle_stream(len: usize) -> Vec<f32> {
    (0..len)
        .map(|i| 115.0 + 60.0 * ((i as f32 * 0.2).sin()))
        .collect()
}

fn benchmark_rep_counter(c: &mut Criterion) {
    let mut group = c.benchmark_group("rep_counter");

    for &len in STREAM_LENGTHS {
        let angles = angle_stream(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(BenchmarkId::new("update", len), &angles, |b, angles| {
            b.iter(|| {
                let mut counter = RepCounter::new(65.0, 155.0).unwrap();
                for &angle in angles {
                    black_box(counter.update(black_box(angle)));
                }
                counter.rep_count()
            });
        });
    }

    group.finish();
}

fn benchmark_session_tracker(c: &mut Criterion) {
    let mut group = c.benchmark_group("session_tracker");

    for &len in STREAM_LENGTHS {
        let angles = angle_stream(len);
        group.throughput(Throughput::Elements(len as u64));
        group.bench_with_input(
            BenchmarkId::new("process_sample", len),
            &angles,
            |b, angles| {
                b.iter(|| {
                    let clock = Arc::new(MockTimeProvider::new(0));
                    let mut tracker =
                        SessionTracker::with_clock(ExerciseProfile::pullup(), clock.clone())
                            .unwrap();
                    let mut completed = 0u32;
                    for &angle in angles {
                        let outcome = tracker.process_sample(black_box(angle)).unwrap();
                        if outcome.completed_rep.is_some() {
                            completed += 1;
                        }
                        clock.advance_by(33_000_000); // ~30 fps
                    }
                    completed
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, benchmark_rep_counter, benchmark_session_tracker);
criterion_main!(benches);
