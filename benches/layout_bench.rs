// Benchmark for layout composition
// Measures one render pass over activity sets of increasing size

use chrono::{NaiveDate, NaiveTime};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use dailygrapher::models::activity::{Activity, ActivityMoment};
use dailygrapher::services::layout::{compose, LayoutOptions};

fn build_activities(count: usize) -> Vec<Activity> {
    let day = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    (0..count)
        .map(|i| {
            let start_minute = (i * 37 % (23 * 60)) as u32;
            let end_minute = start_minute + 45;
            let time = |minute: u32| NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap();
            Activity::new(
                format!("Activity {i}"),
                ActivityMoment::new(day, time(start_minute)),
                ActivityMoment::new(day, time(end_minute.min(23 * 60 + 59))),
            )
        })
        .collect()
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    let today = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
    let now = today.and_hms_opt(14, 20, 0).unwrap();

    for count in [10, 100, 1000].iter() {
        let activities = build_activities(*count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &activities, |b, activities| {
            b.iter(|| {
                compose(
                    black_box(activities),
                    black_box(now),
                    black_box(today),
                    LayoutOptions::default(),
                )
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compose);
criterion_main!(benches);
