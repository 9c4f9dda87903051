use chart_core::{Chart, ChartEvent, ChartOptions, Dataset, Record, Scene};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::time::Duration;

fn build_dataset(n: usize) -> Dataset {
    let records = (0..n)
        .map(|i| Record {
            label: format!("Player {i}"),
            year: 1990 + (i % 30) as i32,
            tc_total_war: (i as f64 * 0.37).sin() * 10.0 + 12.0,
            career_total_war: (i as f64 * 0.11).cos() * 20.0 + 25.0,
        })
        .collect();
    Dataset::new(records).expect("non-empty")
}

fn bench_toggle(c: &mut Criterion) {
    let mut group = c.benchmark_group("toggle_metric");
    for &n in &[100usize, 5_000usize] {
        group.bench_function(format!("records_{n}"), |b| {
            let opts = ChartOptions::default();
            let scene = Scene::new(opts.width, opts.height, opts.insets);
            let mut chart = Chart::new(build_dataset(n), opts, scene).expect("chart");
            let mut now = Duration::ZERO;
            b.iter(|| {
                now += Duration::from_millis(16);
                let token = chart.chosen().other().token();
                black_box(chart.handle_event(ChartEvent::click(token), now).expect("toggle"));
                black_box(chart.surface().frame(now));
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_toggle);
criterion_main!(benches);
