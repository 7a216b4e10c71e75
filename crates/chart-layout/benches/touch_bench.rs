use chart_layout::{resolve, ChartData, ChartStyle, Frame, GroupedDataSets, Point, SingleDataSet, Size, StackedDataSets};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_values(n: usize, phase: f64) -> Vec<f64> {
    (0..n).map(|i| (i as f64 * 0.37 + phase).cos().abs() * 50.0 + 1.0).collect()
}

/// Pointer positions sweeping the chart diagonally.
fn sweep(size: Size, steps: usize) -> Vec<Point> {
    (0..steps)
        .map(|i| {
            let t = i as f64 / steps as f64;
            Point::new(size.width * t, size.height * (1.0 - t))
        })
        .collect()
}

fn bench_touch(c: &mut Criterion) {
    let size = Size::new(1280.0, 720.0);
    let style = ChartStyle { group_spacing: 12.0, ..ChartStyle::default() };
    let pointers = sweep(size, 512);
    let mut group = c.benchmark_group("resolve");
    for &n in &[16usize, 256usize, 4_096usize] {
        let bar = ChartData::Bar(SingleDataSet::from_values(&gen_values(n, 0.0), "bar"));
        let grouped = ChartData::GroupedBar(GroupedDataSets::new(
            (0..n / 4).map(|g| SingleDataSet::from_values(&gen_values(4, g as f64), format!("g{g}"))).collect(),
        ));
        let stacked = ChartData::StackedBar(StackedDataSets::new(
            (0..n / 8).map(|s| SingleDataSet::from_values(&gen_values(8, s as f64), format!("s{s}"))).collect(),
        ));
        for (name, data) in [("bar", &bar), ("grouped", &grouped), ("stacked", &stacked)] {
            let frame = Frame::for_chart(data, &style, size);
            group.bench_with_input(BenchmarkId::new(name, n), data, |b, d| {
                b.iter(|| {
                    for &p in &pointers {
                        let _ = black_box(resolve(p, d, &style, &frame));
                    }
                });
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_touch);
criterion_main!(benches);
