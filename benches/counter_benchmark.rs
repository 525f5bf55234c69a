//! Benchmarks for layout passes, touches and rendering
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use segmented_counter::widgets::SegmentedCounterWidget;
use segmented_counter::{Point, SegmentedCounter, Size};

/// Benchmark a full layout pass triggered by a bounds change
fn bench_layout(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout_pass");

    for count in [2, 5, 10, 50].iter() {
        let mut counter =
            SegmentedCounter::with_segment_count(Size::new(200.0, 3.0), *count).unwrap();
        let mut wide = false;

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| {
                wide = !wide;
                let width = if wide { 240.0 } else { 200.0 };
                counter.set_bounds(black_box(Size::new(width, 3.0))).unwrap();
            });
        });
    }

    group.finish();
}

/// Benchmark hit testing plus the fill algorithm
fn bench_pointer_down(c: &mut Criterion) {
    let mut counter = SegmentedCounter::with_segment_count(Size::new(200.0, 3.0), 10).unwrap();

    c.bench_function("pointer_down_sweep", |b| {
        b.iter(|| {
            for x in (0..200).step_by(7) {
                black_box(counter.handle_pointer_down(Point::new(x as f64 + 0.5, 1.5)));
            }
        });
    });
}

/// Benchmark rendering a counter into a buffer
fn bench_render(c: &mut Criterion) {
    let area = Rect::new(0, 0, 200, 3);
    let mut counter = SegmentedCounter::with_segment_count(Size::new(200.0, 3.0), 10).unwrap();
    counter.set_current_value(6).unwrap();

    c.bench_function("render_ten_segments", |b| {
        b.iter(|| {
            let mut buf = Buffer::empty(area);
            SegmentedCounterWidget::new(&counter).render(area, &mut buf);
            black_box(buf)
        });
    });
}

criterion_group!(benches, bench_layout, bench_pointer_down, bench_render);

criterion_main!(benches);
