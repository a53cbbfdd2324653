use callout_rs_renderer::callout::path::build_path;
use callout_rs_renderer::render::path_data;
use callout_rs_renderer::{
    CalloutContent, CalloutStyle, ConcretePosition, LeaderPosition, Point, Size, Viewport,
    compute_callout,
};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const VIEWPORT: Viewport = Viewport::new(1280.0, 800.0);

fn anchor_grid(step: f32) -> Vec<Point> {
    let mut anchors = Vec::new();
    let mut y = 0.0;
    while y <= VIEWPORT.height {
        let mut x = 0.0;
        while x <= VIEWPORT.width {
            anchors.push(Point::new(x, y));
            x += step;
        }
        y += step;
    }
    anchors
}

fn bench_placement(c: &mut Criterion) {
    let style = CalloutStyle::standard();
    let content = CalloutContent::new("Pump station 7", "Pressure 4.1 bar").with_natural_size(180.0, 48.0);
    let mut group = c.benchmark_group("placement");
    for step in [160.0_f32, 40.0] {
        let anchors = anchor_grid(step);
        group.bench_with_input(
            BenchmarkId::new("automatic_grid", anchors.len()),
            &anchors,
            |b, anchors| {
                b.iter(|| {
                    for anchor in anchors {
                        let geometry = compute_callout(
                            black_box(*anchor),
                            VIEWPORT,
                            &content,
                            &style,
                            LeaderPosition::Automatic,
                        );
                        black_box(geometry);
                    }
                })
            },
        );
    }
    group.finish();
}

fn bench_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("path");
    for position in ConcretePosition::ALL {
        group.bench_function(BenchmarkId::new("build_and_serialize", position.as_str()), |b| {
            b.iter(|| {
                let path = build_path(black_box(Size::new(240.0, 120.0)), 10.0, 30.0, 15.0, position);
                black_box(path_data(&path))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_placement, bench_path);
criterion_main!(benches);
