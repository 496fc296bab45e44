use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sankey_arrow::flow::{Flow, FlowSpec};
use sankey_arrow::{LayoutConfig, Theme, compute_layout, render_svg};
use std::hint::black_box;

fn flow_spec(count: usize) -> FlowSpec {
    let flows = (0..count)
        .map(|i| Flow {
            size: 4.0 + (i % 7) as f32 * 3.0,
            fill: Some(format!("hsl({}, 60%, 55%)", (i * 37) % 360)),
            text: (i % 3 == 0).then(|| format!("flow {i}")),
        })
        .collect();
    FlowSpec {
        flows,
        ..FlowSpec::default()
    }
}

fn bench_renderer(c: &mut Criterion) {
    let config = LayoutConfig::default();
    let theme = Theme::modern();
    let mut group = c.benchmark_group("sankey_arrow");

    for count in [3usize, 32, 256] {
        let spec = flow_spec(count);
        group.bench_with_input(BenchmarkId::new("layout", count), &spec, |b, spec| {
            b.iter(|| compute_layout(black_box(spec), &config));
        });

        let layout = compute_layout(&spec, &config).expect("layout");
        group.bench_with_input(BenchmarkId::new("render", count), &layout, |b, layout| {
            b.iter(|| render_svg(black_box(layout), &theme));
        });

        group.bench_with_input(BenchmarkId::new("end_to_end", count), &spec, |b, spec| {
            b.iter(|| {
                let layout = compute_layout(black_box(spec), &config).expect("layout");
                render_svg(&layout, &theme)
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_renderer);
criterion_main!(benches);
