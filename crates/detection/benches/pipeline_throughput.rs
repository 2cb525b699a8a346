use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use detection::pipeline::{Pipeline, PipelineConfig};
use detection::types::RawOutput;

/// Build a `[1, 5, n]` channel-major buffer with `hits` confident boxes
/// scattered across the frame; the rest decode as zero-score candidates.
fn single_class_buffer(n: usize, hits: usize) -> Vec<f32> {
    let mut data = vec![0.0f32; 5 * n];
    for i in 0..hits {
        let offset = (i * 37) % n;
        data[offset] = 40.0 + (offset % 560) as f32; // cx
        data[n + offset] = 40.0 + (offset % 560) as f32; // cy
        data[2 * n + offset] = 60.0; // w
        data[3 * n + offset] = 60.0; // h
        data[4 * n + offset] = 0.9; // score
    }
    data
}

/// Full decode -> filter -> map -> NMS -> FOV run on a YOLO-sized output
fn benchmark_pipeline_run(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline_run");

    let scenarios = [
        (0, "no_detections"),
        (1, "single_detection"),
        (5, "few_detections"),
        (20, "many_detections"),
        (100, "crowded_scene"),
    ];

    let pipeline = Pipeline::with_tracing(PipelineConfig::default());
    let shape: [i64; 3] = [1, 5, 8400];

    for (hits, label) in scenarios {
        let data = single_class_buffer(8400, hits);

        group.bench_with_input(BenchmarkId::new("single_class_8400", label), label, |b, _| {
            b.iter(|| {
                let detections = pipeline.run(
                    RawOutput::new(black_box(&data), black_box(&shape)),
                    (400, 400),
                );
                black_box(detections);
            });
        });
    }

    group.finish();
}

/// Linear-layout decode path (100 boxes, stride 6)
fn benchmark_linear_layout(c: &mut Criterion) {
    let pipeline = Pipeline::with_tracing(PipelineConfig::default());
    let shape: [i64; 2] = [1, 600];

    let mut data = vec![0.0f32; 600];
    for i in 0..20 {
        let base = i * 6;
        data[base] = 0.1 + (i as f32) * 0.04;
        data[base + 1] = 0.5;
        data[base + 2] = 0.05;
        data[base + 3] = 0.05;
        data[base + 4] = 0.9;
        data[base + 5] = (i % 6) as f32;
    }

    c.bench_function("pipeline_run/linear_100", |b| {
        b.iter(|| {
            let detections = pipeline.run(
                RawOutput::new(black_box(&data), black_box(&shape)),
                (400, 400),
            );
            black_box(detections);
        });
    });
}

criterion_group!(benches, benchmark_pipeline_run, benchmark_linear_layout);
criterion_main!(benches);
