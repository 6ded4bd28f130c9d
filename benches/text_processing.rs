//! End-to-end text processing benchmarks
//!
//! Measures a full page job: font registration, resolution, glyph mapping
//! and run construction.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use formfont::{ProcessorConfig, TextJob};
use serde_json::json;
use std::hint::black_box;

/// A page job with `count` fragments spread over three fonts.
fn page_job(count: usize) -> TextJob {
    let fragments: Vec<_> = (0..count)
        .map(|i| {
            json!({
                "font": i % 3,
                "x": (i % 40) as f32 * 12.0,
                "y": (i / 40) as f32 * 14.0,
                "text": if i % 3 == 2 { "v" } else { "Invoice total" },
                "maxWidth": 120,
                "fontSize": 8 + (i % 6) as i32
            })
        })
        .collect();

    let job = json!({
        "fonts": [
            { "name": "BCDFEE+Arial-BoldMT", "fallbackName": "Arial" },
            { "name": "GHIJKL+TimesNewRoman", "isSerifFont": true },
            { "name": "KLMNOP+ZapfDingbats", "isSymbolicFont": true }
        ],
        "fragments": fragments
    });
    serde_json::from_value(job).expect("benchmark job is valid")
}

fn bench_page_jobs(c: &mut Criterion) {
    let mut group = c.benchmark_group("page_job");
    let config = ProcessorConfig::default();

    for count in [100usize, 1_000, 10_000] {
        let job = page_job(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &job, |b, job| {
            b.iter(|| black_box(job.run(&config).expect("job runs")))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_page_jobs);
criterion_main!(benches);
