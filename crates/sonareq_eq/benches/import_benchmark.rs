//! Performance benchmarks for filter import
//!
//! Run with: cargo bench -p sonareq_eq

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use sonareq_eq::{parse_str, SonarPreset};

fn sample_export() -> String {
    let mut text = String::from("Preamp: -6.4 dB\n");
    for i in 1..=10 {
        if i % 4 == 0 {
            text.push_str(&format!("Filter {}: None\n", i));
        } else {
            text.push_str(&format!(
                "Filter  {}:  ON PK  Fc {} Hz Gain {:.1} dB Q {:.2}\n",
                i,
                i * 750,
                (i as f64 * 0.7) - 3.0,
                0.3 + i as f64
            ));
        }
    }
    text
}

fn benchmark_parse(c: &mut Criterion) {
    let text = sample_export();

    let mut group = c.benchmark_group("parser");
    group.throughput(Throughput::Bytes(text.len() as u64));
    group.bench_function("parse_10_filters", |b| {
        b.iter(|| parse_str(black_box(&text)).unwrap());
    });
    group.finish();
}

fn benchmark_merge(c: &mut Criterion) {
    let filters = parse_str(&sample_export()).unwrap();

    c.bench_function("apply_filters_default_document", |b| {
        b.iter(|| {
            let mut doc = SonarPreset::default();
            doc.apply_filters(black_box(&filters));
            black_box(doc);
        });
    });
}

fn benchmark_document_encode(c: &mut Criterion) {
    let mut doc = SonarPreset::default();
    doc.apply_filters(&parse_str(&sample_export()).unwrap());

    c.bench_function("encode_document_pretty", |b| {
        b.iter(|| serde_json::to_string_pretty(black_box(&doc)).unwrap());
    });
}

criterion_group!(benches, benchmark_parse, benchmark_merge, benchmark_document_encode);

criterion_main!(benches);
