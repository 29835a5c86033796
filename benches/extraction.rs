//! Benchmarks for chatcompress extraction and output.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench extraction -- parse`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatcompress::core::output::{to_json, to_jsonl};
use chatcompress::parser::ExportParser;

// =============================================================================
// Test Data Generators
// =============================================================================

fn generate_export(count: usize) -> String {
    let mut requests = Vec::with_capacity(count);
    for i in 0..count {
        // Every fifth request carries no text
        let text = if i % 5 == 0 {
            String::new()
        } else {
            format!("Question number {} about \\\"quoting\\\" and unicode ✓", i)
        };
        requests.push(format!(
            r#"{{"requestId": "request_{}", "message": {{"text": "{}", "parts": [{{"kind": "text"}}]}}, "response": [{{"value": "Answer {}"}}]}}"#,
            i, text, i
        ));
    }
    format!(r#"{{"version": 3, "requests": [{}]}}"#, requests.join(",\n"))
}

// =============================================================================
// Benchmarks
// =============================================================================

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    let parser = ExportParser::new();

    for count in [100, 1_000, 10_000] {
        let content = generate_export(count);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &content, |b, content| {
            b.iter(|| {
                let export = parser.parse_str(black_box(content)).unwrap();
                black_box(export.into_messages())
            });
        });
    }

    group.finish();
}

fn bench_output(c: &mut Criterion) {
    let mut group = c.benchmark_group("output");

    for count in [1_000, 10_000] {
        let messages = ExportParser::new()
            .parse_str(&generate_export(count))
            .unwrap()
            .into_messages();
        group.throughput(Throughput::Elements(messages.len() as u64));

        group.bench_with_input(BenchmarkId::new("json", count), &messages, |b, messages| {
            b.iter(|| to_json(black_box(messages)).unwrap());
        });
        group.bench_with_input(BenchmarkId::new("jsonl", count), &messages, |b, messages| {
            b.iter(|| to_jsonl(black_box(messages)).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse, bench_output);
criterion_main!(benches);
