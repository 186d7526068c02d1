use criterion::{Criterion, criterion_group, criterion_main};
use list_tidy_domain::{CaseConversion, ProcessingOptions, SortDirection};
use list_tidy_engine::process_list_with_defaults;
use std::hint::black_box;

fn sample_text(lines: usize) -> String {
    (0..lines).map(|i| format!("Item {} of List {}", i % 5_000, i % 7)).collect::<Vec<_>>().join("\n")
}

fn benchmark_pipeline(c: &mut Criterion) {
    let text = sample_text(100_000);
    let all_stages = ProcessingOptions {
        remove_duplicates: true,
        sort_direction: SortDirection::Ascending,
        case_conversion: CaseConversion::Snakecase,
        remove_empty_lines: true,
    };

    c.bench_function("pipeline_100k_all_stages", |b| {
        b.iter(|| process_list_with_defaults(black_box(&text), black_box(&all_stages)).unwrap())
    });

    let dedup_only = ProcessingOptions { remove_duplicates: true, ..ProcessingOptions::default() };
    c.bench_function("pipeline_100k_dedup_only", |b| {
        b.iter(|| process_list_with_defaults(black_box(&text), black_box(&dedup_only)).unwrap())
    });
}

criterion_group!(benches, benchmark_pipeline);
criterion_main!(benches);
