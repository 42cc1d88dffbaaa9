//! Benchmark: diffing a buffer after a single keystroke.
//!
//! Measures a tiny buffer and documents of growing size where one line in
//! the middle was edited.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use line_diff::diff_lines;

// ── Helpers ──

/// A document of `n` lines and a copy with one line in the middle edited.
fn edited_document(n: usize) -> (String, String) {
    let previous: Vec<String> = (0..n).map(|i| format!("let value_{} = compute({});", i, i)).collect();
    let mut updated = previous.clone();
    updated[n / 2].push('x');
    (previous.join("\n"), updated.join("\n"))
}

// ── Benchmarks ──

fn bench_small_edit(c: &mut Criterion) {
    let previous = "line1\nline2\nline3";
    let updated = "line1\nmodified line2\nline3\nline4";

    c.bench_function("diff_lines_small", |b| {
        b.iter(|| black_box(diff_lines(black_box(previous), black_box(updated))));
    });
}

fn bench_keystroke(c: &mut Criterion) {
    let mut group = c.benchmark_group("diff_lines_keystroke");
    for &n in &[100, 1000, 10_000] {
        let (previous, updated) = edited_document(n);

        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| black_box(diff_lines(&previous, &updated)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_small_edit, bench_keystroke);
criterion_main!(benches);
