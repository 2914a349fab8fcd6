use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use unity_summary::core::parser::{parse_detail_line, parse_test_summary};

fn synthetic_result_file(tests: usize) -> String {
    let mut text = String::new();
    for i in 0..tests {
        text.push_str(&format!("src/test_demo.c:{}:test_case_{}:PASS\n", i + 1, i));
    }
    text.push_str(&format!("{tests} Tests 0 Failures 0 Ignored\n"));
    text
}

fn bench_parse_result_file(c: &mut Criterion) {
    let text = synthetic_result_file(1000);

    c.bench_function("parse_detail_lines", |b| {
        b.iter(|| {
            black_box(&text)
                .lines()
                .filter_map(parse_detail_line)
                .count()
        })
    });

    c.bench_function("parse_test_summary", |b| {
        b.iter(|| parse_test_summary(black_box(&text)))
    });
}

criterion_group!(benches, bench_parse_result_file);
criterion_main!(benches);
