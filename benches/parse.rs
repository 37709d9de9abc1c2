use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use keyfile::{Syntax, parse_str, parse_str_with_syntax};

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for size in [1_024usize, 10_240, 102_400] {
        let input = make_input(size, '#', '=');
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| parse_str(black_box(input)));
        });
    }
    group.finish();
}

fn bench_parse_custom_syntax(c: &mut Criterion) {
    let syntax = Syntax {
        comment_marker: ';',
        separator: ':',
    };
    let mut group = c.benchmark_group("parse_custom_syntax");
    for size in [1_024usize, 102_400] {
        let input = make_input(size, syntax.comment_marker, syntax.separator);
        group.bench_with_input(BenchmarkId::from_parameter(size), &input, |b, input| {
            b.iter(|| parse_str_with_syntax(black_box(input), syntax));
        });
    }
    group.finish();
}

fn make_input(bytes: usize, marker: char, separator: char) -> String {
    let block = format!(
        "{marker} section\nkey {separator} value\n\nother_key{separator}other value\nbroken line\n"
    );
    let repeat = bytes / block.len() + 1;
    block.repeat(repeat)
}

criterion_group!(benches, bench_parse, bench_parse_custom_syntax);
criterion_main!(benches);
