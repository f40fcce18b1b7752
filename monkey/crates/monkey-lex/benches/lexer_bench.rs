//! Lexer benchmarks.
//!
//! Run with: `cargo bench --package monkey-lex`

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use monkey_lex::Lexer;

fn lexer_token_count(source: &str) -> usize {
    // Lexer implements Iterator, so we can use it directly
    Lexer::new(source).count()
}

fn bench_lexer_simple(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer");

    let source = "let add = fn(x, y) { x + y; }; let result = add(5, 10);";
    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("simple_let", |b| {
        b.iter(|| lexer_token_count(black_box("let x = 42;")))
    });

    group.bench_function("function_with_body", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    group.finish();
}

fn bench_lexer_complex(c: &mut Criterion) {
    let mut group = c.benchmark_group("lexer_complex");

    let source = r#"
        let fibonacci = fn(n) {
            if (n < 2) {
                return n;
            }
            return fibonacci(n - 1) + fibonacci(n - 2);
        };

        let map = fn(arr, f) {
            let iter = fn(arr, accumulated) {
                if (len(arr) == 0) {
                    accumulated
                } else {
                    iter(rest(arr), push(accumulated, f(first(arr))))
                }
            };
            iter(arr, []);
        };

        let people = [{"name": "Alice", "age": 24}, {"name": "Anna", "age": 28}];
        map(people, fn(p) { p["age"] });
    "#;

    group.throughput(Throughput::Bytes(source.len() as u64));

    group.bench_function("nested_program", |b| {
        b.iter(|| lexer_token_count(black_box(source)))
    });

    let repeated = source.repeat(50);
    group.throughput(Throughput::Bytes(repeated.len() as u64));

    group.bench_function("nested_program_x50", |b| {
        b.iter(|| lexer_token_count(black_box(repeated.as_str())))
    });

    group.finish();
}

criterion_group!(benches, bench_lexer_simple, bench_lexer_complex);
criterion_main!(benches);
