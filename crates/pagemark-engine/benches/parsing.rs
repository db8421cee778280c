use criterion::{Criterion, criterion_group, criterion_main};
use futures::executor::block_on;
use pagemark_engine::Parser;
mod common;

fn bench_parse_document(c: &mut Criterion) {
    let mut group = c.benchmark_group("parsing");
    group.sample_size(10);

    let parser = Parser::default();
    for size in [10, 100] {
        let content = common::generate_markdown_content(size);
        group.bench_function(format!("document_x{size}"), |b| {
            b.iter(|| {
                let nodes = block_on(parser.parse(std::hint::black_box(&content)));
                std::hint::black_box(nodes);
            });
        });
    }

    group.finish();
}

fn bench_parse_line(c: &mut Criterion) {
    let parser = Parser::default();
    let line = common::generate_inline_line(20);
    c.bench_function("parse_line", |b| {
        b.iter(|| {
            let nodes = block_on(parser.parse_line(std::hint::black_box(&line)));
            std::hint::black_box(nodes);
        });
    });
}

criterion_group!(benches, bench_parse_document, bench_parse_line);
criterion_main!(benches);
