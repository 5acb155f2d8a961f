//! Benchmarks for tokenizing, cross-referencing, and page assembly.
//!
//! Run with: cargo bench

use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};

use glossgen::{Glossary, PageAssembler, SeparatorSet, render, sort_terms, tokens};

/// Build a synthetic glossary where every definition mentions a few other terms.
fn sample_glossary(size: usize) -> Glossary {
    let mut glossary = Glossary::new();
    for i in 0..size {
        let definition = format!(
            "term{} relates to term{}, and is unlike term{} in several ways",
            (i + 1) % size,
            (i * 7) % size,
            (i * 13) % size,
        );
        glossary
            .insert(format!("term{i}"), definition)
            .expect("synthetic terms are unique");
    }
    glossary
}

fn bench_tokenize(c: &mut Criterion) {
    let seps = SeparatorSet::default();
    let text = "a string of characters, in a language\twhich has at least one character ";
    let text = text.repeat(64);
    c.bench_function("tokenize", |b| {
        b.iter(|| tokens(black_box(&text), &seps).count());
    });
}

fn bench_render(c: &mut Criterion) {
    let seps = SeparatorSet::default();
    let glossary = sample_glossary(500);
    let definition = glossary.definition("term42").unwrap().repeat(16);
    c.bench_function("render_definition", |b| {
        b.iter(|| render(black_box(&definition), &seps, &glossary));
    });
}

fn bench_sort(c: &mut Criterion) {
    let terms: Vec<String> = (0..300).rev().map(|i| format!("term{i:04}")).collect();
    c.bench_function("sort_terms_300", |b| {
        b.iter(|| sort_terms(black_box(terms.clone())));
    });
}

fn bench_assemble(c: &mut Criterion) {
    let glossary = sample_glossary(200);
    let assembler = PageAssembler::new();
    c.bench_function("assemble_site_200", |b| {
        b.iter(|| assembler.assemble(black_box(&glossary)).unwrap());
    });
}

criterion_group!(benches, bench_tokenize, bench_render, bench_sort, bench_assemble);
criterion_main!(benches);
