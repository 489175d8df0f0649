//! Criterion benchmarks for the tongyi replacer.
//!
//! Covers dictionary compilation from a generated vocabulary with wildcard
//! templates, single-text replacement and parallel batch replacement.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use tongyi::config::ReplacerConfig;
use tongyi::replace::SynonymReplacer;
use tongyi::vocabulary::VocabularyRow;

const TERMS: [&str; 8] = ["磁共振", "超声", "心电图机", "探头", "线圈", "球管", "造影剂", "监护仪"];

/// Generate a vocabulary of `count` rows, every fourth with a wildcard template.
fn generate_vocabulary(count: usize) -> Vec<VocabularyRow> {
    (0..count)
        .map(|i| {
            let mut row = VocabularyRow::new(format!("{}{i}", TERMS[i % TERMS.len()]))
                .with_variant("别名", format!("term{i}"))
                .with_variant("英文名", format!("Device Model {i}"));
            if i % 4 == 0 {
                row = row.with_variant("GE商品名1", format!("model?{i}?x"));
            }
            row
        })
        .collect()
}

/// Generate mixed Chinese/English texts mentioning vocabulary variants.
fn generate_texts(count: usize, vocab_size: usize) -> Vec<String> {
    (0..count)
        .map(|i| {
            let a = (i * 7) % vocab_size;
            let b = (i * 13) % vocab_size;
            let m = (i * 4) % vocab_size;
            format!("患者使用term{a}进行检查，设备为Device Model {b}，\n另见 model-{m}-x 的报告。")
        })
        .collect()
}

fn bench_dictionary_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("dictionary_build");
    group.sample_size(20);

    let rows = generate_vocabulary(2000);
    group.throughput(Throughput::Elements(rows.len() as u64));
    group.bench_function("build_2000_rows", |b| {
        b.iter(|| {
            let replacer = SynonymReplacer::from_rows(black_box(&rows), ReplacerConfig::default());
            black_box(replacer)
        })
    });

    group.finish();
}

fn bench_replace(c: &mut Criterion) {
    let mut group = c.benchmark_group("replace");

    let vocab_size = 2000;
    let replacer =
        SynonymReplacer::from_rows(&generate_vocabulary(vocab_size), ReplacerConfig::default())
            .unwrap();
    let texts = generate_texts(1000, vocab_size);

    group.bench_function("replace_single_text", |b| {
        b.iter(|| black_box(replacer.replace(black_box(&texts[0]))))
    });

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("replace_sequential_1000", |b| {
        b.iter(|| {
            for text in &texts {
                let _ = black_box(replacer.replace(black_box(text)));
            }
        })
    });

    group.bench_function("replace_batch_1000", |b| {
        b.iter(|| black_box(replacer.replace_batch(black_box(&texts))))
    });

    group.finish();
}

criterion_group!(benches, bench_dictionary_build, bench_replace);
criterion_main!(benches);
