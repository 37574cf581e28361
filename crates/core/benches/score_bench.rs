use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use lexscore_core::{LexicalQualityScorer, ScorerConfig};

fn bench_single_text(c: &mut Criterion) {
    let mut group = c.benchmark_group("assess_text_quality");

    let sample_texts = vec![
        "The quick brown fox jumps over the lazy dog.",
        "I would like to transfer money to my savings account. The payment failed twice.",
        "this sentence starts lowercase. It also has a error in it.",
        "Short",
        "",
    ];

    group.throughput(Throughput::Elements(sample_texts.len() as u64));
    group.bench_function("builtin_backends", |b| {
        let scorer = LexicalQualityScorer::default();
        b.iter(|| {
            for text in &sample_texts {
                black_box(scorer.assess_text_quality(text));
            }
        });
    });

    group.finish();
}

fn bench_sample_weights(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_weights");

    // 1000 synthetic dataset records
    let texts: Vec<String> = (0..1000)
        .map(|i| {
            format!(
                "My card payment number {} was declined yesterday. I would like to know why it failed.",
                i
            )
        })
        .collect();

    group.throughput(Throughput::Elements(texts.len() as u64));
    group.bench_function("batch_1000", |b| {
        let scorer = LexicalQualityScorer::new(ScorerConfig::default());
        b.iter(|| black_box(scorer.sample_weights(&texts)));
    });

    group.finish();
}

criterion_group!(benches, bench_single_text, bench_sample_weights);
criterion_main!(benches);
