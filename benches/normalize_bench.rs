use std::{borrow::Cow, hint::black_box};

use corpusnorm::{
    CES, Context, DEU, ENG, JPN, NormalizeOptions, Normalizer, PunctMode, Strategy, ZHO, lang::Lang,
    normalize_for_dedup, preset, slow_normalize_for_dedup,
};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};

const SAMPLES: &[(&str, Lang)] = &[
    // clean ASCII, the zero-copy path
    ("the quick brown fox jumps over the lazy dog", ENG),
    ("  Released in 2019 — “great” album! (deluxe) ", ENG),
    ("„Die Straße“ kostet 1 250 € – oder mehr…", DEU),
    ("Cena je 1 000 Kč, „říkal“ prodavač.", CES),
    ("これは、ペンです。「本当」ですか？ ｶﾞｷﾞ", JPN),
    ("中文（测试）：１２３％【重要】", ZHO),
    ("Tab\tseparated\u{0007}with\u{001B}controls\r\n", ENG),
];

/// Deterministic multi-line corpus assembled from the samples.
fn corpus(lines: usize) -> Vec<&'static str> {
    SAMPLES.iter().map(|&(s, _)| s).cycle().take(lines).collect()
}

fn dedup_strategies(c: &mut Criterion) {
    let lines = corpus(1_000);
    let bytes: usize = lines.iter().map(|l| l.len()).sum();
    let mut group = c.benchmark_group("dedup");
    group.throughput(Throughput::Bytes(bytes as u64));

    group.bench_function("fused", |b| {
        b.iter(|| {
            for &line in &lines {
                black_box(normalize_for_dedup(black_box(line)));
            }
        })
    });
    group.bench_function("staged", |b| {
        b.iter(|| {
            for &line in &lines {
                black_box(slow_normalize_for_dedup(black_box(line)));
            }
        })
    });
    group.finish();
}

fn policies(c: &mut Criterion) {
    let mut group = c.benchmark_group("policy");
    let profiles = [
        preset::corpus(),
        preset::dedup(),
        preset::from_options(
            "replace_punct",
            NormalizeOptions::new().case(true).punct(PunctMode::Replace),
            Strategy::Staged,
        ),
    ];

    for profile in &profiles {
        for &(text, lang) in SAMPLES {
            let ctx = Context::new(lang);
            group.throughput(Throughput::Bytes(text.len() as u64));
            let id = format!("{}/{}", profile.name(), lang.code());
            group.bench_with_input(BenchmarkId::new(id, text.len()), text, |b, t| {
                b.iter(|| black_box(profile.run(Cow::Borrowed(black_box(t)), &ctx)))
            });
        }
    }
    group.finish();
}

fn spacing(c: &mut Criterion) {
    let mut group = c.benchmark_group("spacing_for_tok");
    for &(text, lang) in SAMPLES {
        let normalizer = Normalizer::builder().lang(lang).build();
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new(lang.code(), text.len()), text, |b, t| {
            b.iter(|| black_box(normalizer.normalize_spacing_for_tok(black_box(t))))
        });
    }
    group.finish();
}

criterion_group!(benches, dedup_strategies, policies, spacing);
criterion_main!(benches);
