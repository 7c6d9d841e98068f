use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use nomen_core::{Languages, NameType};
use nomen_rule_engine::{parse_rules, LanguageGuesser, GENERIC_RULES};

/// Benchmark compiling the full generic rule table.
///
/// This is the start-up cost a registry pays once per name type.
fn bench_compile_generic_table(c: &mut Criterion) {
    c.bench_function("compile_generic_table", |b| {
        b.iter(|| parse_rules("bench:gen_lang.txt", black_box(GENERIC_RULES)).unwrap());
    });
}

/// Benchmark guessing against the compiled generic table.
fn bench_guess_languages(c: &mut Criterion) {
    let guesser = LanguageGuesser::load_builtin(
        NameType::Generic,
        Languages::for_name_type(NameType::Generic),
    )
    .unwrap();

    let mut group = c.benchmark_group("guess_languages");

    for name in ["schwartz", "fitzgerald", "oğuz", "рыбаков", "שמעון"] {
        group.bench_with_input(BenchmarkId::from_parameter(name), name, |b, name| {
            b.iter(|| guesser.guess_languages(black_box(name)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_compile_generic_table, bench_guess_languages);
criterion_main!(benches);
