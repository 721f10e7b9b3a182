//! Criterion benchmarks for the option-symbol codec.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use optsym_bench::{CORRECTED, FIXTURES};
use optsym_lib::prelude::*;

fn bench_build(c: &mut Criterion) {
    c.bench_function("build_polygon", |b| {
        b.iter(|| {
            build_option_symbol(
                black_box("TSLA"),
                black_box("211015"),
                black_box("put"),
                black_box(125.0),
                SymbolFormat::Polygon,
                true,
            )
        })
    });
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for (symbol, format) in FIXTURES {
        group.bench_function(format.as_str(), |b| {
            b.iter(|| parse_option_symbol(black_box(symbol), *format))
        });
    }
    group.bench_function("polygon_corrected", |b| {
        b.iter(|| parse_option_symbol(black_box(CORRECTED), SymbolFormat::Polygon))
    });
    group.finish();
}

fn bench_detect(c: &mut Criterion) {
    c.bench_function("detect", |b| {
        b.iter(|| {
            for (symbol, _) in FIXTURES {
                let _ = detect_option_symbol_format(black_box(symbol));
            }
        })
    });
}

fn bench_convert(c: &mut Criterion) {
    c.bench_function("convert_polygon_to_tos", |b| {
        b.iter(|| {
            convert_option_symbol_format(
                black_box("O:TSLA211015P00125000"),
                SymbolFormat::Polygon,
                SymbolFormat::Tos,
            )
        })
    });
}

criterion_group!(benches, bench_build, bench_parse, bench_detect, bench_convert);
criterion_main!(benches);
