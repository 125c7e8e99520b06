use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use cssls_core::{
    analysis::analyze,
    ast::parse,
    color::find_colors,
    format::{FormatMode, FormatOptions, format},
    token::scan,
};
use std::hint::black_box;

// A medium stylesheet: custom properties, nesting, media queries and colors.
fn sample_stylesheet(rules: usize) -> String {
    let mut src = String::from(":root {\n  --brand: #336699;\n  --gap: 8px;\n}\n");
    for i in 0..rules {
        src.push_str(&format!(
            ".card-{i}, .card-{i} > .title:hover {{\n  color: var(--brand);\n  background: rgb(from #fff r g b / 50%);\n  margin: calc(var(--gap) * 2) auto;\n  &.active {{ border: 1px solid hsl({} 60% 40%); }}\n}}\n",
            i * 7 % 360
        ));
        if i % 10 == 0 {
            src.push_str(&format!("@media (min-width: {}px) {{\n  .card-{i} {{ display: grid; }}\n}}\n", 400 + i));
        }
    }
    src
}

// Benchmark 1: Tokenizing
fn bench_scan(c: &mut Criterion) {
    let src = sample_stylesheet(200);
    let mut group = c.benchmark_group("scan");
    group.throughput(Throughput::Bytes(src.len() as u64));
    group.bench_function("scan_200_rules", |b| {
        b.iter(|| black_box(scan(black_box(&src))));
    });
    group.finish();
}

// Benchmark 2: Parsing plus the analyses run on every edit
fn bench_parse(c: &mut Criterion) {
    let src = sample_stylesheet(200);
    let mut group = c.benchmark_group("parse");
    group.throughput(Throughput::Bytes(src.len() as u64));
    group.bench_function("parse_200_rules", |b| {
        b.iter(|| black_box(parse(black_box(&src))));
    });

    let (sheet, errors) = parse(&src);
    group.bench_function("diagnostics_200_rules", |b| {
        b.iter(|| black_box(analyze(&sheet, &src, &errors)));
    });
    group.bench_function("colors_200_rules", |b| {
        b.iter(|| black_box(find_colors(&sheet, None)));
    });
    group.finish();
}

// Benchmark 3: Formatting in each layout mode
fn bench_format(c: &mut Criterion) {
    let src = sample_stylesheet(200);
    let (sheet, _) = parse(&src);
    let mut group = c.benchmark_group("format");
    group.throughput(Throughput::Bytes(src.len() as u64));
    for mode in [FormatMode::Expanded, FormatMode::Compact, FormatMode::Preserve] {
        let options = FormatOptions {
            mode,
            ..FormatOptions::default()
        };
        group.bench_function(format!("format_{mode}"), |b| {
            b.iter(|| black_box(format(&sheet, &src, &options)));
        });
    }
    group.finish();
}

// Criterion benchmark group definition
criterion_group!(benches, bench_scan, bench_parse, bench_format);
criterion_main!(benches);
