//! Benchmarks for routing-table parsing and SemVer precedence
//!
//! Copyright (c) 2025 Semroute Team
//! Licensed under the Apache-2.0 license

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use semroute_core::semver::semver_table;
use semroute_core::{FieldSpec, RoutingTable, Schema, SemVersion};

fn bench_compile(c: &mut Criterion) {
    let schema = Schema::semver();
    c.bench_function("compile_semver_schema", |b| {
        b.iter(|| RoutingTable::compile(black_box(&schema)))
    });
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_semver");
    let inputs = [
        ("release", "1.2.3"),
        ("pre_release", "10.20.30-alpha.beta.1"),
        ("full", "1.0.0-rc.1+build.2024.05.11.sha.5114f85"),
    ];

    let table = semver_table().unwrap();
    for (name, input) in inputs.iter() {
        group.bench_with_input(BenchmarkId::new("shared_table", name), input, |b, input| {
            b.iter(|| {
                let mut v = SemVersion::default();
                table.parse_into(&mut v, black_box(input)).unwrap();
                v
            })
        });
    }
    group.finish();
}

fn bench_dynamic_values(c: &mut Criterion) {
    let schema = Schema::new()
        .field(FieldSpec::unsigned(0, "a").route(',', 1))
        .field(FieldSpec::unsigned(1, "b").route(',', 0));
    let table = RoutingTable::compile(&schema).unwrap();
    let input: String = (0..500).map(|i| i.to_string()).collect::<Vec<_>>().join(",");

    c.bench_function("parse_values_long_input", |b| {
        b.iter(|| table.parse_values(black_box(&input)).unwrap())
    });
}

fn bench_compare(c: &mut Criterion) {
    let pairs: Vec<(SemVersion, SemVersion)> = [
        ("1.0.0", "2.0.0"),
        ("1.0.0-alpha.1", "1.0.0-alpha.beta"),
        ("1.0.0-beta.11", "1.0.0-beta.2"),
        ("1.0.0-a.b.c.d.e.f", "1.0.0-a.b.c.d.e.f.g"),
    ]
    .iter()
    .map(|(a, b)| (a.parse().unwrap(), b.parse().unwrap()))
    .collect();

    c.bench_function("compare_precedence", |b| {
        b.iter(|| {
            for (left, right) in &pairs {
                black_box(left.compare(right));
            }
        })
    });
}

criterion_group!(benches, bench_compile, bench_parse, bench_dynamic_values, bench_compare);
criterion_main!(benches);
