//! Benchmark for replaying DDL files.
//!
//! Measures the performance of:
//! 1. Normalizing and classifying single statements
//! 2. Parsing column definitions
//! 3. Replaying whole files of increasing length

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ddl_replay::statement::{match_create, normalize, parse_column_def};
use ddl_replay::{StatementKind, Table, parse_ddl_file};
use std::fmt::Write;
use std::hint::black_box;

const CREATE: &str = "
CREATE TABLE main.sales.orders (
    order_id    BIGINT    COMMENT 'Primary key',
    customer_id BIGINT    COMMENT 'Buyer',
    amount      DOUBLE    COMMENT 'Total in cents',
    status      STRING    COMMENT 'Lifecycle state',
    created_at  TIMESTAMP COMMENT 'Creation time',
    CONSTRAINT pk PRIMARY KEY (order_id)
);";

const ADD_COLUMN: &str = "ALTER TABLE main.sales.orders ADD COLUMN note STRING COMMENT 'Free text';";
const DROP_COLUMN: &str = "ALTER TABLE main.sales.orders DROP COLUMN note;";

/// Builds a file with one create followed by `alters` add/drop statements.
fn generate_ddl(alters: usize) -> String {
    let mut ddl = String::from(CREATE);
    for i in 0..alters {
        if i % 3 == 2 {
            let _ = write!(ddl, "\nALTER TABLE main.sales.orders DROP COLUMN col_{};", i - 1);
        } else {
            let _ = write!(
                ddl,
                "\nALTER TABLE main.sales.orders ADD COLUMN col_{i} INT COMMENT 'Generated column {i}';"
            );
        }
    }
    ddl
}

fn benchmark_statements(c: &mut Criterion) {
    let mut group = c.benchmark_group("statement");

    group.bench_function("normalize_create", |b| {
        b.iter(|| black_box(normalize(black_box(CREATE))));
    });

    let normalized_create = normalize(CREATE);
    let normalized_add = normalize(ADD_COLUMN);
    let normalized_drop = normalize(DROP_COLUMN);

    group.bench_function("classify", |b| {
        b.iter(|| {
            black_box(StatementKind::classify(black_box(&normalized_create)));
            black_box(StatementKind::classify(black_box(&normalized_add)));
            black_box(StatementKind::classify(black_box(&normalized_drop)));
        });
    });

    group.bench_function("match_create", |b| {
        b.iter(|| {
            let create = match_create(black_box(&normalized_create)).unwrap();
            black_box(create.columns().unwrap())
        });
    });

    group.bench_function("column_definition", |b| {
        b.iter(|| black_box(parse_column_def(black_box("amount double comment 'total in cents'")).unwrap()));
    });

    group.finish();
}

fn benchmark_apply(c: &mut Criterion) {
    let mut group = c.benchmark_group("apply_statement");

    group.bench_function("add_then_drop", |b| {
        let mut table: Table = CREATE.parse().unwrap();
        b.iter(|| {
            black_box(table.apply_statement(black_box(ADD_COLUMN)).unwrap());
            black_box(table.apply_statement(black_box(DROP_COLUMN)).unwrap());
        });
    });

    group.finish();
}

fn benchmark_file_replay(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_replay");

    for alters in [10, 100, 1000] {
        let ddl = generate_ddl(alters);
        group.throughput(Throughput::Bytes(ddl.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(alters), &ddl, |b, ddl| {
            b.iter(|| black_box(parse_ddl_file(black_box(ddl)).unwrap()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_statements,
    benchmark_apply,
    benchmark_file_replay,
);
criterion_main!(benches);
