use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pgclause::clause::AddColumnArgs;
use pgclause::{AlterTable, BuiltQuery, Registry, Statement};

/// ALTER TABLE t ADD COLUMN c0 text, ADD COLUMN c1 text, ...
fn build_alter(n: usize) -> AlterTable {
    let mut alter = AlterTable::new();
    alter.set_name(Some("t".into())).unwrap();
    for i in 0..n {
        alter
            .set_action(Some(AddColumnArgs::new(format!("c{i}"), "text").into()))
            .unwrap();
    }
    alter
}

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/allocate");

    for n in [10, 100, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| {
                let mut registry = Registry::new();
                for i in 0..n {
                    black_box(registry.allocate(i as i64).unwrap());
                }
                black_box(registry.bound_values().unwrap());
            });
        });
    }

    group.finish();
}

fn bench_build_statement(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/build_statement");

    for n in [1, 10, 50] {
        let alter = build_alter(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &alter, |b, alter| {
            b.iter(|| black_box(alter.build().unwrap()));
        });
    }

    group.finish();
}

fn bench_allocate_query(c: &mut Criterion) {
    let mut group = c.benchmark_group("registry/allocate_query");

    for n in [1, 10, 100] {
        let mut sql = String::from("SELECT id FROM t WHERE ");
        let mut query = BuiltQuery::raw("");
        for i in 0..n {
            if i > 0 {
                sql.push_str(" OR ");
            }
            sql.push_str(&format!("col = ${}", i + 1));
            query = query.bind(i as i64);
        }
        let query = BuiltQuery::new(sql, query.params().to_vec());

        group.bench_with_input(BenchmarkId::from_parameter(n), &query, |b, query| {
            b.iter(|| {
                let mut registry = Registry::new();
                registry.allocate("outer").unwrap();
                black_box(registry.allocate_query(query).unwrap());
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_allocate,
    bench_build_statement,
    bench_allocate_query
);
criterion_main!(benches);
