use criterion::{black_box, criterion_group, criterion_main, Criterion};
use csvdupe::dedup::{count_rows, RowCounter};
use csvdupe::table::{combine, Dataset};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

// Helper to build an in-memory dataset with a controlled duplicate rate:
// row i repeats every `cycle` rows.
fn synthetic_dataset(rows: usize, cycle: usize) -> Dataset {
    Dataset::new(
        PathBuf::from("bench.csv"),
        vec!["id".into(), "name".into(), "value".into()],
        (0..rows)
            .map(|i| {
                let k = i % cycle;
                vec![k.to_string(), format!("name_{k}"), format!("value_{k}")]
            })
            .collect(),
    )
}

// Helper to write a folder of CSV files for the end-to-end benchmark.
fn setup_csv_dir(files: usize, rows_per_file: usize) -> TempDir {
    let dir = TempDir::new().unwrap();
    for f in 0..files {
        let mut content = String::from("id,name,value\n");
        for i in 0..rows_per_file {
            content.push_str(&format!("{i},name_{i},value_{}\n", i % 100));
        }
        fs::write(dir.path().join(format!("part_{f}.csv")), content).unwrap();
    }
    dir
}

// 1. Combine + count over pre-parsed datasets
fn bench_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("count_rows");

    for rows in [1_000, 10_000, 100_000] {
        let dataset = synthetic_dataset(rows, rows / 10);
        group.bench_with_input(format!("{rows}_rows"), &dataset, |b, dataset| {
            b.iter(|| {
                let table = combine(vec![dataset.clone()]);
                black_box(count_rows(&table));
            });
        });
    }
    group.finish();
}

// 2. End-to-end pipeline including file reads
fn bench_pipeline(c: &mut Criterion) {
    let dir = setup_csv_dir(8, 2_000);
    let counter = RowCounter::with_defaults();

    c.bench_function("pipeline_8_files_16k_rows", |b| {
        b.iter(|| {
            let report = counter.count_directory(dir.path()).unwrap();
            black_box(report);
        })
    });
}

criterion_group!(benches, bench_count, bench_pipeline);
criterion_main!(benches);
