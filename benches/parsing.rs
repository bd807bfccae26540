//! Benchmarks for the hot parsing paths

use balancedat::app::services::table_parser::{
    DataFile, parse_fixed6_fraction, parse_int_prefix,
};
use balancedat::{ExperienceTable, ResourceStore};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

/// Single-resource store so table loads can be benched without a filesystem
struct FixtureStore {
    name: &'static str,
    content: String,
}

impl ResourceStore for FixtureStore {
    fn open(&self, name: &str) -> balancedat::Result<String> {
        if name == self.name {
            Ok(self.content.clone())
        } else {
            Err(balancedat::Error::resource_not_found(name))
        }
    }
}

fn experience_fixture() -> FixtureStore {
    let mut content = String::from("Level\tExperience\n");
    let mut threshold: u64 = 0;
    for level in 1..=50u32 {
        content.push_str(&format!("{level}\t{threshold}\n"));
        threshold = threshold * 2 + 2000;
    }
    content.push_str("MaxLevel\t0\n");
    FixtureStore {
        name: "Experience.tsv",
        content,
    }
}

fn bench_parse_int(c: &mut Criterion) {
    c.bench_function("parse_int_prefix u32", |b| {
        b.iter(|| parse_int_prefix::<u32>(black_box("1583690"), 0, u32::MAX))
    });
    c.bench_function("parse_int_prefix i32 negative", |b| {
        b.iter(|| parse_int_prefix::<i32>(black_box("-20480"), i32::MIN, i32::MAX))
    });
}

fn bench_parse_fraction(c: &mut Criterion) {
    c.bench_function("parse_fixed6_fraction short", |b| {
        b.iter(|| parse_fixed6_fraction(black_box("5")))
    });
    c.bench_function("parse_fixed6_fraction overlong", |b| {
        b.iter(|| parse_fixed6_fraction(black_box("015625000000")))
    });
}

fn bench_table_load(c: &mut Criterion) {
    let store = experience_fixture();
    c.bench_function("experience table load", |b| {
        b.iter(|| ExperienceTable::load(black_box(&store)).unwrap())
    });

    let content = store.content.clone();
    c.bench_function("data file record walk", |b| {
        b.iter(|| {
            let file = DataFile::new("Experience.tsv", black_box(content.clone()));
            file.records()
                .map(|record| record.cell_count())
                .sum::<usize>()
        })
    });
}

criterion_group!(
    benches,
    bench_parse_int,
    bench_parse_fraction,
    bench_table_load
);
criterion_main!(benches);
