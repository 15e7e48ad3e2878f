use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use deck_guard::core::ImportValidator;
use deck_guard::sources::{CsvOptions, CsvTable};

fn collection_rows(n: usize, ragged_every: usize) -> Vec<Vec<String>> {
    (0..n)
        .map(|i| {
            if ragged_every > 0 && i % ragged_every == 0 {
                vec![format!("Card {i}")]
            } else if i % 97 == 0 {
                vec![String::new(), String::new(), String::new()]
            } else {
                vec![format!("Card {i}"), "1".to_string(), "C21".to_string()]
            }
        })
        .collect()
}

fn collection_csv(n: usize) -> String {
    let mut text = String::from("Name,Quantity,Set\n");
    for i in 0..n {
        text.push_str(&format!("\"Card, number {i}\",1,C21\n"));
    }
    text
}

fn benchmark_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("validate");
    let validator = ImportValidator::standard();
    let headers = ["Name", "Quantity", "Set"];

    for n in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*n as u64));

        let clean = collection_rows(*n, 0);
        group.bench_with_input(BenchmarkId::new("clean", n), &clean, |b, rows| {
            b.iter(|| validator.validate(std::hint::black_box(&headers), rows));
        });

        let ragged = collection_rows(*n, 10);
        group.bench_with_input(BenchmarkId::new("ragged", n), &ragged, |b, rows| {
            b.iter(|| validator.validate(std::hint::black_box(&headers), rows));
        });
    }

    group.finish();
}

fn benchmark_tokenize_and_validate(c: &mut Criterion) {
    let mut group = c.benchmark_group("tokenize_and_validate");
    let options = CsvOptions::default();

    for n in [100, 1_000, 10_000].iter() {
        let text = collection_csv(*n);
        group.throughput(Throughput::Bytes(text.len() as u64));

        group.bench_with_input(BenchmarkId::from_parameter(n), &text, |b, text| {
            b.iter(|| {
                let table = CsvTable::parse_str(std::hint::black_box(text), &options).unwrap();
                table.validate()
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_validate, benchmark_tokenize_and_validate);
criterion_main!(benches);
