//! Performance benchmarks for search and chunked iteration.
//!
//! These benchmarks measure:
//! - Substring search by name and by phone fragment
//! - Different book sizes
//! - Paging through the whole book

use contact_book::{AddressBook, MemoryStorage};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Build an in-memory book with `size` contacts.
fn create_test_book(size: usize) -> AddressBook {
    let mut book = AddressBook::open(Box::new(MemoryStorage::new())).unwrap();
    for i in 0..size {
        let name = format!("contact{}", i);
        let phone = format!(
            "{:03}-{:03}-{:02}-{:02}",
            i % 1000,
            (i / 7) % 1000,
            i % 100,
            (i / 3) % 100
        );
        book.add_record(&name, &phone).unwrap();
    }
    book
}

/// Benchmark search across different book sizes.
fn bench_find_by_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_by_size");

    for size in [100, 1_000, 5_000] {
        let book = create_test_book(size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &book, |b, book| {
            b.iter(|| book.find(black_box("123")));
        });
    }

    group.finish();
}

/// Benchmark name versus phone-fragment queries.
fn bench_find_query_kinds(c: &mut Criterion) {
    let book = create_test_book(1_000);

    c.bench_function("find_name_fragment", |b| {
        b.iter(|| book.find(black_box("Contact99")));
    });

    c.bench_function("find_phone_fragment", |b| {
        b.iter(|| book.find(black_box("12-3")));
    });
}

/// Benchmark paging through the whole book.
fn bench_iter_chunks(c: &mut Criterion) {
    let book = create_test_book(1_000);

    c.bench_function("iter_chunks_10", |b| {
        b.iter(|| {
            book.iter_chunks(black_box(10))
                .unwrap()
                .map(|chunk| chunk.len())
                .sum::<usize>()
        });
    });
}

criterion_group!(
    benches,
    bench_find_by_size,
    bench_find_query_kinds,
    bench_iter_chunks
);
criterion_main!(benches);
