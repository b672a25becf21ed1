use criterion::{black_box, criterion_group, criterion_main, Criterion};

use procalc_words::{tafqit, to_english_words, CountedNoun, Numeral, TafqitOptions};

fn bench_tafqit(c: &mut Criterion) {
    let plain = TafqitOptions::default();
    let riyal = TafqitOptions::new().with_subject(CountedNoun::new(
        "ريال",
        "ريالان",
        "ريالات",
        "ريالًا",
    ));
    let small = Numeral::from(1_234_567u64);
    let large = Numeral::parse("987654321987654321987654").expect("valid numeral");

    c.bench_function("tafqit_1234567", |b| {
        b.iter(|| tafqit(black_box(&small), black_box(&plain)))
    });
    c.bench_function("tafqit_24_digits", |b| {
        b.iter(|| tafqit(black_box(&large), black_box(&plain)))
    });
    c.bench_function("tafqit_with_subject", |b| {
        b.iter(|| tafqit(black_box(&small), black_box(&riyal)))
    });
    c.bench_function("english_u64_max", |b| {
        b.iter(|| to_english_words(black_box(u64::MAX)))
    });
}

criterion_group!(benches, bench_tafqit);
criterion_main!(benches);
