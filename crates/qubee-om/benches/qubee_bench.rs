// Criterion benchmarks for qubee-om.
//
// Run:
//   cargo bench -p qubee-om

use criterion::{Criterion, criterion_group, criterion_main};

use qubee_om::QubeeHandle;
use qubee_om::corpus::Document;

const PARAGRAPHS: &[&str] = &[
    "Afaan Oromoo afaan guddaa dha. Namoonni miliyoona hedduun ni dubbatu.",
    "Barattoonni mana barumsaa keessatti kitaabota dubbisuu jaallatu.",
    "Finfinneen magaalaa guddittii Oromiyaa ti. Waa'ee ishee baay'ee barreeffameera.",
    "Obboleessi koo kaleessa dhufe. Har'a gara hojii deeme!",
    "Bishaan qulqulluun fayyaa namaatiif barbaachisaa dha.",
];

fn words() -> Vec<String> {
    let handle = QubeeHandle::new();
    PARAGRAPHS.iter().flat_map(|p| handle.words(p)).collect()
}

// ---------------------------------------------------------------------------
// Benchmarks
// ---------------------------------------------------------------------------

fn bench_normalize(c: &mut Criterion) {
    let handle = QubeeHandle::new();
    c.bench_function("normalize_5_paragraphs", |b| {
        b.iter(|| {
            for text in PARAGRAPHS {
                std::hint::black_box(handle.normalize(text));
            }
        });
    });
}

fn bench_tokenize(c: &mut Criterion) {
    let handle = QubeeHandle::new();
    c.bench_function("tokenize_5_paragraphs", |b| {
        b.iter(|| {
            for text in PARAGRAPHS {
                std::hint::black_box(handle.tokens(text));
                std::hint::black_box(handle.sentences(text));
            }
        });
    });
}

fn bench_stem(c: &mut Criterion) {
    let handle = QubeeHandle::new();
    let words = words();
    c.bench_function("stem_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(handle.stem(word));
            }
        });
    });
}

fn bench_syllabify(c: &mut Criterion) {
    let handle = QubeeHandle::new();
    let words = words();
    c.bench_function("syllabify_words", |b| {
        b.iter(|| {
            for word in &words {
                std::hint::black_box(handle.syllables(word));
            }
        });
    });
}

fn bench_analyze(c: &mut Criterion) {
    let handle = QubeeHandle::new();
    c.bench_function("analyze_5_paragraphs", |b| {
        b.iter(|| {
            for text in PARAGRAPHS {
                std::hint::black_box(handle.analyze(text));
            }
        });
    });
}

fn bench_corpus(c: &mut Criterion) {
    let handle = QubeeHandle::new();
    let pipeline = handle.pipeline();
    let docs: Vec<Document> = (0..100)
        .map(|i| Document::new(i.to_string(), PARAGRAPHS[i % PARAGRAPHS.len()]))
        .collect();
    c.bench_function("corpus_100_documents", |b| {
        b.iter(|| std::hint::black_box(pipeline.process_batch(&docs)));
    });
}

criterion_group!(
    benches,
    bench_normalize,
    bench_tokenize,
    bench_stem,
    bench_syllabify,
    bench_analyze,
    bench_corpus
);
criterion_main!(benches);
