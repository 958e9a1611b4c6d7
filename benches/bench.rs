//! Criterion benchmarks for the Concord concordance indexer.
//!
//! Covers the three layers that matter for indexing throughput:
//! - Binary search tree insert/search/traversal
//! - Word tokenization
//! - The full record (lookup-and-merge-or-insert) loop

use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;

use concord::analysis::{Tokenizer, WordTokenizer};
use concord::index::WordIndex;
use concord::tree::BinarySearchTree;

/// Generate a deterministic, unsorted word list for benchmarking.
///
/// Sorted input would degenerate the tree into a chain and benchmark the
/// pathological case instead of the typical one, so keys are scattered by
/// a fixed stride.
fn generate_words(count: usize) -> Vec<String> {
    let stems = [
        "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "pack", "my", "box",
        "with", "five", "dozen", "liquor", "jugs", "how", "vexingly", "daft", "zebras",
        "sphinx", "of", "black", "quartz", "judge", "vow", "waltz", "bad", "nymph", "for",
        "jigs", "vex",
    ];

    let mut words = Vec::with_capacity(count);
    for i in 0..count {
        let stem = stems[(i * 13 + 5) % stems.len()];
        words.push(format!("{}{}", stem, (i * 31) % 1009));
    }
    words
}

fn bench_tree_insert(c: &mut Criterion) {
    let words = generate_words(1000);

    let mut group = c.benchmark_group("tree_insert");
    group.throughput(Throughput::Elements(words.len() as u64));
    group.bench_function("insert_1000", |b| {
        b.iter(|| {
            let mut tree = BinarySearchTree::new();
            for word in &words {
                tree.insert(black_box(word.clone()));
            }
            tree
        })
    });
    group.finish();
}

fn bench_tree_search(c: &mut Criterion) {
    let words = generate_words(1000);
    let mut tree = BinarySearchTree::new();
    for word in &words {
        tree.insert(word.clone());
    }

    c.bench_function("tree_search_hit", |b| {
        b.iter(|| {
            for word in &words {
                black_box(tree.contains(black_box(word)));
            }
        })
    });
}

fn bench_tree_traversal(c: &mut Criterion) {
    let words = generate_words(1000);
    let mut tree = BinarySearchTree::new();
    for word in &words {
        tree.insert(word.clone());
    }

    c.bench_function("tree_inorder_snapshot", |b| {
        b.iter(|| black_box(tree.inorder_iter().count()))
    });
}

fn bench_tokenizer(c: &mut Criterion) {
    let tokenizer = WordTokenizer::new();
    let line = "The quick, brown fox; jumps over the lazy dog's 42 jugs (of quartz)!";

    let mut group = c.benchmark_group("tokenize");
    group.throughput(Throughput::Bytes(line.len() as u64));
    group.bench_function("one_line", |b| {
        b.iter(|| black_box(tokenizer.tokenize(black_box(line))))
    });
    group.finish();
}

fn bench_index_record(c: &mut Criterion) {
    let words = generate_words(1000);

    c.bench_function("index_record_1000", |b| {
        b.iter(|| {
            let mut index = WordIndex::new();
            for (i, word) in words.iter().enumerate() {
                index
                    .record(black_box(word), "bench.txt", (i % 40 + 1) as u32)
                    .unwrap();
            }
            index
        })
    });
}

criterion_group!(
    benches,
    bench_tree_insert,
    bench_tree_search,
    bench_tree_traversal,
    bench_tokenizer,
    bench_index_record
);
criterion_main!(benches);
