use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mcp_assistant::preprocess::expand_abbreviations;
use mcp_assistant::{DialogueManager, KnowledgeStore, RetrievalEngine};

fn search_benchmark(c: &mut Criterion) {
    let store = KnowledgeStore::builtin();
    let engine = RetrievalEngine::new(&store);

    c.bench_function("search_short_keyword", |b| {
        b.iter(|| {
            let results = engine.search(black_box("server"));
            black_box(results.len());
        });
    });

    c.bench_function("search_no_match", |b| {
        b.iter(|| {
            let results = engine.search(black_box("xyzzy_nonexistent_topic"));
            black_box(results.len());
        });
    });
}

fn respond_benchmark(c: &mut Criterion) {
    let mut manager = DialogueManager::default();

    c.bench_function("respond_knowledge_match", |b| {
        b.iter(|| {
            let reply = manager.respond(black_box("how do i configure mcp transports"));
            black_box(reply.len());
            manager.clear_history();
        });
    });
}

fn preprocess_benchmark(c: &mut Criterion) {
    let query = "mcp api over http with json and stdio via sdk cli ".repeat(8);

    c.bench_function("expand_abbreviations", |b| {
        b.iter(|| {
            let expanded = expand_abbreviations(black_box(query.as_str()));
            black_box(expanded.len());
        });
    });
}

criterion_group!(
    retrieval,
    search_benchmark,
    respond_benchmark,
    preprocess_benchmark
);
criterion_main!(retrieval);
