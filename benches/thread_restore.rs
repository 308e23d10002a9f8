use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use smarter_chat::ChatOptions;
use smarter_chat::models::ChatHistoryEntry;
use smarter_chat::thread::{chat_messages_to_request_messages, chat_restore_from_backend};

/// Generate a synthetic chat history with N entries cycling through every role
fn generate_history(num_entries: usize) -> Vec<ChatHistoryEntry> {
    let roles = ["system", "user", "smarter", "tool", "assistant"];
    (0..num_entries)
        .map(|i| {
            ChatHistoryEntry::new(
                roles[i % roles.len()],
                &format!("Message {} with a [link](https://smarter.sh/docs/{})", i, i),
            )
        })
        .collect()
}

fn bench_restore(c: &mut Criterion) {
    let mut group = c.benchmark_group("chat_restore_from_backend");
    let options = ChatOptions::default();

    for size in [10, 100, 1_000, 10_000].iter() {
        let history = generate_history(*size);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| chat_restore_from_backend(black_box(&history), None, &options));
        });
    }

    group.finish();
}

fn bench_request_shaping(c: &mut Criterion) {
    let mut group = c.benchmark_group("chat_messages_to_request_messages");
    let options = ChatOptions::default();

    for size in [10, 100, 1_000, 10_000].iter() {
        let thread = chat_restore_from_backend(&generate_history(*size), None, &options);

        group.throughput(Throughput::Elements(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| chat_messages_to_request_messages(black_box(&thread)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_restore, bench_request_shaping);
criterion_main!(benches);
