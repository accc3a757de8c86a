//! Benchmarks for chatstats parsing and aggregation.
//!
//! Run with: `cargo bench`
//! Run specific group: `cargo bench --bench parsing -- aggregation`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use chatstats::config::ReportConfig;
use chatstats::core::{
    ChatReport, avg_length_by_author, busiest_day, count_by_author, count_by_hour,
    count_by_weekday, date_range, distinctive_words, filter_by_date,
};
use chatstats::format::{ReportFormat, render};
use chatstats::loader::TranscriptLoader;
use chatstats::parsing::parse_line;
use chatstats::Message;

use chrono::{Duration, NaiveDate};

// =============================================================================
// Test Data Generators
// =============================================================================

const AUTHORS: [&str; 4] = ["Alice", "Bob", "Carol", "José Ñúñez"];
const WORDS: [&str; 8] = ["hola", "mundo", "que", "tal", "python", "rust", "mañana", "ok"];

fn generate_transcript(count: usize) -> String {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap();
    let mut lines = Vec::with_capacity(count + count / 10);
    for i in 0..count {
        let at = start + Duration::minutes(i as i64 * 7);
        let author = AUTHORS[i % AUTHORS.len()];
        let text: Vec<&str> = (0..(i % 9) + 1).map(|j| WORDS[(i + j) % WORDS.len()]).collect();
        let line = match i % 3 {
            0 => format!("{} - {}: {}", at.format("%d/%m/%Y, %H:%M"), author, text.join(" ")),
            1 => format!("[{}] {}: {}", at.format("%d/%m/%Y, %H:%M:%S"), author, text.join(" ")),
            _ => format!("{} - {}: {}", at.format("%-m/%-d/%y, %-I:%M %p"), author, text.join(" ")),
        };
        lines.push(line);
        if i % 10 == 5 {
            lines.push("continuation of the previous message".to_string());
        }
    }
    lines.join("\n")
}

fn generate_messages(count: usize) -> Vec<Message> {
    TranscriptLoader::new().load_str(&generate_transcript(count))
}

// =============================================================================
// Parsing
// =============================================================================

fn bench_parse_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_line");

    let lines = [
        ("android", "15/01/2024, 10:30 - Alice: Hello everyone, how are you?"),
        ("ios", "[15/01/2024, 10:30:45] Alice: Hello everyone, how are you?"),
        ("us", "1/15/24, 10:30 p.m. - Alice: Hello everyone, how are you?"),
        ("continuation", "and this is the second line of the message"),
    ];

    for (name, line) in lines {
        group.bench_with_input(BenchmarkId::from_parameter(name), line, |b, line| {
            b.iter(|| parse_line(black_box(line)));
        });
    }

    group.finish();
}

fn bench_load_str(c: &mut Criterion) {
    let mut group = c.benchmark_group("load_str");

    for size in [100, 1_000, 10_000] {
        let content = generate_transcript(size);
        group.throughput(Throughput::Bytes(content.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &content, |b, content| {
            let loader = TranscriptLoader::new();
            b.iter(|| loader.load_str(black_box(content)));
        });
    }

    group.finish();
}

// =============================================================================
// Aggregation
// =============================================================================

fn bench_aggregation(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregation");
    let messages = generate_messages(10_000);
    group.throughput(Throughput::Elements(messages.len() as u64));

    group.bench_function("date_range", |b| b.iter(|| date_range(black_box(&messages))));
    group.bench_function("count_by_author", |b| {
        b.iter(|| count_by_author(black_box(&messages)))
    });
    group.bench_function("count_by_hour", |b| b.iter(|| count_by_hour(black_box(&messages))));
    group.bench_function("count_by_weekday", |b| {
        b.iter(|| count_by_weekday(black_box(&messages)))
    });
    group.bench_function("avg_length_by_author", |b| {
        b.iter(|| avg_length_by_author(black_box(&messages)))
    });
    group.bench_function("busiest_day", |b| b.iter(|| busiest_day(black_box(&messages))));
    group.bench_function("distinctive_words", |b| {
        b.iter(|| distinctive_words(black_box(&messages), "Alice", 100))
    });

    let from = NaiveDate::from_ymd_opt(2024, 1, 10);
    let to = NaiveDate::from_ymd_opt(2024, 1, 20);
    group.bench_function("filter_by_date", |b| {
        b.iter(|| filter_by_date(black_box(&messages), from, to))
    });

    group.finish();
}

// =============================================================================
// Full Pipeline
// =============================================================================

fn bench_full_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("full_pipeline");
    let content = generate_transcript(10_000);
    group.throughput(Throughput::Bytes(content.len() as u64));

    group.bench_function("load_report_text", |b| {
        let loader = TranscriptLoader::new();
        let config = ReportConfig::new();
        b.iter(|| {
            let messages = loader.load_str(black_box(&content));
            let report = ChatReport::build(&messages, &messages, &config);
            render(&report, ReportFormat::Text)
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_parse_line,
    bench_load_str,
    bench_aggregation,
    bench_full_pipeline,
);

criterion_main!(benches);
