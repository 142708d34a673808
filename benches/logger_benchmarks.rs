//! Criterion benchmarks for zlogger

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use std::sync::Arc;
use zlogger::prelude::*;

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_buffered_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffered_logging");
    group.throughput(Throughput::Elements(1));

    let buffer = BufferAppender::new();
    let logger = Logger::new(buffer.clone());

    group.bench_function("info_plain", |b| {
        b.iter(|| {
            logger.info(black_box("Info message"));
            buffer.take();
        });
    });

    group.bench_function("info_formatted", |b| {
        b.iter(|| {
            logger.infof(format_args!("request {} took {}ms", black_box(42), black_box(7)));
            buffer.take();
        });
    });

    group.bench_function("with_context", |b| {
        b.iter(|| {
            let ctx = LogContext::new().with_field("user", "alice").with_field("attempt", 3);
            logger.log_with_context(LogLevel::Warn, black_box("login"), ctx);
            buffer.take();
        });
    });

    group.finish();
}

// ============================================================================
// Level Filtering Benchmarks
// ============================================================================

fn bench_level_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("level_filtering");
    group.throughput(Throughput::Elements(1));

    let logger = Logger::builder()
        .min_level(LogLevel::Error)
        .appender(BufferAppender::new())
        .build();

    group.bench_function("filtered_debug", |b| {
        b.iter(|| {
            logger.debug(black_box("Filtered message"));
        });
    });

    logger.set_level(LogLevel::Disabled);
    group.bench_function("disabled_error", |b| {
        b.iter(|| {
            logger.errorf(format_args!("{}", black_box("Filtered")));
        });
    });

    group.finish();
}

// ============================================================================
// Rendering Benchmarks
// ============================================================================

fn bench_console_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("console_format");
    group.throughput(Throughput::Elements(1));

    let colored = ConsoleFormatter::new();
    let plain = ConsoleFormatter::plain();
    let entry = LogEntry::new(LogLevel::Info, zlogger::colorize(LogLevel::Info.color_code(), "ready"))
        .with_context(LogContext::new().with_field("port", 8080));

    group.bench_function("colored", |b| {
        b.iter(|| black_box(colored.format(black_box(&entry))));
    });

    group.bench_function("plain", |b| {
        b.iter(|| black_box(plain.format(black_box(&entry))));
    });

    group.finish();
}

// ============================================================================
// Provider Benchmarks
// ============================================================================

fn bench_provider(c: &mut Criterion) {
    let mut group = c.benchmark_group("provider");
    group.throughput(Throughput::Elements(1));

    let provider = Arc::new(LoggerProvider::new(
        Logger::builder()
            .min_level(LogLevel::Disabled)
            .appender(BufferAppender::new())
            .build(),
    ));

    group.bench_function("forward_filtered", |b| {
        b.iter(|| provider.info(black_box("Filtered")));
    });

    group.bench_function("reset", |b| {
        b.iter(|| {
            provider.reset(Logger::new(BufferAppender::new()));
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_buffered_logging,
    bench_level_filtering,
    bench_console_format,
    bench_provider
);
criterion_main!(benches);
