//! Criterion benchmarks for console_enhancer

use console_enhancer::core::log_argument::{format_error_message, format_message};
use console_enhancer::core::log_record::{LineFormatter, LogRecord};
use console_enhancer::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use parking_lot::Mutex;
use std::sync::Arc;

fn sink_logger(config: LoggerConfig) -> Logger {
    Logger::builder()
        .config(config)
        .console_target(ConsoleTarget::Shared(Arc::new(Mutex::new(std::io::sink()))))
        .build()
        .expect("Failed to install logger")
}

// ============================================================================
// Logging Performance Benchmarks
// ============================================================================

fn bench_sync_logging(c: &mut Criterion) {
    let mut group = c.benchmark_group("sync_logging");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LoggerConfig::new());

    group.bench_function("info_with_call_site", |b| {
        b.iter(|| {
            let _ = logger.info(&[black_box("Info message").into()]);
        });
    });

    let dated = sink_logger(LoggerConfig::new().with_include_date(true));

    group.bench_function("info_with_timestamp", |b| {
        b.iter(|| {
            let _ = dated.info(&[black_box("Info message").into()]);
        });
    });

    let bare = sink_logger(LoggerConfig::new().with_show_source_info(false).with_colors(false));

    group.bench_function("info_bare", |b| {
        b.iter(|| {
            let _ = bare.info(&[black_box("Info message").into()]);
        });
    });

    group.finish();
}

// ============================================================================
// Filtering Benchmarks
// ============================================================================

fn bench_filtering(c: &mut Criterion) {
    let mut group = c.benchmark_group("filtering");
    group.throughput(Throughput::Elements(1));

    let logger = sink_logger(LoggerConfig::new().with_level("ERROR"));

    group.bench_function("filtered_out", |b| {
        b.iter(|| {
            let _ = logger.verbose(&[black_box("Trace message").into()]);
        });
    });

    group.finish();
}

// ============================================================================
// Formatting Benchmarks
// ============================================================================

fn bench_formatting(c: &mut Criterion) {
    let mut group = c.benchmark_group("formatting");
    group.throughput(Throughput::Elements(1));

    let args: Vec<LogArgument> = vec![
        "user %s did %s in %dms".into(),
        "ada".into(),
        "login".into(),
        42.into(),
    ];

    group.bench_function("printf_message", |b| {
        b.iter(|| black_box(format_message(black_box(&args))));
    });

    let err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
    let error_args = vec![LogArgument::from("context"), LogArgument::error(&err)];

    group.bench_function("error_message", |b| {
        b.iter(|| black_box(format_error_message(black_box(&error_args))));
    });

    let formatter = LineFormatter::default();
    let record = LogRecord::new(LogLevel::Info, "Test message").with_call_site(CallSite {
        file: "main.rs".to_string(),
        line: 42,
        function: "anonymous".to_string(),
    });

    group.bench_function("line", |b| {
        b.iter(|| black_box(formatter.format(black_box(&record))));
    });

    let styles = StyleRegistry::default();

    group.bench_function("style_render", |b| {
        b.iter(|| black_box(styles.render(black_box("<ERROR>\tTest message"), LogLevel::Error)));
    });

    group.finish();
}

criterion_group!(benches, bench_sync_logging, bench_filtering, bench_formatting);
criterion_main!(benches);
