//! Stress tests for concurrent logging
//!
//! These tests verify:
//! - Every accepted call produces exactly one console line and one file line
//! - Filtered calls produce nothing under concurrent load
//! - File lines are never torn

use console_enhancer::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread;
use tempfile::TempDir;

fn install_captured(config: LoggerConfig) -> (Logger, Arc<Mutex<Vec<u8>>>) {
    let console = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::builder()
        .config(config.with_colors(false))
        .console_target(ConsoleTarget::Shared(console.clone()))
        .build()
        .expect("Failed to install logger");
    (logger, console)
}

#[test]
fn test_concurrent_calls_line_counts_match() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stress.log");

    let (logger, console) = install_captured(
        LoggerConfig::new()
            .with_level("INFO")
            .with_file(&log_file)
            .with_include_date(true),
    );
    let logger = Arc::new(logger);

    // 4 threads x 25 calls, cycling through all five levels
    let handles: Vec<_> = (0..4)
        .map(|t| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..25 {
                    let args: [LogArgument; 3] = ["thread %d call %d".into(), t.into(), i.into()];
                    let result = match i % 5 {
                        0 => logger.error(&args),
                        1 => logger.warn(&args),
                        2 => logger.info(&args),
                        3 => logger.debug(&args),
                        _ => logger.verbose(&args),
                    };
                    result.expect("log call failed");
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().expect("logging thread panicked");
    }
    logger.flush().expect("Failed to flush");

    // error, warn and info pass: 3 of every 5 calls
    let expected = 4 * 25 * 3 / 5;

    let console_text = String::from_utf8(console.lock().clone()).unwrap();
    assert_eq!(console_text.lines().count(), expected);

    let file_text = std::fs::read_to_string(&log_file).expect("Failed to read log file");
    let file_lines: Vec<&str> = file_text.lines().collect();
    assert_eq!(file_lines.len(), expected);

    for line in &file_lines {
        assert!(line.starts_with('['), "torn line: {:?}", line);
        assert!(line.contains("] <"), "torn line: {:?}", line);
        assert!(!line.contains("<DEBUG>") && !line.contains("<TRACE>"));
    }

    assert_eq!(logger.metrics().emitted_count(), expected as u64);
    assert_eq!(logger.metrics().filtered_count(), (100 - expected) as u64);
}

#[test]
fn test_high_volume_file_order_per_thread() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("ordered.log");

    let (logger, _console) = install_captured(
        LoggerConfig::new()
            .with_file(&log_file)
            .with_show_source_info(false),
    );

    for i in 0..500 {
        logger.info(&["seq %d".into(), i.into()]).unwrap();
    }
    logger.flush().unwrap();

    let content = std::fs::read_to_string(&log_file).unwrap();
    let sequence: Vec<i32> = content
        .lines()
        .map(|l| l.rsplit(' ').next().unwrap().parse().unwrap())
        .collect();
    assert_eq!(sequence, (0..500).collect::<Vec<_>>());
}

#[test]
fn test_drop_drains_pending_writes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("drain.log");

    {
        let (logger, _console) = install_captured(LoggerConfig::new().with_file(&log_file));
        for i in 0..200 {
            logger.debug(&["drain %d".into(), i.into()]).unwrap();
        }
    }

    let content = std::fs::read_to_string(&log_file).unwrap();
    assert_eq!(content.lines().count(), 200);
}
