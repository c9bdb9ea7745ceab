//! Enhanced console example
//!
//! Logs the same calls at every level with the given threshold.
//!
//! Run with: cargo run --example enhanced_console -- [LEVEL] [LOG_FILE]
//! e.g. `cargo run --example enhanced_console -- WARN` or `-- ALL logs/demo.log`

use console_enhancer::prelude::*;
use console_enhancer::{debug, error, info, log, verbose, warn};

fn main() -> Result<()> {
    let mut args = std::env::args().skip(1);
    let level = args.next().unwrap_or_else(|| "ALL".to_string());

    let mut config = LoggerConfig::new().with_level(level.as_str());
    if let Some(path) = args.next() {
        config = config.with_file(path);
    }

    println!("=== Enhanced console with level {} ===\n", level);
    let logger = install(&config)?;
    write_logs(&logger)?;

    println!("\n=== Same calls with timestamps and '.rs' stripped ===\n");
    let logger = install(&config.with_include_date(true).with_path_replace(".rs"))?;
    write_logs(&logger)?;

    logger.flush()
}

fn write_logs(logger: &Logger) -> Result<()> {
    let err = std::io::Error::new(std::io::ErrorKind::Other, "some error");

    // Error without an actual error value
    error!(logger, "Testing ERROR LEVEL without actual error")?;

    // Error value alone: its trace becomes the message
    error!(logger, LogArgument::error(&err))?;

    // Message followed by an error value
    error!(logger, "Testing ERROR LEVEL with an error", LogArgument::error(&err))?;

    warn!(logger, "Testing WARN LEVEL")?;
    info!(logger, "Testing INFO LEVEL with %d%% of %s", 50, "everything")?;
    log!(logger, "Testing LOG LEVEL")?;
    debug!(logger, "Testing DEBUG (AKA LOG) LEVEL")?;
    verbose!(logger, "Testing TRACE LEVEL")?;

    Ok(())
}
