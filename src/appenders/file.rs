//! File appender implementation
//!
//! Lines are queued to a dedicated writer thread, so logging calls never
//! wait on disk I/O. One writer per appender keeps lines in enqueue order,
//! and each write holds an exclusive advisory lock on the file so other
//! processes appending to the same file do not interleave with it.

use crate::core::{Appender, LogLevel, LoggerError, Result};
use crossbeam_channel::{bounded, unbounded, Receiver, Sender};
use fs2::FileExt;
use parking_lot::Mutex;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::thread;

/// Invoked on the writer thread for every failed write.
pub type FailureCallback = Arc<dyn Fn(&LoggerError) + Send + Sync>;

enum FileCommand {
    Write(String),
    Flush(Sender<()>),
}

/// Appends plain lines to a file in the background.
///
/// A failed write is not retried. It is passed to the failure callback as
/// soon as it happens and returned by the next [`flush`](Appender::flush).
///
/// # Example
///
/// ```no_run
/// use console_enhancer::appenders::FileAppender;
/// use console_enhancer::core::{Appender, LogLevel};
///
/// let mut appender = FileAppender::new("logs/app.log").unwrap();
/// appender.append(LogLevel::Info, "<INFO>\tstarted").unwrap();
/// appender.flush().unwrap();
/// ```
pub struct FileAppender {
    path: PathBuf,
    sender: Option<Sender<FileCommand>>,
    worker: Option<thread::JoinHandle<()>>,
    pending_failure: Arc<Mutex<Option<LoggerError>>>,
    failure_count: Arc<AtomicU64>,
}

impl FileAppender {
    /// Create the appender, creating the parent directory if needed. The
    /// file itself is opened by the writer on first use.
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        Self::build(path.into(), None)
    }

    pub fn with_failure_callback(
        path: impl Into<PathBuf>,
        on_failure: FailureCallback,
    ) -> Result<Self> {
        Self::build(path.into(), Some(on_failure))
    }

    fn build(path: PathBuf, on_failure: Option<FailureCallback>) -> Result<Self> {
        ensure_parent_dir(&path)?;

        let (sender, receiver) = unbounded();
        let pending_failure = Arc::new(Mutex::new(None));
        let failure_count = Arc::new(AtomicU64::new(0));

        let writer = FileWriter {
            path: path.clone(),
            file: None,
            pending_failure: Arc::clone(&pending_failure),
            failure_count: Arc::clone(&failure_count),
            on_failure,
        };

        let worker = thread::Builder::new()
            .name("console-enhancer-file".to_string())
            .spawn(move || writer.run(receiver))
            .map_err(|e| {
                LoggerError::io_operation("starting file writer", "cannot spawn thread", e)
            })?;

        Ok(Self {
            path,
            sender: Some(sender),
            worker: Some(worker),
            pending_failure,
            failure_count,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Number of failed writes since creation
    pub fn failure_count(&self) -> u64 {
        self.failure_count.load(Ordering::Relaxed)
    }

    fn closed(&self) -> LoggerError {
        LoggerError::appender_closed(self.name())
    }
}

impl Appender for FileAppender {
    fn append(&mut self, _level: LogLevel, line: &str) -> Result<()> {
        let sender = self.sender.as_ref().ok_or_else(|| self.closed())?;
        sender
            .send(FileCommand::Write(format!("{}\n", line)))
            .map_err(|_| self.closed())
    }

    /// Wait until every queued line has been written, then report the first
    /// failure seen since the previous flush.
    fn flush(&mut self) -> Result<()> {
        if let Some(ref sender) = self.sender {
            let (ack, done) = bounded(1);
            if sender.send(FileCommand::Flush(ack)).is_ok() {
                let _ = done.recv();
            }
        }

        match self.pending_failure.lock().take() {
            Some(err) => Err(err),
            None => Ok(()),
        }
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        // Closing the channel lets the writer drain the queue and exit
        drop(self.sender.take());

        if let Some(handle) = self.worker.take() {
            if let Err(e) = handle.join() {
                eprintln!("[LOGGER ERROR] File writer thread panicked during shutdown: {:?}", e);
            }
        }
    }
}

struct FileWriter {
    path: PathBuf,
    file: Option<File>,
    pending_failure: Arc<Mutex<Option<LoggerError>>>,
    failure_count: Arc<AtomicU64>,
    on_failure: Option<FailureCallback>,
}

impl FileWriter {
    fn run(mut self, receiver: Receiver<FileCommand>) {
        for command in receiver {
            match command {
                FileCommand::Write(line) => {
                    if let Err(e) = self.write(&line) {
                        self.fail(e);
                    }
                }
                FileCommand::Flush(ack) => {
                    let flushed = self.file.as_mut().map_or(Ok(()), |file| file.flush());
                    if let Err(e) = flushed {
                        self.fail(e);
                    }
                    let _ = ack.send(());
                }
            }
        }
    }

    fn write(&mut self, line: &str) -> io::Result<()> {
        let file = match self.file.take() {
            Some(file) => file,
            None => OpenOptions::new().create(true).append(true).open(&self.path)?,
        };
        let file = self.file.insert(file);

        FileExt::lock_exclusive(&*file)?;
        let written = file.write_all(line.as_bytes());
        let unlocked = FileExt::unlock(&*file);
        written.and(unlocked)
    }

    fn fail(&mut self, error: io::Error) {
        // Reopen on the next write
        self.file = None;
        self.failure_count.fetch_add(1, Ordering::Relaxed);

        let err = LoggerError::file_append(self.path.display().to_string(), error.to_string());
        if let Some(ref on_failure) = self.on_failure {
            on_failure(&err);
        }

        let mut pending = self.pending_failure.lock();
        if pending.is_none() {
            *pending = Some(err);
        }
    }
}

fn ensure_parent_dir(path: &Path) -> Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => {
            std::fs::create_dir_all(parent).map_err(|e| {
                LoggerError::io_operation(
                    "creating log directory",
                    format!("cannot create '{}'", parent.display()),
                    e,
                )
            })
        }
        _ => Ok(()),
    }
}
