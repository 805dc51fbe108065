//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber for nippo. Because stdout
//! belongs to the terminal UI, log lines go to a rotating file under the data
//! directory instead (see [`super::file_writer`]).

use std::io;
use std::sync::Arc;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::file_writer::FileWriter;
use crate::infrastructure::paths;
use crate::Config;

/// Initializes the tracing subscriber with rotating file output.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable (highest priority)
/// 2. `log_level` from the configuration file
/// 3. Default: `"info"`
///
/// # Initialization Behavior
///
/// - Creates the data directory if it doesn't exist
/// - Silently does nothing if directory creation fails (observability is
///   optional; the journal still works)
/// - Idempotent: safe to call multiple times, only the first call takes effect
pub fn init_tracing(config: &Config) {
    let level = config
        .log_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let data_dir = paths::data_dir(config.data_dir.as_deref());
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let writer = LogWriter {
        inner: Arc::new(FileWriter::new(paths::log_path(&data_dir))),
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(writer);

    let subscriber = tracing_subscriber::registry().with(filter).with(fmt_layer);

    let _ = subscriber.try_init();
}

/// `MakeWriter` adapter feeding formatted log lines into the rotating writer.
#[derive(Debug, Clone)]
struct LogWriter {
    inner: Arc<FileWriter>,
}

impl<'a> MakeWriter<'a> for LogWriter {
    type Writer = LogWriterHandle;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriterHandle {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// Per-event write handle produced by [`LogWriter`].
struct LogWriterHandle {
    inner: Arc<FileWriter>,
}

impl io::Write for LogWriterHandle {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let text = String::from_utf8_lossy(buf);
        self.inner.write_line(text.trim_end_matches('\n'))?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
