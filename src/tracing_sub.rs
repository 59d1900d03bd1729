use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use tracing::Level;

/// Where log lines go. A full-screen terminal UI owns stdout/stderr, so
/// without a log file everything is discarded.
#[derive(Clone, Debug, Default)]
pub enum LogTarget {
    File(Arc<File>),
    #[default]
    Discard,
}

impl LogTarget {
    /// Opens `path` for appending, creating it if needed.
    pub fn file(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(LogTarget::File(Arc::new(file)))
    }
}

pub struct DelegatingWriter {
    inner: DelegatingInner,
}

enum DelegatingInner {
    File(Arc<File>),
    Sink(io::Sink),
}

impl DelegatingWriter {
    fn new(target: &LogTarget) -> Self {
        match target {
            LogTarget::File(file) => DelegatingWriter {
                inner: DelegatingInner::File(Arc::clone(file)),
            },
            LogTarget::Discard => DelegatingWriter {
                inner: DelegatingInner::Sink(io::sink()),
            },
        }
    }
}

impl Write for DelegatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match &mut self.inner {
            DelegatingInner::File(f) => (&**f).write(buf),
            DelegatingInner::Sink(s) => s.write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match &mut self.inner {
            DelegatingInner::File(f) => (&**f).flush(),
            DelegatingInner::Sink(s) => s.flush(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct SubscriberMakeWriter {
    target: LogTarget,
}

impl SubscriberMakeWriter {
    pub fn new(target: LogTarget) -> Self {
        Self { target }
    }
}

impl<'a> tracing_subscriber::fmt::MakeWriter<'a> for SubscriberMakeWriter {
    type Writer = DelegatingWriter;

    fn make_writer(&'a self) -> Self::Writer {
        DelegatingWriter::new(&self.target)
    }
}

/// Initialize the tracing subscriber. Safe to call multiple times;
/// subsequent calls are no-ops for the global subscriber.
pub fn init_default(target: LogTarget, level: Level) {
    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(SubscriberMakeWriter::new(target))
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
}
