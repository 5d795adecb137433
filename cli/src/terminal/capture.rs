//! Runs a command against a scoped subscriber and hands back what it printed.

use std::io::{self, Write};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;

use crate::terminal::logging::{self, DualstackFormatter};

#[derive(Clone, Default)]
struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0
            .lock()
            .map_err(|_| io::Error::other("poisoned capture buffer"))?
            .extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for SharedBuffer {
    type Writer = SharedBuffer;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// Output of `run` as plain text, one entry per line.
pub fn lines_of<F: FnOnce()>(run: F) -> Vec<String> {
    colored::control::set_override(false);

    let buffer = SharedBuffer::default();
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(logging::default_filter())
        .with_writer(buffer.clone())
        .event_format(DualstackFormatter)
        .finish();
    tracing::subscriber::with_default(subscriber, run);

    let bytes = buffer.0.lock().map(|b| b.clone()).unwrap_or_default();
    String::from_utf8_lossy(&bytes)
        .lines()
        .map(str::to_string)
        .collect()
}

/// True when some line of `lines` contains `needle`.
pub fn printed(lines: &[String], needle: &str) -> bool {
    lines.iter().any(|line| line.contains(needle))
}
