//! `tracing` output routed to the browser console.
//!
//! The fmt layer formats each event into a buffer; when the writer is dropped
//! the line goes to the `console` method matching the event's level, so the
//! devtools level filter works as expected.

use std::io::{self, Write};
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Console method a line is sent through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleMethod {
    Error,
    Warn,
    Info,
    Debug,
}

impl From<&Level> for ConsoleMethod {
    fn from(level: &Level) -> Self {
        match *level {
            Level::ERROR => ConsoleMethod::Error,
            Level::WARN => ConsoleMethod::Warn,
            Level::INFO => ConsoleMethod::Info,
            _ => ConsoleMethod::Debug,
        }
    }
}

/// Produces one [`ConsoleWriter`] per formatted event.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleMakeWriter;

impl<'a> MakeWriter<'a> for ConsoleMakeWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(ConsoleMethod::Info)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(meta.level().into())
    }
}

/// Buffers one formatted event and emits it on drop.
pub struct ConsoleWriter {
    method: ConsoleMethod,
    buffer: Vec<u8>,
}

impl ConsoleWriter {
    fn new(method: ConsoleMethod) -> Self {
        Self {
            method,
            buffer: Vec::new(),
        }
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let Some(line) = console_line(&self.buffer) else {
            return;
        };
        let line = wasm_bindgen::JsValue::from_str(&line);
        match self.method {
            ConsoleMethod::Error => web_sys::console::error_1(&line),
            ConsoleMethod::Warn => web_sys::console::warn_1(&line),
            ConsoleMethod::Info => web_sys::console::info_1(&line),
            ConsoleMethod::Debug => web_sys::console::debug_1(&line),
        }
    }
}

/// Text to print for a buffered event, without the trailing newline.
fn console_line(buffer: &[u8]) -> Option<String> {
    let text = String::from_utf8_lossy(buffer);
    let trimmed = text.trim_end();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Install the console subscriber. Unparseable filters fall back to `info`.
/// Calling this twice keeps the first subscriber.
pub fn init(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .without_time()
        .with_target(false)
        .with_writer(ConsoleMakeWriter)
        .try_init();

    if installed.is_err() {
        tracing::debug!("console subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_map_to_console_methods() {
        assert_eq!(ConsoleMethod::from(&Level::ERROR), ConsoleMethod::Error);
        assert_eq!(ConsoleMethod::from(&Level::WARN), ConsoleMethod::Warn);
        assert_eq!(ConsoleMethod::from(&Level::INFO), ConsoleMethod::Info);
        assert_eq!(ConsoleMethod::from(&Level::DEBUG), ConsoleMethod::Debug);
        assert_eq!(ConsoleMethod::from(&Level::TRACE), ConsoleMethod::Debug);
    }

    #[test]
    fn console_line_strips_newline() {
        assert_eq!(console_line(b" INFO page behaviors ready\n").as_deref(), Some(" INFO page behaviors ready"));
    }

    #[test]
    fn blank_buffers_are_not_printed() {
        assert_eq!(console_line(b""), None);
        assert_eq!(console_line(b"\n"), None);
    }
}
