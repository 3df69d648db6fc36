//! Structured logging to the browser console.
//!
//! Installs a `tracing` subscriber whose fmt layer writes each event to
//! `console.log`. Timestamps are left to the devtools.

use std::io;

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Buffers one formatted event and emits it on flush/drop.
pub struct ConsoleWriter {
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let line = String::from_utf8_lossy(&self.buf);
            web_sys::console::log_1(&line.trim_end().into());
            self.buf.clear();
        }
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        let _ = io::Write::flush(self);
    }
}

/// [`MakeWriter`] handing out [`ConsoleWriter`]s.
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter { buf: Vec::new() }
    }
}

/// Initialize structured logging.
///
/// Default level is "info"; `verbose` raises it to "debug".
pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::new(if verbose { "debug" } else { "info" });

    let _ = tracing_subscriber::registry()
        .with(
            fmt::layer()
                .without_time()
                .with_ansi(false)
                .with_target(true)
                .with_writer(MakeConsoleWriter),
        )
        .with(filter)
        .try_init();
}
