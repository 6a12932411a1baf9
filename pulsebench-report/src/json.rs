//! JSON Lines Sink
//!
//! Writes one JSON object per completed run to any `io::Write`, each
//! enveloped with a UTC timestamp and the harness version. Suitable for
//! files and structured-metrics pipes.

use chrono::{DateTime, Utc};
use pulsebench_core::{BenchmarkRecord, Reporter};
use serde::Serialize;
use std::cell::RefCell;
use std::io::Write;

#[derive(Serialize)]
struct Envelope<'a> {
    timestamp: DateTime<Utc>,
    harness: &'static str,
    version: &'static str,
    record: &'a BenchmarkRecord,
}

/// Reporter sink emitting one JSON line per record.
///
/// Write failures are printed to stderr and never escalated into the
/// controller: the run outcome is already fixed when the sink runs, and a
/// reporter must not corrupt the caller's control flow. Access is
/// single-threaded, hence the plain `RefCell`.
pub struct JsonLinesReporter<W: Write> {
    sink: RefCell<W>,
}

impl<W: Write> JsonLinesReporter<W> {
    /// Wrap a writer.
    pub fn new(sink: W) -> Self {
        Self {
            sink: RefCell::new(sink),
        }
    }

    /// Unwrap the underlying writer.
    pub fn into_inner(self) -> W {
        self.sink.into_inner()
    }
}

impl<W: Write> Reporter for JsonLinesReporter<W> {
    fn report(&self, record: &BenchmarkRecord) {
        let envelope = Envelope {
            timestamp: Utc::now(),
            harness: env!("CARGO_PKG_NAME"),
            version: env!("CARGO_PKG_VERSION"),
            record,
        };

        let mut sink = self.sink.borrow_mut();
        let written = serde_json::to_writer(&mut *sink, &envelope)
            .map_err(std::io::Error::from)
            .and_then(|()| writeln!(sink));
        if let Err(e) = written {
            eprintln!("json reporter: failed to write record: {e}");
        }
    }
}
