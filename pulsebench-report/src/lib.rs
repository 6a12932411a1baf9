#![warn(missing_docs)]
//! Pulsebench Report - Reporter Sinks
//!
//! Concrete consumers of completed benchmark records:
//! - Console table ([`StdoutReporter`]) with header/row formatting exposed
//!   as pure functions
//! - JSON lines ([`JsonLinesReporter`]) for files and structured-metrics
//!   pipes
//!
//! Any further sink only needs to implement `pulsebench_core::Reporter`;
//! the controller never changes.

mod json;
mod table;

pub use json::JsonLinesReporter;
pub use table::{StdoutReporter, format_header, format_row};
