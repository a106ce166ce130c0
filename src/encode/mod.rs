//! Frame sinks and the export driver that feeds them.

/// Chunked range export.
pub mod export;
/// Sink trait and built-in sinks.
pub mod sink;

pub use export::{ExportOpts, ExportStats, export_all, export_range};
pub use sink::{FrameSink, InMemorySink, JsonLinesSink, SinkConfig};
