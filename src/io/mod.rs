//! Boundary adapters: where observation batches come from and where the
//! finished report goes. The pipeline itself performs no I/O.

pub mod csv_sink;
pub mod csv_source;
pub mod jsonl_sink;
pub mod memory;

use async_trait::async_trait;

use crate::error::FxtrendError;
use crate::models::{RawObservation, TrendRow};

pub use csv_sink::CsvReportSink;
pub use csv_source::CsvObservationSource;
pub use jsonl_sink::JsonlReportSink;
pub use memory::{MemoryObservationSource, MemoryReportSink};

/// Yields the raw observation batch for a run.
#[async_trait]
pub trait ObservationSource {
    async fn fetch(&self) -> Result<Vec<RawObservation>, FxtrendError>;
}

/// Accepts the finished trend report for persistence or export.
#[async_trait]
pub trait ReportSink {
    async fn write(&self, report: &[TrendRow]) -> Result<(), FxtrendError>;
}
