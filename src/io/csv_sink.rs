//! CSV-file report sink.

use std::fs::File;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::FxtrendError;
use crate::io::ReportSink;
use crate::models::TrendRow;

const HEADER: [&str; 5] = [
    "report_date",
    "currency_symbol",
    "avg_percent_change",
    "current_rank",
    "prior_rank",
];

/// Writes the trend report as a headered CSV file, one row per ranked
/// currency. An absent prior rank becomes an empty cell. An empty report
/// still produces the header row.
pub struct CsvReportSink {
    path: PathBuf,
}

impl CsvReportSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ReportSink for CsvReportSink {
    async fn write(&self, report: &[TrendRow]) -> Result<(), FxtrendError> {
        let file = File::create(&self.path)?;
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        writer.write_record(HEADER)?;
        for row in report {
            writer.serialize(row)?;
        }
        writer.flush()?;
        debug!(rows = report.len(), path = %self.path.display(), "wrote report csv");
        Ok(())
    }
}
