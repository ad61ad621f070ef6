//! JSONL report sink - one JSON object per report row.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::FxtrendError;
use crate::io::ReportSink;
use crate::models::TrendRow;

/// Writes the trend report as JSON Lines, for consumers that prefer a
/// streamable structured format over CSV. An absent prior rank serializes
/// as `null`.
pub struct JsonlReportSink {
    path: PathBuf,
}

impl JsonlReportSink {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ReportSink for JsonlReportSink {
    async fn write(&self, report: &[TrendRow]) -> Result<(), FxtrendError> {
        let file = File::create(&self.path)?;
        let mut writer = BufWriter::new(file);
        for row in report {
            let json = serde_json::to_string(row)?;
            writeln!(writer, "{json}")?;
        }
        writer.flush()?;
        debug!(rows = report.len(), path = %self.path.display(), "wrote report jsonl");
        Ok(())
    }
}
