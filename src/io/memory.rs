//! In-memory source and sink, used by tests and embedders.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;

use crate::error::FxtrendError;
use crate::io::{ObservationSource, ReportSink};
use crate::models::{RawObservation, TrendRow};

pub struct MemoryObservationSource {
    rows: Vec<RawObservation>,
}

impl MemoryObservationSource {
    pub fn new(rows: Vec<RawObservation>) -> Self {
        Self { rows }
    }
}

#[async_trait]
impl ObservationSource for MemoryObservationSource {
    async fn fetch(&self) -> Result<Vec<RawObservation>, FxtrendError> {
        Ok(self.rows.clone())
    }
}

#[derive(Default)]
pub struct MemoryReportSink {
    written: Mutex<Vec<TrendRow>>,
}

impl MemoryReportSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rows written so far, draining the sink.
    pub fn take(&self) -> Vec<TrendRow> {
        std::mem::take(&mut *self.guard())
    }

    fn guard(&self) -> MutexGuard<'_, Vec<TrendRow>> {
        match self.written.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

#[async_trait]
impl ReportSink for MemoryReportSink {
    async fn write(&self, report: &[TrendRow]) -> Result<(), FxtrendError> {
        self.guard().extend_from_slice(report);
        Ok(())
    }
}
