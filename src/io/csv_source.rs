//! CSV-file observation source.

use std::fs::File;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::debug;

use crate::error::FxtrendError;
use crate::io::ObservationSource;
use crate::models::RawObservation;

const CURRENCY_COLUMN: &str = "currency";
const DATE_COLUMN: &str = "date";
const RATE_COLUMN: &str = "exchange_rate";

/// Reads raw observations from a headered CSV file.
///
/// The file must carry `currency`, `date` and `exchange_rate` columns;
/// extra columns (base currency, display name, ...) are ignored. Cell
/// values are passed through untouched so the normalizer stays the single
/// place that decides row validity; a short row simply yields empty cells.
pub struct CsvObservationSource {
    path: PathBuf,
}

impl CsvObservationSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl ObservationSource for CsvObservationSource {
    async fn fetch(&self) -> Result<Vec<RawObservation>, FxtrendError> {
        let file = File::open(&self.path)?;
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let headers = reader.headers()?.clone();
        let column = |name: &str| {
            headers
                .iter()
                .position(|header| header.eq_ignore_ascii_case(name))
                .ok_or_else(|| FxtrendError::MissingColumn(name.to_string()))
        };
        let currency_idx = column(CURRENCY_COLUMN)?;
        let date_idx = column(DATE_COLUMN)?;
        let rate_idx = column(RATE_COLUMN)?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let cell = |idx: usize| record.get(idx).unwrap_or_default().to_string();
            rows.push(RawObservation {
                currency_symbol: cell(currency_idx),
                rate_date: cell(date_idx),
                exchange_rate: cell(rate_idx),
            });
        }

        debug!(rows = rows.len(), path = %self.path.display(), "read observation csv");
        Ok(rows)
    }
}
