//! Environment-driven runtime configuration.

use std::env;
use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::FxtrendError;

/// Deployment environment, used to pick the log format.
pub fn get_environment() -> String {
    env::var("ENVIRONMENT").unwrap_or_else(|_| "sandbox".to_string())
}

/// Runtime configuration for the report binary.
#[derive(Debug, Clone)]
pub struct Config {
    pub environment: String,
    /// Input CSV of daily exchange rates.
    pub rates_csv: PathBuf,
    /// Output CSV for the trend report.
    pub report_csv: PathBuf,
    /// Optional fixed as-of date; defaults to the latest date in the input.
    pub as_of: Option<NaiveDate>,
    /// Optional ceiling on the malformed-row ratio before the run fails.
    pub max_drop_ratio: Option<f64>,
}

impl Config {
    pub fn from_env() -> Result<Self, FxtrendError> {
        let rates_csv = env::var("RATES_CSV")
            .map_err(|_| FxtrendError::Config("RATES_CSV is not set".to_string()))?
            .into();
        let report_csv = env::var("REPORT_CSV")
            .unwrap_or_else(|_| "daily_report.csv".to_string())
            .into();

        let as_of = match env::var("REPORT_AS_OF") {
            Ok(value) => Some(value.parse::<NaiveDate>().map_err(|_| {
                FxtrendError::Config(format!("REPORT_AS_OF is not an ISO date: {value}"))
            })?),
            Err(_) => None,
        };

        let max_drop_ratio = match env::var("MAX_DROP_RATIO") {
            Ok(value) => Some(value.parse::<f64>().map_err(|_| {
                FxtrendError::Config(format!("MAX_DROP_RATIO is not a number: {value}"))
            })?),
            Err(_) => None,
        };

        Ok(Self {
            environment: get_environment(),
            rates_csv,
            report_csv,
            as_of,
            max_drop_ratio,
        })
    }
}
