use fxtrend::config::Config;
use fxtrend::io::{CsvObservationSource, CsvReportSink, ObservationSource, ReportSink};
use fxtrend::logging;
use fxtrend::report::TrendComparator;
use fxtrend::FxtrendError;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), FxtrendError> {
    dotenvy::dotenv().ok();
    logging::init_logging();

    let config = Config::from_env()?;
    info!(
        environment = %config.environment,
        rates_csv = %config.rates_csv.display(),
        "starting trend report run"
    );

    let source = CsvObservationSource::new(&config.rates_csv);
    let observations = source.fetch().await?;
    info!(rows = observations.len(), "loaded raw observations");

    let outcome = TrendComparator::compare(&observations, config.as_of).await?;
    if let Some(max_ratio) = config.max_drop_ratio {
        outcome.summary.check_drop_ratio(max_ratio)?;
    }

    let sink = CsvReportSink::new(&config.report_csv);
    sink.write(&outcome.report).await?;
    info!(
        report_rows = outcome.report.len(),
        rows_dropped = outcome.summary.rows_dropped,
        invalid_currencies = outcome.summary.invalid_currencies.len(),
        report_csv = %config.report_csv.display(),
        "trend report written"
    );

    Ok(())
}
