use crate::analysis::{aggregate_monthly, find_extremes, weighted_moving_average};
use crate::error::PipelineError;
use crate::models::MonthlyExtremes;
use crate::services::{CsvRecordService, ReportService};
use crate::utils::{Logger, Timer};
use std::path::Path;

/// Counters and results from one pipeline run.
#[derive(Debug, Clone)]
pub struct PipelineSummary {
    pub records: usize,
    pub months: usize,
    pub moving_average_points: usize,
    pub extremes: MonthlyExtremes,
}

/// Run the full analysis: load records, aggregate monthly volume-weighted
/// averages, compute the trailing 4-month weighted moving average, select
/// the best and worst months, and write the report to `output`.
///
/// Halts without writing anything when the input yields no valid records or
/// fewer than four aggregated months.
pub fn run(input: &Path, output: &Path) -> Result<PipelineSummary, PipelineError> {
    let logger = Logger::new("PIPELINE");
    let timer = Timer::start("full analysis");

    let records = CsvRecordService::new().load_records(input)?;
    if records.is_empty() {
        return Err(PipelineError::NoRecords);
    }

    let monthly = aggregate_monthly(&records);
    logger.info(&format!(
        "Aggregated {} months from {} records",
        monthly.len(),
        records.len()
    ));
    if monthly.is_empty() {
        return Err(PipelineError::NoRecords);
    }

    let moving = weighted_moving_average(&monthly);
    let extremes = match find_extremes(&moving) {
        Some(extremes) => extremes,
        None => {
            return Err(PipelineError::InsufficientMonths {
                months: monthly.len(),
            })
        }
    };
    logger.info(&format!(
        "Best {} ({:.2}), worst {} ({:.2}) across {} moving-average points",
        extremes.best.month,
        extremes.best.value,
        extremes.worst.month,
        extremes.worst.value,
        moving.len()
    ));

    ReportService::new().write_report(output, &extremes)?;
    timer.log_elapsed("PIPELINE");

    Ok(PipelineSummary {
        records: records.len(),
        months: monthly.len(),
        moving_average_points: moving.len(),
        extremes,
    })
}
