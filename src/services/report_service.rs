use crate::error::PipelineError;
use crate::models::MonthlyExtremes;
use crate::utils::Logger;
use std::path::Path;

/// Default name of the report file.
pub const DEFAULT_OUTPUT_FILE: &str = "sp500_output.txt";

/// Writes the best/worst month report.
pub struct ReportService {
    logger: Logger,
}

impl ReportService {
    pub fn new() -> Self {
        Self {
            logger: Logger::new("REPORT"),
        }
    }

    /// Render the two labeled report sections. Month labels use '-' as the
    /// separator and values are rounded to two decimal places.
    pub fn render(extremes: &MonthlyExtremes) -> String {
        format!(
            "The best month for S&P 500:\n{}, {:.2}\nThe worst month for S&P 500:\n{}, {:.2}\n",
            extremes.best.month.output_label(),
            extremes.best.value,
            extremes.worst.month.output_label(),
            extremes.worst.value,
        )
    }

    pub fn write_report(&self, path: &Path, extremes: &MonthlyExtremes) -> Result<(), PipelineError> {
        std::fs::write(path, Self::render(extremes)).map_err(|source| {
            PipelineError::OutputWrite {
                path: path.to_path_buf(),
                source,
            }
        })?;
        self.logger
            .info(&format!("Report written to {}", path.display()));
        Ok(())
    }
}

impl Default for ReportService {
    fn default() -> Self {
        Self::new()
    }
}
