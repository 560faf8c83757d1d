use crate::error::PipelineError;
use crate::utils::{Logger, Timer};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Reads delimited price history files into raw field rows.
///
/// The header row is consumed and blank rows are dropped, but no per-row
/// validation happens here: the aggregator decides what parses. A missing
/// or unreadable file is the caller's problem; a row the csv reader cannot
/// decode is logged and skipped like any other bad record.
pub struct CsvRecordService {
    logger: Logger,
}

impl CsvRecordService {
    pub fn new() -> Self {
        Self {
            logger: Logger::new("CSV_SERVICE"),
        }
    }

    /// Load all data rows from the file at `path`.
    pub fn load_records(&self, path: &Path) -> Result<Vec<StringRecord>, PipelineError> {
        let timer = Timer::start(&format!("load {}", path.display()));

        let file = File::open(path).map_err(|source| PipelineError::FileAccess {
            path: path.to_path_buf(),
            source,
        })?;

        let rows = self.load_from_reader(file);
        self.logger.info(&format!(
            "Loaded {} data rows from {}",
            rows.len(),
            path.display()
        ));
        timer.log_elapsed("CSV_SERVICE");
        Ok(rows)
    }

    /// Load data rows from any reader producing CSV text. Lets tests feed
    /// in-memory input without touching disk.
    pub fn load_from_reader<R: Read>(&self, input: R) -> Vec<StringRecord> {
        let mut reader = ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_reader(input);

        let mut rows = Vec::new();
        for result in reader.records() {
            match result {
                Ok(record) if !record.is_empty() => rows.push(record),
                Ok(_) => {}
                Err(e) => {
                    self.logger.warn(&format!("Skipping unreadable row: {}", e));
                }
            }
        }
        rows
    }
}

impl Default for CsvRecordService {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE: &str = "\
Date,Open,High,Low,Close,Adj Close,Volume
01/04/2021,1.0,2.0,0.5,1.5,100.0,1000
01/05/2021,1.0,2.0,0.5,1.5,101.0,2000
";

    #[test]
    fn test_header_row_is_skipped() {
        let service = CsvRecordService::new();
        let rows = service.load_from_reader(SAMPLE.as_bytes());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get(0), Some("01/04/2021"));
        assert_eq!(rows[1].get(6), Some("2000"));
    }

    #[test]
    fn test_short_rows_are_kept_for_downstream_validation() {
        let input = "Date,Open,High,Low,Close,Adj Close,Volume\nonly,three,fields\n";
        let service = CsvRecordService::new();
        let rows = service.load_from_reader(input.as_bytes());
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].len(), 3);
    }

    #[test]
    fn test_missing_file_is_a_file_access_error() {
        let service = CsvRecordService::new();
        let err = service
            .load_records(Path::new("/nonexistent/sp500.csv"))
            .unwrap_err();
        assert!(matches!(err, PipelineError::FileAccess { .. }));
    }

    #[test]
    fn test_load_records_from_disk() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();

        let service = CsvRecordService::new();
        let rows = service.load_records(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_header_only_file_yields_no_rows() {
        let input = "Date,Open,High,Low,Close,Adj Close,Volume\n";
        let service = CsvRecordService::new();
        assert!(service.load_from_reader(input.as_bytes()).is_empty());
    }
}
