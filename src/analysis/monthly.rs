use crate::models::{MonthKey, MonthlyAverage};
use csv::StringRecord;
use std::collections::HashMap;
use tracing::warn;

/// Column layout of the input file.
const DATE_FIELD: usize = 0;
const ADJ_CLOSE_FIELD: usize = 5;
const VOLUME_FIELD: usize = 6;
const MIN_FIELDS: usize = 7;

/// Running totals for one month during aggregation.
#[derive(Debug, Default, Clone, Copy)]
struct MonthlyAccumulator {
    total_sales: f64,
    total_volume: i64,
}

/// Group records by calendar month and compute the volume-weighted average
/// price per month. Rows that fail to parse are logged and skipped; months
/// whose total volume is zero are excluded. The result is sorted
/// chronologically ascending.
pub fn aggregate_monthly(records: &[StringRecord]) -> Vec<MonthlyAverage> {
    let mut totals: HashMap<MonthKey, MonthlyAccumulator> = HashMap::new();

    for (idx, record) in records.iter().enumerate() {
        match parse_row(record) {
            Some((month, close, volume)) => {
                let entry = totals.entry(month).or_default();
                entry.total_sales += volume as f64 * close;
                entry.total_volume += volume;
            }
            None => {
                // Row 1 is the header, so data row idx maps to file row idx + 2.
                warn!("Skipping invalid record at row {}: {:?}", idx + 2, record);
            }
        }
    }

    let mut averages: Vec<MonthlyAverage> = totals
        .into_iter()
        .filter(|(_, acc)| acc.total_volume > 0)
        .map(|(month, acc)| MonthlyAverage::new(month, acc.total_sales / acc.total_volume as f64))
        .collect();

    // Grouping-map iteration order is arbitrary; downstream windowing needs
    // a chronological series.
    averages.sort_by_key(|avg| avg.month);
    averages
}

/// Extract (month, adjusted close, volume) from one raw row.
/// `None` means the row is unusable: too few fields, a bad date, or a
/// non-numeric close or volume.
fn parse_row(record: &StringRecord) -> Option<(MonthKey, f64, i64)> {
    if record.len() < MIN_FIELDS {
        return None;
    }
    let month = MonthKey::from_date_str(record.get(DATE_FIELD)?)?;
    let close = record.get(ADJ_CLOSE_FIELD)?.trim().parse::<f64>().ok()?;
    let volume = record.get(VOLUME_FIELD)?.trim().parse::<i64>().ok()?;
    Some((month, close, volume))
}
