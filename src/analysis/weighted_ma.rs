use crate::models::{MonthlyAverage, MovingAveragePoint};

/// Window width of the trailing weighted moving average.
pub const WINDOW: usize = 4;

/// Per-window weights, indexed oldest to most recent. The oldest month in
/// each window carries the largest weight.
const WEIGHTS: [f64; WINDOW] = [4.0, 3.0, 2.0, 1.0];
const TOTAL_WEIGHT: f64 = 10.0;

/// Compute the trailing 4-month weighted moving average over the monthly
/// series. The input is sorted chronologically into a fresh vector before
/// windowing, so callers may pass months in any order. Each emitted point
/// is keyed by the most recent month of its window; the first three months
/// produce no output, and fewer than four months yields an empty series.
pub fn weighted_moving_average(months: &[MonthlyAverage]) -> Vec<MovingAveragePoint> {
    let mut ordered: Vec<MonthlyAverage> = months.to_vec();
    ordered.sort_by_key(|avg| avg.month);

    ordered
        .windows(WINDOW)
        .map(|window| {
            let weighted_sum: f64 = window
                .iter()
                .zip(WEIGHTS.iter())
                .map(|(avg, weight)| avg.average_price * weight)
                .sum();
            MovingAveragePoint {
                month: window[WINDOW - 1].month,
                value: weighted_sum / TOTAL_WEIGHT,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthKey;

    fn series(values: &[f64]) -> Vec<MonthlyAverage> {
        values
            .iter()
            .enumerate()
            .map(|(i, &value)| MonthlyAverage::new(MonthKey::new(i as u32 + 1, 2021), value))
            .collect()
    }

    #[test]
    fn test_hand_computed_windows() {
        let months = series(&[100.0, 110.0, 120.0, 130.0, 140.0, 150.0]);
        let wma = weighted_moving_average(&months);
        assert_eq!(wma.len(), 3);

        // (100*4 + 110*3 + 120*2 + 130*1) / 10
        assert_eq!(wma[0].month, MonthKey::new(4, 2021));
        assert!((wma[0].value - 111.0).abs() < 1e-9);

        // (110*4 + 120*3 + 130*2 + 140*1) / 10
        assert_eq!(wma[1].month, MonthKey::new(5, 2021));
        assert!((wma[1].value - 121.0).abs() < 1e-9);

        // (120*4 + 130*3 + 140*2 + 150*1) / 10
        assert_eq!(wma[2].month, MonthKey::new(6, 2021));
        assert!((wma[2].value - 131.0).abs() < 1e-9);
    }

    #[test]
    fn test_output_length_is_input_minus_three() {
        for n in 4..9 {
            let months = series(&vec![100.0; n]);
            assert_eq!(weighted_moving_average(&months).len(), n - 3);
        }
    }

    #[test]
    fn test_fewer_than_four_months_yields_empty() {
        assert!(weighted_moving_average(&[]).is_empty());
        assert!(weighted_moving_average(&series(&[100.0])).is_empty());
        assert!(weighted_moving_average(&series(&[100.0, 110.0, 120.0])).is_empty());
    }

    #[test]
    fn test_input_order_does_not_matter() {
        let ascending = series(&[100.0, 110.0, 120.0, 130.0, 140.0]);
        let mut shuffled = ascending.clone();
        shuffled.swap(0, 4);
        shuffled.swap(1, 3);
        assert_eq!(
            weighted_moving_average(&ascending),
            weighted_moving_average(&shuffled)
        );
    }

    #[test]
    fn test_windows_cross_year_boundaries() {
        let months = vec![
            MonthlyAverage::new(MonthKey::new(11, 2020), 100.0),
            MonthlyAverage::new(MonthKey::new(12, 2020), 110.0),
            MonthlyAverage::new(MonthKey::new(1, 2021), 120.0),
            MonthlyAverage::new(MonthKey::new(2, 2021), 130.0),
        ];
        let wma = weighted_moving_average(&months);
        assert_eq!(wma.len(), 1);
        assert_eq!(wma[0].month, MonthKey::new(2, 2021));
        assert!((wma[0].value - 111.0).abs() < 1e-9);
    }
}
