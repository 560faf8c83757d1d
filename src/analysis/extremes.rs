use crate::models::{MonthlyExtremes, MovingAveragePoint};

/// Select the best and worst months from the moving-average series.
/// Strict comparisons keep the first occurrence on ties, and a later
/// non-finite value never displaces a finite extreme. Empty input yields
/// `None`.
pub fn find_extremes(points: &[MovingAveragePoint]) -> Option<MonthlyExtremes> {
    let (first, rest) = points.split_first()?;
    let mut best = *first;
    let mut worst = *first;

    for point in rest {
        if point.value > best.value {
            best = *point;
        }
        if point.value < worst.value {
            worst = *point;
        }
    }

    Some(MonthlyExtremes { best, worst })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MonthKey;

    fn point(month: u32, value: f64) -> MovingAveragePoint {
        MovingAveragePoint {
            month: MonthKey::new(month, 2021),
            value,
        }
    }

    #[test]
    fn test_best_and_worst_on_known_series() {
        let points = vec![point(4, 111.0), point(5, 121.0), point(6, 131.0)];
        let extremes = find_extremes(&points).unwrap();
        assert_eq!(extremes.best.month, MonthKey::new(6, 2021));
        assert!((extremes.best.value - 131.0).abs() < 1e-9);
        assert_eq!(extremes.worst.month, MonthKey::new(4, 2021));
        assert!((extremes.worst.value - 111.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_yields_none() {
        assert!(find_extremes(&[]).is_none());
    }

    #[test]
    fn test_single_point_is_both_best_and_worst() {
        let extremes = find_extremes(&[point(1, 50.0)]).unwrap();
        assert_eq!(extremes.best, extremes.worst);
    }

    #[test]
    fn test_ties_keep_first_occurrence() {
        let points = vec![
            point(1, 100.0),
            point(2, 100.0),
            point(3, 90.0),
            point(4, 90.0),
        ];
        let extremes = find_extremes(&points).unwrap();
        assert_eq!(extremes.best.month, MonthKey::new(1, 2021));
        assert_eq!(extremes.worst.month, MonthKey::new(3, 2021));
    }
}
