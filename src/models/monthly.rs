use super::month_key::MonthKey;
use serde::{Deserialize, Serialize};

/// Volume-weighted average price for one calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MonthlyAverage {
    pub month: MonthKey,
    pub average_price: f64,
}

impl MonthlyAverage {
    pub fn new(month: MonthKey, average_price: f64) -> Self {
        Self {
            month,
            average_price,
        }
    }
}

/// One point of the trailing 4-month weighted moving average series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MovingAveragePoint {
    pub month: MonthKey,
    pub value: f64,
}

/// Best and worst months by weighted moving average.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MonthlyExtremes {
    pub best: MovingAveragePoint,
    pub worst: MovingAveragePoint,
}
