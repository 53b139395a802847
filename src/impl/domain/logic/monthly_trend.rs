use std::collections::BTreeMap;

use crate::entities::{Measure, MonthlyPoint, TradeRecord, YearMonth};

/// Sums a measure per receipt month, in chronological order. Records without
/// a receipt date do not contribute.
pub struct MonthlyTrend {
    measure: Measure,
}

impl MonthlyTrend {
    pub fn new(measure: Measure) -> Self {
        Self { measure }
    }

    pub fn compute<'a, I>(&self, records: I) -> Vec<MonthlyPoint>
    where
        I: IntoIterator<Item = &'a TradeRecord>,
    {
        records
            .into_iter()
            .filter_map(|r| {
                r.receipt_date
                    .map(|d| (YearMonth::from(d), r.measure(self.measure).unwrap_or(0.0)))
            })
            .fold(BTreeMap::new(), |mut months, (month, value)| {
                *months.entry(month).or_insert(0.0) += value;
                months
            })
            .into_iter()
            .map(|(month, value)| MonthlyPoint { month, value })
            .collect()
    }
}
