use crate::entities::{Aggregates, Dimension, Measure, TradeRecord};

/// Sums a measure per distinct value of a dimension.
///
/// Records with a null group key are skipped; a null measure counts as zero.
/// Keys compare by exact string equality.
pub struct Aggregator {
    group_by: Dimension,
    measure: Measure,
}

impl Aggregator {
    pub fn new(group_by: Dimension, measure: Measure) -> Self {
        Self { group_by, measure }
    }

    pub fn aggregate<'a, I>(&self, records: I) -> Aggregates
    where
        I: IntoIterator<Item = &'a TradeRecord>,
    {
        records
            .into_iter()
            .filter_map(|r| {
                r.dimension(self.group_by)
                    .map(|key| (key, r.measure(self.measure).unwrap_or(0.0)))
            })
            .fold(Aggregates::new(), |mut sums, (key, value)| {
                match sums.get_mut(key) {
                    Some(sum) => *sum += value,
                    None => {
                        sums.insert(key.to_string(), value);
                    }
                }
                sums
            })
    }
}
