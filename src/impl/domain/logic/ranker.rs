use std::num::NonZeroUsize;

use crate::entities::RankedGroup;

/// Orders groups by value, largest first, and keeps the top N.
///
/// Equal values fall back to ascending key order, so the result never depends
/// on the iteration order of the input.
pub struct Ranker {
    top_n: NonZeroUsize,
}

impl Ranker {
    pub fn new(top_n: NonZeroUsize) -> Self {
        Self { top_n }
    }

    pub fn rank<I>(&self, aggregates: I) -> Vec<RankedGroup>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut groups: Vec<RankedGroup> = aggregates
            .into_iter()
            .map(|(key, value)| RankedGroup { key, value })
            .collect();
        groups.sort_unstable_by(|a, b| {
            b.value
                .total_cmp(&a.value)
                .then_with(|| a.key.cmp(&b.key))
        });
        groups.truncate(self.top_n.get());
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top(n: usize) -> Ranker {
        Ranker::new(NonZeroUsize::new(n).expect("test top-N is non-zero"))
    }

    fn groups(pairs: &[(&str, f64)]) -> Vec<(String, f64)> {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn descending_by_value() {
        let ranked = top(10).rank(groups(&[("GH", 1e9), ("NG", 8e9), ("CN", 3e9)]));
        let keys: Vec<&str> = ranked.iter().map(|g| g.key.as_str()).collect();
        assert_eq!(keys, vec!["NG", "CN", "GH"]);
    }

    #[test]
    fn ties_break_by_ascending_key() {
        let ranked = top(10).rank(groups(&[("B", 100.0), ("A", 100.0)]));
        assert_eq!(
            ranked,
            vec![RankedGroup::new("A", 100.0), RankedGroup::new("B", 100.0)]
        );
    }

    #[test]
    fn truncates_to_top_n() {
        let ranked = top(1).rank(groups(&[("NG", 8e9), ("GH", 1e9)]));
        assert_eq!(ranked, vec![RankedGroup::new("NG", 8e9)]);
    }

    #[test]
    fn top_n_larger_than_group_count_returns_everything() {
        assert_eq!(top(20).rank(groups(&[("NG", 1.0), ("GH", 2.0)])).len(), 2);
        assert!(top(5).rank(Vec::new()).is_empty());
    }

    #[test]
    fn same_input_in_any_order_ranks_identically() {
        let forward = groups(&[("A", 5.0), ("B", 5.0), ("C", 7.0), ("D", -1.0), ("E", 0.0)]);
        let mut backward = forward.clone();
        backward.reverse();
        assert_eq!(top(4).rank(forward), top(4).rank(backward));
    }
}
