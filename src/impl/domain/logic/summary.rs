use std::collections::HashSet;

use crate::entities::{Column, Dimension, FilteredView, KeyMetrics, Measure};

pub struct SummaryCalculator<'v, 'a> {
    view: &'v FilteredView<'a>,
}

impl<'v, 'a> SummaryCalculator<'v, 'a> {
    pub fn new(view: &'v FilteredView<'a>) -> Self {
        Self { view }
    }

    pub fn process(self) -> KeyMetrics {
        KeyMetrics {
            record_count: self.view.len(),
            total_cif: self.total(Measure::CifValue),
            total_fob: self.total(Measure::FobValue),
            total_tax: self.total(Measure::TotalTax),
            average_cif: self.average(Measure::CifValue),
            unique_importers: self.unique(Dimension::Importer),
            unique_origins: self.unique(Dimension::CountryOfOrigin),
            cif_tax_correlation: self.correlation(Measure::CifValue, Measure::TotalTax),
        }
    }

    fn has(&self, column: impl Into<Column>) -> bool {
        self.view.store().has_column(column)
    }

    fn total(&self, measure: Measure) -> Option<f64> {
        self.has(measure).then(|| {
            self.view
                .records()
                .filter_map(|r| r.measure(measure))
                .sum()
        })
    }

    fn average(&self, measure: Measure) -> Option<f64> {
        if !self.has(measure) {
            return None;
        }
        let (sum, count) = self
            .view
            .records()
            .filter_map(|r| r.measure(measure))
            .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    fn unique(&self, dimension: Dimension) -> Option<usize> {
        self.has(dimension).then(|| {
            self.view
                .records()
                .filter_map(|r| r.dimension(dimension))
                .collect::<HashSet<_>>()
                .len()
        })
    }

    fn correlation(&self, x: Measure, y: Measure) -> Option<f64> {
        if !self.has(x) || !self.has(y) {
            return None;
        }
        let pairs: Vec<(f64, f64)> = self
            .view
            .records()
            .filter_map(|r| Some((r.measure(x)?, r.measure(y)?)))
            .collect();
        pearson(&pairs)
    }
}

/// Sample Pearson correlation. `None` for fewer than two pairs or when either
/// side has zero variance.
pub(crate) fn pearson(pairs: &[(f64, f64)]) -> Option<f64> {
    if pairs.len() < 2 {
        return None;
    }
    let n = pairs.len() as f64;
    let mean_x = pairs.iter().map(|(x, _)| x).sum::<f64>() / n;
    let mean_y = pairs.iter().map(|(_, y)| y).sum::<f64>() / n;
    let (cov, var_x, var_y) = pairs.iter().fold((0.0, 0.0, 0.0), |(c, vx, vy), (x, y)| {
        let dx = x - mean_x;
        let dy = y - mean_y;
        (c + dx * dy, vx + dx * dx, vy + dy * dy)
    });
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    Some((cov / (var_x.sqrt() * var_y.sqrt())).clamp(-1.0, 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{RecordStore, TradeRecord};

    fn record(importer: Option<&str>, cif: Option<f64>, tax: Option<f64>) -> TradeRecord {
        TradeRecord {
            importer: importer.map(str::to_string),
            cif_value: cif,
            total_tax: tax,
            ..Default::default()
        }
    }

    #[test]
    fn metrics_over_records() {
        let store = RecordStore::from_records(vec![
            record(Some("Acme"), Some(100.0), Some(10.0)),
            record(Some("Acme"), Some(300.0), Some(30.0)),
            record(Some("Zenith"), None, Some(5.0)),
            record(None, Some(200.0), None),
        ]);
        let view = store.view();
        let metrics = SummaryCalculator::new(&view).process();
        assert_eq!(metrics.record_count, 4);
        assert_eq!(metrics.total_cif, Some(600.0));
        assert_eq!(metrics.total_tax, Some(45.0));
        assert_eq!(metrics.total_fob, Some(0.0));
        assert_eq!(metrics.average_cif, Some(200.0));
        assert_eq!(metrics.unique_importers, Some(2));
        assert_eq!(metrics.unique_origins, Some(0));
        let correlation = metrics.cif_tax_correlation.unwrap_or_default();
        assert!((correlation - 1.0).abs() < 1e-12);
    }

    #[test]
    fn empty_view_gives_zero_totals_and_no_average() {
        let store = RecordStore::from_records(Vec::new());
        let view = store.view();
        let metrics = SummaryCalculator::new(&view).process();
        assert_eq!(metrics.record_count, 0);
        assert_eq!(metrics.total_cif, Some(0.0));
        assert_eq!(metrics.average_cif, None);
        assert_eq!(metrics.cif_tax_correlation, None);
    }

    #[test]
    fn pearson_of_constant_series_is_undefined() {
        assert_eq!(pearson(&[(1.0, 2.0), (1.0, 3.0)]), None);
        assert_eq!(pearson(&[(1.0, 2.0)]), None);
        let inverse = pearson(&[(1.0, 3.0), (2.0, 2.0), (3.0, 1.0)]).unwrap_or_default();
        assert!((inverse + 1.0).abs() < 1e-12);
    }
}
