use iso_currency::Currency;

use crate::entities::{DashboardReport, KeyMetrics, Measure, TrendReport, ViewOutcome, ViewReport};

use super::{
    scale_fmt::{axis_label, humanize, ScaleUnit},
    utils::{format_amount, format_grouped},
};

const BANNER_WIDTH: usize = 80;
const LABEL_WIDTH: usize = 32;
const BAR_WIDTH: usize = 30;

pub(crate) struct TextReportPrinter;

impl TextReportPrinter {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn print(&self, report: &DashboardReport, currency: Currency) -> String {
        let mut output = String::new();

        output.push_str(&banner("Key Metrics"));
        self.print_metrics(&mut output, &report.metrics, currency);

        for view in &report.views {
            output.push_str("\n\n");
            output.push_str(&banner(&view.spec.title));
            self.print_view(&mut output, view, currency);
        }

        if !matches!(report.trend, TrendReport::Disabled) {
            output.push_str("\n\n");
            output.push_str(&banner("Monthly Trend"));
            self.print_trend(&mut output, &report.trend, currency);
        }

        output
    }

    fn print_metrics(&self, output: &mut String, metrics: &KeyMetrics, currency: Currency) {
        let amount = |v: Option<f64>| match v {
            Some(v) => format!("{} ({})", format_amount(v, currency), humanize(v)),
            None => "n/a".to_string(),
        };
        let count = |v: Option<usize>| match v {
            Some(v) => format_grouped(v as f64),
            None => "n/a".to_string(),
        };
        let rows = [
            ("Records", format_grouped(metrics.record_count as f64)),
            ("Total CIF Value", amount(metrics.total_cif)),
            ("Total FOB Value", amount(metrics.total_fob)),
            ("Total Tax Revenue", amount(metrics.total_tax)),
            ("Average CIF Value", amount(metrics.average_cif)),
            ("Unique Importers", count(metrics.unique_importers)),
            ("Countries of Origin", count(metrics.unique_origins)),
            (
                "CIF / Tax Correlation",
                metrics
                    .cif_tax_correlation
                    .map_or("n/a".to_string(), |r| format!("{:.3}", r)),
            ),
        ];
        for (label, value) in rows {
            output.push_str(&format!("{:LABEL_WIDTH$} {:>30}\n", label, value));
        }
    }

    fn print_view(&self, output: &mut String, view: &ViewReport, currency: Currency) {
        match &view.outcome {
            ViewOutcome::Skipped { notice } => {
                output.push_str(&format!("; skipped: {}\n", notice));
            }
            ViewOutcome::Ranked { groups } if groups.is_empty() => {
                output.push_str("(no data)\n");
            }
            ViewOutcome::Ranked { groups } => {
                self.print_bars(
                    output,
                    view.spec.measure,
                    groups.iter().map(|g| (g.key.as_str(), g.value)),
                    currency,
                );
            }
        }
    }

    fn print_trend(&self, output: &mut String, trend: &TrendReport, currency: Currency) {
        match trend {
            TrendReport::Skipped { notice } => {
                output.push_str(&format!("; skipped: {}\n", notice));
            }
            TrendReport::Series { points, .. } if points.is_empty() => {
                output.push_str("(no data)\n");
            }
            TrendReport::Series { measure, points } => {
                let labels: Vec<String> = points.iter().map(|p| p.month.to_string()).collect();
                self.print_bars(
                    output,
                    *measure,
                    labels.iter().map(String::as_str).zip(points.iter().map(|p| p.value)),
                    currency,
                );
            }
            TrendReport::Disabled => {}
        }
    }

    /// Horizontal bar chart. Bars are proportional to the largest positive
    /// value, and every value is expressed in the unit of the largest
    /// magnitude so the axis caption applies to all rows.
    fn print_bars<'a>(
        &self,
        output: &mut String,
        measure: Measure,
        rows: impl Iterator<Item = (&'a str, f64)> + Clone,
        currency: Currency,
    ) {
        let peak = rows.clone().map(|(_, v)| v).fold(0.0_f64, f64::max);
        let largest = rows.clone().map(|(_, v)| v.abs()).fold(0.0_f64, f64::max);
        let unit = humanize(largest).unit;

        output.push_str(&format!("; {}\n", axis_label(measure, unit, currency)));
        for (label, value) in rows {
            let bar = if peak > 0.0 && value > 0.0 {
                "#".repeat(((value / peak) * BAR_WIDTH as f64).round() as usize)
            } else {
                String::new()
            };
            let wrapped = textwrap::wrap(label, LABEL_WIDTH);
            let first = wrapped.first().map_or("", |l| &l[..]);
            output.push_str(&format!(
                "{:LABEL_WIDTH$} {:BAR_WIDTH$} {:>12}\n",
                first,
                bar,
                scaled(value, unit),
            ));
            for line in wrapped.iter().skip(1) {
                output.push_str(&format!("{}\n", line));
            }
        }
    }
}

fn banner(title: &str) -> String {
    let fill = BANNER_WIDTH.saturating_sub(title.chars().count() + 7).max(3);
    format!("; --- {} {}\n\n", title, "-".repeat(fill))
}

fn scaled(value: f64, unit: ScaleUnit) -> String {
    match unit {
        ScaleUnit::None => format_grouped(value),
        unit => format!("{:.2}", value / unit.divisor()),
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;

    use super::*;
    use crate::entities::{Dimension, MonthlyPoint, RankedGroup, ViewSpec, YearMonth};

    fn metrics() -> KeyMetrics {
        KeyMetrics {
            record_count: 3,
            total_cif: Some(8e9),
            total_fob: None,
            total_tax: Some(0.0),
            average_cif: Some(8e9 / 3.0),
            unique_importers: Some(2),
            unique_origins: None,
            cif_tax_correlation: None,
        }
    }

    fn view(outcome: ViewOutcome) -> ViewReport {
        ViewReport {
            spec: ViewSpec::top(
                "Top Importers by CIF Value",
                Dimension::Importer,
                Measure::CifValue,
                NonZeroUsize::MIN,
            ),
            outcome,
        }
    }

    #[test]
    fn prints_sections_with_banners() {
        let report = DashboardReport {
            metrics: metrics(),
            views: vec![view(ViewOutcome::Ranked {
                groups: vec![RankedGroup::new("Acme Ltd", 6e9), RankedGroup::new("Zenith", 2e9)],
            })],
            trend: TrendReport::Disabled,
        };
        let output = TextReportPrinter::new().print(&report, Currency::NGN);

        assert!(output.starts_with("; --- Key Metrics ---"));
        assert!(output.contains("; --- Top Importers by CIF Value ---"));
        assert!(!output.contains("Monthly Trend"));
        assert!(output.contains("(8.00B)"));
        assert!(output.contains(&axis_label(Measure::CifValue, ScaleUnit::Billion, Currency::NGN)));

        let acme = output.lines().find(|l| l.starts_with("Acme Ltd")).expect("acme row");
        let zenith = output.lines().find(|l| l.starts_with("Zenith")).expect("zenith row");
        assert_eq!(acme.matches('#').count(), BAR_WIDTH);
        assert_eq!(zenith.matches('#').count(), BAR_WIDTH / 3);
        assert!(acme.ends_with("6.00"));
        assert!(zenith.ends_with("2.00"));
    }

    #[test]
    fn banners_span_the_full_width() {
        assert_eq!(banner("Key Metrics").trim_end().chars().count(), BANNER_WIDTH);
    }

    #[test]
    fn skipped_and_empty_views_are_reported_inline() {
        let report = DashboardReport {
            metrics: metrics(),
            views: vec![
                view(ViewOutcome::Skipped {
                    notice: "Column 'Importer' is not available in this dataset.".to_string(),
                }),
                view(ViewOutcome::Ranked { groups: vec![] }),
            ],
            trend: TrendReport::Series {
                measure: Measure::CifValue,
                points: vec![],
            },
        };
        let output = TextReportPrinter::new().print(&report, Currency::NGN);
        assert!(output.contains("; skipped: Column 'Importer' is not available"));
        assert_eq!(output.matches("(no data)").count(), 2);
    }

    #[test]
    fn trend_rows_are_labeled_by_month() {
        let report = DashboardReport {
            metrics: metrics(),
            views: vec![],
            trend: TrendReport::Series {
                measure: Measure::CifValue,
                points: vec![
                    MonthlyPoint {
                        month: YearMonth::new(2023, 1),
                        value: 1_500.0,
                    },
                    MonthlyPoint {
                        month: YearMonth::new(2023, 2),
                        value: 3_000.0,
                    },
                ],
            },
        };
        let output = TextReportPrinter::new().print(&report, Currency::NGN);
        let feb = output.lines().find(|l| l.starts_with("2023-02")).expect("feb row");
        assert!(feb.ends_with("3,000"));
    }

    #[test]
    fn long_labels_wrap_onto_continuation_lines() {
        let name = "The Very Long Importer Name Incorporated Of Lagos And Abuja";
        let report = DashboardReport {
            metrics: metrics(),
            views: vec![view(ViewOutcome::Ranked {
                groups: vec![RankedGroup::new(name, 10.0)],
            })],
            trend: TrendReport::Disabled,
        };
        let output = TextReportPrinter::new().print(&report, Currency::NGN);
        assert!(output.contains("Lagos And Abuja\n"));
        assert!(output.lines().all(|l| !l.contains(name)));
    }
}
