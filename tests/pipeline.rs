use std::num::NonZeroUsize;

use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use trade_dashboard::{
    entities::{
        DashboardConfig, Dimension, FilterSet, Measure, MonthlyPoint, RankedGroup, RecordStore,
        TradeRecord, TrendReport, ViewOutcome, YearMonth,
    },
    ext::standard_views::year_filter,
    format::{humanize, ScaleUnit, ScaledValue},
    pipeline::{Aggregator, FilterStage, MonthlyTrend, Ranker},
    util::TradeDashboardUtil,
};

fn top(n: usize) -> NonZeroUsize {
    NonZeroUsize::new(n).expect("non-zero top-n")
}

fn record(
    origin: Option<&str>,
    importer: Option<&str>,
    cif: f64,
    date: Option<(i32, u32, u32)>,
) -> TradeRecord {
    TradeRecord {
        country_of_origin: origin.map(str::to_string),
        importer: importer.map(str::to_string),
        cif_value: Some(cif),
        receipt_date: date.and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d)),
        ..Default::default()
    }
}

fn store() -> RecordStore {
    RecordStore::from_records(vec![
        record(Some("NG"), Some("Acme"), 5e9, Some((2023, 1, 10))),
        record(Some("NG"), Some("Zenith"), 3e9, Some((2023, 2, 3))),
        record(Some("GH"), Some("Acme"), 1e9, Some((2024, 1, 9))),
        record(None, Some("Zenith"), 2e9, None),
    ])
}

#[test]
fn origin_totals_rank_and_humanize() {
    let store = store();
    let view = store.view();
    let aggregates =
        Aggregator::new(Dimension::CountryOfOrigin, Measure::CifValue).aggregate(view.records());
    assert_eq!(aggregates.len(), 2);
    assert_eq!(aggregates["NG"], 8e9);
    assert_eq!(aggregates["GH"], 1e9);

    let ranked = Ranker::new(top(1)).rank(aggregates);
    assert_eq!(ranked, vec![RankedGroup::new("NG", 8e9)]);
    assert_eq!(
        humanize(ranked[0].value),
        ScaledValue {
            value: 8.0,
            unit: ScaleUnit::Billion
        }
    );
}

#[test]
fn empty_filtered_set_yields_empty_outputs() {
    let store = store();
    let filters = FilterSet::new().with(Dimension::CountryOfOrigin, ["ZZ"]);
    let view = FilterStage::new(&filters).apply(store.view());
    assert!(view.is_empty());
    for dimension in Dimension::ALL {
        for measure in Measure::ALL {
            assert!(Aggregator::new(dimension, measure).aggregate(view.records()).is_empty());
        }
    }
    assert_eq!(MonthlyTrend::new(Measure::CifValue).compute(view.records()), vec![]);
}

#[test]
fn ties_break_on_ascending_key() {
    let ranked =
        Ranker::new(top(10)).rank(vec![("B".to_string(), 100.0), ("A".to_string(), 100.0)]);
    assert_eq!(
        ranked,
        vec![RankedGroup::new("A", 100.0), RankedGroup::new("B", 100.0)]
    );
}

#[test]
fn null_category_is_excluded_only_from_its_own_dimension() {
    let store = store();
    let view = store.view();
    let by_origin =
        Aggregator::new(Dimension::CountryOfOrigin, Measure::CifValue).aggregate(view.records());
    let by_importer =
        Aggregator::new(Dimension::Importer, Measure::CifValue).aggregate(view.records());
    assert_eq!(by_origin.values().sum::<f64>(), 9e9);
    assert_eq!(by_importer["Zenith"], 5e9);
    assert_eq!(by_importer.values().sum::<f64>(), 11e9);
}

#[test]
fn filtering_twice_changes_nothing() {
    let store = store();
    let filters = FilterSet::new()
        .with(Dimension::Importer, ["Acme", "Zenith"])
        .with_years([2023]);
    let stage = FilterStage::new(&filters);
    let once = stage.apply(store.view());
    let twice = stage.apply(once.clone());
    assert_eq!(once.indices(), &[0, 1]);
    assert_eq!(twice.indices(), once.indices());
}

#[test]
fn ranking_is_bounded_and_deterministic() {
    let aggregates: Vec<(String, f64)> = (0..25)
        .map(|i| (format!("K{:02}", i), (i % 7) as f64))
        .collect();
    let mut reversed = aggregates.clone();
    reversed.reverse();

    let ranker = Ranker::new(top(10));
    let forward = ranker.rank(aggregates);
    assert_eq!(forward.len(), 10);
    assert_eq!(forward, ranker.rank(reversed));
    assert!(forward.windows(2).all(|w| w[0].value >= w[1].value));
}

#[test]
fn monthly_trend_is_chronological_and_skips_undated_rows() {
    let store = store();
    let view = store.view();
    let points = MonthlyTrend::new(Measure::CifValue).compute(view.records());
    assert_eq!(
        points,
        vec![
            MonthlyPoint {
                month: YearMonth::new(2023, 1),
                value: 5e9
            },
            MonthlyPoint {
                month: YearMonth::new(2023, 2),
                value: 3e9
            },
            MonthlyPoint {
                month: YearMonth::new(2024, 1),
                value: 1e9
            },
        ]
    );
}

#[test]
fn dashboard_run_over_a_year() {
    let util = TradeDashboardUtil::new();
    let store = store();
    let config = DashboardConfig::default();
    let (report, text) = util.run_and_print(&store, &config, year_filter(2023));

    assert_eq!(report.metrics.record_count, 2);
    assert_eq!(report.metrics.total_cif, Some(8e9));
    assert_eq!(report.views.len(), 5);

    let origins = report
        .views
        .iter()
        .find(|v| v.spec.dimension == Dimension::CountryOfOrigin)
        .expect("origin view");
    assert_eq!(
        origins.outcome,
        ViewOutcome::Ranked {
            groups: vec![RankedGroup::new("NG", 8e9)]
        }
    );
    assert!(matches!(report.trend, TrendReport::Series { ref points, .. } if points.len() == 2));
    assert!(text.contains("Top 10 Countries of Origin"));

    let json = serde_json::to_value(&report).expect("report should serialize");
    assert_eq!(json["trend"]["status"], "series");
    assert_eq!(json["trend"]["points"][0]["month"], "2023-01");
    assert_eq!(json["views"][2]["outcome"]["status"], "ranked");
}
