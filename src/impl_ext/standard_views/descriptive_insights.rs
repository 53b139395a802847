use crate::entities::{Dimension, FilterSet, Measure, ViewSpec, DEFAULT_TOP_N};

/// Views of the exploratory analysis layout. Same charts as the customs
/// overview with origin shown before supply.
pub fn descriptive_insights_views() -> Vec<ViewSpec> {
    vec![
        ViewSpec::top(
            "Top 10 HS Codes by Import Value",
            Dimension::HsCode,
            Measure::CifValue,
            DEFAULT_TOP_N,
        ),
        ViewSpec::top(
            "Top 10 Countries of Origin",
            Dimension::CountryOfOrigin,
            Measure::CifValue,
            DEFAULT_TOP_N,
        ),
        ViewSpec::top(
            "Top 10 Countries of Supply",
            Dimension::CountryOfSupply,
            Measure::CifValue,
            DEFAULT_TOP_N,
        ),
        ViewSpec::top(
            "Top 10 HS Codes by Tax Revenue",
            Dimension::HsCode,
            Measure::TotalTax,
            DEFAULT_TOP_N,
        ),
        ViewSpec::top(
            "Top 10 Importers by Import Value",
            Dimension::Importer,
            Measure::CifValue,
            DEFAULT_TOP_N,
        ),
    ]
}

/// Restricts the analysis to rows received in `year`.
pub fn year_filter(year: i32) -> FilterSet {
    FilterSet::new().with_years([year])
}
