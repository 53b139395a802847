use crate::entities::{Dimension, Measure, ViewSpec, DEFAULT_TOP_N};

pub const CUSTOMS_OVERVIEW_TREND: Measure = Measure::CifValue;

/// Five top-10 charts of the customs overview dashboard, in display order.
pub fn customs_overview_views() -> Vec<ViewSpec> {
    vec![
        ViewSpec::top(
            "Top 10 Imports by HS Code",
            Dimension::HsCode,
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
            "Top 10 Countries of Origin",
            Dimension::CountryOfOrigin,
            Measure::CifValue,
            DEFAULT_TOP_N,
        ),
        ViewSpec::top(
            "Top 10 Tax Revenue Contributions by HS Code",
            Dimension::HsCode,
            Measure::TotalTax,
            DEFAULT_TOP_N,
        ),
        ViewSpec::top(
            "Top 10 Importers by CIF Value",
            Dimension::Importer,
            Measure::CifValue,
            DEFAULT_TOP_N,
        ),
    ]
}
